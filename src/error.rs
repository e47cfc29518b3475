use core::fmt;

/// Which of the configured values a check failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WifiSsid,
    WifiPassword,
    FirebaseHost,
    DeviceId,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Field::WifiSsid => "WIFI_SSID",
            Field::WifiPassword => "WIFI_PASSWORD",
            Field::FirebaseHost => "FIREBASE_HOST",
            Field::DeviceId => "DEVICE_ID",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    Empty(Field),
    TooShort(Field),
    TooLong(Field),
    InvalidChar(Field),
    /// Host given as an URL (`https://...`) instead of a bare hostname
    SchemePrefix,
    /// Empty host label, label longer than 63 or starting/ending with `-`
    BadLabel,
    /// Output does not fit the fixed-size buffer
    Capacity,
    Json,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Empty(field) => write!(f, "{} is empty", field.name()),
            ConfigError::TooShort(field) => write!(f, "{} is too short", field.name()),
            ConfigError::TooLong(field) => write!(f, "{} is too long", field.name()),
            ConfigError::InvalidChar(field) => {
                write!(f, "{} contains an invalid character", field.name())
            }
            ConfigError::SchemePrefix => {
                write!(f, "FIREBASE_HOST must not carry a scheme prefix")
            }
            ConfigError::BadLabel => write!(f, "FIREBASE_HOST has a malformed label"),
            ConfigError::Capacity => write!(f, "buffer capacity exceeded"),
            ConfigError::Json => write!(f, "JSON encoding error"),
        }
    }
}

impl From<serde_json_core::ser::Error> for ConfigError {
    fn from(_: serde_json_core::ser::Error) -> Self {
        ConfigError::Json
    }
}

impl From<serde_json_core::de::Error> for ConfigError {
    fn from(_: serde_json_core::de::Error) -> Self {
        ConfigError::Json
    }
}
