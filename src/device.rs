use log::{info, warn};

use crate::config;
use crate::error::ConfigError;
use crate::support::validate;

/// The four configured values in one place, for code that prefers passing a
/// struct around over naming the constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    pub wifi_ssid: &'static str,
    pub wifi_password: &'static str,
    pub firebase_host: &'static str,
    pub device_id: &'static str,
}

pub const CONFIG: DeviceConfig = DeviceConfig::new(
    config::WIFI_SSID,
    config::WIFI_PASSWORD,
    config::FIREBASE_HOST,
    config::DEVICE_ID,
);

impl DeviceConfig {
    pub const fn new(
        wifi_ssid: &'static str,
        wifi_password: &'static str,
        firebase_host: &'static str,
        device_id: &'static str,
    ) -> Self {
        Self {
            wifi_ssid,
            wifi_password,
            firebase_host,
            device_id,
        }
    }

    /// First failing check, in declaration order
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = validate::ssid(self.wifi_ssid) {
            return Err(e);
        }
        if let Err(e) = validate::password(self.wifi_password) {
            return Err(e);
        }
        if let Err(e) = validate::host(self.firebase_host) {
            return Err(e);
        }
        validate::device_id(self.device_id)
    }

    /// [`Self::validate`] with the outcome logged, for start-up code.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Ok(()) => {
                // password is never logged
                info!(
                    "config: device '{}' on '{}', wifi '{}'",
                    self.device_id, self.firebase_host, self.wifi_ssid
                );
                Ok(())
            }
            Err(e) => {
                warn!("config: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;

    const SAMPLE: DeviceConfig = DeviceConfig::new(
        "HomeNet",
        "secret123",
        "myproj-default-rtdb.europe-west1.firebasedatabase.app",
        "ESP32-002",
    );

    #[test]
    fn values_pass_through_unchanged() {
        assert_eq!(SAMPLE.wifi_ssid, "HomeNet");
        assert_eq!(SAMPLE.wifi_password, "secret123");
        assert_eq!(
            SAMPLE.firebase_host,
            "myproj-default-rtdb.europe-west1.firebasedatabase.app"
        );
        assert_eq!(SAMPLE.device_id, "ESP32-002");
        assert_eq!(SAMPLE.check(), Ok(()));
    }

    #[test]
    fn built_in_config_is_valid() {
        assert_eq!(CONFIG.validate(), Ok(()));
        assert_eq!(CONFIG.wifi_ssid, config::WIFI_SSID);
        assert_eq!(CONFIG.device_id, config::DEVICE_ID);
    }

    #[test]
    fn first_failure_reported() {
        let cfg = DeviceConfig::new("", "x", "https://host", "a/b");
        assert_eq!(cfg.validate(), Err(ConfigError::Empty(Field::WifiSsid)));

        let cfg = DeviceConfig::new("HomeNet", "secret123", "https://host", "a/b");
        assert_eq!(cfg.check(), Err(ConfigError::SchemePrefix));
    }
}
