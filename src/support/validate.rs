//! Format checks for the configured values.
//!
//! All checks are `const fn`, so the same code backs the compile-time
//! assertions in [`crate::config`] and the runtime [`crate::DeviceConfig::check`].

use crate::error::{ConfigError, Field};

pub const MAX_SSID_LEN: usize = 32;
pub const MIN_PASSPHRASE_LEN: usize = 8;
pub const MAX_PASSPHRASE_LEN: usize = 63;
/// Raw WPA PSK written as hex
pub const PSK_HEX_LEN: usize = 64;
pub const MAX_HOSTNAME_LEN: usize = 253;
pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_DEVICE_ID_LEN: usize = 32;

pub const fn ssid(s: &str) -> Result<(), ConfigError> {
    let len = s.len();
    if len == 0 {
        return Err(ConfigError::Empty(Field::WifiSsid));
    }
    if len > MAX_SSID_LEN {
        return Err(ConfigError::TooLong(Field::WifiSsid));
    }
    Ok(())
}

pub const fn password(s: &str) -> Result<(), ConfigError> {
    let b = s.as_bytes();
    if b.is_empty() {
        return Err(ConfigError::Empty(Field::WifiPassword));
    }
    if b.len() == PSK_HEX_LEN {
        let mut i = 0;
        while i < b.len() {
            if !b[i].is_ascii_hexdigit() {
                return Err(ConfigError::InvalidChar(Field::WifiPassword));
            }
            i += 1;
        }
        return Ok(());
    }
    if b.len() < MIN_PASSPHRASE_LEN {
        return Err(ConfigError::TooShort(Field::WifiPassword));
    }
    if b.len() > MAX_PASSPHRASE_LEN {
        return Err(ConfigError::TooLong(Field::WifiPassword));
    }

    let mut i = 0;
    while i < b.len() {
        // printable ASCII, space included
        if b[i] < 0x20 || b[i] > 0x7e {
            return Err(ConfigError::InvalidChar(Field::WifiPassword));
        }
        i += 1;
    }
    Ok(())
}

/// Bare hostname with an optional `/path` suffix.
pub const fn host(s: &str) -> Result<(), ConfigError> {
    let b = s.as_bytes();
    if b.is_empty() {
        return Err(ConfigError::Empty(Field::FirebaseHost));
    }

    let mut i = 0;
    while i < b.len() {
        if b[i].is_ascii_whitespace() {
            return Err(ConfigError::InvalidChar(Field::FirebaseHost));
        }
        if b[i] == b':' && i + 2 < b.len() && b[i + 1] == b'/' && b[i + 2] == b'/' {
            return Err(ConfigError::SchemePrefix);
        }
        i += 1;
    }

    let end = host_end(b);
    if end > MAX_HOSTNAME_LEN {
        return Err(ConfigError::TooLong(Field::FirebaseHost));
    }

    let mut label_len = 0;
    let mut i = 0;
    while i < end {
        let c = b[i];
        if c == b'.' {
            if label_len == 0 || b[i - 1] == b'-' {
                return Err(ConfigError::BadLabel);
            }
            label_len = 0;
        } else if c.is_ascii_alphanumeric() || c == b'-' {
            if c == b'-' && label_len == 0 {
                return Err(ConfigError::BadLabel);
            }
            label_len += 1;
            if label_len > MAX_LABEL_LEN {
                return Err(ConfigError::BadLabel);
            }
        } else {
            return Err(ConfigError::InvalidChar(Field::FirebaseHost));
        }
        i += 1;
    }
    // also catches a host that is only a path, "/x"
    if label_len == 0 || b[end - 1] == b'-' {
        return Err(ConfigError::BadLabel);
    }
    Ok(())
}

/// Device identifiers double as database keys, so only `[A-Za-z0-9_-]`.
pub const fn device_id(s: &str) -> Result<(), ConfigError> {
    let b = s.as_bytes();
    if b.is_empty() {
        return Err(ConfigError::Empty(Field::DeviceId));
    }
    if b.len() > MAX_DEVICE_ID_LEN {
        return Err(ConfigError::TooLong(Field::DeviceId));
    }

    let mut i = 0;
    while i < b.len() {
        let c = b[i];
        if !(c.is_ascii_alphanumeric() || c == b'-' || c == b'_') {
            return Err(ConfigError::InvalidChar(Field::DeviceId));
        }
        i += 1;
    }
    Ok(())
}

/// Index of the first `/` or the length of the host string
pub const fn host_end(b: &[u8]) -> usize {
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'/' {
            return i;
        }
        i += 1;
    }
    b.len()
}
