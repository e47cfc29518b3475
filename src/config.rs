//! Device configuration.
//!
//! Replace the literals below with your own values, or leave them and set
//! `IRRIGATION_WIFI_SSID`, `IRRIGATION_WIFI_PASSWORD`, `IRRIGATION_FIREBASE_HOST`
//! and `IRRIGATION_DEVICE_ID` in the build environment. A value that is empty
//! or malformed fails the build.

use crate::support::validate;

const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}

//-----------------------------------------------------------------------------

pub const WIFI_SSID: &str = or_default(option_env!("IRRIGATION_WIFI_SSID"), "your_wifi_ssid");
pub const WIFI_PASSWORD: &str = or_default(
    option_env!("IRRIGATION_WIFI_PASSWORD"),
    "your_wifi_password",
);

//-----------------------------------------------------------------------------

/// Realtime Database host, without `https://`
pub const FIREBASE_HOST: &str = or_default(
    option_env!("IRRIGATION_FIREBASE_HOST"),
    "your-project-default-rtdb.europe-west1.firebasedatabase.app",
);

/// Must be unique among all devices reporting to the same [`FIREBASE_HOST`]
pub const DEVICE_ID: &str = or_default(option_env!("IRRIGATION_DEVICE_ID"), "ESP32-001");

//-----------------------------------------------------------------------------

/// Moisture above which manual watering raises a warning, %
pub const MANUAL_WATER_WARN_PERCENT: u8 = 20;
/// Remote `manualActive` is ignored this long after a local toggle
pub const MANUAL_TOGGLE_LOCK_MS: u64 = 5_000;
pub const HISTORY_LEN: usize = 5;
pub const SERVO_MAX_DEG: u8 = 180;

//-----------------------------------------------------------------------------

const _: () = assert!(validate::ssid(WIFI_SSID).is_ok(), "invalid WIFI_SSID");
const _: () = assert!(
    validate::password(WIFI_PASSWORD).is_ok(),
    "invalid WIFI_PASSWORD"
);
const _: () = assert!(validate::host(FIREBASE_HOST).is_ok(), "invalid FIREBASE_HOST");
const _: () = assert!(validate::device_id(DEVICE_ID).is_ok(), "invalid DEVICE_ID");
