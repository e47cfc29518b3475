#![cfg_attr(not(test), no_std)]

mod device;
mod error;
mod support;

pub mod config;
pub mod history;
pub mod rtdb;
pub mod telemetry;

pub use config::{DEVICE_ID, FIREBASE_HOST, WIFI_PASSWORD, WIFI_SSID};
pub use device::{DeviceConfig, CONFIG};
pub use error::{ConfigError, Field};
pub use support::{map, validate};
