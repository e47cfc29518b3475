//! Realtime Database layout shared by the device and the dashboard:
//!
//! ```text
//! devices/<DEVICE_ID>/currentData          latest CurrentData record
//! devices/<DEVICE_ID>/status               "online" | "offline"
//! devices/<DEVICE_ID>/commands/manualWater bool
//! ```

use core::fmt::Write;

use heapless::String;

use crate::device::DeviceConfig;
use crate::error::ConfigError;

pub const DEVICES_ROOT: &str = "devices";
pub const CURRENT_DATA_NODE: &str = "currentData";
pub const STATUS_NODE: &str = "status";
pub const MANUAL_WATER_NODE: &str = "commands/manualWater";

/// Fits `devices/` + the longest device id + the longest node name
pub const PATH_CAP: usize = 64;
pub const URL_CAP: usize = 384;

pub type NodePath = String<PATH_CAP>;
pub type Url = String<URL_CAP>;

#[derive(Debug, Clone, Copy)]
pub struct DevicePaths<'a> {
    device_id: &'a str,
}

impl<'a> DevicePaths<'a> {
    pub fn new(device_id: &'a str) -> Self {
        Self { device_id }
    }

    pub fn for_config(config: &DeviceConfig) -> DevicePaths<'static> {
        DevicePaths::new(config.device_id)
    }

    /// `devices/<id>`
    pub fn root(&self) -> Result<NodePath, ConfigError> {
        let mut path = NodePath::new();
        write!(path, "{}/{}", DEVICES_ROOT, self.device_id).map_err(|_| ConfigError::Capacity)?;
        Ok(path)
    }

    pub fn node(&self, node: &str) -> Result<NodePath, ConfigError> {
        let mut path = self.root()?;
        write!(path, "/{}", node).map_err(|_| ConfigError::Capacity)?;
        Ok(path)
    }

    pub fn current_data(&self) -> Result<NodePath, ConfigError> {
        self.node(CURRENT_DATA_NODE)
    }

    pub fn status(&self) -> Result<NodePath, ConfigError> {
        self.node(STATUS_NODE)
    }

    pub fn manual_water_command(&self) -> Result<NodePath, ConfigError> {
        self.node(MANUAL_WATER_NODE)
    }
}

/// REST endpoint of a node: `https://<host>/<path>.json`.
///
/// A path suffix carried by `host` is kept.
pub fn rest_url(host: &str, path: &str) -> Result<Url, ConfigError> {
    let mut url = Url::new();
    write!(
        url,
        "https://{}/{}.json",
        host.trim_end_matches('/'),
        path.trim_matches('/')
    )
    .map_err(|_| ConfigError::Capacity)?;
    Ok(url)
}
