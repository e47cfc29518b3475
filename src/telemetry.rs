//! Records published under `devices/<id>/currentData` and what is derived
//! from them on the receiving side.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{MANUAL_TOGGLE_LOCK_MS, MANUAL_WATER_WARN_PERCENT, SERVO_MAX_DEG};
use crate::error::ConfigError;
use crate::support;

pub const JSON_CAP: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "SUHO")]
    Dry,
    #[serde(rename = "OPTIMALNO")]
    Optimal,
    #[serde(rename = "VLAZNO", alias = "VLAŽNO")]
    Wet,
    #[default]
    #[serde(rename = "UNKNOWN", other)]
    Unknown,
}

impl Recommendation {
    pub fn parse(s: &str) -> Self {
        match s {
            "SUHO" => Recommendation::Dry,
            "OPTIMALNO" => Recommendation::Optimal,
            "VLAZNO" | "VLAŽNO" => Recommendation::Wet,
            _ => Recommendation::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Dry => "SUHO",
            Recommendation::Optimal => "OPTIMALNO",
            Recommendation::Wet => "VLAZNO",
            Recommendation::Unknown => "UNKNOWN",
        }
    }

    /// Dashboard colour
    pub fn color(self) -> &'static str {
        match self {
            Recommendation::Dry => "#FF6B6B",
            Recommendation::Optimal => "#51CF66",
            Recommendation::Wet => "#4DABF7",
            Recommendation::Unknown => "#ADB5BD",
        }
    }

    /// Dashboard caption, `None` for [`Recommendation::Unknown`]
    pub fn text(self) -> Option<&'static str> {
        match self {
            Recommendation::Dry => Some("Potrebno Zalijevanje!"),
            Recommendation::Optimal => Some("Vlažnost je Idealna"),
            Recommendation::Wet => Some("Zemlja je Natopljena"),
            Recommendation::Unknown => None,
        }
    }
}

/// Caption for a raw recommendation string; unrecognised values are shown
/// as they came.
pub fn recommendation_text(raw: &str) -> &str {
    Recommendation::parse(raw).text().unwrap_or(raw)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveState {
    Open,
    HalfOpen,
    Closed,
    Moving,
}

impl ValveState {
    pub fn from_servo(position_deg: u8) -> Self {
        match position_deg {
            160..=u8::MAX => ValveState::Open,
            80..=100 => ValveState::HalfOpen,
            0..=20 => ValveState::Closed,
            _ => ValveState::Moving,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ValveState::Open => "#FF6B6B",
            ValveState::HalfOpen => "#FFB347",
            ValveState::Closed | ValveState::Moving => "#4ECDC4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ValveState::Open => "Ventil Otvoren",
            ValveState::HalfOpen => "Polu-otvoreno",
            ValveState::Closed => "Ventil Zatvoren",
            ValveState::Moving => "Pomjeranje...",
        }
    }
}

/// Servo angle as valve opening, %
pub fn opening_percent(position_deg: u8) -> u8 {
    support::map(position_deg as u32, 0, SERVO_MAX_DEG as u32, 0, 100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentData {
    /// Soil moisture, %
    #[serde(default)]
    pub moisture: u8,
    #[serde(default)]
    pub recommendation: Recommendation,
    /// Degrees, 0..=180
    #[serde(default)]
    pub servo_position: u8,
    /// Absent when the device did not report it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_active: Option<bool>,
    /// Raised by the device itself
    #[serde(default)]
    pub warning: bool,
}

impl CurrentData {
    pub fn valve(&self) -> ValveState {
        ValveState::from_servo(self.servo_position)
    }

    pub fn to_json(&self) -> Result<heapless::String<JSON_CAP>, ConfigError> {
        Ok(serde_json_core::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let (data, _) = serde_json_core::from_str(json)?;
        Ok(data)
    }
}

pub fn needs_warning(device_warning: bool, manual_active: bool, moisture: u8) -> bool {
    device_warning || (manual_active && moisture > MANUAL_WATER_WARN_PERCENT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    #[default]
    Offline,
}

impl DeviceStatus {
    /// Anything but `"online"`, including a missing node, is offline
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("online") => DeviceStatus::Online,
            _ => DeviceStatus::Offline,
        }
    }
}

/// Manual watering switch as seen by the dashboard.
///
/// A local toggle wins over the value echoed back by the device until
/// [`MANUAL_TOGGLE_LOCK_MS`] have passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualWatering {
    active: bool,
    last_toggle_ms: Option<u64>,
}

impl ManualWatering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flips the switch and returns the value to write to
    /// `commands/manualWater`.
    pub fn toggle(&mut self, now_ms: u64) -> bool {
        self.active = !self.active;
        self.last_toggle_ms = Some(now_ms);
        self.active
    }

    /// Adopts the device's `manualActive` unless it is absent or locked by a
    /// recent toggle. Returns whether it was adopted.
    pub fn sync(&mut self, remote_active: Option<bool>, now_ms: u64) -> bool {
        let Some(remote_active) = remote_active else {
            return false;
        };
        if let Some(t) = self.last_toggle_ms {
            let elapsed = now_ms.saturating_sub(t);
            if elapsed <= MANUAL_TOGGLE_LOCK_MS {
                debug!("manual watering: remote value ignored, toggled {}ms ago", elapsed);
                return false;
            }
        }
        self.active = remote_active;
        true
    }

    /// Warning shown on a data update: the device flag or the manual rule.
    /// Right after [`Self::toggle`] the device flag is stale, use
    /// [`needs_warning`] with `device_warning = false` there.
    pub fn warning(&self, data: &CurrentData) -> bool {
        needs_warning(data.warning, self.active, data.moisture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_names() {
        assert_eq!(Recommendation::parse("SUHO"), Recommendation::Dry);
        assert_eq!(Recommendation::parse("VLAŽNO"), Recommendation::Wet);
        assert_eq!(Recommendation::parse("VLAZNO"), Recommendation::Wet);
        assert_eq!(Recommendation::parse("???"), Recommendation::Unknown);
        assert_eq!(Recommendation::Optimal.as_str(), "OPTIMALNO");
        assert_eq!(Recommendation::Wet.color(), "#4DABF7");
        assert_eq!(Recommendation::default().color(), "#ADB5BD");
    }

    #[test]
    fn valve_from_servo() {
        assert_eq!(ValveState::from_servo(180), ValveState::Open);
        assert_eq!(ValveState::from_servo(160), ValveState::Open);
        assert_eq!(ValveState::from_servo(90), ValveState::HalfOpen);
        assert_eq!(ValveState::from_servo(20), ValveState::Closed);
        assert_eq!(ValveState::from_servo(0), ValveState::Closed);
        assert_eq!(ValveState::from_servo(50), ValveState::Moving);
        assert_eq!(ValveState::from_servo(130), ValveState::Moving);
        assert_eq!(opening_percent(90), 50);
        assert_eq!(opening_percent(255), 100);
    }

    #[test]
    fn json_shape() {
        let data = CurrentData {
            moisture: 42,
            recommendation: Recommendation::Optimal,
            servo_position: 90,
            manual_active: Some(false),
            warning: false,
        };
        assert_eq!(
            data.to_json().unwrap().as_str(),
            r#"{"moisture":42,"recommendation":"OPTIMALNO","servoPosition":90,"manualActive":false,"warning":false}"#
        );
    }

    #[test]
    fn parse_device_record() {
        let data = CurrentData::from_json(
            r#"{"moisture":12,"recommendation":"SUHO","servoPosition":170,"manualActive":true,"warning":false}"#,
        )
        .unwrap();
        assert_eq!(data.moisture, 12);
        assert_eq!(data.recommendation, Recommendation::Dry);
        assert_eq!(data.valve(), ValveState::Open);
        assert_eq!(data.manual_active, Some(true));
    }

    #[test]
    fn missing_fields_default() {
        let data = CurrentData::from_json(r#"{"moisture":30}"#).unwrap();
        assert_eq!(data.recommendation, Recommendation::Unknown);
        assert_eq!(data.servo_position, 0);
        assert!(!data.warning);
        assert_eq!(data.manual_active, None);
    }

    #[test]
    fn unreported_manual_flag_is_not_serialized() {
        let data = CurrentData {
            moisture: 5,
            ..Default::default()
        };
        assert_eq!(
            data.to_json().unwrap().as_str(),
            r#"{"moisture":5,"recommendation":"UNKNOWN","servoPosition":0,"warning":false}"#
        );
    }

    #[test]
    fn captions() {
        assert_eq!(recommendation_text("SUHO"), "Potrebno Zalijevanje!");
        assert_eq!(recommendation_text("OPTIMALNO"), "Vlažnost je Idealna");
        assert_eq!(recommendation_text("VLAŽNO"), "Zemlja je Natopljena");
        assert_eq!(recommendation_text("VLAZNO"), "Zemlja je Natopljena");
        assert_eq!(recommendation_text("KALIBRACIJA"), "KALIBRACIJA");
        assert_eq!(Recommendation::Unknown.text(), None);

        assert_eq!(ValveState::from_servo(170).label(), "Ventil Otvoren");
        assert_eq!(ValveState::from_servo(95).label(), "Polu-otvoreno");
        assert_eq!(ValveState::from_servo(10).label(), "Ventil Zatvoren");
        assert_eq!(ValveState::from_servo(60).label(), "Pomjeranje...");
    }

    #[test]
    fn warning_rule() {
        assert!(needs_warning(true, false, 0));
        assert!(needs_warning(false, true, 21));
        assert!(!needs_warning(false, true, 20));
        assert!(!needs_warning(false, false, 90));
    }

    #[test]
    fn status() {
        assert_eq!(DeviceStatus::parse(Some("online")), DeviceStatus::Online);
        assert_eq!(DeviceStatus::parse(Some("rebooting")), DeviceStatus::Offline);
        assert_eq!(DeviceStatus::parse(None), DeviceStatus::Offline);
    }

    #[test]
    fn toggle_locks_remote_echo() {
        let mut manual = ManualWatering::new();
        assert!(manual.toggle(1_000));
        assert!(!manual.sync(Some(false), 3_000));
        assert!(manual.is_active());

        assert!(manual.sync(Some(false), 6_001));
        assert!(!manual.is_active());
    }

    #[test]
    fn record_without_manual_flag_keeps_switch() {
        let mut manual = ManualWatering::new();
        manual.toggle(0);

        let data = CurrentData::from_json(r#"{"moisture":30}"#).unwrap();
        assert!(!manual.sync(data.manual_active, 10_000));
        assert!(manual.is_active());
    }

    #[test]
    fn manual_warning() {
        let mut manual = ManualWatering::new();
        let data = CurrentData {
            moisture: 35,
            ..Default::default()
        };
        assert!(!manual.warning(&data));
        manual.toggle(0);
        assert!(manual.warning(&data));
    }
}
