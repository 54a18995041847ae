use crate::utils::error::{LessonError, Result};
use crate::utils::validation::{validate_finite, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Readings strictly above this raise an alert.
pub const DEFAULT_ALERT_ABOVE: f64 = 35.0;

/// Reads from config go through `FromStr`, so spelling rules match the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DeviceStatus {
    Active,
    Offline,
}

impl FromStr for DeviceStatus {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(DeviceStatus::Active),
            "offline" => Ok(DeviceStatus::Offline),
            _ => Err(LessonError::ParseError {
                field: "device status".to_string(),
                input: s.to_string(),
                reason: "expected 'active' or 'offline'".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DeviceStatus {
    type Error = LessonError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceStatus::Active => write!(f, "active"),
            DeviceStatus::Offline => write!(f, "offline"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Offline,
    HighTemperature,
    Normal,
}

impl Alert {
    pub fn label(&self) -> &'static str {
        match self {
            Alert::Offline => "offline",
            Alert::HighTemperature => "high alert",
            Alert::Normal => "normal",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Alert::Offline => "Device is offline",
            Alert::HighTemperature => "High temperature alert!",
            Alert::Normal => "Temperature is normal",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermostatReading {
    pub status: DeviceStatus,
    pub temperature: f64,
}

impl Default for ThermostatReading {
    fn default() -> Self {
        Self {
            status: DeviceStatus::Active,
            temperature: 38.0,
        }
    }
}

impl Validate for ThermostatReading {
    fn validate(&self) -> Result<()> {
        validate_finite("thermostat.temperature", self.temperature)
    }
}

/// Status is checked first: an offline device never reports temperature.
pub fn classify(reading: &ThermostatReading, alert_above: f64) -> Alert {
    match reading.status {
        DeviceStatus::Offline => Alert::Offline,
        DeviceStatus::Active if reading.temperature > alert_above => Alert::HighTemperature,
        DeviceStatus::Active => Alert::Normal,
    }
}

pub fn run_thermostat<W: Write>(
    reading: &ThermostatReading,
    alert_above: f64,
    out: &mut W,
) -> Result<Alert> {
    reading.validate()?;
    validate_finite("thermostat.alert_above", alert_above)?;

    let alert = classify(reading, alert_above);
    tracing::debug!(
        status = %reading.status,
        temperature = reading.temperature,
        alert = alert.label(),
        "Thermostat classified"
    );

    writeln!(out, "{}", alert)?;
    Ok(alert)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(status: DeviceStatus, temperature: f64) -> ThermostatReading {
        ThermostatReading {
            status,
            temperature,
        }
    }

    #[test]
    fn test_fixed_reading_is_high_alert() {
        let alert = classify(&ThermostatReading::default(), DEFAULT_ALERT_ABOVE);
        assert_eq!(alert, Alert::HighTemperature);
        assert_eq!(alert.label(), "high alert");
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(
            classify(&reading(DeviceStatus::Active, 35.0), DEFAULT_ALERT_ABOVE),
            Alert::Normal
        );
        assert_eq!(
            classify(&reading(DeviceStatus::Active, 35.5), DEFAULT_ALERT_ABOVE),
            Alert::HighTemperature
        );
    }

    #[test]
    fn test_offline_wins_over_temperature() {
        assert_eq!(
            classify(&reading(DeviceStatus::Offline, 90.0), DEFAULT_ALERT_ABOVE),
            Alert::Offline
        );
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("active".parse::<DeviceStatus>().unwrap(), DeviceStatus::Active);
        assert_eq!(" Offline ".parse::<DeviceStatus>().unwrap(), DeviceStatus::Offline);
        assert!("standby".parse::<DeviceStatus>().is_err());
    }

    #[test]
    fn test_run_prints_message() {
        let mut out = Vec::new();
        let alert = run_thermostat(&ThermostatReading::default(), DEFAULT_ALERT_ABOVE, &mut out)
            .unwrap();

        assert_eq!(alert, Alert::HighTemperature);
        assert_eq!(String::from_utf8(out).unwrap(), "High temperature alert!\n");
    }

    #[test]
    fn test_run_rejects_nan() {
        let mut out = Vec::new();
        let result = run_thermostat(
            &reading(DeviceStatus::Active, f64::NAN),
            DEFAULT_ALERT_ABOVE,
            &mut out,
        );
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
