use crate::core::runner::LessonSelection;
use crate::exercises::delivery_fee::DeliveryFeePolicy;
use crate::exercises::thermostat::{DeviceStatus, ThermostatReading, DEFAULT_ALERT_ABOVE};
use crate::lessons;
use crate::utils::error::{LessonError, Result};
use crate::utils::validation::{validate_finite, validate_known_names, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every table and field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LessonConfig {
    pub lessons: LessonsConfig,
    pub delivery: DeliveryFeePolicy,
    pub thermostat: ThermostatConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonsConfig {
    pub only: Vec<String>,
    pub skip: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermostatConfig {
    pub status: DeviceStatus,
    pub temperature: f64,
    pub alert_above: f64,
}

impl Default for ThermostatConfig {
    fn default() -> Self {
        let reading = ThermostatReading::default();
        Self {
            status: reading.status,
            temperature: reading.temperature,
            alert_above: DEFAULT_ALERT_ABOVE,
        }
    }
}

impl LessonConfig {
    /// Built-in defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| LessonError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| LessonError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LessonError::ConfigError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// CLI lists win over the file's lists when non-empty.
    pub fn selection_with(&self, only: Vec<String>, skip: Vec<String>) -> LessonSelection {
        let only = if only.is_empty() {
            self.lessons.only.clone()
        } else {
            only
        };
        let skip = if skip.is_empty() {
            self.lessons.skip.clone()
        } else {
            skip
        };
        LessonSelection::new(only, skip)
    }

    pub fn reading_with(
        &self,
        status: Option<DeviceStatus>,
        temperature: Option<f64>,
    ) -> ThermostatReading {
        ThermostatReading {
            status: status.unwrap_or(self.thermostat.status),
            temperature: temperature.unwrap_or(self.thermostat.temperature),
        }
    }

    pub fn alert_above(&self) -> f64 {
        self.thermostat.alert_above
    }
}

impl Validate for LessonConfig {
    fn validate(&self) -> Result<()> {
        let known = lessons::lesson_names();
        validate_known_names(&self.lessons.only, &known)?;
        validate_known_names(&self.lessons.skip, &known)?;

        self.delivery.validate()?;

        validate_finite("thermostat.temperature", self.thermostat.temperature)?;
        validate_finite("thermostat.alert_above", self.thermostat.alert_above)
    }
}
