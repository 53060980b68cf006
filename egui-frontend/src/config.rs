//! # Configuration
//!
//! Runtime settings for the booking app, read from a single YAML file.
//!
//! ## Lookup Order
//!
//! 1. Path in the `BOOKING_CONFIG` environment variable
//! 2. `booking.yaml` in the platform config directory
//! 3. Built-in defaults
//!
//! ## YAML Format
//!
//! ```yaml
//! submission_delay_ms: 1500
//! failure_rate: 0.2
//! slot_availability: 0.7
//! booking_window_months: 3
//! default_locale: en
//! window_width: 1000.0
//! window_height: 760.0
//! ```
//!
//! Every key is optional; missing keys fall back to their defaults.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::Locale;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV_VAR: &str = "BOOKING_CONFIG";
const CONFIG_FILE_NAME: &str = "booking.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long the simulated booking submission takes
    pub submission_delay_ms: u64,
    /// Probability (0-1) that a simulated submission fails
    pub failure_rate: f64,
    /// Probability (0-1) that a generated time slot is bookable
    pub slot_availability: f64,
    /// How far ahead of today dates can be picked
    pub booking_window_months: u32,
    pub default_locale: Locale,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submission_delay_ms: 1500,
            failure_rate: 0.2,
            slot_availability: 0.7,
            booking_window_months: 3,
            default_locale: Locale::English,
            window_width: 1000.0,
            window_height: 760.0,
        }
    }
}

impl AppConfig {
    /// Resolve and load the configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::resolve_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                info!("No config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file {:?} not found, using default settings", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config.sanitized())
    }

    fn resolve_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        ProjectDirs::from("com", "Booking", "AppointmentBooking")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Clamp values into ranges the rest of the app can rely on
    pub fn sanitized(mut self) -> Self {
        self.failure_rate = clamp_probability(self.failure_rate);
        self.slot_availability = clamp_probability(self.slot_availability);
        self.booking_window_months = self.booking_window_months.clamp(1, 24);
        self.window_width = self.window_width.max(640.0);
        self.window_height = self.window_height.max(480.0);
        self
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }
}

fn clamp_probability(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = AppConfig::load_from_path(&temp_dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.submission_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_keys() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("booking.yaml");
        fs::write(&path, "failure_rate: 0.5\ndefault_locale: es\n").unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.failure_rate, 0.5);
        assert_eq!(config.default_locale, Locale::Spanish);
        assert_eq!(config.submission_delay_ms, 1500);
        assert_eq!(config.slot_availability, 0.7);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("booking.yaml");
        fs::write(&path, "failure_rate: 3.0\nslot_availability: -1.0\nbooking_window_months: 0\n").unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.failure_rate, 1.0);
        assert_eq!(config.slot_availability, 0.0);
        assert_eq!(config.booking_window_months, 1);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("booking.yaml");
        fs::write(&path, "failure_rate: [not, a, number]\n").unwrap();

        let result = AppConfig::load_from_path(&path);
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Failed to parse config file"));
    }
}
