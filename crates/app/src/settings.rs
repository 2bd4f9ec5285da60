use std::path::Path;

use liftlog_domain::{BarConfig, PlateCalculator, PlateInventory};
use log::debug;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub bar_weight: f64,
    /// Plates owned, both sides combined.
    pub plates: Vec<PlateCount>,
    /// Denominations in the order they are loaded, largest first.
    pub plate_order: Vec<f64>,
    pub rest_seconds: u32,
    pub rest_presets: Vec<u32>,
    pub beeps: u32,
    pub unit: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlateCount {
    pub weight: f64,
    pub count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let standard = PlateCalculator::standard();
        Self {
            bar_weight: standard.bar.bar_weight,
            plates: standard
                .inventory
                .iter()
                .map(|&(weight, count)| PlateCount { weight, count })
                .collect(),
            plate_order: standard.bar.order,
            rest_seconds: 180,
            rest_presets: vec![60, 90, 120, 180, 300],
            beeps: 3,
            unit: String::from("lbs"),
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&content)?;
        debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !(self.bar_weight.is_finite() && self.bar_weight > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "bar weight must be positive ({})",
                self.bar_weight
            )));
        }
        if let Some(plate) = self
            .plates
            .iter()
            .find(|p| !(p.weight.is_finite() && p.weight > 0.0))
        {
            return Err(SettingsError::Invalid(format!(
                "plate weight must be positive ({})",
                plate.weight
            )));
        }
        if self.plate_order.windows(2).any(|w| w[0] < w[1]) {
            return Err(SettingsError::Invalid(String::from(
                "plate order must be largest first",
            )));
        }
        if self.rest_seconds == 0 || self.rest_presets.contains(&0) {
            return Err(SettingsError::Invalid(String::from(
                "rest time must be at least one second",
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn plate_calculator(&self) -> PlateCalculator {
        PlateCalculator::new(
            BarConfig::new(self.bar_weight, self.plate_order.clone()),
            self.plates
                .iter()
                .map(|p| (p.weight, p.count))
                .collect::<PlateInventory>(),
        )
    }
}
