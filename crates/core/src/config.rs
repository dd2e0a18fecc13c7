//! Tracker configuration.
//!
//! All fields have defaults reproducing the stock theme behaviour, so an
//! empty JSON object (or no configuration at all) is valid.

use crate::error::ConfigError;
use crate::selection::ProximityBand;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BAND_TOP: f64 = 0.0;
pub const DEFAULT_BAND_BOTTOM: f64 = 300.0;
pub const DEFAULT_HEADING_SELECTOR: &str = "h1,h2,h3,h4,h5,h6";
pub const DEFAULT_LINK_SELECTOR: &str = ".toc a";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Exclusive upper edge of the proximity band, in viewport units.
    pub band_top: f64,
    /// Exclusive lower edge of the proximity band, in viewport units.
    pub band_bottom: f64,
    /// CSS selector listing candidate headings.
    pub heading_selector: String,
    /// CSS selector listing navigation anchors.
    pub link_selector: String,
    /// Class token marking the active navigation anchor.
    pub active_class: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            band_top: DEFAULT_BAND_TOP,
            band_bottom: DEFAULT_BAND_BOTTOM,
            heading_selector: DEFAULT_HEADING_SELECTOR.to_string(),
            link_selector: DEFAULT_LINK_SELECTOR.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason| ConfigError::InvalidBand {
            top: self.band_top,
            bottom: self.band_bottom,
            reason,
        };
        if !self.band_top.is_finite() || !self.band_bottom.is_finite() {
            return Err(invalid("edges must be finite"));
        }
        if self.band_top >= self.band_bottom {
            return Err(invalid("top must be below bottom"));
        }
        if self.heading_selector.trim().is_empty() {
            return Err(ConfigError::EmptyField("headingSelector"));
        }
        if self.link_selector.trim().is_empty() {
            return Err(ConfigError::EmptyField("linkSelector"));
        }
        if self.active_class.trim().is_empty() {
            return Err(ConfigError::EmptyField("activeClass"));
        }
        Ok(())
    }

    pub fn band(&self) -> ProximityBand {
        ProximityBand::new(self.band_top, self.band_bottom)
    }
}
