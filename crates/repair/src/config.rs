use crate::error::{RepairError, Result};
use serde::{Deserialize, Serialize};

/// Fixed page-geometry assumptions of one experiment's rendering layout.
///
/// The defaults describe the layout the recording client was built against: a
/// 94 px left text margin, 40 px line wrap, and a screen-center default click.
/// A future experiment with a different layout overrides these from a TOML
/// file rather than forking the correction code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    /// Fixed left margin of the text column (px); word boxes re-anchor here
    pub left_margin: f64,

    /// Vertical offset applied to boxes of words split across a line wrap (px)
    pub line_offset: f64,

    /// Upper x bound of the "blank" click region left of the text (px)
    pub blank_max_x: f64,

    /// Upper y bound of the "blank" click region above the text (px)
    pub blank_max_y: f64,

    /// X offset anchoring clicks that stay unresolved after all passes (px)
    pub offpage_anchor_x: f64,

    /// Y offset anchoring clicks that stay unresolved after all passes (px)
    pub offpage_anchor_y: f64,

    /// Assumed screen-center click x for events with no recorded position (px)
    pub default_click_x: i64,

    /// Assumed screen-center click y for events with no recorded position (px)
    pub default_click_y: i64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            left_margin: 94.0,
            line_offset: 40.0,
            blank_max_x: 90.0,
            blank_max_y: 20.0,
            offpage_anchor_x: 739.0,
            offpage_anchor_y: 67.0,
            default_click_x: 425,
            default_click_y: 285,
        }
    }
}

impl PageGeometry {
    /// Validate geometry bounds
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("left_margin", self.left_margin),
            ("line_offset", self.line_offset),
            ("blank_max_x", self.blank_max_x),
            ("blank_max_y", self.blank_max_y),
            ("offpage_anchor_x", self.offpage_anchor_x),
            ("offpage_anchor_y", self.offpage_anchor_y),
        ] {
            if !value.is_finite() {
                return Err(RepairError::invalid_config(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.blank_max_x < 0.0 || self.blank_max_y < 0.0 {
            return Err(RepairError::invalid_config(
                "blank region bounds cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level repair configuration, loadable from TOML.
///
/// ```toml
/// [geometry]
/// left_margin = 94.0
/// offpage_anchor_x = 739.0
/// ```
///
/// Every field is optional; missing fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairConfig {
    pub geometry: PageGeometry,
}

impl RepairConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| RepairError::invalid_config(e.to_string()))?;
        config.geometry.validate()?;
        Ok(config)
    }
}
