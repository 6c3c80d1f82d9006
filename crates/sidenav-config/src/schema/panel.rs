//! Per-side panel configuration types.

use serde::{Deserialize, Serialize};

/// Geometry and gesture settings for one drawer panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Panel width in points (must be > 0).
    pub width: f64,
    /// Width of the edge strip from which a swipe may open the panel.
    pub bezel_width: f64,
    /// Allow a closed panel to be dragged open from its bezel strip.
    pub pan_from_bezel: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 270.0,
            bezel_width: 16.0,
            pan_from_bezel: true,
        }
    }
}
