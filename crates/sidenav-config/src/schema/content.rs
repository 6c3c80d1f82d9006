//! Main content and backdrop appearance while a panel is open.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Scale of the main content when a panel is fully open (0.0-1.0).
    pub scale: f64,
    /// Backdrop opacity when a panel is fully open (0.0-1.0).
    pub opacity: f64,
    /// Backdrop fill color (`#RRGGBB`, `#RRGGBBAA`, or `rgba()`).
    pub backdrop_color: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 0.4,
            backdrop_color: "#000000".into(),
        }
    }
}
