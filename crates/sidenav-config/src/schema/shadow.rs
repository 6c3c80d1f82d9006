use serde::{Deserialize, Serialize};

/// Drop shadow drawn under a panel while it is out of its closed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ShadowConfig {
    pub opacity: f64,
    pub radius: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}
