//! Settle animation and commit threshold settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Default settle duration in seconds, used when no fling velocity applies.
    pub duration: f64,
    /// Distance past the closed edge beyond which a slow release commits
    /// to opening.
    pub point_of_no_return: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: 0.5,
            point_of_no_return: 48.0,
        }
    }
}
