//! Configuration schema types for the side navigation drawer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the stock drawer values.

mod animation;
mod chrome;
mod content;
mod panel;
mod shadow;

pub use animation::*;
pub use chrome::*;
pub use content::*;
pub use panel::*;
pub use shadow::*;

use serde::{Deserialize, Serialize};
use sidenav_common::PanelSide;

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the drawer.
///
/// Read once when a controller is constructed; later edits to a loaded
/// value have no effect on a running controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SideNavConfig {
    pub left: PanelConfig,
    pub right: PanelConfig,
    pub animation: AnimationConfig,
    pub content: ContentConfig,
    pub shadow: ShadowConfig,
    pub chrome: ChromeConfig,
}

impl SideNavConfig {
    /// Panel settings for one side.
    pub fn panel(&self, side: PanelSide) -> &PanelConfig {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_drawer() {
        let config = SideNavConfig::default();
        assert_eq!(config.left.width, 270.0);
        assert_eq!(config.right.width, 270.0);
        assert_eq!(config.left.bezel_width, 16.0);
        assert!(config.right.pan_from_bezel);
        assert_eq!(config.animation.duration, 0.5);
        assert_eq!(config.animation.point_of_no_return, 48.0);
        assert_eq!(config.content.scale, 1.0);
        assert_eq!(config.content.opacity, 0.4);
        assert_eq!(config.content.backdrop_color, "#000000");
        assert_eq!(config.shadow.opacity, 0.0);
        assert!(config.chrome.hide_status_bar);
        assert_eq!(config.chrome.strategy, ChromeStrategy::StatusBar);
    }

    #[test]
    fn panel_accessor_picks_side() {
        let mut config = SideNavConfig::default();
        config.right.width = 320.0;
        assert_eq!(config.panel(PanelSide::Left).width, 270.0);
        assert_eq!(config.panel(PanelSide::Right).width, 320.0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: SideNavConfig = toml::from_str(
            r#"
[left]
width = 300.0

[chrome]
strategy = "window_level"
"#,
        )
        .unwrap();
        assert_eq!(config.left.width, 300.0);
        assert_eq!(config.left.bezel_width, 16.0);
        assert_eq!(config.right, PanelConfig::default());
        assert_eq!(config.chrome.strategy, ChromeStrategy::WindowLevel);
        assert!(config.chrome.hide_status_bar);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let result: Result<SideNavConfig, _> = toml::from_str(
            r#"
[chrome]
strategy = "fullscreen"
"#,
        );
        assert!(result.is_err());
    }
}
