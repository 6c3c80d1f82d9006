//! Host chrome (status bar) visibility settings.

use serde::{Deserialize, Serialize};

/// How the host hides its status bar while a panel is out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum ChromeStrategy {
    /// Slide the status bar away immediately.
    #[default]
    StatusBar,
    /// Raise the window above the status bar on the next event-loop turn.
    WindowLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub hide_status_bar: bool,
    pub strategy: ChromeStrategy,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            hide_status_bar: true,
            strategy: ChromeStrategy::default(),
        }
    }
}
