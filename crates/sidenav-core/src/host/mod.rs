//! The host surface: whatever actually draws the drawer.
//!
//! The controller never touches rendering primitives. It computes frames,
//! scales, opacities, and durations and hands them to a [`HostSurface`].
//! Settles are asynchronous from the controller's point of view: the host
//! runs the animation and reports completion through
//! [`SideNav::finish_settle`](crate::SideNav::finish_settle).

use serde::{Deserialize, Serialize};
use sidenav_common::{Color, PanelSide, Point, Rect};
use sidenav_config::schema::{ChromeStrategy, ShadowConfig};
use std::fmt;
use std::time::Duration;

use crate::panel::PanelState;

pub mod noop;
pub mod recording;

/// Identifies a dispatched settle animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettleId(pub u64);

impl fmt::Display for SettleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "settle-{}", self.0)
    }
}

/// Opaque handle for a piece of content placed in the main surface or a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub u32);

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content-{}", self.0)
    }
}

/// Where a piece of content lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSlot {
    Main,
    Left,
    Right,
}

impl ContentSlot {
    pub fn panel(side: PanelSide) -> Self {
        match side {
            PanelSide::Left => ContentSlot::Left,
            PanelSide::Right => ContentSlot::Right,
        }
    }

    pub fn side(self) -> Option<PanelSide> {
        match self {
            ContentSlot::Main => None,
            ContentSlot::Left => Some(PanelSide::Left),
            ContentSlot::Right => Some(PanelSide::Right),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub opacity: f64,
    pub radius: f64,
    pub offset: Point,
}

impl From<&ShadowConfig> for Shadow {
    fn from(config: &ShadowConfig) -> Self {
        Self {
            opacity: config.opacity,
            radius: config.radius,
            offset: Point::new(config.offset_x, config.offset_y),
        }
    }
}

/// Request to hide or restore the host's status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeRequest {
    pub hidden: bool,
    pub strategy: ChromeStrategy,
}

impl ChromeRequest {
    /// Window-level changes must run on the next event-loop turn so they
    /// do not race the host's own transition timing.
    pub fn is_deferred(&self) -> bool {
        self.strategy == ChromeStrategy::WindowLevel
    }
}

/// Everything the host needs to animate a panel into its resting place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettleAnimation {
    pub id: SettleId,
    pub side: PanelSide,
    pub target: PanelState,
    pub frame: Rect,
    pub content_scale: f64,
    pub backdrop_opacity: f64,
    pub duration: Duration,
}

/// Narrow interface the controller drives. Implementations apply values
/// immediately unless the method says otherwise.
pub trait HostSurface {
    fn set_backdrop_color(&mut self, color: Color);
    fn set_panel_frame(&mut self, side: PanelSide, frame: Rect);
    fn set_content_scale(&mut self, scale: f64);
    fn set_backdrop_opacity(&mut self, opacity: f64);
    /// Start an eased animation; report completion with the animation's id.
    fn animate_settle(&mut self, animation: SettleAnimation);
    fn set_shadow(&mut self, side: PanelSide, shadow: Option<Shadow>);
    fn set_chrome(&mut self, request: ChromeRequest);
    fn set_main_interaction_enabled(&mut self, enabled: bool);
    fn begin_appearance_transition(&mut self, side: PanelSide, appearing: bool);
    fn end_appearance_transition(&mut self, side: PanelSide);
    fn attach_content(&mut self, slot: ContentSlot, content: ContentId, frame: Rect);
    fn detach_content(&mut self, slot: ContentSlot, content: ContentId);

    /// Frame currently on screen for `side` while a settle is running.
    /// Hosts that cannot sample their animations return `None`, and the
    /// settle's end point is used instead.
    #[allow(unused_variables)]
    fn presented_frame(&self, side: PanelSide) -> Option<Rect> {
        None
    }
}
