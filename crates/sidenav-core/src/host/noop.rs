//! No-op HostSurface implementation.
//!
//! Useful for headless use of the controller where only state and
//! notifications matter.

use sidenav_common::{Color, PanelSide, Rect};

use super::{ChromeRequest, ContentId, ContentSlot, HostSurface, SettleAnimation, Shadow};

/// A host that draws nothing. Settles never complete on their own; the
/// caller reports completion if it cares.
pub struct NoopHost;

impl HostSurface for NoopHost {
    fn set_backdrop_color(&mut self, _color: Color) {}

    fn set_panel_frame(&mut self, _side: PanelSide, _frame: Rect) {}

    fn set_content_scale(&mut self, _scale: f64) {}

    fn set_backdrop_opacity(&mut self, _opacity: f64) {}

    fn animate_settle(&mut self, _animation: SettleAnimation) {}

    fn set_shadow(&mut self, _side: PanelSide, _shadow: Option<Shadow>) {}

    fn set_chrome(&mut self, _request: ChromeRequest) {}

    fn set_main_interaction_enabled(&mut self, _enabled: bool) {}

    fn begin_appearance_transition(&mut self, _side: PanelSide, _appearing: bool) {}

    fn end_appearance_transition(&mut self, _side: PanelSide) {}

    fn attach_content(&mut self, _slot: ContentSlot, _content: ContentId, _frame: Rect) {}

    fn detach_content(&mut self, _slot: ContentSlot, _content: ContentId) {}
}
