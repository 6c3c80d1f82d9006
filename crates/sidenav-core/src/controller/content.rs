//! Content placement and host resizes.

use sidenav_common::{PanelSide, Rect, Size};
use tracing::{debug, info};

use crate::geometry::Geometry;
use crate::host::{ContentId, ContentSlot};
use crate::panel::PanelState;

use super::SideNav;

impl SideNav {
    /// Place `content` on the main surface, replacing whatever was there.
    pub fn set_main_content(&mut self, content: ContentId) {
        self.switch_content(ContentSlot::Main, content, false);
    }

    /// Replace the content in `slot`.
    ///
    /// With `close_after`, a main-surface switch closes both panels and a
    /// panel switch closes that panel. Switching an unconfigured panel
    /// slot does nothing; use [`configure_panel`](Self::configure_panel).
    pub fn switch_content(&mut self, slot: ContentSlot, content: ContentId, close_after: bool) {
        match slot.side() {
            None => {
                if let Some(old) = self.main_content.replace(content) {
                    self.host.detach_content(slot, old);
                }
                let bounds = self.geometry.host_bounds();
                self.host.attach_content(slot, content, bounds);
                debug!(%content, "main content switched");
                if close_after {
                    for side in PanelSide::ALL {
                        self.close(side, 0.0);
                    }
                }
            }
            Some(side) => {
                let width = self.geometry.panel_width(side);
                let height = self.geometry.host().height;
                let Some(panel) = self.panel_mut(side) else {
                    debug!(%side, %content, "switch ignored: no panel configured");
                    return;
                };
                let old = std::mem::replace(&mut panel.content, content);
                self.host.detach_content(slot, old);
                self.host
                    .attach_content(slot, content, Rect::new(0.0, 0.0, width, height));
                debug!(%side, %content, "panel content switched");
                if close_after {
                    self.close(side, 0.0);
                }
            }
        }
    }

    /// Re-lay out for a new host size. Every panel snaps closed without
    /// animation or notifications; drags and pending settles are dropped.
    pub fn transition_to_size(&mut self, size: Size) {
        info!(width = size.width, height = size.height, "host resized");
        self.geometry = Geometry::new(&self.config, size);
        let geometry = self.geometry;

        self.host.set_content_scale(1.0);
        self.host.set_backdrop_opacity(0.0);
        self.request_chrome(false);
        self.set_interaction_enabled(true);

        for side in PanelSide::ALL {
            let offset = geometry.closed_offset(side);
            let Some(panel) = self.panel_mut(side) else {
                continue;
            };
            panel.offset = offset;
            panel.container.state = PanelState::Closed;
            let dragging = panel.session.take().is_some();
            let settling = panel.pending.take().is_some();
            self.host.set_panel_frame(side, geometry.panel_frame(side, offset));
            self.host.set_shadow(side, None);
            if dragging || settling {
                self.host.end_appearance_transition(side);
            }
        }
    }
}
