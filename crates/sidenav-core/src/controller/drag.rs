//! Drag sessions: begin, change, end.
//!
//! A session exists from an admitted begin until end or cancel. Change
//! and end samples for a side without a session are dropped.

use sidenav_common::{PanelSide, Point};
use tracing::{debug, trace};

use crate::arbiter::Admission;
use crate::commit::{self, Commit};
use crate::delegate::NotificationKind;
use crate::geometry::{backdrop_opacity, content_scale};
use crate::panel::{DragSession, PanelState};

use super::SideNav;

impl SideNav {
    /// Ask the arbiter whether a pan starting at `point` may drive `side`.
    pub fn admit_pan(&self, side: PanelSide, point: Point) -> Admission {
        self.arbiter().admit_pan(
            side,
            point,
            self.side_view(side),
            self.side_view(side.opposite()),
        )
    }

    /// Start dragging `side` from `point`. Returns `false` when refused.
    pub fn begin_pan(&mut self, side: PanelSide, point: Point) -> bool {
        if let Admission::Refused(reason) = self.admit_pan(side, point) {
            trace!(%side, ?reason, "pan refused");
            return false;
        }
        // The finger now owns the panel; a running settle is abandoned and
        // the drag starts from where the panel is drawn.
        let Some(offset) = self.displayed_offset(side) else {
            return false;
        };
        self.drop_pending(side);
        let frame = self.geometry.panel_frame(side, offset);
        let shadow = self.shadow();

        let Some(panel) = self.panel_mut(side) else {
            return false;
        };
        let state_before = panel.container.state;
        panel.offset = offset;
        panel.container.last_point = point;
        panel.container.captured_frame = frame;
        panel.session = Some(DragSession {
            origin: point,
            captured_frame: frame,
            state_before,
        });

        let appearing = state_before == PanelState::Closed;
        self.host.begin_appearance_transition(side, appearing);
        self.host.set_shadow(side, Some(shadow));
        self.request_chrome(true);

        debug!(%side, x = point.x, y = point.y, %state_before, "pan began");
        self.notify(NotificationKind::BeginPan, side);
        true
    }

    /// Move the panel to follow `point`. Applied synchronously per sample.
    pub fn change_pan(&mut self, side: PanelSide, point: Point) -> bool {
        let geometry = self.geometry;
        let Some(panel) = self.panel_mut(side) else {
            return false;
        };
        let Some(session) = panel.session else {
            trace!(%side, "change without an active pan ignored");
            return false;
        };

        let translation = point - session.origin;
        let offset = geometry.clamp(side, session.captured_frame.x + translation.x);
        panel.offset = offset;
        panel.container.last_point = translation;

        let ratio = geometry.open_ratio(side, offset);
        let scale = content_scale(ratio, self.config.content.scale);
        let opacity = backdrop_opacity(ratio, self.config.content.opacity);

        self.host.set_panel_frame(side, geometry.panel_frame(side, offset));
        self.host.set_content_scale(scale);
        self.host.set_backdrop_opacity(opacity);

        trace!(%side, offset, ratio, "pan changed");
        self.notify(NotificationKind::ChangePan, side);
        true
    }

    /// Release the drag on `side` with the given velocity and settle it.
    ///
    /// A release that would open the panel while the other side is open
    /// settles closed instead.
    pub fn end_pan(&mut self, side: PanelSide, velocity: Point) -> bool {
        let may_open = !self.is_opened(side.opposite());
        self.release(side, velocity, may_open)
    }

    /// End the drag on `side` and settle it. Without `may_open` the panel
    /// is sent closed whatever the release position and velocity.
    pub(super) fn release(&mut self, side: PanelSide, velocity: Point, may_open: bool) -> bool {
        let geometry = self.geometry;
        let point_of_no_return = self.config.animation.point_of_no_return;
        let Some(panel) = self.panel_mut(side) else {
            return false;
        };
        if panel.session.take().is_none() {
            trace!(%side, "end without an active pan ignored");
            return false;
        }

        panel.container.last_point = velocity;
        let mut decision = commit::decide(
            &geometry,
            side,
            panel.offset,
            velocity.x,
            point_of_no_return,
        );
        if !may_open && decision.target == PanelState::Opened {
            decision = Commit {
                target: PanelState::Closed,
                velocity: 0.0,
            };
        }
        panel.container.state = decision.target;

        debug!(
            %side,
            offset = panel.offset,
            velocity = velocity.x,
            target = %decision.target,
            "pan ended"
        );
        self.settle(side, decision.target, decision.velocity, false);
        self.notify(NotificationKind::EndPan, side);
        true
    }

    /// Abandon the drag on `side`; it settles as a release with no velocity.
    pub fn cancel_pan(&mut self, side: PanelSide) -> bool {
        self.end_pan(side, Point::ZERO)
    }
}
