//! Open, close, toggle, and settle completion.

use sidenav_common::{PanelSide, Point};
use tracing::debug;

use crate::commit;
use crate::delegate::NotificationKind;
use crate::host::{SettleAnimation, SettleId};
use crate::panel::{PanelState, PendingSettle};

use super::SideNav;

impl SideNav {
    /// Open `side`. A nonzero `velocity` shortens the settle like a fling.
    ///
    /// No-op when the side is unconfigured or already open. A drag on the
    /// other side is ended and settled closed; an open other side is
    /// closed first.
    pub fn open(&mut self, side: PanelSide, velocity: f64) {
        match self.state(side) {
            None => {
                debug!(%side, "open ignored: no panel configured");
                return;
            }
            Some(PanelState::Opened) => return,
            Some(PanelState::Closed) => {}
        }

        let other = side.opposite();
        if self.is_dragging(other) {
            debug!(%side, %other, "ending opposite drag first");
            self.release(other, Point::ZERO, false);
        }
        if self.is_opened(other) {
            debug!(%side, %other, "closing opposite panel first");
            self.close(other, 0.0);
        }

        self.settle(side, PanelState::Opened, velocity, true);
    }

    /// Close `side`. No-op when unconfigured or already closed.
    pub fn close(&mut self, side: PanelSide, velocity: f64) {
        match self.state(side) {
            None => {
                debug!(%side, "close ignored: no panel configured");
                return;
            }
            Some(PanelState::Closed) => return,
            Some(PanelState::Opened) => {}
        }

        self.settle(side, PanelState::Closed, velocity, true);
    }

    pub fn toggle(&mut self, side: PanelSide, velocity: f64) {
        if self.is_opened(side) {
            self.close(side, velocity);
        } else {
            self.open(side, velocity);
        }
    }

    /// Commit `side` to `target` and hand the animation to the host.
    ///
    /// The logical state changes now; cleanup waits for
    /// [`finish_settle`](Self::finish_settle). Any drag or settle already
    /// in flight on this side is superseded, and the duration is measured
    /// from wherever the host reports the panel to be. With
    /// `begin_appearance` the panel's appearance transition starts here;
    /// drags start theirs at drag begin.
    pub(super) fn settle(
        &mut self,
        side: PanelSide,
        target: PanelState,
        velocity: f64,
        begin_appearance: bool,
    ) {
        let Some(start) = self.displayed_offset(side) else {
            return;
        };
        self.drop_pending(side);

        let opened = target == PanelState::Opened;
        if begin_appearance {
            self.host.begin_appearance_transition(side, opened);
        }

        let default = self.default_duration();
        let id = self.next_settle_id();
        let destination = self.geometry.resting_offset(side, opened);
        let frame = self.geometry.panel_frame(side, destination);
        let duration = commit::settle_duration(destination - start, velocity, default);

        let Some(panel) = self.panel_mut(side) else {
            return;
        };
        panel.offset = destination;
        panel.container.state = target;
        panel.session = None;
        panel.pending = Some(PendingSettle { id, target });

        let (content_scale, backdrop_opacity) = if opened {
            (self.config.content.scale, self.config.content.opacity)
        } else {
            (1.0, 0.0)
        };

        if opened {
            let shadow = self.shadow();
            self.host.set_shadow(side, Some(shadow));
        }
        self.request_chrome(opened);

        debug!(
            %side,
            %id,
            %target,
            duration_ms = duration.as_millis() as u64,
            "settle dispatched"
        );
        self.host.animate_settle(SettleAnimation {
            id,
            side,
            target,
            frame,
            content_scale,
            backdrop_opacity,
            duration,
        });
    }

    /// Report that the host finished the settle `id`.
    ///
    /// Completions for superseded settles are ignored and return `false`.
    pub fn finish_settle(&mut self, id: SettleId) -> bool {
        let side = PanelSide::ALL.into_iter().find(|side| {
            self.panel(*side)
                .and_then(|p| p.pending)
                .is_some_and(|pending| pending.id == id)
        });
        let Some(side) = side else {
            debug!(%id, "stale settle completion ignored");
            return false;
        };
        let Some(pending) = self.panel_mut(side).and_then(|p| p.pending.take()) else {
            return false;
        };

        debug!(%side, %id, target = %pending.target, "settle finished");
        match pending.target {
            PanelState::Opened => {
                self.set_interaction_enabled(false);
                self.host.end_appearance_transition(side);
                self.notify(NotificationKind::Open, side);
            }
            PanelState::Closed => {
                self.host.set_shadow(side, None);
                let any_open = PanelSide::ALL.into_iter().any(|s| self.is_opened(s));
                if !any_open {
                    self.set_interaction_enabled(true);
                }
                self.host.end_appearance_transition(side);
                self.notify(NotificationKind::Close, side);
            }
        }
        true
    }

    /// Ids of settles dispatched but not yet finished.
    pub fn pending_settles(&self) -> Vec<SettleId> {
        PanelSide::ALL
            .into_iter()
            .filter_map(|side| self.panel(side).and_then(|p| p.pending))
            .map(|pending| pending.id)
            .collect()
    }
}
