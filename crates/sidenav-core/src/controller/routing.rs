//! Gesture routing and backdrop taps.

use sidenav_common::{PanelSide, Point};
use tracing::{debug, trace};

use crate::arbiter::Admission;
use crate::delegate::NotificationKind;
use crate::gesture::GestureEvent;

use super::SideNav;

impl SideNav {
    /// Feed one raw gesture event. Returns whether any panel acted on it.
    ///
    /// New pans and taps are offered to the left panel, then the right.
    /// Pan updates go to whichever side owns the active session.
    pub fn handle(&mut self, event: GestureEvent) -> bool {
        match event {
            GestureEvent::PanBegan { point } => PanelSide::ALL
                .into_iter()
                .any(|side| self.begin_pan(side, point)),
            GestureEvent::PanChanged { point } => match self.dragging_side() {
                Some(side) => self.change_pan(side, point),
                None => false,
            },
            GestureEvent::PanEnded { velocity } => match self.dragging_side() {
                Some(side) => self.end_pan(side, velocity),
                None => false,
            },
            GestureEvent::PanCancelled => match self.dragging_side() {
                Some(side) => self.cancel_pan(side),
                None => false,
            },
            GestureEvent::Tap { point } => PanelSide::ALL
                .into_iter()
                .any(|side| self.tap(side, point)),
        }
    }

    pub fn admit_tap(&self, side: PanelSide, point: Point) -> Admission {
        self.arbiter().admit_tap(
            point,
            self.side_view(side),
            self.side_view(side.opposite()),
        )
    }

    /// A tap on the dimmed backdrop of an open panel closes it.
    pub fn tap(&mut self, side: PanelSide, point: Point) -> bool {
        if let Admission::Refused(reason) = self.admit_tap(side, point) {
            trace!(%side, ?reason, "tap refused");
            return false;
        }
        debug!(%side, x = point.x, y = point.y, "backdrop tapped");
        self.notify(NotificationKind::Tap, side);
        self.close(side, 0.0);
        true
    }
}
