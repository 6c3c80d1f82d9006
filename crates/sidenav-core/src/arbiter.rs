//! Gesture admission.
//!
//! Decides, before any drag session exists, whether a pan or tap may act
//! on a side. Refusals are silent UX gating, not errors; the reason is
//! kept only for logging and tests.

use sidenav_common::{PanelSide, Point, Rect};
use sidenav_config::SideNavConfig;

use crate::geometry::Geometry;
use crate::panel::PanelState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    NotConfigured,
    OppositeOpened,
    OppositeDragging,
    AlreadyDragging,
    BezelPanDisabled,
    OutsideBezel,
    NotOpened,
    InsidePanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Refused(Refusal),
}

impl Admission {
    pub fn is_admitted(self) -> bool {
        self == Admission::Admitted
    }
}

/// What the arbiter needs to know about one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideView {
    pub state: PanelState,
    pub dragging: bool,
    pub frame: Rect,
}

impl SideView {
    fn is_opened(&self) -> bool {
        self.state == PanelState::Opened
    }
}

pub struct Arbiter<'a> {
    config: &'a SideNavConfig,
    geometry: Geometry,
}

impl<'a> Arbiter<'a> {
    pub fn new(config: &'a SideNavConfig, geometry: Geometry) -> Self {
        Self { config, geometry }
    }

    pub fn bezel_rect(&self, side: PanelSide) -> Rect {
        self.geometry
            .bezel_rect(side, self.config.panel(side).bezel_width)
    }

    /// Pan admission: an open panel can be dragged from anywhere; a closed
    /// one only from its bezel, and never while the other side is open or
    /// being dragged.
    pub fn admit_pan(
        &self,
        side: PanelSide,
        point: Point,
        this: Option<SideView>,
        other: Option<SideView>,
    ) -> Admission {
        let Some(this) = this else {
            return Admission::Refused(Refusal::NotConfigured);
        };
        if let Some(other) = other {
            if other.is_opened() {
                return Admission::Refused(Refusal::OppositeOpened);
            }
            if other.dragging {
                return Admission::Refused(Refusal::OppositeDragging);
            }
        }
        if this.dragging {
            return Admission::Refused(Refusal::AlreadyDragging);
        }
        if this.is_opened() {
            return Admission::Admitted;
        }
        if !self.config.panel(side).pan_from_bezel {
            return Admission::Refused(Refusal::BezelPanDisabled);
        }
        if self.bezel_rect(side).contains(point) {
            Admission::Admitted
        } else {
            Admission::Refused(Refusal::OutsideBezel)
        }
    }

    /// Tap admission: only taps on the backdrop of an open panel count.
    /// Taps on the panel itself belong to its content.
    pub fn admit_tap(
        &self,
        point: Point,
        this: Option<SideView>,
        other: Option<SideView>,
    ) -> Admission {
        let Some(this) = this else {
            return Admission::Refused(Refusal::NotConfigured);
        };
        if other.is_some_and(|o| o.is_opened()) {
            return Admission::Refused(Refusal::OppositeOpened);
        }
        if !this.is_opened() {
            return Admission::Refused(Refusal::NotOpened);
        }
        if this.frame.contains(point) {
            Admission::Refused(Refusal::InsidePanel)
        } else {
            Admission::Admitted
        }
    }
}
