//! Per-side panel records.

use serde::{Deserialize, Serialize};
use sidenav_common::{Point, Rect};
use std::fmt;

use crate::host::{ContentId, SettleId};

/// Logical state of a panel. A drag in progress is not a state of its
/// own; it is the presence of a [`DragSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelState {
    Closed,
    Opened,
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelState::Closed => f.write_str("Closed"),
            PanelState::Opened => f.write_str("Opened"),
        }
    }
}

/// Snapshot handed to delegates with every notification.
///
/// `last_point` holds whichever sample the latest gesture phase produced:
/// the touch origin on begin, the translation on change, the release
/// velocity on end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelContainer {
    pub(crate) state: PanelState,
    pub(crate) last_point: Point,
    pub(crate) captured_frame: Rect,
}

impl PanelContainer {
    pub(crate) fn closed() -> Self {
        Self {
            state: PanelState::Closed,
            last_point: Point::ZERO,
            captured_frame: Rect::ZERO,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn last_point(&self) -> Point {
        self.last_point
    }

    pub fn captured_frame(&self) -> Rect {
        self.captured_frame
    }
}

impl fmt::Display for PanelContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(state: {}, point: {}, frame: {})",
            self.state, self.last_point, self.captured_frame
        )
    }
}

/// State of one in-flight drag. Exists only between begin and end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Touch location the drag started at; translations are measured from here.
    pub origin: Point,
    /// Panel frame at drag start.
    pub captured_frame: Rect,
    /// Panel state before the drag started.
    pub state_before: PanelState,
}

/// A dispatched settle whose completion has not been reported yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingSettle {
    pub id: SettleId,
    pub target: PanelState,
}

/// Everything the controller owns for one configured side.
#[derive(Debug)]
pub(crate) struct PanelSlot {
    pub content: ContentId,
    pub container: PanelContainer,
    /// Model offset: where the panel is, or where its running settle ends.
    pub offset: f64,
    pub session: Option<DragSession>,
    pub pending: Option<PendingSettle>,
}

impl PanelSlot {
    pub fn new(content: ContentId, offset: f64) -> Self {
        Self {
            content,
            container: PanelContainer::closed(),
            offset,
            session: None,
            pending: None,
        }
    }

    pub fn is_opened(&self) -> bool {
        self.container.state == PanelState::Opened
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_closed_and_idle() {
        let slot = PanelSlot::new(ContentId(3), -270.0);
        assert_eq!(slot.container.state(), PanelState::Closed);
        assert!(!slot.is_opened());
        assert!(!slot.is_dragging());
        assert!(slot.pending.is_none());
    }

    #[test]
    fn container_display() {
        let container = PanelContainer {
            state: PanelState::Opened,
            last_point: Point::new(12.0, 40.0),
            captured_frame: Rect::new(-270.0, 0.0, 270.0, 800.0),
        };
        assert_eq!(
            container.to_string(),
            "(state: Opened, point: (12, 40), frame: (-270, 0, 270, 800))"
        );
    }

    #[test]
    fn container_serialization() {
        let container = PanelContainer::closed();
        let json = serde_json::to_string(&container).unwrap();
        let parsed: PanelContainer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, container);
    }
}
