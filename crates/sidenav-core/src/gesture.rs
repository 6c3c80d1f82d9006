use serde::{Deserialize, Serialize};
use sidenav_common::Point;

/// Raw input from the host's event source.
///
/// Events carry no side: [`SideNav::handle`](crate::SideNav::handle)
/// offers each one to the panels the way two recognizers sharing one
/// view would see it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum GestureEvent {
    PanBegan { point: Point },
    PanChanged { point: Point },
    PanEnded { velocity: Point },
    PanCancelled,
    Tap { point: Point },
}
