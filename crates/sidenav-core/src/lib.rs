//! Gesture-driven state machine for a two-sided sliding drawer.
//!
//! [`SideNav`] tracks drags on a left and a right panel, maps finger
//! movement to panel position, backdrop dimming, and content scale, and
//! decides on release whether each panel settles open or closed. Drawing
//! is left to a [`HostSurface`] implementation.

pub mod arbiter;
pub mod commit;
pub mod controller;
pub mod delegate;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod panel;

pub use arbiter::{Admission, Refusal};
pub use controller::SideNav;
pub use delegate::{Notification, NotificationKind, NotificationLog, SideNavDelegate};
pub use geometry::Geometry;
pub use gesture::GestureEvent;
pub use host::noop::NoopHost;
pub use host::recording::{HostCall, HostLog, RecordingHost};
pub use host::{
    ChromeRequest, ContentId, ContentSlot, HostSurface, SettleAnimation, SettleId, Shadow,
};
pub use panel::{PanelContainer, PanelState};
