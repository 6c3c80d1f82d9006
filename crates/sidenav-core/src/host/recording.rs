//! A host that records every call it receives.
//!
//! The log is shared through [`HostLog`] so callers can inspect it while
//! the controller owns the host.

use serde::Serialize;
use sidenav_common::{Color, PanelSide, Rect};
use std::cell::RefCell;
use std::rc::Rc;

use super::{ChromeRequest, ContentId, ContentSlot, HostSurface, SettleAnimation, Shadow};

/// One call made on the host surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    BackdropColor { color: Color },
    PanelFrame { side: PanelSide, frame: Rect },
    ContentScale { scale: f64 },
    BackdropOpacity { opacity: f64 },
    Settle { animation: SettleAnimation },
    Shadow { side: PanelSide, shadow: Option<Shadow> },
    Chrome { request: ChromeRequest },
    MainInteraction { enabled: bool },
    BeginAppearance { side: PanelSide, appearing: bool },
    EndAppearance { side: PanelSide },
    Attach {
        slot: ContentSlot,
        content: ContentId,
        frame: Rect,
    },
    Detach { slot: ContentSlot, content: ContentId },
}

/// Shared handle on a [`RecordingHost`]'s call log.
///
/// Also lets a test stand in for the animation engine by setting the frame
/// the host reports as on screen through [`HostLog::present`].
#[derive(Debug, Clone, Default)]
pub struct HostLog {
    calls: Rc<RefCell<Vec<HostCall>>>,
    presented: Rc<RefCell<[Option<Rect>; 2]>>,
}

impl HostLog {
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<HostCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// All settle animations recorded so far, oldest first.
    pub fn settles(&self) -> Vec<SettleAnimation> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Settle { animation } => Some(*animation),
                _ => None,
            })
            .collect()
    }

    pub fn last_settle(&self) -> Option<SettleAnimation> {
        self.settles().pop()
    }

    /// The most recent panel frame applied for `side`, outside of settles.
    pub fn last_frame(&self, side: PanelSide) -> Option<Rect> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            HostCall::PanelFrame { side: s, frame } if *s == side => Some(*frame),
            _ => None,
        })
    }

    /// Report `frame` as the on-screen frame of `side`; `None` clears it.
    pub fn present(&self, side: PanelSide, frame: Option<Rect>) {
        self.presented.borrow_mut()[side_index(side)] = frame;
    }

    fn presented(&self, side: PanelSide) -> Option<Rect> {
        self.presented.borrow()[side_index(side)]
    }

    fn push(&self, call: HostCall) {
        self.calls.borrow_mut().push(call);
    }
}

fn side_index(side: PanelSide) -> usize {
    match side {
        PanelSide::Left => 0,
        PanelSide::Right => 1,
    }
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    log: HostLog,
}

impl RecordingHost {
    /// Create a host together with a handle on its log.
    pub fn new() -> (Self, HostLog) {
        let host = Self::default();
        let log = host.log.clone();
        (host, log)
    }
}

impl HostSurface for RecordingHost {
    fn set_backdrop_color(&mut self, color: Color) {
        self.log.push(HostCall::BackdropColor { color });
    }

    fn set_panel_frame(&mut self, side: PanelSide, frame: Rect) {
        self.log.push(HostCall::PanelFrame { side, frame });
    }

    fn set_content_scale(&mut self, scale: f64) {
        self.log.push(HostCall::ContentScale { scale });
    }

    fn set_backdrop_opacity(&mut self, opacity: f64) {
        self.log.push(HostCall::BackdropOpacity { opacity });
    }

    fn animate_settle(&mut self, animation: SettleAnimation) {
        self.log.push(HostCall::Settle { animation });
    }

    fn set_shadow(&mut self, side: PanelSide, shadow: Option<Shadow>) {
        self.log.push(HostCall::Shadow { side, shadow });
    }

    fn set_chrome(&mut self, request: ChromeRequest) {
        self.log.push(HostCall::Chrome { request });
    }

    fn set_main_interaction_enabled(&mut self, enabled: bool) {
        self.log.push(HostCall::MainInteraction { enabled });
    }

    fn begin_appearance_transition(&mut self, side: PanelSide, appearing: bool) {
        self.log.push(HostCall::BeginAppearance { side, appearing });
    }

    fn end_appearance_transition(&mut self, side: PanelSide) {
        self.log.push(HostCall::EndAppearance { side });
    }

    fn attach_content(&mut self, slot: ContentSlot, content: ContentId, frame: Rect) {
        self.log.push(HostCall::Attach {
            slot,
            content,
            frame,
        });
    }

    fn detach_content(&mut self, slot: ContentSlot, content: ContentId) {
        self.log.push(HostCall::Detach { slot, content });
    }

    fn presented_frame(&self, side: PanelSide) -> Option<Rect> {
        self.log.presented(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_shared_with_host() {
        let (mut host, log) = RecordingHost::new();
        host.set_content_scale(0.9);
        host.set_main_interaction_enabled(false);
        assert_eq!(log.len(), 2);
        assert_eq!(log.calls()[0], HostCall::ContentScale { scale: 0.9 });
    }

    #[test]
    fn drain_empties_log() {
        let (mut host, log) = RecordingHost::new();
        host.end_appearance_transition(PanelSide::Left);
        assert_eq!(log.drain().len(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn last_frame_filters_by_side() {
        let (mut host, log) = RecordingHost::new();
        host.set_panel_frame(PanelSide::Left, Rect::new(-10.0, 0.0, 270.0, 800.0));
        host.set_panel_frame(PanelSide::Right, Rect::new(900.0, 0.0, 270.0, 800.0));
        assert_eq!(log.last_frame(PanelSide::Left).unwrap().x, -10.0);
        assert_eq!(log.last_frame(PanelSide::Right).unwrap().x, 900.0);
    }

    #[test]
    fn presented_frame_is_per_side_and_unlogged() {
        let (host, log) = RecordingHost::new();
        assert_eq!(host.presented_frame(PanelSide::Left), None);
        log.present(PanelSide::Left, Some(Rect::new(-135.0, 0.0, 270.0, 800.0)));
        assert_eq!(host.presented_frame(PanelSide::Left).unwrap().x, -135.0);
        assert_eq!(host.presented_frame(PanelSide::Right), None);
        assert!(log.is_empty());
        log.present(PanelSide::Left, None);
        assert_eq!(host.presented_frame(PanelSide::Left), None);
    }

    #[test]
    fn calls_serialize_with_tag() {
        let call = HostCall::MainInteraction { enabled: true };
        let json = serde_json::to_string(&call).unwrap();
        assert_eq!(json, r#"{"call":"main_interaction","enabled":true}"#);
    }
}
