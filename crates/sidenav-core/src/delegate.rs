//! Delegate notifications.
//!
//! Every hook has a no-op default, so a delegate implements only what it
//! needs. Hooks run synchronously, in gesture and settle-completion order.

use serde::Serialize;
use sidenav_common::PanelSide;
use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::SideNav;
use crate::panel::PanelContainer;

#[allow(unused_variables)]
pub trait SideNavDelegate {
    fn did_begin_pan(&mut self, nav: &SideNav, side: PanelSide, container: &PanelContainer) {}

    fn did_change_pan(&mut self, nav: &SideNav, side: PanelSide, container: &PanelContainer) {}

    fn did_end_pan(&mut self, nav: &SideNav, side: PanelSide, container: &PanelContainer) {}

    /// A settle toward Opened finished.
    fn did_open(&mut self, nav: &SideNav, side: PanelSide, container: &PanelContainer) {}

    /// A settle toward Closed finished.
    fn did_close(&mut self, nav: &SideNav, side: PanelSide, container: &PanelContainer) {}

    /// A tap on the backdrop of an open panel, delivered before it closes.
    fn did_tap(&mut self, nav: &SideNav, side: PanelSide, container: &PanelContainer) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    BeginPan,
    ChangePan,
    EndPan,
    Open,
    Close,
    Tap,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub side: PanelSide,
    pub container: PanelContainer,
}

/// Delegate that records every notification. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog(Rc<RefCell<Vec<Notification>>>);

impl NotificationLog {
    pub fn entries(&self) -> Vec<Notification> {
        self.0.borrow().clone()
    }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn kinds(&self) -> Vec<(NotificationKind, PanelSide)> {
        self.0.borrow().iter().map(|n| (n.kind, n.side)).collect()
    }

    pub fn count(&self, kind: NotificationKind, side: PanelSide) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|n| n.kind == kind && n.side == side)
            .count()
    }

    fn record(&self, kind: NotificationKind, side: PanelSide, container: &PanelContainer) {
        self.0.borrow_mut().push(Notification {
            kind,
            side,
            container: *container,
        });
    }
}

impl SideNavDelegate for NotificationLog {
    fn did_begin_pan(&mut self, _nav: &SideNav, side: PanelSide, container: &PanelContainer) {
        self.record(NotificationKind::BeginPan, side, container);
    }

    fn did_change_pan(&mut self, _nav: &SideNav, side: PanelSide, container: &PanelContainer) {
        self.record(NotificationKind::ChangePan, side, container);
    }

    fn did_end_pan(&mut self, _nav: &SideNav, side: PanelSide, container: &PanelContainer) {
        self.record(NotificationKind::EndPan, side, container);
    }

    fn did_open(&mut self, _nav: &SideNav, side: PanelSide, container: &PanelContainer) {
        self.record(NotificationKind::Open, side, container);
    }

    fn did_close(&mut self, _nav: &SideNav, side: PanelSide, container: &PanelContainer) {
        self.record(NotificationKind::Close, side, container);
    }

    fn did_tap(&mut self, _nav: &SideNav, side: PanelSide, container: &PanelContainer) {
        self.record(NotificationKind::Tap, side, container);
    }
}
