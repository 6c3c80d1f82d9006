//! Replays gesture scripts against a recording host.
//!
//! Settles complete immediately after the event that dispatched them, as
//! if every animation ran to the end before the next touch.

use serde::Serialize;
use sidenav_common::{PanelSide, Point, SideNavError, Size};
use sidenav_config::SideNavConfig;
use sidenav_core::{
    ContentId, ContentSlot, GestureEvent, HostCall, HostLog, Notification, NotificationLog,
    RecordingHost, SideNav,
};
use std::path::Path;

/// One line of replay output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Output {
    Event { index: usize, event: GestureEvent },
    Host(HostCall),
    Delegate(Notification),
}

/// Read a JSON array of gesture events.
pub fn load_script(path: &Path) -> sidenav_common::Result<Vec<GestureEvent>> {
    let contents = std::fs::read_to_string(path)?;
    parse_script(&contents)
}

pub fn parse_script(contents: &str) -> sidenav_common::Result<Vec<GestureEvent>> {
    serde_json::from_str(contents).map_err(|e| SideNavError::Script(e.to_string()))
}

/// Swipe the left panel open, tap it closed, then fling the right panel
/// open and drag it back.
pub fn demo_script(size: Size) -> Vec<GestureEvent> {
    let y = size.height / 2.0;
    let right_edge = size.width - 2.0;
    vec![
        GestureEvent::PanBegan { point: Point::new(2.0, y) },
        GestureEvent::PanChanged { point: Point::new(90.0, y) },
        GestureEvent::PanChanged { point: Point::new(180.0, y) },
        GestureEvent::PanEnded { velocity: Point::new(240.0, 0.0) },
        GestureEvent::Tap { point: Point::new(size.width - 10.0, y) },
        GestureEvent::PanBegan { point: Point::new(right_edge, y) },
        GestureEvent::PanChanged { point: Point::new(right_edge - 30.0, y) },
        GestureEvent::PanEnded { velocity: Point::new(-1600.0, 0.0) },
        GestureEvent::PanBegan { point: Point::new(size.width / 2.0, y) },
        GestureEvent::PanChanged { point: Point::new(size.width * 1.5, y) },
        GestureEvent::PanCancelled,
    ]
}

pub struct Replay {
    nav: SideNav,
    host: HostLog,
    notes: NotificationLog,
}

impl Replay {
    /// Build a controller with main, left, and right content attached.
    pub fn new(config: SideNavConfig, size: Size) -> Self {
        let (host, log) = RecordingHost::new();
        let mut nav = SideNav::new(config, size, Box::new(host));
        let notes = NotificationLog::default();
        nav.set_delegate(Box::new(notes.clone()));
        nav.set_main_content(ContentId(0));
        nav.configure_panel(PanelSide::Left, ContentId(1));
        nav.configure_panel(PanelSide::Right, ContentId(2));
        Self {
            nav,
            host: log,
            notes,
        }
    }

    pub fn nav(&self) -> &SideNav {
        &self.nav
    }

    /// Output produced while setting up, before any event.
    pub fn setup_output(&self) -> Vec<Output> {
        self.collect()
    }

    /// Apply one event, finish any settles it started, and return
    /// everything that happened.
    pub fn step(&mut self, index: usize, event: GestureEvent) -> Vec<Output> {
        let handled = self.nav.handle(event);
        if !handled {
            tracing::debug!(index, ?event, "event not handled");
        }
        for id in self.nav.pending_settles() {
            self.nav.finish_settle(id);
        }
        let mut out = vec![Output::Event { index, event }];
        out.extend(self.collect());
        out
    }

    pub fn run(&mut self, events: &[GestureEvent]) -> Vec<Output> {
        let mut out = self.setup_output();
        for (index, event) in events.iter().enumerate() {
            out.extend(self.step(index, *event));
        }
        out
    }

    fn collect(&self) -> Vec<Output> {
        let mut out: Vec<Output> = self.host.drain().into_iter().map(Output::Host).collect();
        out.extend(self.notes.drain().into_iter().map(Output::Delegate));
        out
    }

    /// One-line summary of both panels, for the final log line.
    pub fn summary(&self) -> String {
        let describe = |side: PanelSide| match self.nav.container(side) {
            Some(container) => format!("{side} {container}"),
            None => format!("{side} unconfigured"),
        };
        format!(
            "{}; {}; main content {:?}",
            describe(PanelSide::Left),
            describe(PanelSide::Right),
            self.nav.content(ContentSlot::Main).map(|c| c.to_string())
        )
    }
}
