//! Core types, constructors, and queries for SideNav.

use sidenav_common::{Color, PanelSide, Rect, Size};
use sidenav_config::colors::parse_color;
use sidenav_config::SideNavConfig;
use std::time::Duration;
use tracing::{debug, warn};

use crate::arbiter::{Arbiter, SideView};
use crate::delegate::{NotificationKind, SideNavDelegate};
use crate::geometry::Geometry;
use crate::host::{ChromeRequest, ContentId, ContentSlot, HostSurface, SettleId, Shadow};
use crate::panel::{PanelContainer, PanelSlot, PanelState};

/// Fallback when the configured duration cannot be represented.
const FALLBACK_DURATION: Duration = Duration::from_millis(500);

/// Drawer controller for a main surface with optional left and right panels.
///
/// Owns both panels' containers and all drag state. Everything runs on
/// the caller's thread; the host reports settle completions back through
/// [`SideNav::finish_settle`].
pub struct SideNav {
    pub(super) config: SideNavConfig,
    pub(super) geometry: Geometry,
    pub(super) host: Box<dyn HostSurface>,
    pub(super) delegate: Option<Box<dyn SideNavDelegate>>,
    pub(super) main_content: Option<ContentId>,
    pub(super) left: Option<PanelSlot>,
    pub(super) right: Option<PanelSlot>,
    pub(super) interaction_enabled: bool,
    pub(super) next_settle: u64,
}

impl SideNav {
    /// Create a controller for a host of the given size. No panels are
    /// configured yet; see [`SideNav::configure_panel`].
    pub fn new(config: SideNavConfig, bounds: Size, mut host: Box<dyn HostSurface>) -> Self {
        let backdrop = parse_color(&config.content.backdrop_color).unwrap_or_else(|e| {
            warn!("invalid backdrop color, using black: {e}");
            Color::BLACK
        });
        host.set_backdrop_color(backdrop);
        host.set_backdrop_opacity(0.0);

        Self {
            geometry: Geometry::new(&config, bounds),
            config,
            host,
            delegate: None,
            main_content: None,
            left: None,
            right: None,
            interaction_enabled: true,
            next_settle: 1,
        }
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn SideNavDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Set up a panel for `side` holding `content`, parked closed.
    ///
    /// Configuring an already configured side only swaps its content.
    pub fn configure_panel(&mut self, side: PanelSide, content: ContentId) {
        if self.panel(side).is_some() {
            self.switch_content(ContentSlot::panel(side), content, false);
            return;
        }

        let offset = self.geometry.closed_offset(side);
        let frame = self.geometry.panel_frame(side, offset);
        *self.slot_mut(side) = Some(PanelSlot::new(content, offset));
        self.host.set_panel_frame(side, frame);
        self.host.attach_content(
            ContentSlot::panel(side),
            content,
            Rect::new(0.0, 0.0, frame.width, frame.height),
        );
        debug!(%side, %content, "panel configured");
    }

    // -- Queries --

    pub fn config(&self) -> &SideNavConfig {
        &self.config
    }

    pub fn bounds(&self) -> Size {
        self.geometry.host()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn is_configured(&self, side: PanelSide) -> bool {
        self.panel(side).is_some()
    }

    /// Logical state: during a settle this is already the target state.
    pub fn is_opened(&self, side: PanelSide) -> bool {
        self.panel(side).is_some_and(PanelSlot::is_opened)
    }

    pub fn state(&self, side: PanelSide) -> Option<PanelState> {
        self.panel(side).map(|p| p.container.state)
    }

    pub fn is_dragging(&self, side: PanelSide) -> bool {
        self.panel(side).is_some_and(PanelSlot::is_dragging)
    }

    /// Side with an active drag session, if any.
    pub fn dragging_side(&self) -> Option<PanelSide> {
        PanelSide::ALL.into_iter().find(|s| self.is_dragging(*s))
    }

    pub fn is_user_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    pub fn container(&self, side: PanelSide) -> Option<&PanelContainer> {
        self.panel(side).map(|p| &p.container)
    }

    /// Model offset of the panel (the end point of any running settle).
    pub fn panel_offset(&self, side: PanelSide) -> Option<f64> {
        self.panel(side).map(|p| p.offset)
    }

    pub fn panel_frame(&self, side: PanelSide) -> Option<Rect> {
        self.panel(side)
            .map(|p| self.geometry.panel_frame(side, p.offset))
    }

    pub fn content(&self, slot: ContentSlot) -> Option<ContentId> {
        match slot.side() {
            None => self.main_content,
            Some(side) => self.panel(side).map(|p| p.content),
        }
    }

    pub fn arbiter(&self) -> Arbiter<'_> {
        Arbiter::new(&self.config, self.geometry)
    }

    // -- Internals shared by the operation modules --

    pub(super) fn panel(&self, side: PanelSide) -> Option<&PanelSlot> {
        match side {
            PanelSide::Left => self.left.as_ref(),
            PanelSide::Right => self.right.as_ref(),
        }
    }

    pub(super) fn panel_mut(&mut self, side: PanelSide) -> Option<&mut PanelSlot> {
        self.slot_mut(side).as_mut()
    }

    fn slot_mut(&mut self, side: PanelSide) -> &mut Option<PanelSlot> {
        match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
        }
    }

    pub(super) fn side_view(&self, side: PanelSide) -> Option<SideView> {
        self.panel(side).map(|p| SideView {
            state: p.container.state,
            dragging: p.is_dragging(),
            frame: self.geometry.panel_frame(side, p.offset),
        })
    }

    /// Where the panel is on screen. While a settle runs the model offset
    /// is already its end point, so the host's presented frame wins.
    pub(super) fn displayed_offset(&self, side: PanelSide) -> Option<f64> {
        let panel = self.panel(side)?;
        if panel.pending.is_none() {
            return Some(panel.offset);
        }
        let presented = self.host.presented_frame(side).map(|frame| frame.x);
        Some(presented.map_or(panel.offset, |x| self.geometry.clamp(side, x)))
    }

    /// Abandon the pending settle on `side`, closing its appearance
    /// transition so every begin the host saw gets its end.
    pub(super) fn drop_pending(&mut self, side: PanelSide) {
        let Some(pending) = self.panel_mut(side).and_then(|p| p.pending.take()) else {
            return;
        };
        debug!(%side, id = %pending.id, "pending settle superseded");
        self.host.end_appearance_transition(side);
    }

    pub(super) fn default_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.config.animation.duration).unwrap_or(FALLBACK_DURATION)
    }

    pub(super) fn shadow(&self) -> Shadow {
        Shadow::from(&self.config.shadow)
    }

    pub(super) fn next_settle_id(&mut self) -> SettleId {
        let id = SettleId(self.next_settle);
        self.next_settle += 1;
        id
    }

    pub(super) fn request_chrome(&mut self, hidden: bool) {
        if !self.config.chrome.hide_status_bar {
            return;
        }
        self.host.set_chrome(ChromeRequest {
            hidden,
            strategy: self.config.chrome.strategy,
        });
    }

    pub(super) fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
        self.host.set_main_interaction_enabled(enabled);
    }

    /// Deliver a notification for `side` to the delegate, if any.
    pub(super) fn notify(&mut self, kind: NotificationKind, side: PanelSide) {
        let Some(container) = self.container(side).copied() else {
            return;
        };
        let Some(mut delegate) = self.delegate.take() else {
            return;
        };
        match kind {
            NotificationKind::BeginPan => delegate.did_begin_pan(self, side, &container),
            NotificationKind::ChangePan => delegate.did_change_pan(self, side, &container),
            NotificationKind::EndPan => delegate.did_end_pan(self, side, &container),
            NotificationKind::Open => delegate.did_open(self, side, &container),
            NotificationKind::Close => delegate.did_close(self, side, &container),
            NotificationKind::Tap => delegate.did_tap(self, side, &container),
        }
        self.delegate = Some(delegate);
    }
}
