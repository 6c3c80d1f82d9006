//! Offset/ratio mapping for drawer panels.
//!
//! A panel's display offset is the x origin of its frame. Left panels
//! slide in from `-width` to `0`; right panels from the host's right
//! edge to `host_width - width`. Everything visual during a drag is a
//! function of the normalized open ratio derived from that offset.

use sidenav_common::{PanelSide, Rect, Size};
use sidenav_config::SideNavConfig;

/// Host size and panel widths, captured whenever the host is laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    host: Size,
    left_width: f64,
    right_width: f64,
}

impl Geometry {
    pub fn new(config: &SideNavConfig, host: Size) -> Self {
        Self {
            host,
            left_width: config.left.width,
            right_width: config.right.width,
        }
    }

    pub fn host(&self) -> Size {
        self.host
    }

    pub fn host_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.host.width, self.host.height)
    }

    pub fn panel_width(&self, side: PanelSide) -> f64 {
        match side {
            PanelSide::Left => self.left_width,
            PanelSide::Right => self.right_width,
        }
    }

    /// `+1` when opening moves the panel toward larger x, `-1` otherwise.
    pub fn open_direction(side: PanelSide) -> f64 {
        match side {
            PanelSide::Left => 1.0,
            PanelSide::Right => -1.0,
        }
    }

    /// Offset of a panel that sits fully off-screen at its edge.
    pub fn closed_offset(&self, side: PanelSide) -> f64 {
        match side {
            PanelSide::Left => -self.left_width,
            PanelSide::Right => self.host.width,
        }
    }

    /// Offset of a fully revealed panel.
    pub fn open_offset(&self, side: PanelSide) -> f64 {
        match side {
            PanelSide::Left => 0.0,
            PanelSide::Right => self.host.width - self.right_width,
        }
    }

    /// Offset a settle toward `opened` ends at.
    pub fn resting_offset(&self, side: PanelSide, opened: bool) -> f64 {
        if opened {
            self.open_offset(side)
        } else {
            self.closed_offset(side)
        }
    }

    /// Constrain a proposed offset to the closed..open travel of the side.
    pub fn clamp(&self, side: PanelSide, proposed: f64) -> f64 {
        let closed = self.closed_offset(side);
        let open = self.open_offset(side);
        let (lo, hi) = if closed <= open {
            (closed, open)
        } else {
            (open, closed)
        };
        proposed.max(lo).min(hi)
    }

    /// How far the panel has travelled from closed (0.0) to open (1.0).
    ///
    /// `offset` must already be clamped.
    pub fn open_ratio(&self, side: PanelSide, offset: f64) -> f64 {
        let closed = self.closed_offset(side);
        let span = self.open_offset(side) - closed;
        if span == 0.0 {
            return 0.0;
        }
        let ratio = (offset - closed) / span;
        debug_assert!(
            (-1e-9..=1.0 + 1e-9).contains(&ratio),
            "offset {offset} outside {side} panel travel"
        );
        ratio
    }

    /// Distance the panel travelled from its closed edge toward open.
    pub fn travelled(&self, side: PanelSide, offset: f64) -> f64 {
        (offset - self.closed_offset(side)) * Self::open_direction(side)
    }

    /// Full-height panel frame at the given offset.
    pub fn panel_frame(&self, side: PanelSide, offset: f64) -> Rect {
        Rect::new(offset, 0.0, self.panel_width(side), self.host.height)
    }

    /// Edge strip from which a swipe may open the panel.
    pub fn bezel_rect(&self, side: PanelSide, bezel_width: f64) -> Rect {
        let x = match side {
            PanelSide::Left => 0.0,
            PanelSide::Right => self.host.width - bezel_width,
        };
        Rect::new(x, 0.0, bezel_width, self.host.height)
    }
}

/// Main content scale for an open ratio: `1.0` closed, `target` fully open.
pub fn content_scale(ratio: f64, target: f64) -> f64 {
    1.0 - (1.0 - target) * ratio
}

/// Backdrop opacity for an open ratio: `0.0` closed, `target` fully open.
pub fn backdrop_opacity(ratio: f64, target: f64) -> f64 {
    ratio * target
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidenav_common::Point;

    fn geometry() -> Geometry {
        let mut config = SideNavConfig::default();
        config.right.width = 300.0;
        Geometry::new(&config, Size::new(1000.0, 800.0))
    }

    #[test]
    fn closed_and_open_offsets() {
        let g = geometry();
        assert_eq!(g.closed_offset(PanelSide::Left), -270.0);
        assert_eq!(g.open_offset(PanelSide::Left), 0.0);
        assert_eq!(g.closed_offset(PanelSide::Right), 1000.0);
        assert_eq!(g.open_offset(PanelSide::Right), 700.0);
    }

    #[test]
    fn clamp_left_ascending() {
        let g = geometry();
        assert_eq!(g.clamp(PanelSide::Left, -400.0), -270.0);
        assert_eq!(g.clamp(PanelSide::Left, -120.0), -120.0);
        assert_eq!(g.clamp(PanelSide::Left, 35.0), 0.0);
    }

    #[test]
    fn clamp_right_mirrored() {
        let g = geometry();
        assert_eq!(g.clamp(PanelSide::Right, 1200.0), 1000.0);
        assert_eq!(g.clamp(PanelSide::Right, 850.0), 850.0);
        assert_eq!(g.clamp(PanelSide::Right, 500.0), 700.0);
    }

    #[test]
    fn open_ratio_endpoints() {
        let g = geometry();
        for side in PanelSide::ALL {
            assert_eq!(g.open_ratio(side, g.closed_offset(side)), 0.0);
            assert_eq!(g.open_ratio(side, g.open_offset(side)), 1.0);
        }
    }

    #[test]
    fn open_ratio_midpoints() {
        let g = geometry();
        assert!((g.open_ratio(PanelSide::Left, -135.0) - 0.5).abs() < 1e-9);
        assert!((g.open_ratio(PanelSide::Right, 850.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_width_panel_has_zero_ratio() {
        let mut config = SideNavConfig::default();
        config.left.width = 0.0;
        let g = Geometry::new(&config, Size::new(400.0, 800.0));
        assert_eq!(g.open_ratio(PanelSide::Left, 0.0), 0.0);
    }

    #[test]
    fn travelled_is_positive_toward_open() {
        let g = geometry();
        assert_eq!(g.travelled(PanelSide::Left, -200.0), 70.0);
        assert_eq!(g.travelled(PanelSide::Right, 940.0), 60.0);
    }

    #[test]
    fn content_scale_interpolates() {
        assert_eq!(content_scale(0.0, 0.8), 1.0);
        assert!((content_scale(1.0, 0.8) - 0.8).abs() < 1e-9);
        assert!((content_scale(0.5, 0.8) - 0.9).abs() < 1e-9);
        assert_eq!(content_scale(0.7, 1.0), 1.0);
    }

    #[test]
    fn backdrop_opacity_interpolates() {
        assert_eq!(backdrop_opacity(0.0, 0.4), 0.0);
        assert!((backdrop_opacity(0.5, 0.4) - 0.2).abs() < 1e-9);
        assert!((backdrop_opacity(1.0, 0.4) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn panel_frame_spans_host_height() {
        let g = geometry();
        let frame = g.panel_frame(PanelSide::Right, 700.0);
        assert_eq!(frame, Rect::new(700.0, 0.0, 300.0, 800.0));
    }

    #[test]
    fn bezel_rects_hug_their_edges() {
        let g = geometry();
        let left = g.bezel_rect(PanelSide::Left, 16.0);
        let right = g.bezel_rect(PanelSide::Right, 16.0);
        assert!(left.contains(Point::new(0.0, 10.0)));
        assert!(!left.contains(Point::new(16.0, 10.0)));
        assert!(right.contains(Point::new(984.0, 10.0)));
        assert!(right.contains(Point::new(999.9, 10.0)));
        assert!(!right.contains(Point::new(983.9, 10.0)));
    }
}
