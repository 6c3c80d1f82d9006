//! Property-based invariant tests for drags and settles.
//!
//! 1. Every frame applied during a drag stays inside the side's travel.
//! 2. Releasing a drag always leaves no session and exactly one settle
//!    whose target matches the logical state.
//! 3. The open ratio is monotonic in the offset and hits 0 and 1 at the ends.
//! 4. Settle durations with nonzero velocity stay within bounds.
//! 5. Backdrop opacity and content scale stay between closed and open values.

use proptest::prelude::*;
use sidenav_common::{PanelSide, Point, Size};
use sidenav_config::SideNavConfig;
use sidenav_core::commit::{settle_duration, MAX_SETTLE, MIN_SETTLE};
use sidenav_core::geometry::{backdrop_opacity, content_scale};
use sidenav_core::{ContentId, Geometry, HostCall, RecordingHost, SideNav};
use std::time::Duration;

// ── Helpers ─────────────────────────────────────────────────────────────

fn side_strategy() -> impl Strategy<Value = PanelSide> {
    prop_oneof![Just(PanelSide::Left), Just(PanelSide::Right)]
}

fn layout_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
    // host width, left width, right width
    (400.0f64..2000.0, 50.0f64..380.0, 50.0f64..380.0)
}

fn config(left: f64, right: f64) -> SideNavConfig {
    let mut config = SideNavConfig::default();
    config.left.width = left;
    config.right.width = right;
    config
}

fn bezel_point(side: PanelSide, host_width: f64) -> Point {
    match side {
        PanelSide::Left => Point::new(1.0, 200.0),
        PanelSide::Right => Point::new(host_width - 1.0, 200.0),
    }
}

fn travel(geometry: &Geometry, side: PanelSide) -> (f64, f64) {
    let a = geometry.closed_offset(side);
    let b = geometry.open_offset(side);
    (a.min(b), a.max(b))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Drag frames stay within travel
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_frames_stay_within_travel(
        (host_width, left, right) in layout_strategy(),
        side in side_strategy(),
        moves in prop::collection::vec(-3000.0f64..3000.0, 1..40),
    ) {
        let (host, log) = RecordingHost::new();
        let size = Size::new(host_width, 800.0);
        let mut nav = SideNav::new(config(left, right), size, Box::new(host));
        nav.configure_panel(side, ContentId(1));
        let (lo, hi) = travel(nav.geometry(), side);

        let start = bezel_point(side, host_width);
        prop_assert!(nav.begin_pan(side, start));
        for dx in moves {
            nav.change_pan(side, Point::new(start.x + dx, start.y));
            let x = log.last_frame(side).unwrap().x;
            prop_assert!(x >= lo && x <= hi, "frame x {} outside [{}, {}]", x, lo, hi);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Release always settles to the logical state
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn release_settles_to_logical_state(
        (host_width, left, right) in layout_strategy(),
        side in side_strategy(),
        dx in -1000.0f64..1000.0,
        velocity in -4000.0f64..4000.0,
    ) {
        let (host, log) = RecordingHost::new();
        let mut nav = SideNav::new(config(left, right), Size::new(host_width, 800.0), Box::new(host));
        nav.configure_panel(side, ContentId(1));

        let start = bezel_point(side, host_width);
        nav.begin_pan(side, start);
        nav.change_pan(side, Point::new(start.x + dx, start.y));
        prop_assert!(nav.end_pan(side, Point::new(velocity, 0.0)));

        prop_assert!(!nav.is_dragging(side));
        let settles = log.settles();
        prop_assert_eq!(settles.len(), 1);
        prop_assert_eq!(Some(settles[0].target), nav.state(side));
        let expected = nav.geometry().resting_offset(side, nav.is_opened(side));
        prop_assert_eq!(settles[0].frame.x, expected);
        prop_assert!(settles[0].duration >= MIN_SETTLE && settles[0].duration <= MAX_SETTLE);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Open ratio monotonic with fixed endpoints
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn open_ratio_monotonic(
        (host_width, left, right) in layout_strategy(),
        side in side_strategy(),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let geometry = Geometry::new(&config(left, right), Size::new(host_width, 800.0));
        let (lo, hi) = travel(&geometry, side);
        let (a, b) = (a.min(b), a.max(b));
        let near = lo + (hi - lo) * a;
        let far = lo + (hi - lo) * b;

        let r_near = geometry.open_ratio(side, near);
        let r_far = geometry.open_ratio(side, far);
        match side {
            PanelSide::Left => prop_assert!(r_near <= r_far + 1e-12),
            PanelSide::Right => prop_assert!(r_near + 1e-12 >= r_far),
        }

        prop_assert_eq!(geometry.open_ratio(side, geometry.closed_offset(side)), 0.0);
        prop_assert_eq!(geometry.open_ratio(side, geometry.open_offset(side)), 1.0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Settle duration bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn settle_duration_bounded(
        distance in -5000.0f64..5000.0,
        velocity in prop_oneof![-10000.0f64..-0.001, 0.001f64..10000.0],
    ) {
        let duration = settle_duration(distance, velocity, Duration::from_millis(500));
        prop_assert!(duration >= MIN_SETTLE, "{:?} below minimum", duration);
        prop_assert!(duration <= MAX_SETTLE, "{:?} above maximum", duration);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Dependent visuals stay between endpoints
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn visuals_interpolate_within_endpoints(
        ratio in 0.0f64..=1.0,
        scale in 0.0f64..=1.0,
        opacity in 0.0f64..=1.0,
    ) {
        let s = content_scale(ratio, scale);
        prop_assert!(s >= scale - 1e-12 && s <= 1.0 + 1e-12);
        let o = backdrop_opacity(ratio, opacity);
        prop_assert!(o >= 0.0 && o <= opacity + 1e-12);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Host calls never report a drag frame for the untouched side
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_touches_only_its_side(
        side in side_strategy(),
        moves in prop::collection::vec(-500.0f64..500.0, 1..10),
    ) {
        let (host, log) = RecordingHost::new();
        let mut nav = SideNav::new(SideNavConfig::default(), Size::new(1000.0, 800.0), Box::new(host));
        nav.configure_panel(PanelSide::Left, ContentId(1));
        nav.configure_panel(PanelSide::Right, ContentId(2));
        log.drain();

        let start = bezel_point(side, 1000.0);
        nav.begin_pan(side, start);
        for dx in moves {
            nav.change_pan(side, Point::new(start.x + dx, start.y));
        }
        let other = side.opposite();
        let touched = log
            .calls()
            .iter()
            .any(|c| matches!(c, HostCall::PanelFrame { side: s, .. } if *s == other));
        prop_assert!(!touched);
    }
}
