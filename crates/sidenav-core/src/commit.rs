//! Release decision: does a finished drag open or close its panel, and
//! how long does the settle take.

use sidenav_common::PanelSide;
use std::time::Duration;

use crate::geometry::Geometry;
use crate::panel::PanelState;

/// Release speed (points per second) at which direction alone decides.
pub const FLING_VELOCITY: f64 = 1000.0;

/// Shortest settle a fling can produce.
pub const MIN_SETTLE: Duration = Duration::from_millis(100);

/// Longest settle a fling can produce.
pub const MAX_SETTLE: Duration = Duration::from_secs(1);

/// Outcome of a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commit {
    pub target: PanelState,
    /// Velocity carried into the settle. Zero unless the release was a fling.
    pub velocity: f64,
}

/// Decide the target state from the clamped release offset and the
/// signed x velocity.
///
/// A fling (`|velocity| >= FLING_VELOCITY`) opens when it moves toward
/// the open position and closes otherwise. A slower release opens only
/// once the panel has travelled strictly more than `point_of_no_return`
/// from its closed edge.
pub fn decide(
    geometry: &Geometry,
    side: PanelSide,
    offset: f64,
    velocity: f64,
    point_of_no_return: f64,
) -> Commit {
    if velocity.abs() >= FLING_VELOCITY {
        let toward_open = velocity * Geometry::open_direction(side) > 0.0;
        return Commit {
            target: if toward_open {
                PanelState::Opened
            } else {
                PanelState::Closed
            },
            velocity,
        };
    }

    let target = if geometry.travelled(side, offset) > point_of_no_return {
        PanelState::Opened
    } else {
        PanelState::Closed
    };
    Commit {
        target,
        velocity: 0.0,
    }
}

/// Settle duration for covering `distance` points.
///
/// Zero velocity uses `default`; otherwise the time the fling would need
/// at constant speed, bounded to `[MIN_SETTLE, MAX_SETTLE]`.
pub fn settle_duration(distance: f64, velocity: f64, default: Duration) -> Duration {
    if velocity == 0.0 {
        return default;
    }
    let secs = distance.abs() / velocity.abs();
    if secs.is_nan() || secs <= MIN_SETTLE.as_secs_f64() {
        return MIN_SETTLE;
    }
    if secs >= MAX_SETTLE.as_secs_f64() {
        return MAX_SETTLE;
    }
    Duration::from_secs_f64(secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidenav_common::Size;
    use sidenav_config::SideNavConfig;

    const PONR: f64 = 48.0;

    fn geometry() -> Geometry {
        Geometry::new(&SideNavConfig::default(), Size::new(1000.0, 800.0))
    }

    fn target(side: PanelSide, offset: f64, velocity: f64) -> PanelState {
        decide(&geometry(), side, offset, velocity, PONR).target
    }

    #[test]
    fn left_nearly_closed_release_closes() {
        assert_eq!(target(PanelSide::Left, -260.0, 0.0), PanelState::Closed);
    }

    #[test]
    fn left_past_threshold_release_opens() {
        assert_eq!(target(PanelSide::Left, -100.0, 0.0), PanelState::Opened);
    }

    #[test]
    fn threshold_itself_closes() {
        assert_eq!(target(PanelSide::Left, -222.0, 0.0), PanelState::Closed);
        assert_eq!(target(PanelSide::Left, -221.5, 0.0), PanelState::Opened);
        assert_eq!(target(PanelSide::Right, 952.0, 0.0), PanelState::Closed);
        assert_eq!(target(PanelSide::Right, 951.5, 0.0), PanelState::Opened);
    }

    #[test]
    fn fast_fling_toward_closed_overrides_position() {
        let commit = decide(&geometry(), PanelSide::Left, -50.0, -1500.0, PONR);
        assert_eq!(commit.target, PanelState::Closed);
        assert_eq!(commit.velocity, -1500.0);
    }

    #[test]
    fn fast_fling_toward_open_overrides_position() {
        assert_eq!(target(PanelSide::Left, -265.0, 1200.0), PanelState::Opened);
        assert_eq!(target(PanelSide::Right, 995.0, -1000.0), PanelState::Opened);
        assert_eq!(target(PanelSide::Right, 750.0, 1000.0), PanelState::Closed);
    }

    #[test]
    fn slow_velocity_is_dropped() {
        let commit = decide(&geometry(), PanelSide::Right, 800.0, -999.0, PONR);
        assert_eq!(commit.target, PanelState::Opened);
        assert_eq!(commit.velocity, 0.0);
    }

    #[test]
    fn zero_velocity_uses_default_duration() {
        let default = Duration::from_millis(500);
        assert_eq!(settle_duration(270.0, 0.0, default), default);
    }

    #[test]
    fn fling_duration_is_distance_over_speed() {
        let d = settle_duration(600.0, -1500.0, Duration::from_millis(500));
        assert!((d.as_secs_f64() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn fling_duration_is_bounded() {
        let default = Duration::from_millis(500);
        assert_eq!(settle_duration(10.0, 5000.0, default), MIN_SETTLE);
        assert_eq!(settle_duration(0.0, 5000.0, default), MIN_SETTLE);
        assert_eq!(settle_duration(5000.0, 1000.0, default), MAX_SETTLE);
    }
}
