// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocities and border policies for movable matters.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

/// How a movable matter responds when it crosses one edge of the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderStrategy {
    /// Keep moving.
    #[default]
    Ignore,
    /// Zero both velocity components.
    Stop,
    /// Negate the velocity component of the violated axis.
    Bounce,
}

/// One [`BorderStrategy`] per plane edge.
///
/// Conversions mirror the usual shorthand: a single strategy applies to all
/// four edges, a pair is `(top and bottom, right and left)`, and an array is
/// `[top, right, bottom, left]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BorderStrategies {
    /// Strategy for `y < 0`.
    pub top: BorderStrategy,
    /// Strategy for crossing the far x edge.
    pub right: BorderStrategy,
    /// Strategy for crossing the far y edge.
    pub bottom: BorderStrategy,
    /// Strategy for `x < 0`.
    pub left: BorderStrategy,
}

impl From<BorderStrategy> for BorderStrategies {
    fn from(all: BorderStrategy) -> Self {
        Self {
            top: all,
            right: all,
            bottom: all,
            left: all,
        }
    }
}

impl From<(BorderStrategy, BorderStrategy)> for BorderStrategies {
    fn from((vertical, horizontal): (BorderStrategy, BorderStrategy)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl From<[BorderStrategy; 4]> for BorderStrategies {
    fn from([top, right, bottom, left]: [BorderStrategy; 4]) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl BorderStrategies {
    /// The strategies that apply to a signed overflow.
    ///
    /// `hdist < 0` selects the left edge, `hdist > 0` the right one; `vdist`
    /// likewise selects top or bottom. A zero distance yields
    /// [`BorderStrategy::Ignore`] for that axis.
    pub fn for_overflow(&self, hdist: f64, vdist: f64) -> (BorderStrategy, BorderStrategy) {
        let h = if hdist < 0.0 {
            self.left
        } else if hdist > 0.0 {
            self.right
        } else {
            BorderStrategy::Ignore
        };
        let v = if vdist < 0.0 {
            self.top
        } else if vdist > 0.0 {
            self.bottom
        } else {
            BorderStrategy::Ignore
        };
        (h, v)
    }
}

/// Optional sub-interface of [`Matter`](crate::Matter) for matters that move
/// on their own each tick.
pub trait Movable {
    /// Displacement per tick.
    fn velocity(&self) -> Vec2;

    /// Replace the displacement per tick.
    fn set_velocity(&mut self, velocity: Vec2);

    /// Per-edge border policy.
    fn border_strategies(&self) -> BorderStrategies;

    /// Called by the plane when the advanced box crosses its extent.
    ///
    /// `hdist`/`vdist` are signed overflow distances: negative past the near
    /// edge, positive past the far edge, zero when the axis is inside. The
    /// default applies [`Movable::border_strategies`]: a stop on either axis
    /// stops both, otherwise each bouncing axis is negated.
    fn on_border(&mut self, hdist: f64, vdist: f64) {
        let (h, v) = self.border_strategies().for_overflow(hdist, vdist);
        let mut velocity = self.velocity();
        if h == BorderStrategy::Stop || v == BorderStrategy::Stop {
            velocity = Vec2::ZERO;
        } else {
            if h == BorderStrategy::Bounce {
                velocity.x = -velocity.x;
            }
            if v == BorderStrategy::Bounce {
                velocity.y = -velocity.y;
            }
        }
        self.set_velocity(velocity);
    }
}

/// Ready-made [`Movable`] state that matters can embed and hand out from
/// [`Matter::as_movable`](crate::Matter::as_movable).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Motion {
    velocity: Vec2,
    strategies: BorderStrategies,
}

impl Motion {
    /// A motionless state that ignores every border.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the velocity from a speed and a heading in degrees, measured
    /// clockwise from the positive x axis (y grows downward).
    pub fn set_speed(&mut self, speed: f64, degrees: f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.velocity = Vec2::new(speed * cos, speed * sin);
    }

    /// Replace the per-edge policy.
    pub fn set_border_strategy(&mut self, strategies: impl Into<BorderStrategies>) {
        self.strategies = strategies.into();
    }

    /// Zero the selected velocity components.
    pub fn motion_stop(&mut self, horizontal: bool, vertical: bool) {
        if horizontal {
            self.velocity.x = 0.0;
        }
        if vertical {
            self.velocity.y = 0.0;
        }
    }

    /// Negate the selected velocity components.
    pub fn motion_bounce(&mut self, horizontal: bool, vertical: bool) {
        if horizontal {
            self.velocity.x = -self.velocity.x;
        }
        if vertical {
            self.velocity.y = -self.velocity.y;
        }
    }
}

impl Movable for Motion {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn border_strategies(&self) -> BorderStrategies {
        self.strategies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving(vx: f64, vy: f64, strategies: impl Into<BorderStrategies>) -> Motion {
        let mut m = Motion::new();
        m.set_velocity(Vec2::new(vx, vy));
        m.set_border_strategy(strategies);
        m
    }

    #[test]
    fn bounce_negates_only_the_violated_axis() {
        let mut m = moving(5.0, 3.0, BorderStrategy::Bounce);
        m.on_border(8.0, 0.0);
        assert_eq!(m.velocity(), Vec2::new(-5.0, 3.0));
        m.on_border(0.0, -1.0);
        assert_eq!(m.velocity(), Vec2::new(-5.0, -3.0));
    }

    #[test]
    fn stop_on_either_axis_stops_both() {
        let mut m = moving(
            5.0,
            3.0,
            (BorderStrategy::Bounce, BorderStrategy::Stop),
        );
        m.on_border(-2.0, 4.0);
        assert_eq!(m.velocity(), Vec2::ZERO);
    }

    #[test]
    fn ignore_keeps_velocity() {
        let mut m = moving(5.0, 3.0, BorderStrategy::Ignore);
        m.on_border(8.0, 8.0);
        assert_eq!(m.velocity(), Vec2::new(5.0, 3.0));
    }

    #[test]
    fn edge_selection_follows_overflow_sign() {
        let s = BorderStrategies::from([
            BorderStrategy::Stop,
            BorderStrategy::Bounce,
            BorderStrategy::Ignore,
            BorderStrategy::Stop,
        ]);
        assert_eq!(
            s.for_overflow(1.0, -1.0),
            (BorderStrategy::Bounce, BorderStrategy::Stop)
        );
        assert_eq!(
            s.for_overflow(-1.0, 1.0),
            (BorderStrategy::Stop, BorderStrategy::Ignore)
        );
        assert_eq!(
            s.for_overflow(0.0, 0.0),
            (BorderStrategy::Ignore, BorderStrategy::Ignore)
        );
    }

    #[test]
    fn speed_and_heading() {
        let mut m = Motion::new();
        m.set_speed(2.0, 90.0);
        assert!(m.velocity().x.abs() < 1e-12);
        assert!((m.velocity().y - 2.0).abs() < 1e-12);
        m.motion_bounce(false, true);
        assert!((m.velocity().y + 2.0).abs() < 1e-12);
        m.motion_stop(true, true);
        assert_eq!(m.velocity(), Vec2::ZERO);
    }
}
