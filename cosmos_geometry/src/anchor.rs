// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named and fractional anchor points.

use kurbo::{Point, Rect, Size, Vec2};

/// A reference point within a box, expressed as fractions of its width and
/// height.
///
/// The nine named anchors map to `(fx, fy) ∈ {0, 0.5, 1}²`; [`Anchor::Fraction`]
/// allows arbitrary fractions (including ones outside `0..=1`).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Anchor {
    /// `(0, 0)`.
    #[default]
    LeftTop,
    /// `(0.5, 0)`.
    CenterTop,
    /// `(1, 0)`.
    RightTop,
    /// `(0, 0.5)`.
    LeftCenter,
    /// `(0.5, 0.5)`.
    Center,
    /// `(1, 0.5)`.
    RightCenter,
    /// `(0, 1)`.
    LeftBottom,
    /// `(0.5, 1)`.
    CenterBottom,
    /// `(1, 1)`.
    RightBottom,
    /// An explicit `(fx, fy)` pair.
    Fraction(f64, f64),
}

impl Anchor {
    /// Returns the `(fx, fy)` fraction pair of this anchor.
    pub const fn fraction(self) -> (f64, f64) {
        match self {
            Self::LeftTop => (0.0, 0.0),
            Self::CenterTop => (0.5, 0.0),
            Self::RightTop => (1.0, 0.0),
            Self::LeftCenter => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::RightCenter => (1.0, 0.5),
            Self::LeftBottom => (0.0, 1.0),
            Self::CenterBottom => (0.5, 1.0),
            Self::RightBottom => (1.0, 1.0),
            Self::Fraction(fx, fy) => (fx, fy),
        }
    }

    /// Offset of the anchor point from the top-left corner of a box of `size`.
    pub fn offset_in(self, size: Size) -> Vec2 {
        let (fx, fy) = self.fraction();
        Vec2::new(size.width * fx, size.height * fy)
    }

    /// The anchor point of `bounds`: `(x + w·fx, y + h·fy)`.
    ///
    /// `bounds.x0`/`bounds.y0` are taken as the top-left corner.
    pub fn point_in(self, bounds: Rect) -> Point {
        Point::new(bounds.x0, bounds.y0) + self.offset_in(bounds.size())
    }
}

impl From<(f64, f64)> for Anchor {
    fn from((fx, fy): (f64, f64)) -> Self {
        Self::Fraction(fx, fy)
    }
}
