use crate::direction::{Direction, Side};

use super::Color;

/// Geometry of a gradient over the element's bounding box.
///
/// These are the only two placements the rendering surface has to honor:
/// a linear axis ending at a named side, or concentric rings centered in the
/// element and reaching 100% at its closest side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GradientShape {
    /// Runs from the side opposite `to` (0%) toward `to` (100%).
    Linear { to: Side },
    /// Centered, `closest-side` extent.
    RadialClosestSide,
}

impl From<Direction> for GradientShape {
    #[inline]
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Linear(side) => GradientShape::Linear { to: side.opposite() },
            Direction::Radial => GradientShape::RadialClosestSide,
        }
    }
}

/// A single color stop. `offset` is a percentage along the gradient axis.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Gradient definition in percent space of the element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gradient {
    pub shape: GradientShape,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn new(shape: GradientShape, stops: Vec<GradientStop>) -> Self {
        Self { shape, stops }
    }

    /// Returns true when the gradient is structurally usable:
    /// at least two stops, all finite.
    ///
    /// Stops are not required to be sorted; CSS resolves unsorted offsets
    /// by clamping each to the previous one.
    pub fn is_valid(&self) -> bool {
        self.stops.len() >= 2
            && self.stops.iter().all(|s| s.offset.is_finite() && s.color.is_finite())
    }
}
