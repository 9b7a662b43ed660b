use crate::direction::Direction;
use crate::paint::{Color, Gradient, GradientShape, GradientStop};

/// Background gradient drawn beneath the blur layers.
///
/// Keeps the tint's RGB and ramps its alpha from the tint's own alpha at 0%
/// to fully transparent at 100%, so the tint is densest where blur is
/// strongest. Independent of step count and falloff.
pub fn tint_gradient(direction: Direction, tint: Color) -> Gradient {
    Gradient::new(
        GradientShape::from(direction),
        vec![
            GradientStop::new(0.0, tint),
            GradientStop::new(100.0, tint.with_alpha(0.0)),
        ],
    )
}
