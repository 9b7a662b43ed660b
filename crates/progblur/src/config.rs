use crate::direction::{Direction, Side};
use crate::paint::Color;

/// Inputs of the layering algorithm.
///
/// No field is validated. `steps` is clamped to at least one layer when the
/// stack is built ([`actual_steps`](Self::actual_steps)); everything else is
/// used as given, so a negative strength or a falloff outside `[0, 100]`
/// produces degenerate but well-defined geometry.
///
/// # Example
/// ```rust
/// use progblur::{BlurConfig, Side};
///
/// let config = BlurConfig::new()
///     .strength(48.0)
///     .steps(6)
///     .falloff_percentage(80.0)
///     .side(Side::Bottom);
/// assert_eq!(config.actual_steps(), 6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlurConfig {
    /// Blur radius of the strongest layer, in pixels.
    pub strength: f32,
    /// Requested layer count. Values below one are treated as one.
    pub steps: i32,
    /// Share of the element's extent, in percent, over which blur fades out.
    pub falloff_percentage: f32,
    pub tint: Color,
    pub direction: Direction,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            strength: 64.0,
            steps: 8,
            falloff_percentage: 100.0,
            tint: Color::transparent(),
            direction: Direction::default(),
        }
    }
}

impl BlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linear header blur: heavy at the top edge, fading over 95%.
    pub fn linear_demo() -> Self {
        Self::new()
            .falloff_percentage(95.0)
            .tint(Color::from_srgb_u8(69, 69, 69, 0))
    }

    /// Radial vignette blur: strongest at the center.
    pub fn radial_demo() -> Self {
        Self::new()
            .strength(32.0)
            .falloff_percentage(85.0)
            .tint(Color::from_srgb_u8(200, 106, 125, 0))
            .radial()
    }

    pub fn strength(mut self, v: f32) -> Self {
        self.strength = v;
        self
    }

    pub fn steps(mut self, n: i32) -> Self {
        self.steps = n;
        self
    }

    pub fn falloff_percentage(mut self, v: f32) -> Self {
        self.falloff_percentage = v;
        self
    }

    pub fn tint(mut self, c: Color) -> Self {
        self.tint = c;
        self
    }

    pub fn direction(mut self, d: Direction) -> Self {
        self.direction = d;
        self
    }

    /// Shorthand for `direction(Direction::Linear(side))`.
    pub fn side(self, side: Side) -> Self {
        self.direction(Direction::Linear(side))
    }

    /// Shorthand for `direction(Direction::Radial)`.
    pub fn radial(self) -> Self {
        self.direction(Direction::Radial)
    }

    /// Layer count actually rendered: `max(1, steps)`.
    #[inline]
    pub fn actual_steps(&self) -> usize {
        self.steps.max(1) as usize
    }

    /// Width of one band in percent: `falloff / actual_steps`.
    #[inline]
    pub fn step_width(&self) -> f32 {
        self.falloff_percentage / self.actual_steps() as f32
    }

    /// Offset where the falloff region begins: `100 - falloff`.
    #[inline]
    pub fn main_percentage(&self) -> f32 {
        100.0 - self.falloff_percentage
    }
}
