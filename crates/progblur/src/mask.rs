//! Feathered opacity bands that restrict each layer's blur to one slice of
//! the falloff region.
//!
//! Every band is the same trapezoid, anchored at `main + k * step` for
//! `k = i - 2 ..= i + 1`:
//!
//! ```text
//! opacity 1 |        ___________
//!           |       /           \
//! opacity 0 |______/             \______
//!                 i-2   i-1    i    i+1      (in steps past `main`)
//! ```
//!
//! Corners that would land before the start of the falloff region are
//! dropped. The outermost bands (`i = 0` and `i = 1`) therefore lose their
//! leading ramp and stay opaque all the way back to the origin, since the
//! first stop's opacity pads toward 0%.

use crate::direction::Direction;
use crate::paint::GradientShape;

/// One mask gradient stop. `offset` is a percentage along the axis.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MaskStop {
    pub offset: f32,
    /// Either `0.0` (blur hidden) or `1.0` (blur shown).
    pub opacity: f32,
}

impl MaskStop {
    #[inline]
    pub const fn opaque(offset: f32) -> Self {
        Self { offset, opacity: 1.0 }
    }

    #[inline]
    pub const fn transparent(offset: f32) -> Self {
        Self { offset, opacity: 0.0 }
    }
}

/// Band geometry of one layer, in percent along the axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaskBand {
    pub index: usize,
    /// `100 - falloff`: where the falloff region begins.
    pub main: f32,
    /// `falloff / actual_steps`: width of one band.
    pub step: f32,
}

// Trapezoid corners relative to the layer index, with the stop each one makes.
const CORNERS: [(isize, fn(f32) -> MaskStop); 4] = [
    (-2, MaskStop::transparent),
    (-1, MaskStop::opaque),
    (0, MaskStop::opaque),
    (1, MaskStop::transparent),
];

impl MaskBand {
    /// Band of layer `index` in a stack of `actual_steps` layers.
    pub fn new(actual_steps: usize, falloff_percentage: f32, index: usize) -> Self {
        let n = actual_steps.max(1);
        debug_assert!(index < n, "layer index {index} out of range for {n} layers");
        Self {
            index,
            main: 100.0 - falloff_percentage,
            step: falloff_percentage / n as f32,
        }
    }

    /// Offset of trapezoid corner `k` steps past `main`. `None` before `main`.
    #[inline]
    fn corner(&self, k: isize) -> Option<f32> {
        (k >= 0).then(|| self.main + k as f32 * self.step)
    }

    /// Stops in ascending offset order.
    pub fn stops(&self) -> Vec<MaskStop> {
        let i = self.index as isize;
        CORNERS
            .iter()
            .filter_map(|&(dk, stop)| self.corner(i + dk).map(stop))
            .collect()
    }

    /// Start and end of the leading ramp; `None` for bands that are open
    /// toward the origin.
    pub fn fade_in(&self) -> Option<(f32, f32)> {
        let i = self.index as isize;
        Some((self.corner(i - 2)?, self.corner(i - 1)?))
    }

    /// Fully opaque span. Zero width for layer 0.
    pub fn plateau(&self) -> (f32, f32) {
        let i = self.index as isize;
        let end = self.main + i as f32 * self.step;
        (self.corner(i - 1).unwrap_or(self.main), end)
    }

    /// Start and end of the trailing ramp.
    pub fn fade_out(&self) -> (f32, f32) {
        let i = self.index as f32;
        (self.main + i * self.step, self.main + (i + 1.0) * self.step)
    }
}

/// Mask gradient for one layer: band stops placed along `shape`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mask {
    pub shape: GradientShape,
    pub stops: Vec<MaskStop>,
}

/// Mask of layer `index`.
///
/// Stop offsets depend only on `(actual_steps, falloff_percentage, index)`;
/// `direction` only chooses how they are laid out (linear axis toward the
/// opposite side, or closest-side rings).
pub fn mask_band(
    direction: Direction,
    actual_steps: usize,
    falloff_percentage: f32,
    index: usize,
) -> Mask {
    Mask {
        shape: GradientShape::from(direction),
        stops: MaskBand::new(actual_steps, falloff_percentage, index).stops(),
    }
}
