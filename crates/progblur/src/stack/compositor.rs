use crate::config::BlurConfig;
use crate::direction::Direction;
use crate::mask::{mask_band, Mask};
use crate::paint::Gradient;
use crate::profile::blur_radii;
use crate::tint::tint_gradient;

use super::ZIndex;

/// One backdrop-blur layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layer {
    /// `0` is the most blurred layer.
    pub index: usize,
    /// Backdrop blur radius in pixels.
    pub blur_radius: f32,
    pub mask: Mask,
    pub z: ZIndex,
}

/// Full-bleed tint background.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TintLayer {
    pub gradient: Gradient,
    pub z: ZIndex,
}

/// Declarative result of the layering algorithm.
///
/// `layers` is ordered by index, which is also back-to-front paint order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayerStack {
    pub direction: Direction,
    pub tint: TintLayer,
    pub layers: Vec<Layer>,
}

impl LayerStack {
    /// Equivalent to [`compose`].
    #[inline]
    pub fn build(config: &BlurConfig) -> Self {
        compose(config)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// `true` when the stack has no blur layers; a composed stack always has one.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn blur_radii(&self) -> impl Iterator<Item = f32> + '_ {
        self.layers.iter().map(|l| l.blur_radius)
    }
}

/// Builds the layer stack for `config`.
///
/// Infallible: out-of-range inputs yield degenerate geometry (no blur,
/// bands outside the element) rather than errors.
pub fn compose(config: &BlurConfig) -> LayerStack {
    let n = config.actual_steps();

    if config.steps < 1 {
        log::debug!("step count {} clamped to 1", config.steps);
    }
    if config.strength.is_nan() || config.strength <= 0.0 {
        log::debug!("strength {} yields an unblurred stack", config.strength);
    }
    if !(0.0..=100.0).contains(&config.falloff_percentage) {
        log::debug!(
            "falloff {}% outside [0, 100]; bands extend past the element",
            config.falloff_percentage
        );
    }
    log::debug!(
        "composing {n} layers: strength={}px falloff={}% step={}% direction={:?}",
        config.strength,
        config.falloff_percentage,
        config.step_width(),
        config.direction
    );

    let layers: Vec<Layer> = blur_radii(config.strength, n)
        .into_iter()
        .enumerate()
        .map(|(index, blur_radius)| {
            let mask = mask_band(config.direction, n, config.falloff_percentage, index);
            log::trace!("layer {index}: blur={blur_radius}px stops={:?}", mask.stops);
            Layer { index, blur_radius, mask, z: ZIndex::for_layer(index) }
        })
        .collect();

    LayerStack {
        direction: config.direction,
        tint: TintLayer {
            gradient: tint_gradient(config.direction, config.tint),
            z: ZIndex::TINT,
        },
        layers,
    }
}
