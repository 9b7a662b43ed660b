//! Progressive blur built from a stack of fixed-radius blur layers.
//!
//! Backdrop blur primitives take one radius per element. A blur whose
//! strength varies across an element is approximated here by `n` stacked
//! layers: layer `i` blurs with a geometrically decreasing radius and is
//! masked to a feathered band of the falloff region, each band overlapping
//! its neighbors by one step so the seams blend.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`profile`] | per-layer blur radii |
//! | [`mask`] | per-layer opacity bands |
//! | [`tint`] | tint background gradient |
//! | [`stack`] | `compose`, `LayerStack`, z-order, instance packing |
//! | [`css`] | CSS / HTML rendering of a stack |
//! | [`paint`] | `Color`, gradients, CSS color parsing |
//!
//! # Quick start
//!
//! ```rust
//! use progblur::{compose, BlurConfig, Side};
//!
//! let stack = compose(&BlurConfig::new().strength(64.0).steps(8).side(Side::Top));
//! assert_eq!(stack.layers.len(), 8);
//! println!("{}", stack.to_stylesheet("header-blur"));
//! ```

pub mod config;
pub mod css;
pub mod direction;
pub mod logging;
pub mod mask;
pub mod paint;
pub mod profile;
pub mod stack;
pub mod tint;

pub use config::BlurConfig;
pub use direction::{Direction, Side};
pub use mask::{mask_band, Mask, MaskBand, MaskStop};
pub use paint::{Color, ColorParseError, Gradient, GradientShape, GradientStop};
pub use profile::{blur_radii, blur_radius, MIN_RADIUS};
pub use stack::{compose, Layer, LayerInstance, LayerStack, TintLayer, ZIndex};
pub use tint::tint_gradient;
