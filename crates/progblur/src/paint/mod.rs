//! Paint model for tints and gradients.
//!
//! Scope:
//! - color representation (straight-alpha sRGB, as CSS expects it)
//! - CSS color parsing for tint strings
//! - gradient descriptions consumed by the rendering surface

pub mod color;
pub mod gradient;
mod parse;

pub use color::Color;
pub use gradient::{Gradient, GradientShape, GradientStop};
pub use parse::ColorParseError;
