//! Layer stack assembly.
//!
//! Responsibilities:
//! - combine radii, mask bands and the tint into one declarative stack
//! - assign z-order (tint at 0, blur layers `1..=n` in index order)
//! - pack the stack into GPU-friendly instance records

mod compositor;
mod instance;
mod z_index;

pub use compositor::{compose, Layer, LayerStack, TintLayer};
pub use instance::{LayerInstance, SHAPE_RADIAL};
pub use z_index::ZIndex;
