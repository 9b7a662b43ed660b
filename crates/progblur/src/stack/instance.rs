use bytemuck::{Pod, Zeroable};

use crate::direction::Side;
use crate::paint::GradientShape;

use super::{Layer, LayerStack};

/// `shape` value for closest-side radial masks. Linear masks store the
/// index of their terminal side in [`Side::ALL`].
pub const SHAPE_RADIAL: u32 = 4;

/// Per-layer instance record for renderers that draw the stack in one
/// instanced pass.
///
/// Layout is `#[repr(C)]`, 48 bytes, no padding. Unused stop slots are
/// zeroed; `stop_count` says how many are live.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LayerInstance {
    /// `[offset_percent, opacity]` pairs, ascending.
    pub stops: [[f32; 2]; 4],
    pub blur_radius: f32,
    pub z: i32,
    pub stop_count: u32,
    pub shape: u32,
}

impl LayerInstance {
    pub fn from_layer(layer: &Layer) -> Self {
        let mut stops = [[0.0; 2]; 4];
        // A trapezoid band never has more than four corners.
        debug_assert!(layer.mask.stops.len() <= stops.len());
        for (slot, stop) in stops.iter_mut().zip(&layer.mask.stops) {
            *slot = [stop.offset, stop.opacity];
        }

        Self {
            stops,
            blur_radius: layer.blur_radius,
            z: layer.z.0,
            stop_count: layer.mask.stops.len().min(4) as u32,
            shape: shape_code(layer.mask.shape),
        }
    }
}

fn shape_code(shape: GradientShape) -> u32 {
    match shape {
        GradientShape::Linear { to } => {
            Side::ALL.iter().position(|&s| s == to).unwrap_or(0) as u32
        }
        GradientShape::RadialClosestSide => SHAPE_RADIAL,
    }
}

impl LayerStack {
    /// Instance records in paint order (back to front).
    pub fn instances(&self) -> Vec<LayerInstance> {
        self.layers.iter().map(LayerInstance::from_layer).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlurConfig;
    use crate::stack::compose;

    #[test]
    fn instance_is_48_bytes() {
        assert_eq!(core::mem::size_of::<LayerInstance>(), 48);
    }

    #[test]
    fn instances_mirror_layers() {
        let stack = compose(&BlurConfig::new().steps(4).falloff_percentage(80.0));
        let instances = stack.instances();
        assert_eq!(instances.len(), 4);

        let counts: Vec<u32> = instances.iter().map(|i| i.stop_count).collect();
        assert_eq!(counts, vec![2, 3, 4, 4]);

        let first = instances[0];
        assert_eq!(first.stops[0], [20.0, 1.0]);
        assert_eq!(first.stops[1], [40.0, 0.0]);
        assert_eq!(first.stops[2], [0.0, 0.0]);
        assert_eq!(first.z, 1);
        // Linear from the top runs toward the bottom.
        assert_eq!(first.shape, 1);
    }

    #[test]
    fn radial_shape_code() {
        let stack = compose(&BlurConfig::new().radial().steps(2));
        assert!(stack.instances().iter().all(|i| i.shape == SHAPE_RADIAL));
    }

    #[test]
    fn casts_to_bytes_for_upload() {
        let instances = compose(&BlurConfig::new()).instances();
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 8 * 48);
    }
}
