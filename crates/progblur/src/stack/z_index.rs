use core::cmp::Ordering;

/// Stacking order of a layer. Higher values paint on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// The tint background, beneath every blur layer.
    pub const TINT: ZIndex = ZIndex(0);

    /// Blur layer `index` sits at `index + 1`: the most blurred layer right
    /// above the tint, the least blurred one on top.
    #[inline]
    pub fn for_layer(index: usize) -> Self {
        Self(i32::try_from(index).map_or(i32::MAX, |i| i.saturating_add(1)))
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
