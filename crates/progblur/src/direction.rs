use core::fmt;

/// Element edge a linear blur is anchored to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The edge the gradient runs toward.
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// CSS keyword (`top`, `bottom`, ...).
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn parse(s: &str) -> Option<Side> {
        Side::ALL.into_iter().find(|side| side.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis along which blur intensity varies.
///
/// - `Linear(side)`: strongest at `side`, fading toward `side.opposite()`.
/// - `Radial`: strongest at the center, fading out to the closest side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Linear(Side),
    Radial,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Linear(Side::default())
    }
}

impl Direction {
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            Direction::Linear(side) => Some(side),
            Direction::Radial => None,
        }
    }
}
