//! Error types for space construction and coordinate checks.

use std::fmt;

/// Errors arising from space construction or coordinate lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the space.
    CoordOutOfBounds {
        /// The offending `(row, col)`.
        coord: (usize, usize),
        /// Grid side length.
        size: usize,
    },
    /// Attempted to construct a space with zero cells.
    EmptySpace,
    /// The requested side length exceeds the supported maximum.
    DimensionTooLarge {
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, size } => {
                write!(f, "coordinate {coord:?} out of bounds: [0, {size}) x [0, {size})")
            }
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid size {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
