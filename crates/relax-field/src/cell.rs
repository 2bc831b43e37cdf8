//! A single grid cell.

/// One cell of a native field: its scalar value and whether it is held
/// fixed (a source cell).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// The diffused scalar, nominally in `[0, 1)`.
    pub value: f64,
    /// `true` for source cells, which are never relaxed.
    pub fixed: bool,
}

impl Cell {
    /// A free cell holding `value`.
    pub const fn free(value: f64) -> Self {
        Self {
            value,
            fixed: false,
        }
    }

    /// A fixed cell pinned at `value`.
    pub const fn fixed(value: f64) -> Self {
        Self { value, fixed: true }
    }
}
