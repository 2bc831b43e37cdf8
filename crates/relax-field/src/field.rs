//! Double-buffered native field.
//!
//! [`Field`] keeps two same-shaped cell buffers. One is *current* (read by
//! a sweep and by presentation), the other is *next* (written by a sweep).
//! [`Field::swap`] flips the roles by toggling an index:
//!
//! ```text
//! buffers[0]  ←─── current (even iterations) / next (odd)
//! buffers[1]  ←─── next (even iterations) / current (odd)
//! ```

use relax_core::FieldReader;
use relax_space::{SpaceError, Torus};

use crate::cell::Cell;
use crate::error::FieldError;
use crate::region::classify;

/// An N×N field of [`Cell`]s with current/next buffers.
#[derive(Clone, Debug)]
pub struct Field {
    torus: Torus,
    buffers: [Vec<Cell>; 2],
    /// Index of the current buffer (0 or 1).
    current: usize,
}

impl Field {
    /// Seed both buffers from [`classify`] over every cell of `torus`.
    pub fn classified(torus: Torus) -> Self {
        let cells: Vec<Cell> = torus
            .canonical_ordering()
            .map(|(r, c)| classify(&torus, r, c))
            .collect();
        Self::seeded(torus, cells)
    }

    /// Build a field from explicit cells in row-major order.
    ///
    /// Returns `Err(FieldError::CellCountMismatch)` unless `cells` holds
    /// exactly `N * N` entries.
    pub fn from_cells(torus: Torus, cells: Vec<Cell>) -> Result<Self, FieldError> {
        if cells.len() != torus.cell_count() {
            return Err(FieldError::CellCountMismatch {
                expected: torus.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self::seeded(torus, cells))
    }

    fn seeded(torus: Torus, cells: Vec<Cell>) -> Self {
        Self {
            torus,
            buffers: [cells.clone(), cells],
            current: 0,
        }
    }

    /// Grid topology.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Cells of the current buffer, row-major.
    pub fn current(&self) -> &[Cell] {
        &self.buffers[self.current]
    }

    /// Current cell at `(row, col)`. Coordinates must be in bounds.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.current()[self.torus.index(row, col)]
    }

    /// Current cell at `(row, col)`, or `CoordOutOfBounds` when either
    /// coordinate is `>= N`.
    pub fn checked_cell(&self, row: usize, col: usize) -> Result<Cell, SpaceError> {
        let index = self.torus.checked_index(row, col)?;
        Ok(self.current()[index])
    }

    /// Current values, row-major.
    pub fn values(&self) -> Vec<f64> {
        self.current().iter().map(|c| c.value).collect()
    }

    /// Borrow the current buffer for reading and the next buffer for
    /// writing at the same time.
    pub fn split_mut(&mut self) -> (&[Cell], &mut [Cell]) {
        let [a, b] = &mut self.buffers;
        if self.current == 0 {
            (a.as_slice(), b.as_mut_slice())
        } else {
            (b.as_slice(), a.as_mut_slice())
        }
    }

    /// Exchange the current and next roles. O(1), no copy.
    pub fn swap(&mut self) {
        self.current ^= 1;
    }
}

impl FieldReader for Field {
    fn grid_size(&self) -> usize {
        self.torus.size()
    }

    fn value_at(&self, index: usize) -> f64 {
        self.current()[index].value
    }

    fn is_fixed(&self, index: usize) -> bool {
        self.current()[index].fixed
    }
}
