//! N×N square grid with 4-connected neighbourhood and periodic edges.

use crate::direction::{Direction, Neighbours};
use crate::error::SpaceError;

/// A two-dimensional square torus.
///
/// Each cell has coordinate `(row, col)` with `0 <= row, col < size`.
/// Neighbours are the four cardinal directions; a neighbour that would
/// fall off an edge wraps to the opposite edge (row/column modulo N),
/// never clamped or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Torus {
    size: usize,
}

impl Torus {
    /// Maximum side length: the cell count must fit in `u32`.
    pub const MAX_SIZE: u32 = u16::MAX as u32;

    /// Create an `size × size` torus.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` for `size == 0` and
    /// `Err(SpaceError::DimensionTooLarge)` above [`Torus::MAX_SIZE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use relax_space::Torus;
    ///
    /// let grid = Torus::new(4).unwrap();
    /// assert_eq!(grid.cell_count(), 16);
    ///
    /// // Row 0 wraps north to the last row.
    /// assert_eq!(grid.neighbours(0, 2).north, (3, 2));
    /// ```
    pub fn new(size: u32) -> Result<Self, SpaceError> {
        if size == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if size > Self::MAX_SIZE {
            return Err(SpaceError::DimensionTooLarge {
                value: size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self {
            size: size as usize,
        })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`N * N`).
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Row-major flat index of `(row, col)`. Coordinates must be in bounds.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Inverse of [`index`](Self::index).
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Bounds-checked [`index`](Self::index).
    pub fn checked_index(&self, row: usize, col: usize) -> Result<usize, SpaceError> {
        if row >= self.size || col >= self.size {
            return Err(SpaceError::CoordOutOfBounds {
                coord: (row, col),
                size: self.size,
            });
        }
        Ok(self.index(row, col))
    }

    /// Map a cell to the unit square: `x = col / N`, `y = row / N`.
    pub fn unit_coords(&self, row: usize, col: usize) -> (f64, f64) {
        let n = self.size as f64;
        (col as f64 / n, row as f64 / n)
    }

    /// Wrap a possibly out-of-range axis value into `[0, N)`.
    pub fn wrap(&self, val: isize) -> usize {
        let n = self.size as isize;
        (((val % n) + n) % n) as usize
    }

    /// The neighbour of `(row, col)` in direction `dir`.
    pub fn step(&self, row: usize, col: usize, dir: Direction) -> (usize, usize) {
        let (dr, dc) = dir.offset();
        (
            self.wrap(row as isize + dr),
            self.wrap(col as isize + dc),
        )
    }

    /// All four toroidal neighbours of `(row, col)`.
    pub fn neighbours(&self, row: usize, col: usize) -> Neighbours<(usize, usize)> {
        Neighbours::from_fn(|dir| self.step(row, col, dir))
    }

    /// Flat indices of the four toroidal neighbours of cell `index`.
    pub fn neighbour_indices(&self, index: usize) -> Neighbours<usize> {
        let (row, col) = self.coords(index);
        self.neighbours(row, col).map(|(r, c)| self.index(r, c))
    }

    /// All cells in row-major order.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |r| (0..self.size).map(move |c| (r, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_returns_error() {
        assert!(matches!(Torus::new(0), Err(SpaceError::EmptySpace)));
    }

    #[test]
    fn new_rejects_oversized() {
        assert!(matches!(
            Torus::new(Torus::MAX_SIZE + 1),
            Err(SpaceError::DimensionTooLarge { .. })
        ));
        assert!(Torus::new(Torus::MAX_SIZE).is_ok());
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let t = Torus::new(5).unwrap();
        let n = t.neighbours(2, 2);
        assert_eq!(n.north, (1, 2));
        assert_eq!(n.south, (3, 2));
        assert_eq!(n.west, (2, 1));
        assert_eq!(n.east, (2, 3));
    }

    #[test]
    fn neighbours_wrap_corner() {
        let t = Torus::new(5).unwrap();
        let n = t.neighbours(0, 0);
        assert_eq!(n.north, (4, 0));
        assert_eq!(n.south, (1, 0));
        assert_eq!(n.west, (0, 4));
        assert_eq!(n.east, (0, 1));
    }

    #[test]
    fn neighbours_wrap_opposite_corner() {
        let t = Torus::new(5).unwrap();
        let n = t.neighbours(4, 4);
        assert_eq!(n.north, (3, 4));
        assert_eq!(n.south, (0, 4));
        assert_eq!(n.west, (4, 3));
        assert_eq!(n.east, (4, 0));
    }

    #[test]
    fn single_cell_wraps_to_self() {
        let t = Torus::new(1).unwrap();
        let n = t.neighbours(0, 0);
        assert!(n.into_array().iter().all(|&c| c == (0, 0)));
    }

    #[test]
    fn neighbour_indices_flat() {
        let t = Torus::new(3).unwrap();
        // (0,0): north=(2,0)=6, east=(0,1)=1, south=(1,0)=3, west=(0,2)=2
        let n = t.neighbour_indices(0);
        assert_eq!(n.into_array(), [6, 1, 3, 2]);
    }

    // ── Index tests ─────────────────────────────────────────────

    #[test]
    fn checked_index_rejects_out_of_bounds() {
        let t = Torus::new(4).unwrap();
        assert_eq!(t.checked_index(3, 3).unwrap(), 15);
        assert!(matches!(
            t.checked_index(4, 0),
            Err(SpaceError::CoordOutOfBounds {
                coord: (4, 0),
                size: 4
            })
        ));
    }

    #[test]
    fn unit_coords_map_column_to_x() {
        let t = Torus::new(10).unwrap();
        assert_eq!(t.unit_coords(5, 3), (0.3, 0.5));
    }

    #[test]
    fn canonical_ordering_is_row_major() {
        let t = Torus::new(3).unwrap();
        let order: Vec<_> = t.canonical_ordering().collect();
        assert_eq!(order.len(), 9);
        for (k, &(r, c)) in order.iter().enumerate() {
            assert_eq!(t.index(r, c), k);
        }
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn row_zero_north_is_last_row(n in 1u32..64, col in 0usize..64) {
            let t = Torus::new(n).unwrap();
            let col = col % t.size();
            prop_assert_eq!(t.neighbours(0, col).north, (t.size() - 1, col));
            prop_assert_eq!(t.neighbours(t.size() - 1, col).south, (0, col));
        }

        #[test]
        fn column_wrap_symmetric(n in 1u32..64, row in 0usize..64) {
            let t = Torus::new(n).unwrap();
            let row = row % t.size();
            prop_assert_eq!(t.neighbours(row, 0).west, (row, t.size() - 1));
            prop_assert_eq!(t.neighbours(row, t.size() - 1).east, (row, 0));
        }

        #[test]
        fn neighbours_symmetric(n in 1u32..32, row in 0usize..32, col in 0usize..32) {
            let t = Torus::new(n).unwrap();
            let (row, col) = (row % t.size(), col % t.size());
            for dir in Direction::ALL {
                let (nr, nc) = t.step(row, col, dir);
                prop_assert_eq!(t.step(nr, nc, dir.opposite()), (row, col));
            }
        }

        #[test]
        fn coords_inverts_index(n in 1u32..64, k in 0usize..4096) {
            let t = Torus::new(n).unwrap();
            let k = k % t.cell_count();
            let (r, c) = t.coords(k);
            prop_assert_eq!(t.index(r, c), k);
        }
    }
}
