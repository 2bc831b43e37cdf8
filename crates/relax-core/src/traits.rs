//! Read access to a solved field, independent of its storage.

/// Read-only view of an N×N scalar field.
///
/// Implemented by native double-buffered fields and by encoded carriers,
/// so callers (presentation, backend comparisons) can read either without
/// knowing how values are stored. Indices are row-major: `i * N + j`.
pub trait FieldReader {
    /// Grid side length N.
    fn grid_size(&self) -> usize;

    /// Decoded value of the cell at flat `index`.
    fn value_at(&self, index: usize) -> f64;

    /// Whether the cell at flat `index` is a fixed (source) cell.
    fn is_fixed(&self, index: usize) -> bool;

    /// Total number of cells (`N * N`).
    fn cell_count(&self) -> usize {
        self.grid_size() * self.grid_size()
    }

    /// All values in row-major order.
    fn values(&self) -> Vec<f64> {
        (0..self.cell_count()).map(|i| self.value_at(i)).collect()
    }
}
