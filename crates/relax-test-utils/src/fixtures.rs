//! Field fixtures and independent reference sweeps.
//!
//! - [`forced_corner_field`]: 4×4 torus with two fixed corners.
//! - [`uniform_free_field`]: every cell free at one value.
//! - [`reference_sweep`] / [`shuffled_sweep`]: one Jacobi sweep computed
//!   outside any solver, in row-major or seeded random order.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use relax_field::{Cell, Field};
use relax_solver::relax::relax_cell;
use relax_space::Torus;

/// Value of the fixed `(0, 0)` corner in [`forced_corner_field`].
pub const HOT_CORNER: f64 = 1.0;
/// Value of the fixed `(3, 3)` corner in [`forced_corner_field`].
pub const COLD_CORNER: f64 = 0.0;

/// A 4×4 torus, all cells free at 0.5 except `(0, 0)` fixed at 1.0 and
/// `(3, 3)` fixed at 0.0.
pub fn forced_corner_field() -> Field {
    let torus = Torus::new(4).expect("4 is a valid size");
    let mut cells = vec![Cell::free(0.5); torus.cell_count()];
    cells[torus.index(0, 0)] = Cell::fixed(HOT_CORNER);
    cells[torus.index(3, 3)] = Cell::fixed(COLD_CORNER);
    Field::from_cells(torus, cells).expect("cell count matches torus")
}

/// An `size × size` torus with every cell free at `value`.
pub fn uniform_free_field(size: u32, value: f64) -> Field {
    let torus = Torus::new(size).expect("fixture size must be valid");
    Field::from_cells(torus, vec![Cell::free(value); torus.cell_count()])
        .expect("cell count matches torus")
}

/// One sweep of `field`'s current buffer, visiting cells row-major.
pub fn reference_sweep(field: &Field) -> Vec<Cell> {
    let torus = field.torus();
    (0..torus.cell_count())
        .map(|i| relax_cell(torus, field.current(), i))
        .collect()
}

/// One sweep of `field`'s current buffer, visiting cells in an order
/// shuffled by a `ChaCha8Rng` seeded with `seed`.
pub fn shuffled_sweep(field: &Field, seed: u64) -> Vec<Cell> {
    let torus = field.torus();
    let mut order: Vec<usize> = (0..torus.cell_count()).collect();
    order.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

    let mut out = vec![Cell::free(f64::NAN); torus.cell_count()];
    for i in order {
        out[i] = relax_cell(torus, field.current(), i);
    }
    out
}
