//! The relaxation rule shared by every backend.
//!
//! A free cell takes the unweighted mean of its four toroidal neighbours
//! from the previous iteration. A fixed cell keeps its value. There is no
//! clamping; with sources in `[0, 1)` the maximum principle keeps every
//! free value in range.

use relax_field::{Cell, Texel};
use relax_space::{Neighbours, Torus};

/// Unweighted mean of four neighbour values, summed north, east, south,
/// west.
pub fn mean4(n: Neighbours<f64>) -> f64 {
    (n.north + n.east + n.south + n.west) / 4.0
}

/// Next value of `cell` given its neighbours' previous values.
pub fn next_value(cell: Cell, neighbours: Neighbours<f64>) -> f64 {
    if cell.fixed {
        cell.value
    } else {
        mean4(neighbours)
    }
}

/// Next state of `cell`; the fixed flag is carried unchanged.
pub fn next_cell(cell: Cell, neighbours: Neighbours<f64>) -> Cell {
    Cell {
        value: next_value(cell, neighbours),
        fixed: cell.fixed,
    }
}

/// Encoded-space variant of [`next_value`].
///
/// A fixed texel passes through byte-identical. A free texel decodes its
/// neighbours, averages in real space and re-encodes with `a = 0`.
pub fn next_texel(texel: Texel, neighbours: Neighbours<Texel>) -> Texel {
    if texel.is_fixed() {
        return texel;
    }
    Texel::encode(mean4(neighbours.map(Texel::value)), false)
}

/// Relax cell `index` of `src`.
pub fn relax_cell(torus: &Torus, src: &[Cell], index: usize) -> Cell {
    let neighbours = torus.neighbour_indices(index).map(|k| src[k].value);
    next_cell(src[index], neighbours)
}

/// One full Jacobi sweep in row-major order: every cell of `dst` is
/// written from reads of `src` only.
pub fn sweep(torus: &Torus, src: &[Cell], dst: &mut [Cell]) {
    for (index, out) in dst.iter_mut().enumerate() {
        *out = relax_cell(torus, src, index);
    }
}
