//! Per-texel kernels run by a [`KernelSubstrate`](crate::KernelSubstrate).
//!
//! A kernel computes one output texel from its index. It never writes
//! anywhere else, so a substrate may evaluate texels in any order or in
//! parallel.

use relax_field::{Carrier, SourceRegions, Texel};
use relax_space::Torus;

use crate::relax;

/// Seeds a carrier from the source regions. Reads no neighbours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitKernel {
    regions: SourceRegions,
}

impl InitKernel {
    /// Kernel over the given regions.
    pub fn new(regions: SourceRegions) -> Self {
        Self { regions }
    }

    /// Initial texel of cell `index`.
    pub fn shade(&self, torus: &Torus, index: usize) -> Texel {
        let (row, col) = torus.coords(index);
        let (x, y) = torus.unit_coords(row, col);
        Texel::from_cell(self.regions.classify_point(x, y))
    }
}

impl Default for InitKernel {
    fn default() -> Self {
        Self::new(SourceRegions::standard())
    }
}

/// One Jacobi iteration in encoded space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateKernel;

impl UpdateKernel {
    /// Next texel of cell `index`, reading only `src`.
    pub fn shade(&self, src: &Carrier, index: usize) -> Texel {
        relax::next_texel(src.texel(index), src.neighbours(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relax_field::{classify, Field};

    #[test]
    fn init_matches_classification() {
        let t = Torus::new(50).unwrap();
        let kernel = InitKernel::default();
        for (r, c) in t.canonical_ordering() {
            let expected = Texel::from_cell(classify(&t, r, c));
            assert_eq!(kernel.shade(&t, t.index(r, c)), expected);
        }
    }

    #[test]
    fn update_keeps_fixed_texels() {
        let t = Torus::new(20).unwrap();
        let src = Carrier::from_field(&Field::classified(t));
        let fixed = t.index(10, 6);
        assert_eq!(UpdateKernel.shade(&src, fixed), src.texel(fixed));
    }
}
