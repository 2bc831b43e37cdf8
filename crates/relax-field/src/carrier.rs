//! Encoded carriers and their ping-pong pair.

use relax_core::FieldReader;
use relax_space::{Neighbours, Torus};

use crate::error::FieldError;
use crate::field::Field;
use crate::texel::Texel;

/// An N×N buffer of [`Texel`]s, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carrier {
    torus: Torus,
    texels: Vec<Texel>,
}

impl Carrier {
    /// A carrier of all-zero texels (free, value 0).
    pub fn blank(torus: Torus) -> Self {
        Self {
            texels: vec![Texel::default(); torus.cell_count()],
            torus,
        }
    }

    /// Build a carrier from explicit texels in row-major order.
    pub fn from_texels(torus: Torus, texels: Vec<Texel>) -> Result<Self, FieldError> {
        if texels.len() != torus.cell_count() {
            return Err(FieldError::CellCountMismatch {
                expected: torus.cell_count(),
                actual: texels.len(),
            });
        }
        Ok(Self { torus, texels })
    }

    /// Encode the current buffer of a native field.
    pub fn from_field(field: &Field) -> Self {
        Self {
            torus: *field.torus(),
            texels: field.current().iter().map(|&c| Texel::from_cell(c)).collect(),
        }
    }

    /// Grid topology.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// All texels, row-major.
    pub fn texels(&self) -> &[Texel] {
        &self.texels
    }

    /// Mutable texels, row-major.
    pub fn texels_mut(&mut self) -> &mut [Texel] {
        &mut self.texels
    }

    /// Texel at flat `index`.
    pub fn texel(&self, index: usize) -> Texel {
        self.texels[index]
    }

    /// The four toroidal neighbours of cell `index`.
    pub fn neighbours(&self, index: usize) -> Neighbours<Texel> {
        self.torus.neighbour_indices(index).map(|n| self.texels[n])
    }
}

impl FieldReader for Carrier {
    fn grid_size(&self) -> usize {
        self.torus.size()
    }

    fn value_at(&self, index: usize) -> f64 {
        self.texels[index].value()
    }

    fn is_fixed(&self, index: usize) -> bool {
        self.texels[index].is_fixed()
    }
}

/// Two carriers in ping-pong: kernels read `src` and write `dst`, then
/// [`swap`](CarrierPair::swap) exchanges them.
#[derive(Clone, Debug)]
pub struct CarrierPair {
    carriers: [Carrier; 2],
    /// Which carrier is `src` (false = 0, true = 1).
    flipped: bool,
}

impl CarrierPair {
    /// A pair of blank carriers over `torus`.
    pub fn blank(torus: Torus) -> Self {
        Self {
            carriers: [Carrier::blank(torus), Carrier::blank(torus)],
            flipped: false,
        }
    }

    /// A pair whose `src` and `dst` both start as `seed`.
    pub fn seeded(seed: Carrier) -> Self {
        Self {
            carriers: [seed.clone(), seed],
            flipped: false,
        }
    }

    /// The carrier holding the latest completed iteration.
    pub fn src(&self) -> &Carrier {
        &self.carriers[usize::from(self.flipped)]
    }

    /// Mutable access to `src`, for initialization passes.
    pub fn src_mut(&mut self) -> &mut Carrier {
        &mut self.carriers[usize::from(self.flipped)]
    }

    /// Borrow `src` for reading and `dst` for writing.
    pub fn split_mut(&mut self) -> (&Carrier, &mut Carrier) {
        let [a, b] = &mut self.carriers;
        if self.flipped {
            (&*b, a)
        } else {
            (&*a, b)
        }
    }

    /// Exchange `src` and `dst`.
    pub fn swap(&mut self) {
        self.flipped = !self.flipped;
    }
}
