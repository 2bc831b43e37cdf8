//! Four-byte encoded cell.

use crate::cell::Cell;
use crate::codec;

/// One cell of an encoded carrier: `[c0, c1, c2, a]`.
///
/// `c0..c2` are the codec tiers of the value. `a` is the fixed flag,
/// 255 for source cells and 0 for free cells; any non-zero alpha reads
/// as fixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Texel(pub [u8; 4]);

impl Texel {
    /// Alpha byte of a fixed texel.
    pub const FIXED: u8 = 255;
    /// Alpha byte of a free texel.
    pub const FREE: u8 = 0;

    /// Encode `value` with the given fixed flag.
    pub fn encode(value: f64, fixed: bool) -> Self {
        Self::from_tiers(codec::encode(value), fixed)
    }

    /// Assemble a texel from already-encoded tiers.
    pub fn from_tiers(tiers: [u8; 3], fixed: bool) -> Self {
        let [c0, c1, c2] = tiers;
        let a = if fixed { Self::FIXED } else { Self::FREE };
        Self([c0, c1, c2, a])
    }

    /// Encode a native cell.
    pub fn from_cell(cell: Cell) -> Self {
        Self::encode(cell.value, cell.fixed)
    }

    /// The three codec tiers.
    pub fn tiers(self) -> [u8; 3] {
        let [c0, c1, c2, _] = self.0;
        [c0, c1, c2]
    }

    /// Decoded value.
    pub fn value(self) -> f64 {
        codec::decode(self.tiers())
    }

    /// Whether this texel belongs to a source region.
    pub fn is_fixed(self) -> bool {
        self.0[3] != Self::FREE
    }

    /// Raw RGBA bytes.
    pub fn rgba(self) -> [u8; 4] {
        self.0
    }
}

impl From<Cell> for Texel {
    fn from(cell: Cell) -> Self {
        Self::from_cell(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_lives_in_alpha() {
        let fixed = Texel::encode(0.0, true);
        let free = Texel::encode(0.0, false);
        assert_eq!(fixed.0, [0, 0, 0, 255]);
        assert_eq!(free.0, [0, 0, 0, 0]);
        assert!(fixed.is_fixed());
        assert!(!free.is_fixed());
        assert!(Texel([0, 0, 0, 1]).is_fixed());
    }

    #[test]
    fn value_decodes_tiers() {
        let t = Texel::from_cell(Cell::free(0.5));
        assert_eq!(t.tiers(), [127, 127, 128]);
        assert!((t.value() - 0.5).abs() <= codec::MAX_ERROR + 1e-12);
    }
}
