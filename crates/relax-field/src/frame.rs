//! Presentation output.

use relax_core::ColorMapping;

use crate::carrier::Carrier;
use crate::field::Field;
use crate::texel::Texel;

/// A snapshot of a field as RGBA texels, ready to be drawn.
///
/// The software backend produces one by encoding its native values; the
/// accelerated backend copies its `src` carrier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Side length N.
    pub size: usize,
    /// Row-major RGBA texels.
    pub texels: Vec<[u8; 4]>,
}

impl Frame {
    /// Encode the current buffer of a native field.
    pub fn from_field(field: &Field) -> Self {
        Self {
            size: field.torus().size(),
            texels: field
                .current()
                .iter()
                .map(|&c| Texel::from_cell(c).rgba())
                .collect(),
        }
    }

    /// Copy an encoded carrier.
    pub fn from_carrier(carrier: &Carrier) -> Self {
        Self {
            size: carrier.torus().size(),
            texels: carrier.texels().iter().map(|t| t.rgba()).collect(),
        }
    }

    /// Map every texel to a display pixel.
    pub fn render(&self, mapping: ColorMapping) -> Vec<[u8; 3]> {
        self.texels.iter().map(|&t| mapping.apply(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use relax_space::Torus;

    #[test]
    fn field_and_carrier_frames_agree() {
        let t = Torus::new(2).unwrap();
        let f = Field::from_cells(
            t,
            vec![Cell::fixed(0.0), Cell::free(0.5), Cell::free(0.25), Cell::fixed(0.75)],
        )
        .unwrap();
        let a = Frame::from_field(&f);
        let b = Frame::from_carrier(&Carrier::from_field(&f));
        assert_eq!(a, b);
        assert_eq!(a.size, 2);
    }

    #[test]
    fn render_applies_mapping() {
        let frame = Frame {
            size: 1,
            texels: vec![[9, 8, 7, 255]],
        };
        assert_eq!(frame.render(ColorMapping::Rgb), vec![[9, 8, 7]]);
        assert_eq!(frame.render(ColorMapping::GreenGrey), vec![[8, 8, 8]]);
    }
}
