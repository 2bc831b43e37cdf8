//! Run selectors: which backend solves the field, and how a solved
//! carrier is mapped to display colours.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Execution strategy for a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Sequential scalar sweep over native `f64` storage.
    #[default]
    Software,
    /// Per-texel kernel over byte-encoded carriers, dispatched on a
    /// kernel substrate.
    Accelerated,
}

impl Backend {
    /// Short label used in reports and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::Accelerated => "accelerated",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Backend {
    type Err = ParseError;

    /// Accepts `software`/`cpu` and `accelerated`/`gpu`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "software" | "cpu" => Ok(Self::Software),
            "accelerated" | "gpu" => Ok(Self::Accelerated),
            _ => Err(ParseError::UnknownBackend {
                value: s.to_string(),
            }),
        }
    }
}

/// Source of one output colour channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Constant zero.
    Zero,
    /// Tier 0 (coarse) byte of the texel.
    R,
    /// Tier 1 (medium) byte of the texel.
    G,
    /// Tier 2 (fine) byte of the texel.
    B,
}

impl Channel {
    fn pick(self, rgba: [u8; 4]) -> u8 {
        match self {
            Self::Zero => 0,
            Self::R => rgba[0],
            Self::G => rgba[1],
            Self::B => rgba[2],
        }
    }
}

/// How an encoded texel is shown on the presentation surface.
///
/// Each variant resolves to one row of a fixed formula table; nothing is
/// assembled at render time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMapping {
    /// All three tiers as RGB.
    #[default]
    Rgb,
    /// Coarse tier in red only.
    Red,
    /// Coarse tier as grey.
    RedGrey,
    /// Medium tier in green only.
    Green,
    /// Medium tier as grey.
    GreenGrey,
    /// Fine tier in blue only.
    Blue,
    /// Fine tier as grey.
    BlueGrey,
}

impl ColorMapping {
    /// Every mapping, in selector order.
    pub const ALL: [ColorMapping; 7] = [
        Self::Rgb,
        Self::Red,
        Self::RedGrey,
        Self::Green,
        Self::GreenGrey,
        Self::Blue,
        Self::BlueGrey,
    ];

    const TABLE: [[Channel; 3]; 7] = [
        [Channel::R, Channel::G, Channel::B],
        [Channel::R, Channel::Zero, Channel::Zero],
        [Channel::R, Channel::R, Channel::R],
        [Channel::Zero, Channel::G, Channel::Zero],
        [Channel::G, Channel::G, Channel::G],
        [Channel::Zero, Channel::Zero, Channel::B],
        [Channel::B, Channel::B, Channel::B],
    ];

    /// The output channel formula for this mapping.
    pub fn formula(self) -> [Channel; 3] {
        Self::TABLE[self as usize]
    }

    /// Map one RGBA texel to an RGB display pixel. Alpha is ignored.
    pub fn apply(self, rgba: [u8; 4]) -> [u8; 3] {
        let [r, g, b] = self.formula();
        [r.pick(rgba), g.pick(rgba), b.pick(rgba)]
    }

    /// Selector string, as accepted by [`FromStr`].
    pub fn label(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Red => "red",
            Self::RedGrey => "rgrey",
            Self::Green => "green",
            Self::GreenGrey => "ggrey",
            Self::Blue => "blue",
            Self::BlueGrey => "bgrey",
        }
    }
}

impl fmt::Display for ColorMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorMapping {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.label() == wanted)
            .ok_or_else(|| ParseError::UnknownColorMapping {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXEL: [u8; 4] = [10, 20, 30, 255];

    #[test]
    fn backend_parses_aliases() {
        assert_eq!("cpu".parse::<Backend>().unwrap(), Backend::Software);
        assert_eq!("GPU".parse::<Backend>().unwrap(), Backend::Accelerated);
        assert_eq!(
            " accelerated ".parse::<Backend>().unwrap(),
            Backend::Accelerated
        );
        assert!(matches!(
            "fpga".parse::<Backend>(),
            Err(ParseError::UnknownBackend { .. })
        ));
    }

    #[test]
    fn mapping_table_matches_formulas() {
        assert_eq!(ColorMapping::Rgb.apply(TEXEL), [10, 20, 30]);
        assert_eq!(ColorMapping::Red.apply(TEXEL), [10, 0, 0]);
        assert_eq!(ColorMapping::RedGrey.apply(TEXEL), [10, 10, 10]);
        assert_eq!(ColorMapping::Green.apply(TEXEL), [0, 20, 0]);
        assert_eq!(ColorMapping::GreenGrey.apply(TEXEL), [20, 20, 20]);
        assert_eq!(ColorMapping::Blue.apply(TEXEL), [0, 0, 30]);
        assert_eq!(ColorMapping::BlueGrey.apply(TEXEL), [30, 30, 30]);
    }

    #[test]
    fn mapping_labels_round_trip() {
        for m in ColorMapping::ALL {
            assert_eq!(m.label().parse::<ColorMapping>().unwrap(), m);
        }
        assert!("purple".parse::<ColorMapping>().is_err());
    }

    #[test]
    fn defaults() {
        assert_eq!(Backend::default(), Backend::Software);
        assert_eq!(ColorMapping::default(), ColorMapping::Rgb);
    }
}
