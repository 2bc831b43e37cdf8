//! Three-tier base-255 scalar codec.
//!
//! A value `v` in `[0, 1)` is split into three byte tiers so that
//!
//! ```text
//! decode([c0, c1, c2]) = c0/255 + c1/255² + c2/255³
//! ```
//!
//! recovers `v` to within half a step of the finest tier, `1 / (2·255³)`.
//! The encode side takes the fractional parts of `v` scaled by
//! `(1, 255, 255²)` and subtracts from each tier what the next finer tier
//! will carry.

use crate::region::SOURCE_HIGH;

const BASE: f64 = 255.0;
const SHIFT: [f64; 3] = [1.0, BASE, BASE * BASE];

/// Largest absolute round-trip error for inputs in `[0, SOURCE_HIGH]`.
pub const MAX_ERROR: f64 = 0.5 / (BASE * BASE * BASE);

/// Pack `v` into three byte tiers.
///
/// Inputs are clamped to `[0, SOURCE_HIGH]` first and NaN encodes as
/// zero, so the fractional decomposition never wraps at 1.
///
/// ```
/// use relax_field::codec::{decode, encode};
///
/// let bytes = encode(0.5);
/// assert!((decode(bytes) - 0.5).abs() < 1.0 / (255.0 * 255.0));
/// ```
pub fn encode(v: f64) -> [u8; 3] {
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, SOURCE_HIGH) };
    let raw = SHIFT.map(|s| frac(s * v));
    [
        to_byte(BASE * (raw[0] - raw[1] / BASE)),
        to_byte(BASE * (raw[1] - raw[2] / BASE)),
        to_byte(BASE * raw[2]),
    ]
}

/// Recover the scalar from three byte tiers.
pub fn decode(tiers: [u8; 3]) -> f64 {
    let [c0, c1, c2] = tiers.map(f64::from);
    c0 / BASE + c1 / (BASE * BASE) + c2 / (BASE * BASE * BASE)
}

fn frac(x: f64) -> f64 {
    x - x.floor()
}

fn to_byte(x: f64) -> u8 {
    // Always within [0, 255] after the clamp above; the cast saturates.
    x.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn half_encodes_to_mid_tiers() {
        assert_eq!(encode(0.5), [127, 127, 128]);
    }

    #[test]
    fn zero_and_high_source() {
        assert_eq!(encode(0.0), [0, 0, 0]);
        assert_eq!(decode([0, 0, 0]), 0.0);
        assert_eq!(encode(SOURCE_HIGH), [254, 254, 255]);
        assert!((decode(encode(SOURCE_HIGH)) - SOURCE_HIGH).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(encode(-0.25), encode(0.0));
        assert_eq!(encode(1.0), encode(SOURCE_HIGH));
        assert_eq!(encode(7.5), encode(SOURCE_HIGH));
        assert_eq!(encode(f64::NAN), [0, 0, 0]);
    }

    #[test]
    fn thousandths_round_trip_below_coarse_step() {
        for k in 0..1000 {
            let v = k as f64 / 1000.0;
            let err = (decode(encode(v)) - v).abs();
            assert!(err < 1.0 / (BASE * BASE), "v={v} err={err}");
        }
    }

    proptest! {
        #[test]
        fn round_trip_within_half_fine_step(v in 0.0f64..SOURCE_HIGH) {
            let err = (decode(encode(v)) - v).abs();
            prop_assert!(err <= MAX_ERROR + 1e-12, "v={} err={}", v, err);
        }

        #[test]
        fn decode_stays_in_unit_interval(v in -1.0f64..2.0) {
            let d = decode(encode(v));
            prop_assert!((0.0..=1.0 + 1e-12).contains(&d));
        }
    }
}
