//! Source regions and initial cell classification.

use relax_space::Torus;

use crate::cell::Cell;

/// Value held by the high source. Kept just below 1 so the three-tier
/// codec never sees a value whose fractional part wraps to zero.
pub const SOURCE_HIGH: f64 = 0.999_999_999_999;

/// Starting value of every free cell.
pub const FREE_INITIAL: f64 = 0.5;

/// Radius shared by both source circles, in unit-square coordinates.
pub const SOURCE_RADIUS: f64 = 0.05;

/// A circular region of fixed cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceRegion {
    /// Centre `(x, y)` in the unit square.
    pub center: (f64, f64),
    /// Circle radius.
    pub radius: f64,
    /// Value held by every cell inside the circle.
    pub value: f64,
}

impl SourceRegion {
    /// Whether `(x, y)` lies strictly inside the circle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center.0;
        let dy = y - self.center.1;
        dx * dx + dy * dy < self.radius * self.radius
    }
}

/// The two source circles, tested in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceRegions {
    /// Region A, tested first.
    pub high: SourceRegion,
    /// Region B.
    pub low: SourceRegion,
}

impl SourceRegions {
    /// Region A at `(0.3, 0.5)` held at [`SOURCE_HIGH`] and region B at
    /// `(0.7, 0.5)` held at `0.0`.
    pub const fn standard() -> Self {
        Self {
            high: SourceRegion {
                center: (0.3, 0.5),
                radius: SOURCE_RADIUS,
                value: SOURCE_HIGH,
            },
            low: SourceRegion {
                center: (0.7, 0.5),
                radius: SOURCE_RADIUS,
                value: 0.0,
            },
        }
    }

    /// Classify the point `(x, y)`. A wins over B if both contain it.
    pub fn classify_point(&self, x: f64, y: f64) -> Cell {
        if self.high.contains(x, y) {
            Cell::fixed(self.high.value)
        } else if self.low.contains(x, y) {
            Cell::fixed(self.low.value)
        } else {
            Cell::free(FREE_INITIAL)
        }
    }
}

impl Default for SourceRegions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Initial state of cell `(row, col)` of `torus` against the standard
/// regions, using `x = col / N`, `y = row / N`.
pub fn classify(torus: &Torus, row: usize, col: usize) -> Cell {
    let (x, y) = torus.unit_coords(row, col);
    SourceRegions::standard().classify_point(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centres_are_fixed() {
        let t = Torus::new(100).unwrap();
        assert_eq!(classify(&t, 50, 30), Cell::fixed(SOURCE_HIGH));
        assert_eq!(classify(&t, 50, 70), Cell::fixed(0.0));
        assert_eq!(classify(&t, 0, 0), Cell::free(FREE_INITIAL));
    }

    #[test]
    fn boundary_is_exclusive() {
        // Dyadic values keep the distance comparison exact.
        let region = SourceRegion {
            center: (0.5, 0.5),
            radius: 0.25,
            value: 1.0,
        };
        assert!(!region.contains(0.75, 0.5));
        assert!(!region.contains(0.5, 0.25));
        assert!(region.contains(0.7, 0.5));
    }

    #[test]
    fn high_region_tested_first() {
        let overlapping = SourceRegions {
            high: SourceRegion {
                center: (0.5, 0.5),
                radius: 0.2,
                value: 0.9,
            },
            low: SourceRegion {
                center: (0.5, 0.5),
                radius: 0.2,
                value: 0.1,
            },
        };
        assert_eq!(overlapping.classify_point(0.5, 0.5), Cell::fixed(0.9));
    }

    #[test]
    fn fixed_iff_inside_either_region() {
        let t = Torus::new(64).unwrap();
        let regions = SourceRegions::standard();
        for (r, c) in t.canonical_ordering() {
            let (x, y) = t.unit_coords(r, c);
            let inside = regions.high.contains(x, y) || regions.low.contains(x, y);
            assert_eq!(classify(&t, r, c).fixed, inside, "cell ({r}, {c})");
        }
    }

    #[test]
    fn tiny_grid_has_no_sources() {
        // At N=2 the sample points are 0 and 0.5; neither is within 0.05
        // of a centre, so every cell is free.
        let t = Torus::new(2).unwrap();
        assert!(t.canonical_ordering().all(|(r, c)| !classify(&t, r, c).fixed));
    }
}
