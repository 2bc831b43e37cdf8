//! Error types for field construction.

use std::error::Error;
use std::fmt;

/// Errors from building a field or carrier from explicit data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The supplied buffer does not hold exactly `N * N` entries.
    CellCountMismatch {
        /// Cells required by the torus.
        expected: usize,
        /// Cells supplied.
        actual: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "cell count mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl Error for FieldError {}
