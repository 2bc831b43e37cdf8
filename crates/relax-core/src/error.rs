//! Error types shared across the workspace.

use std::error::Error;
use std::fmt;

/// Errors from the accelerated backend's kernel execution facility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubstrateError {
    /// The substrate could not be brought up (e.g. its worker pool
    /// failed to start). Fatal for the run; callers usually fall back
    /// to the software backend.
    Unavailable {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for SubstrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => {
                write!(f, "kernel substrate unavailable: {reason}")
            }
        }
    }
}

impl Error for SubstrateError {}

/// Errors from parsing run selectors out of configuration strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not a known backend name.
    UnknownBackend {
        /// The rejected input.
        value: String,
    },
    /// Not a known colour mapping name.
    UnknownColorMapping {
        /// The rejected input.
        value: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBackend { value } => write!(f, "unknown backend '{value}'"),
            Self::UnknownColorMapping { value } => {
                write!(f, "unknown colour mapping '{value}'")
            }
        }
    }
}

impl Error for ParseError {}
