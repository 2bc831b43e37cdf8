//! Toroidal grid topology for the relax solvers.
//!
//! The only spatial backend is [`Torus`]: an N×N square grid with a
//! 4-connected neighbourhood and periodic edges. Every solver and kernel
//! resolves neighbours through it, so both backends agree on which
//! physical cell is "north".
//!
//! # Neighbour convention
//!
//! ```text
//!            north (i-1, j)
//! west (i, j-1)   [i, j]   east (i, j+1)
//!            south (i+1, j)
//! ```
//!
//! All offsets wrap modulo N.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod torus;

pub use direction::{Direction, Neighbours};
pub use error::SpaceError;
pub use torus::Torus;
