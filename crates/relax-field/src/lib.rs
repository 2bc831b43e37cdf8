//! Field model and encoded storage for the relax solvers.
//!
//! Two storage forms describe the same N×N field:
//!
//! - [`Field`]: native `f64` cells, double-buffered, used by the software
//!   solver.
//! - [`CarrierPair`]: byte-encoded [`Texel`] buffers in ping-pong, used by
//!   the accelerated solver. Values are packed into three base-255 tiers by
//!   the [`codec`]; the fourth byte carries the fixed flag.
//!
//! Both are seeded by [`classify`], which places every cell inside one of
//! the two [`SourceRegion`]s or leaves it free, and both can be turned into
//! a presentation [`Frame`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod carrier;
pub mod cell;
pub mod codec;
pub mod error;
pub mod field;
pub mod frame;
pub mod region;
pub mod texel;

pub use carrier::{Carrier, CarrierPair};
pub use cell::Cell;
pub use error::FieldError;
pub use field::Field;
pub use frame::Frame;
pub use region::{
    classify, SourceRegion, SourceRegions, FREE_INITIAL, SOURCE_HIGH, SOURCE_RADIUS,
};
pub use texel::Texel;
