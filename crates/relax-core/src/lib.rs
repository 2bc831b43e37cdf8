//! Core types and traits for the relax solver comparison.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace:
//! iteration and run identifiers, backend and colour-mapping selectors,
//! error types, and the [`FieldReader`] trait through which a solved
//! field is read back.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod error;
pub mod id;
pub mod traits;

pub use backend::{Backend, Channel, ColorMapping};
pub use error::{ParseError, SubstrateError};
pub use id::{IterationId, RunId};
pub use traits::FieldReader;
