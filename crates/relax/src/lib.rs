//! Relax: software vs. accelerated Jacobi relaxation on a periodic grid.
//!
//! Solves the steady-state Laplace problem on an N×N torus with two
//! circular Dirichlet sources (one held just below 1, one at 0), using
//! either a sequential scalar sweep or a texel-encoded data-parallel
//! kernel, and times both over the same iteration budget.
//!
//! This is the facade crate that re-exports the public API from the
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use relax::prelude::*;
//!
//! let config = RunConfig {
//!     grid_size: 32,
//!     iteration_budget: 50,
//!     backend: Backend::Accelerated,
//!     substrate: SubstrateChoice::Sequential,
//!     ..RunConfig::default()
//! };
//! let mut driver = Driver::new();
//! driver.start(config.run().unwrap());
//! let report = driver.run_to_completion().unwrap();
//! assert_eq!(report.iterations, 50);
//!
//! let pixels = driver.solver().unwrap().render(ColorMapping::Rgb);
//! assert_eq!(pixels.len(), 32 * 32);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `relax-core` | IDs, backend and colour selectors, `FieldReader` |
//! | [`space`] | `relax-space` | Toroidal grid topology and neighbours |
//! | [`field`] | `relax-field` | Field model, codec, carriers, frames |
//! | [`solver`] | `relax-solver` | Relaxation rule, solvers, kernel substrates |
//! | [`engine`] | `relax-engine` | Run configuration and step scheduling |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, selectors, and IDs (`relax-core`).
pub use relax_core as types;

/// Toroidal grid topology (`relax-space`).
pub use relax_space as space;

/// Field model, scalar codec, and encoded carriers (`relax-field`).
///
/// [`field::codec::encode`] and [`field::codec::decode`] are the
/// three-tier byte codec used by the accelerated backend.
pub use relax_field as field;

/// Solvers and kernel substrates (`relax-solver`).
///
/// [`solver::SoftwareSolver`] and [`solver::AcceleratedSolver`] both
/// implement [`solver::Solver`].
pub use relax_solver as solver;

/// Run configuration and cooperative scheduling (`relax-engine`).
pub use relax_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use relax::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use relax_core::{Backend, ColorMapping, FieldReader, IterationId, RunId};

    // Space and field
    pub use relax_field::{Field, Frame};
    pub use relax_space::Torus;

    // Solvers
    pub use relax_solver::{AcceleratedSolver, SoftwareSolver, Solver};

    // Engine
    pub use relax_engine::{
        ConfigError, Driver, Run, RunConfig, RunEvent, RunMetrics, RunReport, StepScheduler,
        SubstrateChoice, TickOutcome,
    };
}
