//! Jacobi relaxation solvers for the two-source Laplace problem.
//!
//! Both backends implement [`Solver`] and apply the same update rule
//! ([`relax::next_value`]) with the same toroidal neighbour convention:
//!
//! | Backend | Type | Storage | Execution |
//! |---------|------|---------|-----------|
//! | Software | [`SoftwareSolver`] | native `f64` cells | row-major sweep on the caller's thread |
//! | Accelerated | [`AcceleratedSolver`] | encoded texels | per-texel kernels on a [`KernelSubstrate`] |
//!
//! Each [`Solver::step`] reads only the previous iteration and ends with a
//! buffer swap, so a step is never observed half-done.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accelerated;
pub mod kernel;
pub mod relax;
pub mod software;
pub mod solver;
pub mod substrate;

pub use accelerated::AcceleratedSolver;
pub use kernel::{InitKernel, UpdateKernel};
pub use software::SoftwareSolver;
pub use solver::Solver;
pub use substrate::{KernelSubstrate, ParallelSubstrate, SequentialSubstrate};
