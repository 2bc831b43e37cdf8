//! Benchmark profiles for the relax solvers.
//!
//! - [`reference_profile`]: 128×128 grid (16K cells), 100 iterations
//! - [`stress_profile`]: 512×512 grid (~260K cells), 100 iterations
//! - [`solver_for`]: a fresh solver for a profile and backend

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use relax_core::Backend;
use relax_engine::{RunConfig, SubstrateChoice};
use relax_solver::{AcceleratedSolver, SequentialSubstrate, SoftwareSolver, Solver};
use relax_space::Torus;

/// Reference benchmark profile: 128×128 grid, 100 iterations.
pub fn reference_profile(backend: Backend) -> RunConfig {
    RunConfig {
        grid_size: 128,
        iteration_budget: 100,
        backend,
        surface_height: 512,
        substrate: SubstrateChoice::default(),
        ..RunConfig::default()
    }
}

/// Stress benchmark profile: 512×512 grid, 100 iterations.
///
/// Same as [`reference_profile`] at 16x the cell count.
pub fn stress_profile(backend: Backend) -> RunConfig {
    RunConfig {
        grid_size: 512,
        ..reference_profile(backend)
    }
}

/// A fresh solver of side `size` for `backend`, with the accelerated
/// backend on the sequential substrate so only the encoding differs.
pub fn solver_for(backend: Backend, size: u32) -> Box<dyn Solver> {
    let torus = Torus::new(size).expect("benchmark grid size must be valid");
    match backend {
        Backend::Software => Box::new(SoftwareSolver::new(torus)),
        Backend::Accelerated => Box::new(AcceleratedSolver::new(
            torus,
            Box::new(SequentialSubstrate),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        for backend in [Backend::Software, Backend::Accelerated] {
            assert!(reference_profile(backend).validate().is_ok());
            assert!(stress_profile(backend).validate().is_ok());
        }
    }

    #[test]
    fn solver_for_matches_backend() {
        assert_eq!(solver_for(Backend::Software, 8).backend(), Backend::Software);
        assert_eq!(
            solver_for(Backend::Accelerated, 8).backend(),
            Backend::Accelerated
        );
    }
}
