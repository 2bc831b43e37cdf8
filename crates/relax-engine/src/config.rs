//! Run configuration, validation, and solver construction.
//!
//! [`RunConfig`] is the input for one run. [`validate()`](RunConfig::validate)
//! checks it before any solver state exists;
//! [`build_solver()`](RunConfig::build_solver) then constructs the chosen
//! backend.

use std::error::Error;
use std::fmt;

use relax_core::{Backend, ColorMapping, SubstrateError};
use relax_solver::{
    AcceleratedSolver, KernelSubstrate, ParallelSubstrate, SequentialSubstrate, SoftwareSolver,
    Solver,
};
use relax_space::{SpaceError, Torus};
use tracing::warn;

use crate::scheduler::Run;

// ── SubstrateChoice ────────────────────────────────────────────────

/// Which kernel substrate backs the accelerated solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubstrateChoice {
    /// One texel at a time on the scheduler's thread.
    Sequential,
    /// Rows in parallel on a dedicated pool. `None` = rayon's default
    /// thread count.
    Parallel {
        /// Worker thread count.
        threads: Option<usize>,
    },
}

impl Default for SubstrateChoice {
    fn default() -> Self {
        Self::Parallel { threads: None }
    }
}

impl SubstrateChoice {
    /// Bring up the substrate.
    pub fn build(self) -> Result<Box<dyn KernelSubstrate>, SubstrateError> {
        match self {
            Self::Sequential => Ok(Box::new(SequentialSubstrate)),
            Self::Parallel { threads } => Ok(Box::new(ParallelSubstrate::new(threads)?)),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`RunConfig`] or building its
/// solver.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// `grid_size` is zero.
    GridSizeZero,
    /// `grid_size` is larger than the presentation surface. Use
    /// [`RunConfig::clamp_to_surface`] to shrink it first.
    GridExceedsSurface {
        /// Requested grid side length.
        size: u32,
        /// Surface height in pixels.
        surface_height: u32,
    },
    /// `iteration_budget` is zero.
    BudgetZero,
    /// The grid could not be built.
    Space(SpaceError),
    /// The accelerated backend's substrate could not be started.
    Substrate(SubstrateError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridSizeZero => write!(f, "grid_size must be at least 1"),
            Self::GridExceedsSurface {
                size,
                surface_height,
            } => {
                write!(
                    f,
                    "grid_size {size} exceeds surface height {surface_height}"
                )
            }
            Self::BudgetZero => write!(f, "iteration_budget must be at least 1"),
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Substrate(e) => write!(f, "substrate: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Substrate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<SubstrateError> for ConfigError {
    fn from(e: SubstrateError) -> Self {
        Self::Substrate(e)
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Complete configuration for one solver run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Grid side length N. Default: 128.
    pub grid_size: u32,
    /// Number of iterations to run. Default: 1000.
    pub iteration_budget: u64,
    /// Which solver to run. Default: software.
    pub backend: Backend,
    /// How frames are coloured for display. Default: rgb.
    pub color_mapping: ColorMapping,
    /// Height of the presentation surface in pixels. Default: 512.
    pub surface_height: u32,
    /// Substrate for the accelerated backend. Default: parallel.
    pub substrate: SubstrateChoice,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            grid_size: 128,
            iteration_budget: 1000,
            backend: Backend::default(),
            color_mapping: ColorMapping::default(),
            surface_height: 512,
            substrate: SubstrateChoice::default(),
        }
    }
}

impl RunConfig {
    /// Shrink `grid_size` to the surface height if it is larger.
    pub fn clamp_to_surface(mut self) -> Self {
        if self.grid_size > self.surface_height {
            self.grid_size = self.surface_height;
        }
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Non-empty grid.
        if self.grid_size == 0 {
            return Err(ConfigError::GridSizeZero);
        }
        // 2. One cell per surface pixel at most.
        if self.grid_size > self.surface_height {
            return Err(ConfigError::GridExceedsSurface {
                size: self.grid_size,
                surface_height: self.surface_height,
            });
        }
        // 3. At least one iteration.
        if self.iteration_budget == 0 {
            return Err(ConfigError::BudgetZero);
        }
        // 4. Grid dimensions representable by the torus.
        Torus::new(self.grid_size)?;
        Ok(())
    }

    /// Validate and construct the configured backend.
    pub fn build_solver(&self) -> Result<Box<dyn Solver>, ConfigError> {
        self.validate()?;
        let torus = Torus::new(self.grid_size)?;
        match self.backend {
            Backend::Software => Ok(Box::new(SoftwareSolver::new(torus))),
            Backend::Accelerated => {
                let substrate = self.substrate.build()?;
                Ok(Box::new(AcceleratedSolver::new(torus, substrate)))
            }
        }
    }

    /// Like [`build_solver`](Self::build_solver), but an unavailable
    /// substrate falls back to the software backend with a warning.
    pub fn build_solver_with_fallback(&self) -> Result<Box<dyn Solver>, ConfigError> {
        match self.build_solver() {
            Err(ConfigError::Substrate(e)) => {
                warn!(error = %e, "accelerated backend unavailable, falling back to software");
                let torus = Torus::new(self.grid_size)?;
                Ok(Box::new(SoftwareSolver::new(torus)))
            }
            other => other,
        }
    }

    /// Build a [`Run`] of this configuration's budget.
    pub fn run(&self) -> Result<Run, ConfigError> {
        Ok(Run::new(
            self.build_solver_with_fallback()?,
            self.iteration_budget,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relax_core::FieldReader;

    fn valid_config() -> RunConfig {
        RunConfig {
            grid_size: 16,
            iteration_budget: 5,
            surface_height: 64,
            ..RunConfig::default()
        }
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_zero_grid_fails() {
        let cfg = RunConfig {
            grid_size: 0,
            ..valid_config()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::GridSizeZero));
    }

    #[test]
    fn validate_grid_exceeding_surface_fails() {
        let cfg = RunConfig {
            grid_size: 100,
            surface_height: 64,
            ..valid_config()
        };
        match cfg.validate() {
            Err(ConfigError::GridExceedsSurface {
                size: 100,
                surface_height: 64,
            }) => {}
            other => panic!("expected GridExceedsSurface, got {other:?}"),
        }
    }

    #[test]
    fn clamp_to_surface_shrinks_grid() {
        let cfg = RunConfig {
            grid_size: 100,
            surface_height: 64,
            ..valid_config()
        }
        .clamp_to_surface();
        assert_eq!(cfg.grid_size, 64);
        assert!(cfg.validate().is_ok());

        let small = valid_config().clamp_to_surface();
        assert_eq!(small.grid_size, 16);
    }

    #[test]
    fn validate_zero_budget_fails() {
        let cfg = RunConfig {
            iteration_budget: 0,
            ..valid_config()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::BudgetZero));
    }

    #[test]
    fn validate_oversized_grid_is_space_error() {
        let cfg = RunConfig {
            grid_size: Torus::MAX_SIZE + 1,
            surface_height: u32::MAX,
            ..valid_config()
        };
        match cfg.validate() {
            Err(ConfigError::Space(SpaceError::DimensionTooLarge { .. })) => {}
            other => panic!("expected Space(DimensionTooLarge), got {other:?}"),
        }
    }

    #[test]
    fn build_solver_selects_backend() {
        let sw = valid_config().build_solver().unwrap();
        assert_eq!(sw.backend(), Backend::Software);

        let hw = RunConfig {
            backend: Backend::Accelerated,
            substrate: SubstrateChoice::Sequential,
            ..valid_config()
        }
        .build_solver()
        .unwrap();
        assert_eq!(hw.backend(), Backend::Accelerated);
        assert_eq!(hw.name(), "accelerated/sequential");
        assert_eq!(hw.readable_field().grid_size(), 16);
    }

    #[test]
    fn unavailable_substrate_is_error_or_fallback() {
        let cfg = RunConfig {
            backend: Backend::Accelerated,
            substrate: SubstrateChoice::Parallel { threads: Some(0) },
            ..valid_config()
        };
        match cfg.build_solver() {
            Err(ConfigError::Substrate(SubstrateError::Unavailable { .. })) => {}
            other => panic!("expected Substrate error, got {:?}", other.map(|s| s.backend())),
        }
        let solver = cfg.build_solver_with_fallback().unwrap();
        assert_eq!(solver.backend(), Backend::Software);
    }

    #[test]
    fn error_source_chains() {
        let e = ConfigError::from(SpaceError::EmptySpace);
        assert!(e.source().is_some());
        assert!(ConfigError::BudgetZero.source().is_none());
        assert_eq!(e.to_string(), format!("space: {}", SpaceError::EmptySpace));
    }
}
