//! Test utilities and mock types for relax development.
//!
//! Provides forced-cell field fixtures, independent reference sweeps for
//! checking Jacobi purity, and a [`CountingSolver`] whose step count can
//! be observed after the solver has been handed to a scheduler.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use relax_core::{Backend, FieldReader, IterationId};
use relax_field::{Field, Frame};
use relax_solver::{SoftwareSolver, Solver};
use relax_space::Torus;

pub use fixtures::{
    forced_corner_field, reference_sweep, shuffled_sweep, uniform_free_field,
};

/// Shared handle to a [`CountingSolver`]'s step counter.
#[derive(Clone, Debug, Default)]
pub struct StepCounter(Arc<AtomicU64>);

impl StepCounter {
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// A software solver that counts every call to [`Solver::step`].
///
/// Keep the [`StepCounter`] from [`counter`](CountingSolver::counter)
/// before moving the solver into a run; it stays readable after the run
/// (and the solver) have been dropped.
#[derive(Debug)]
pub struct CountingSolver {
    inner: SoftwareSolver,
    steps: StepCounter,
}

impl CountingSolver {
    pub fn new(size: u32) -> Self {
        let torus = Torus::new(size).expect("fixture size must be valid");
        Self::from_field(Field::classified(torus))
    }

    pub fn from_field(field: Field) -> Self {
        Self {
            inner: SoftwareSolver::from_field(field),
            steps: StepCounter::default(),
        }
    }

    pub fn counter(&self) -> StepCounter {
        self.steps.clone()
    }
}

impl Solver for CountingSolver {
    fn name(&self) -> &str {
        "counting"
    }

    fn backend(&self) -> Backend {
        Backend::Software
    }

    fn iteration(&self) -> IterationId {
        self.inner.iteration()
    }

    fn step(&mut self) {
        self.steps.0.fetch_add(1, Ordering::SeqCst);
        self.inner.step();
    }

    fn readable_field(&self) -> &dyn FieldReader {
        self.inner.readable_field()
    }

    fn frame(&self) -> Frame {
        self.inner.frame()
    }
}
