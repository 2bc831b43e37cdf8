//! Sequential scalar solver over native `f64` storage.

use relax_core::{Backend, FieldReader, IterationId};
use relax_field::{Field, Frame};
use relax_space::Torus;

use crate::relax;
use crate::solver::Solver;

/// The software backend: a row-major sweep over a double-buffered
/// [`Field`], one sweep per step.
///
/// ```
/// use relax_core::FieldReader;
/// use relax_solver::{SoftwareSolver, Solver};
/// use relax_space::Torus;
///
/// let mut solver = SoftwareSolver::new(Torus::new(32).unwrap());
/// solver.step();
/// assert_eq!(solver.iteration().0, 1);
/// assert_eq!(solver.readable_field().cell_count(), 32 * 32);
/// ```
#[derive(Clone, Debug)]
pub struct SoftwareSolver {
    field: Field,
    iteration: IterationId,
}

impl SoftwareSolver {
    /// Classify every cell of `torus` and start at iteration 0.
    pub fn new(torus: Torus) -> Self {
        Self::from_field(Field::classified(torus))
    }

    /// Start from an explicit field.
    pub fn from_field(field: Field) -> Self {
        Self {
            field,
            iteration: IterationId::default(),
        }
    }

    /// The underlying field.
    pub fn field(&self) -> &Field {
        &self.field
    }
}

impl Solver for SoftwareSolver {
    fn name(&self) -> &str {
        "software"
    }

    fn backend(&self) -> Backend {
        Backend::Software
    }

    fn iteration(&self) -> IterationId {
        self.iteration
    }

    fn step(&mut self) {
        let torus = *self.field.torus();
        let (src, dst) = self.field.split_mut();
        relax::sweep(&torus, src, dst);
        self.field.swap();
        self.iteration = self.iteration.next();
    }

    fn readable_field(&self) -> &dyn FieldReader {
        &self.field
    }

    fn frame(&self) -> Frame {
        Frame::from_field(&self.field)
    }
}
