//! The solver capability implemented by every backend.

use relax_core::{Backend, ColorMapping, FieldReader, IterationId};
use relax_field::Frame;

/// A relaxation solver that owns its buffers for one run.
///
/// # Contract
///
/// - [`step`](Solver::step) performs exactly one Jacobi iteration over
///   every cell, reading only the previous iteration, and finishes with
///   the buffer swap. It cannot fail.
/// - Fixed cells never change (exactly for native storage, byte-for-byte
///   for encoded storage).
/// - [`readable_field`](Solver::readable_field) and
///   [`frame`](Solver::frame) always reflect the latest completed
///   iteration.
///
/// Solvers are `Send` so a run can be handed to whichever thread drives
/// the scheduler.
pub trait Solver: Send {
    /// Human-readable name for logs and reports.
    fn name(&self) -> &str;

    /// Which backend this solver implements.
    fn backend(&self) -> Backend;

    /// Number of completed iterations.
    fn iteration(&self) -> IterationId;

    /// Perform one full iteration and swap buffers.
    fn step(&mut self);

    /// Read-only view of the latest completed iteration.
    fn readable_field(&self) -> &dyn FieldReader;

    /// Presentation texels of the latest completed iteration.
    fn frame(&self) -> Frame;

    /// [`frame`](Solver::frame) mapped to display pixels.
    fn render(&self, mapping: ColorMapping) -> Vec<[u8; 3]> {
        self.frame().render(mapping)
    }
}
