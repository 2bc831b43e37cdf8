//! Run lifecycle events broadcast to subscribers.

use relax_core::{Backend, IterationId, RunId};

use crate::scheduler::RunReport;

/// A scheduler lifecycle event.
///
/// Delivered over `crossbeam-channel` to every receiver obtained from
/// [`StepScheduler::subscribe`](crate::StepScheduler::subscribe).
/// Disconnected receivers are pruned on the next send.
#[derive(Clone, Debug)]
pub enum RunEvent {
    /// A run entered `Running`.
    Started {
        /// The new run.
        run: RunId,
        /// Backend solving it.
        backend: Backend,
        /// Grid side length.
        grid_size: usize,
        /// Iterations to execute.
        budget: u64,
    },
    /// One solver step completed.
    Stepped {
        /// The run that stepped.
        run: RunId,
        /// Iterations completed so far.
        iteration: IterationId,
    },
    /// The budget was exhausted.
    Completed(RunReport),
    /// The run was replaced or cancelled before completing.
    Cancelled {
        /// The abandoned run.
        run: RunId,
        /// Iterations it had completed.
        iterations: u64,
    },
}

impl RunEvent {
    /// The run this event concerns.
    pub fn run(&self) -> RunId {
        match self {
            Self::Started { run, .. } | Self::Stepped { run, .. } | Self::Cancelled { run, .. } => {
                *run
            }
            Self::Completed(report) => report.run,
        }
    }
}
