//! Pump loop pairing a [`StepScheduler`] with a [`FrameQueue`].

use relax_core::RunId;
use relax_solver::Solver;

use crate::events::RunEvent;
use crate::host::FrameQueue;
use crate::scheduler::{Run, RunReport, SchedulerState, StepScheduler, TickOutcome};

/// Owns a scheduler and its in-memory host, delivering one tick per pump.
#[derive(Debug, Default)]
pub struct Driver {
    scheduler: StepScheduler,
    queue: FrameQueue,
}

impl Driver {
    /// An idle driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `run`, replacing any run in progress.
    pub fn start(&mut self, run: Run) -> RunId {
        self.scheduler.start(run, &mut self.queue)
    }

    /// Cancel the current run without a report.
    pub fn cancel(&mut self) {
        self.scheduler.cancel(&mut self.queue);
    }

    /// Deliver the next due tick, if any.
    pub fn pump_once(&mut self) -> Option<TickOutcome> {
        let request = self.queue.next_due()?;
        Some(self.scheduler.tick(request, &mut self.queue))
    }

    /// Pump until the current run completes. Returns `None` if the queue
    /// drains first (no run, or the run was cancelled).
    pub fn run_to_completion(&mut self) -> Option<RunReport> {
        while let Some(outcome) = self.pump_once() {
            if let TickOutcome::Completed(report) = outcome {
                return Some(report);
            }
        }
        None
    }

    /// Receive scheduler events.
    pub fn subscribe(&mut self) -> crossbeam_channel::Receiver<RunEvent> {
        self.scheduler.subscribe()
    }

    /// Scheduler state.
    pub fn state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    /// The current run's solver, for presentation between pumps.
    pub fn solver(&self) -> Option<&dyn Solver> {
        self.scheduler.solver()
    }

    /// The underlying scheduler.
    pub fn scheduler(&self) -> &StepScheduler {
        &self.scheduler
    }
}
