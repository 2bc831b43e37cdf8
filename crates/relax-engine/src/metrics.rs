//! Per-run performance metrics.
//!
//! [`RunMetrics`] summarises the step timings of one completed run. The
//! scheduler accumulates it as steps execute and freezes it into the
//! [`RunReport`](crate::RunReport).

/// Timing metrics for a single run.
///
/// All durations are in microseconds. Step times cover only the solver
/// step itself; `total_us` is wall-clock time from `start` to completion,
/// including time spent waiting for host ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
    /// Number of solver steps executed.
    pub iterations: u64,
    /// Mean solver step time, in microseconds.
    pub mean_step_us: u64,
    /// Slowest solver step, in microseconds.
    pub max_step_us: u64,
    step_sum_us: u64,
}

impl RunMetrics {
    /// Account for one executed step.
    pub fn record_step(&mut self, step_us: u64) {
        self.iterations += 1;
        self.step_sum_us = self.step_sum_us.saturating_add(step_us);
        self.max_step_us = self.max_step_us.max(step_us);
        self.mean_step_us = self.step_sum_us / self.iterations;
    }

    /// Set the run's total wall-clock time.
    pub fn finish(&mut self, total_us: u64) {
        self.total_us = total_us;
    }
}
