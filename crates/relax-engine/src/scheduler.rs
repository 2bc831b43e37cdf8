//! Cooperative step scheduler.
//!
//! [`StepScheduler`] advances one solver by exactly one step per host
//! tick. Between ticks control returns to the host, so presentation can
//! read the solver through [`StepScheduler::solver`].
//!
//! # State machine
//!
//! ```text
//!        start()             budget reached
//! Idle ─────────▶ Running ─────────────────▶ Done
//!                  ▲  │ cancel()               │
//!                  │  ▼                        │
//!                  │ Idle                      │
//!                  └───────── start() ─────────┘
//! ```
//!
//! At most one [`TickRequest`] is outstanding. A tick whose request is not
//! the pending one is stale and ignored, which neutralises a late tick
//! from a run that has since been replaced.

use std::fmt;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use relax_core::{Backend, FieldReader, IterationId, RunId};
use relax_solver::Solver;
use tracing::{debug, info};

use crate::events::RunEvent;
use crate::host::{TickHost, TickRequest};
use crate::metrics::RunMetrics;

/// Lifecycle state of the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    /// No run, or the last run was cancelled.
    Idle,
    /// A run is stepping.
    Running,
    /// The last run spent its budget. Terminal until the next `start`.
    Done,
}

/// A solver paired with the number of iterations to run it for.
pub struct Run {
    solver: Box<dyn Solver>,
    budget: u64,
}

impl Run {
    /// A run of `budget` steps. A budget of 0 completes on the first
    /// tick without stepping.
    pub fn new(solver: Box<dyn Solver>, budget: u64) -> Self {
        Self { solver, budget }
    }

    /// Iterations this run will execute.
    pub fn budget(&self) -> u64 {
        self.budget
    }
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("solver", &self.solver.name())
            .field("budget", &self.budget)
            .finish()
    }
}

/// Summary of a completed run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// The run that completed.
    pub run: RunId,
    /// Backend that solved it.
    pub backend: Backend,
    /// Solver name, e.g. `"accelerated/parallel"`.
    pub solver: String,
    /// Grid side length.
    pub grid_size: usize,
    /// Iterations executed.
    pub iterations: u64,
    /// Wall-clock time from `start` to completion.
    pub elapsed: Duration,
    /// Step timing breakdown.
    pub metrics: RunMetrics,
}

/// Result of delivering one tick.
#[derive(Clone, Debug)]
pub enum TickOutcome {
    /// One step ran; the payload is the iteration count after it.
    Stepped(IterationId),
    /// The budget was already spent; the run is now `Done`.
    Completed(RunReport),
    /// The tick was not the pending request and was ignored.
    Stale,
}

struct ActiveRun {
    id: RunId,
    solver: Box<dyn Solver>,
    budget: u64,
    count: u64,
    started: Instant,
    metrics: RunMetrics,
}

/// Drives one run at a time, one step per tick.
pub struct StepScheduler {
    state: SchedulerState,
    active: Option<ActiveRun>,
    pending: Option<TickRequest>,
    subscribers: Vec<Sender<RunEvent>>,
}

// Runs move with the scheduler to whichever thread hosts the loop.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<StepScheduler>();
    }
};

impl StepScheduler {
    /// An idle scheduler with no subscribers.
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Idle,
            active: None,
            pending: None,
            subscribers: Vec::new(),
        }
    }

    /// Receive every subsequent [`RunEvent`].
    pub fn subscribe(&mut self) -> Receiver<RunEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Iterations completed by the current run (0 when idle).
    pub fn iteration(&self) -> IterationId {
        IterationId(self.active.as_ref().map_or(0, |a| a.count))
    }

    /// The current run's id, while running or done.
    pub fn run_id(&self) -> Option<RunId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// The outstanding tick request, if any.
    pub fn pending(&self) -> Option<TickRequest> {
        self.pending
    }

    /// Read access to the current run's solver, while running or done.
    pub fn solver(&self) -> Option<&dyn Solver> {
        self.active.as_ref().map(|a| &*a.solver)
    }

    /// Begin `run`, replacing any run in progress.
    ///
    /// Cancels the pending tick, drops the previous run, resets the
    /// counter, records the start instant and requests the first tick.
    pub fn start(&mut self, run: Run, host: &mut dyn TickHost) -> RunId {
        self.abandon(host);

        let id = RunId::next();
        let grid_size = run.solver.readable_field().grid_size();
        let backend = run.solver.backend();
        info!(
            run = %id,
            solver = run.solver.name(),
            grid_size,
            budget = run.budget,
            "run started"
        );
        self.emit(RunEvent::Started {
            run: id,
            backend,
            grid_size,
            budget: run.budget,
        });

        self.active = Some(ActiveRun {
            id,
            solver: run.solver,
            budget: run.budget,
            count: 0,
            started: Instant::now(),
            metrics: RunMetrics::default(),
        });
        self.state = SchedulerState::Running;
        self.pending = Some(host.request_tick(id));
        id
    }

    /// Deliver one tick.
    pub fn tick(&mut self, request: TickRequest, host: &mut dyn TickHost) -> TickOutcome {
        if self.pending != Some(request) {
            debug!(run = %request.run(), seq = request.seq(), "stale tick ignored");
            return TickOutcome::Stale;
        }
        self.pending = None;

        if self.state != SchedulerState::Running {
            return TickOutcome::Stale;
        }
        let Some(active) = self.active.as_mut() else {
            return TickOutcome::Stale;
        };

        if active.count >= active.budget {
            let elapsed = active.started.elapsed();
            active.metrics.finish(micros(elapsed));
            let report = RunReport {
                run: active.id,
                backend: active.solver.backend(),
                solver: active.solver.name().to_string(),
                grid_size: active.solver.readable_field().grid_size(),
                iterations: active.count,
                elapsed,
                metrics: active.metrics.clone(),
            };
            self.state = SchedulerState::Done;
            info!(
                run = %report.run,
                solver = %report.solver,
                iterations = report.iterations,
                elapsed_ms = elapsed.as_secs_f64() * 1e3,
                "run completed"
            );
            self.emit(RunEvent::Completed(report.clone()));
            return TickOutcome::Completed(report);
        }

        let t0 = Instant::now();
        active.solver.step();
        active.metrics.record_step(micros(t0.elapsed()));
        active.count += 1;

        let run = active.id;
        let iteration = IterationId(active.count);
        if self.pending.is_none() {
            self.pending = Some(host.request_tick(run));
        }
        self.emit(RunEvent::Stepped { run, iteration });
        TickOutcome::Stepped(iteration)
    }

    /// Cancel the pending tick and discard the active run without a
    /// report.
    pub fn cancel(&mut self, host: &mut dyn TickHost) {
        self.abandon(host);
        self.state = SchedulerState::Idle;
    }

    fn abandon(&mut self, host: &mut dyn TickHost) {
        if let Some(request) = self.pending.take() {
            host.cancel(request);
        }
        if let Some(old) = self.active.take() {
            if self.state == SchedulerState::Running {
                debug!(run = %old.id, iterations = old.count, "run cancelled");
                self.emit(RunEvent::Cancelled {
                    run: old.id,
                    iterations: old.count,
                });
            }
        }
    }

    fn emit(&mut self, event: RunEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for StepScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StepScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepScheduler")
            .field("state", &self.state)
            .field("run", &self.run_id())
            .field("iteration", &self.iteration())
            .field("pending", &self.pending)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FrameQueue;
    use relax_solver::SoftwareSolver;
    use relax_space::Torus;

    fn software_run(size: u32, budget: u64) -> Run {
        Run::new(Box::new(SoftwareSolver::new(Torus::new(size).unwrap())), budget)
    }

    #[test]
    fn starts_idle() {
        let s = StepScheduler::new();
        assert_eq!(s.state(), SchedulerState::Idle);
        assert!(s.solver().is_none());
        assert_eq!(s.iteration(), IterationId(0));
    }

    #[test]
    fn budget_steps_then_completes() {
        let mut host = FrameQueue::new();
        let mut s = StepScheduler::new();
        s.start(software_run(8, 3), &mut host);

        for expected in 1..=3 {
            let req = host.next_due().unwrap();
            match s.tick(req, &mut host) {
                TickOutcome::Stepped(it) => assert_eq!(it, IterationId(expected)),
                other => panic!("expected Stepped, got {other:?}"),
            }
        }
        let req = host.next_due().unwrap();
        match s.tick(req, &mut host) {
            TickOutcome::Completed(report) => {
                assert_eq!(report.iterations, 3);
                assert_eq!(report.metrics.iterations, 3);
                assert_eq!(report.backend, Backend::Software);
                assert_eq!(report.grid_size, 8);
            }
            other => panic!("expected Completed, got {other:?}"),
        }
        assert_eq!(s.state(), SchedulerState::Done);
        assert!(host.is_empty());
        assert!(s.solver().is_some());
    }

    #[test]
    fn done_ignores_further_ticks() {
        let mut host = FrameQueue::new();
        let mut s = StepScheduler::new();
        s.start(software_run(4, 0), &mut host);
        let req = host.next_due().unwrap();
        assert!(matches!(s.tick(req, &mut host), TickOutcome::Completed(_)));
        assert!(matches!(s.tick(req, &mut host), TickOutcome::Stale));
        assert_eq!(s.state(), SchedulerState::Done);
    }

    #[test]
    fn single_pending_request() {
        let mut host = FrameQueue::new();
        let mut s = StepScheduler::new();
        s.start(software_run(4, 10), &mut host);
        let mut req = host.next_due().unwrap();
        for _ in 0..5 {
            assert!(host.is_empty());
            assert_eq!(s.pending(), Some(req));
            s.tick(req, &mut host);
            assert_eq!(host.len(), 1);
            req = host.next_due().unwrap();
        }
    }

    #[test]
    fn cancel_discards_without_report() {
        let mut host = FrameQueue::new();
        let mut s = StepScheduler::new();
        let events = s.subscribe();
        s.start(software_run(4, 10), &mut host);
        let req = host.next_due().unwrap();
        s.tick(req, &mut host);
        s.cancel(&mut host);

        assert_eq!(s.state(), SchedulerState::Idle);
        assert!(host.is_empty());
        assert!(s.solver().is_none());

        let got: Vec<_> = events.try_iter().collect();
        assert!(matches!(got[0], RunEvent::Started { budget: 10, .. }));
        assert!(matches!(got[1], RunEvent::Stepped { .. }));
        assert!(matches!(got[2], RunEvent::Cancelled { iterations: 1, .. }));
        assert_eq!(got.len(), 3);
    }

    #[test]
    fn dropped_subscriber_is_pruned() {
        let mut host = FrameQueue::new();
        let mut s = StepScheduler::new();
        drop(s.subscribe());
        let keep = s.subscribe();
        s.start(software_run(4, 1), &mut host);
        assert_eq!(s.subscribers.len(), 1);
        assert!(matches!(keep.try_recv(), Ok(RunEvent::Started { .. })));
    }
}
