//! Run orchestration for the relax solvers.
//!
//! A run is configured by [`RunConfig`], which validates its inputs and
//! builds the chosen [`Solver`](relax_solver::Solver). The
//! [`StepScheduler`] then advances the solver one step per host tick
//! until the iteration budget is spent, and reports elapsed time.
//!
//! # Execution model
//!
//! Everything runs cooperatively on the caller's thread. The scheduler
//! never loops on its own; it asks a [`TickHost`] for the next tick and
//! returns. [`FrameQueue`] is an in-memory host and [`Driver`] pumps it.
//!
//! ```text
//! RunConfig ──build_solver()──▶ Run ──start()──▶ StepScheduler ◀──tick()── TickHost
//!                                                      │
//!                                                      └──▶ RunEvent subscribers
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod events;
pub mod host;
pub mod metrics;
pub mod scheduler;

pub use config::{ConfigError, RunConfig, SubstrateChoice};
pub use driver::Driver;
pub use events::RunEvent;
pub use host::{FrameQueue, TickHost, TickRequest};
pub use metrics::RunMetrics;
pub use scheduler::{Run, RunReport, SchedulerState, StepScheduler, TickOutcome};
