//! Strongly-typed identifiers for iterations and runs.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of completed relaxation sweeps within a run.
///
/// `IterationId(0)` is the freshly classified field; each solver step
/// advances it by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IterationId(pub u64);

impl IterationId {
    /// The iteration that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for IterationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IterationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Counter for unique [`RunId`] allocation.
static RUN_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for one solver run.
///
/// Allocated from a monotonic atomic counter via [`RunId::next`]. Tick
/// requests carry the run they were issued for, so a request that
/// outlives its run can be recognised and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(u64);

impl RunId {
    /// Allocate a fresh, unique run ID. Thread-safe.
    pub fn next() -> Self {
        Self(RUN_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}
