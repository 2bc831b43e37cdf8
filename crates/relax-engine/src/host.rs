//! Tick hosts: where the scheduler's "call me again" requests go.
//!
//! The scheduler holds at most one outstanding [`TickRequest`]. A host
//! hands out requests, delivers them later (one per frame, in a real
//! animation loop), and drops them on [`cancel`](TickHost::cancel).

use indexmap::IndexSet;
use relax_core::RunId;

/// Handle for one requested tick, tagged with the run that asked for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickRequest {
    run: RunId,
    seq: u64,
}

impl TickRequest {
    /// Construct a request. Hosts use this to mint handles.
    pub fn new(run: RunId, seq: u64) -> Self {
        Self { run, seq }
    }

    /// The run that issued this request.
    pub fn run(&self) -> RunId {
        self.run
    }

    /// Host-assigned sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// A cooperative event loop that can schedule and cancel ticks.
pub trait TickHost {
    /// Schedule a future tick for `run` and return its handle.
    fn request_tick(&mut self, run: RunId) -> TickRequest;

    /// Drop a pending request. Unknown or already-delivered requests are
    /// ignored.
    fn cancel(&mut self, request: TickRequest);
}

/// In-memory host that delivers requests in arrival order.
///
/// Stands in for a display's animation-frame callback: each
/// [`next_due`](FrameQueue::next_due) is one frame.
#[derive(Debug, Default)]
pub struct FrameQueue {
    pending: IndexSet<TickRequest>,
    next_seq: u64,
    cancelled: u64,
}

impl FrameQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending request.
    pub fn next_due(&mut self) -> Option<TickRequest> {
        self.pending.shift_remove_index(0)
    }

    /// Number of requests waiting for delivery.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no request is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// How many pending requests have been cancelled over the queue's
    /// lifetime.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl TickHost for FrameQueue {
    fn request_tick(&mut self, run: RunId) -> TickRequest {
        let request = TickRequest::new(run, self.next_seq);
        self.next_seq += 1;
        self.pending.insert(request);
        request
    }

    fn cancel(&mut self, request: TickRequest) {
        if self.pending.shift_remove(&request) {
            self.cancelled += 1;
        }
    }
}
