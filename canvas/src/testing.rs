//! Deterministic frame scheduler for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scheduler::FrameScheduler;

type Queued = (u64, Box<dyn FnOnce(f64)>);

/// Queues frame callbacks until the test fires them.
///
/// Clones share one queue, so a test can keep a clone while the loop owns
/// another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Vec<Queued>>>,
    next_id: Rc<Cell<u64>>,
    requested: Rc<Cell<usize>>,
    cancelled: Rc<Cell<usize>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks waiting for the next frame.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Total requests seen.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested.get()
    }

    /// Total cancellations of still-pending requests.
    #[must_use]
    pub fn cancelled(&self) -> usize {
        self.cancelled.get()
    }

    /// Fire every callback queued before this call. Returns how many ran.
    pub fn fire(&self, timestamp_ms: f64) -> usize {
        let batch = std::mem::take(&mut *self.queue.borrow_mut());
        let count = batch.len();
        for (_, callback) in batch {
            callback(timestamp_ms);
        }
        count
    }

    /// Fire `frames` consecutive frames, 16 ms apart.
    pub fn run_frames(&self, frames: usize) {
        let mut timestamp = 0.0;
        for _ in 0..frames {
            timestamp += 16.0;
            self.fire(timestamp);
        }
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u64;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.requested.set(self.requested.get() + 1);
        self.queue.borrow_mut().push((id, callback));
        id
    }

    fn cancel(&self, handle: u64) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.len();
        queue.retain(|(id, _)| *id != handle);
        if queue.len() < before {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }
}
