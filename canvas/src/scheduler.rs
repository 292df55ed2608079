//! Frame scheduling: a cancellable self-rescheduling loop.
//!
//! [`FrameLoop`] owns the only pending frame handle. `stop()` cancels that
//! handle synchronously, so once it returns no further tick can run. The
//! browser backend is [`RafScheduler`]; tests drive frames by hand through
//! `testing::ManualScheduler`.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A per-frame callback source.
pub trait FrameScheduler {
    /// Token for one outstanding request.
    type Handle;

    /// Run `callback` once on the next frame with the frame timestamp in ms.
    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;

    /// Cancel an outstanding request. Cancelling a fired request is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Lifecycle of a [`FrameLoop`]. There is no way back from `Stopped`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopPhase {
    #[default]
    Unstarted,
    Running,
    Stopped,
}

struct Shared<S: FrameScheduler> {
    scheduler: S,
    phase: Cell<LoopPhase>,
    pending: RefCell<Option<S::Handle>>,
    tick: RefCell<Box<dyn FnMut(f64)>>,
}

/// Runs `tick` once per frame between `start()` and `stop()`.
///
/// Dropping the loop stops it.
pub struct FrameLoop<S: FrameScheduler + 'static> {
    shared: Rc<Shared<S>>,
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn new(scheduler: S, tick: impl FnMut(f64) + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                phase: Cell::new(LoopPhase::Unstarted),
                pending: RefCell::new(None),
                tick: RefCell::new(Box::new(tick)),
            }),
        }
    }

    #[must_use]
    pub fn phase(&self) -> LoopPhase {
        self.shared.phase.get()
    }

    /// `Unstarted -> Running`. Returns `false` from any other phase.
    pub fn start(&self) -> bool {
        if self.shared.phase.get() != LoopPhase::Unstarted {
            return false;
        }
        self.shared.phase.set(LoopPhase::Running);
        schedule_next(&self.shared);
        true
    }

    /// Move to `Stopped` and cancel the pending frame, if any.
    pub fn stop(&self) {
        self.shared.phase.set(LoopPhase::Stopped);
        let pending = self.shared.pending.borrow_mut().take();
        if let Some(handle) = pending {
            self.shared.scheduler.cancel(handle);
        }
    }

    /// Whether a frame request is outstanding.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.shared.pending.borrow().is_some()
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule_next<S: FrameScheduler + 'static>(shared: &Rc<Shared<S>>) {
    let next = Rc::clone(shared);
    let handle = shared.scheduler.request(Box::new(move |timestamp_ms| {
        // This request has fired; release its handle before ticking.
        let fired = next.pending.borrow_mut().take();
        drop(fired);

        if next.phase.get() != LoopPhase::Running {
            return;
        }
        (next.tick.borrow_mut())(timestamp_ms);

        // The tick may have stopped the loop.
        if next.phase.get() == LoopPhase::Running {
            schedule_next(&next);
        }
    }));
    *shared.pending.borrow_mut() = Some(handle);
}

/// Browser scheduler backed by `requestAnimationFrame`.
///
/// The handle is a `gloo_render::AnimationFrame`; dropping it cancels the
/// request and releases the JS closure.
#[derive(Clone, Copy, Debug, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Handle = gloo_render::AnimationFrame;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle {
        gloo_render::request_animation_frame(callback)
    }

    fn cancel(&self, handle: Self::Handle) {
        drop(handle);
    }
}
