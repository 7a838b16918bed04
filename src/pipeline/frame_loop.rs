//! Frame Loop - cancellable repeating frame task.
//!
//! The results screen needs a callback that runs once per display
//! frame for as long as the screen is alive, and provably never again
//! after teardown. Modeling it as an explicit start/cancel pair (rather
//! than ad-hoc scheduling in the event loop) makes that ordering
//! testable.
//!
//! Pacing comes from the host: the application event loop polls input
//! with a frame-length timeout and calls [`FrameLoop::tick`] once per
//! iteration. The loop therefore tracks the host's actual cadence,
//! slows down with it, and pauses entirely while the owning screen is
//! not being driven.
//!
//! # Cancellation
//!
//! `cancel()` drops the callback in place. A tick after cancellation
//! finds nothing to run, so no update can fire past teardown even if a
//! stale tick is still issued. Dropping the loop cancels it.

// =============================================================================
// FRAME LOOP
// =============================================================================

/// A repeating per-frame task with deterministic cancellation.
pub struct FrameLoop {
    callback: Option<Box<dyn FnMut()>>,
    ticks: u64,
}

impl FrameLoop {
    /// Start a loop around a callback. The callback does not run until
    /// the first `tick()`.
    pub fn start(callback: impl FnMut() + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
            ticks: 0,
        }
    }

    /// Run one frame. Does nothing once cancelled.
    pub fn tick(&mut self) {
        if let Some(callback) = self.callback.as_mut() {
            callback();
            self.ticks += 1;
        }
    }

    /// Stop the loop and release the callback. Idempotent.
    pub fn cancel(&mut self) {
        self.callback = None;
    }

    /// Whether the loop can still run.
    pub fn is_active(&self) -> bool {
        self.callback.is_some()
    }

    /// Frames executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// TESTS
// =============================================================================
