//! Coalesce bursts of events into one callback per animation frame.
//!
//! Pointer moves and resizes fire far more often than the screen refreshes.
//! [`FrameCoalescer`] remembers only the latest arguments and tells the
//! caller when a new frame callback has to be requested; the browser side
//! (`RafThrottle` in the landing crate) owns the actual
//! `requestAnimationFrame` handle.

/// "Latest arguments win" state for one throttled handler.
#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
    latest: Option<T>,
    scheduled: bool,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self {
            latest: None,
            scheduled: false,
        }
    }
}

impl<T> FrameCoalescer<T> {
    /// Empty coalescer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `args` as the latest call.
    ///
    /// Returns `true` when the caller must request a frame callback; `false`
    /// when one is already pending and will pick up these arguments.
    pub fn offer(&mut self, args: T) -> bool {
        self.latest = Some(args);
        !std::mem::replace(&mut self.scheduled, true)
    }

    /// Frame callback fired: take the arguments to run with.
    pub fn fire(&mut self) -> Option<T> {
        self.scheduled = false;
        self.latest.take()
    }

    /// Drop pending arguments; a callback that still fires will find nothing.
    pub fn cancel(&mut self) {
        self.scheduled = false;
        self.latest = None;
    }

    /// Whether a frame callback is outstanding.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}
