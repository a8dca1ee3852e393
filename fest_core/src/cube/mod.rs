//! Hero cube: a pointer-scrubbed frame sequence.
//!
//! The cube is a pre-rendered rotation split into `N` frames. Nothing is
//! downloaded until the visitor clicks the placeholder; then the middle frame
//! is fetched, the whole sequence is preloaded in order, and from there the
//! horizontal pointer position picks the frame. Two stacked images crossfade
//! between frames so the swap never flashes.
//!
//! [`CubeAnimation`] is the pure state machine. The browser widget feeds it
//! clicks, preload progress, pointer moves and crossfade timers, and applies
//! the frame indices it hands back.
//!
//! ```rust
//! use fest_core::cube::{CubeAnimation, CubePhase};
//! use fest_core::device::DeviceClass;
//!
//! let mut cube = CubeAnimation::new(142, DeviceClass::Desktop);
//! assert_eq!(cube.activate(), Some(71));
//! cube.seed_settled(true);
//! assert_eq!(cube.phase(), CubePhase::SequentialPreloading);
//! assert_eq!(cube.frame_for_pointer(1_000.0, 1_000.0), 141);
//! ```

mod cache;
mod frames;
mod preload;

pub use cache::{ImageCache, ImageSource, SharedLoad};
pub use frames::{FrameSet, ImageFormat};
pub use preload::{FrameFetcher, FrameProgress, LoadedFrame, preload_sequential};

use tracing::{debug, trace};

use crate::device::DeviceClass;

/// Lifecycle of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubePhase {
    /// Placeholder only, nothing fetched.
    Dormant,
    /// Waiting for the seed frame.
    InitialLoading,
    /// Fetching every frame in order.
    SequentialPreloading,
    /// Pointer drives the frame.
    Interactive,
}

/// One of the two stacked image elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferSlot {
    /// First element in document order.
    A,
    /// Second element in document order.
    B,
}

impl BufferSlot {
    /// The other slot.
    pub fn other(self) -> BufferSlot {
        match self {
            BufferSlot::A => BufferSlot::B,
            BufferSlot::B => BufferSlot::A,
        }
    }
}

/// Cube state machine.
#[derive(Debug, Clone)]
pub struct CubeAnimation {
    total: usize,
    device: DeviceClass,
    phase: CubePhase,
    seed: usize,
    target: Option<usize>,
    displayed: Option<usize>,
    progress: u8,
    in_flight: Option<usize>,
    pending: Option<usize>,
    primary: BufferSlot,
    last_pointer_frame: Option<usize>,
}

impl CubeAnimation {
    /// Controller for `total` frames on a device classified once up front.
    pub fn new(total: usize, device: DeviceClass) -> Self {
        Self {
            total,
            device,
            phase: CubePhase::Dormant,
            seed: total / 2,
            target: None,
            displayed: None,
            progress: 0,
            in_flight: None,
            pending: None,
            primary: BufferSlot::A,
            last_pointer_frame: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> CubePhase {
        self.phase
    }

    /// Device class fixed at construction.
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Number of frames.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Frame currently visible in the primary slot.
    pub fn displayed(&self) -> Option<usize> {
        self.displayed
    }

    /// Most recently requested frame.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Preload progress, 0 to 100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Frame being faded in, if a transition is running.
    pub fn in_flight(&self) -> Option<usize> {
        self.in_flight
    }

    /// Frame queued behind the running transition.
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Slot holding the displayed frame.
    pub fn primary(&self) -> BufferSlot {
        self.primary
    }

    /// Slot the next frame loads into.
    pub fn secondary(&self) -> BufferSlot {
        self.primary.other()
    }

    /// Whether the placeholder should be the only thing shown.
    pub fn shows_placeholder(&self) -> bool {
        self.displayed.is_none()
    }

    /// Whether a crossfade is running.
    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether pointer tracking should be wired up at all.
    pub fn tracks_pointer(&self) -> bool {
        self.device.is_desktop() && self.total > 0
    }

    /// First click on the placeholder.
    ///
    /// Returns the seed frame to fetch, or `None` when the device is
    /// constrained, the sequence is empty or the cube already started.
    pub fn activate(&mut self) -> Option<usize> {
        if self.phase != CubePhase::Dormant || !self.device.is_desktop() || self.total == 0 {
            return None;
        }
        debug!(seed = self.seed, total = self.total, "cube activated");
        self.phase = CubePhase::InitialLoading;
        self.target = Some(self.seed);
        Some(self.seed)
    }

    /// The seed fetch finished, successfully or not.
    pub fn seed_settled(&mut self, loaded: bool) {
        if self.phase != CubePhase::InitialLoading {
            return;
        }
        if loaded {
            self.displayed = Some(self.seed);
        }
        self.phase = CubePhase::SequentialPreloading;
    }

    /// Record one attempted frame of the sequential preload.
    ///
    /// Returns the frame to flash as a progress cue when it loaded.
    pub fn record_progress<I>(&mut self, progress: &FrameProgress<I>) -> Option<usize> {
        if self.phase != CubePhase::SequentialPreloading {
            return None;
        }
        self.progress = self.progress.max(progress.percent());
        let cue = progress.loaded.as_ref().map(|frame| self.clamp(frame.index));
        if let Some(index) = cue {
            self.displayed = Some(index);
        }
        if progress.is_complete() {
            debug!(displayed = ?self.displayed, "cube interactive");
            self.phase = CubePhase::Interactive;
        }
        cue
    }

    /// Frame for a pointer at `x` over a surface `width` px wide.
    ///
    /// Out of range positions clamp to the first or last frame. A zero,
    /// negative or non-finite width maps to frame 0.
    pub fn frame_for_pointer(&self, x: f64, width: f64) -> usize {
        if self.total == 0 || !width.is_finite() || width <= 0.0 || x.is_nan() {
            return 0;
        }
        let t = (x / width).clamp(0.0, 1.0);
        let last = (self.total - 1) as f64;
        self.clamp((t * last).round() as usize)
    }

    /// Throttled pointer move in interactive mode.
    ///
    /// Returns the frame whose load should start now. Positions that map to
    /// the last applied frame are ignored.
    pub fn pointer_moved(&mut self, x: f64, width: f64) -> Option<usize> {
        if self.phase != CubePhase::Interactive {
            return None;
        }
        let frame = self.frame_for_pointer(x, width);
        if self.last_pointer_frame == Some(frame) {
            return None;
        }
        self.last_pointer_frame = Some(frame);
        self.request_frame(frame)
    }

    /// Ask for `index` to become visible.
    ///
    /// While a crossfade runs the request is parked as the pending target,
    /// replacing any older one. Returns the frame to load into the secondary
    /// slot right now.
    pub fn request_frame(&mut self, index: usize) -> Option<usize> {
        let index = self.clamp(index);
        self.target = Some(index);
        if self.in_flight.is_some() {
            trace!(frame = index, "cube frame queued");
            self.pending = Some(index);
            return None;
        }
        if self.displayed == Some(index) {
            return None;
        }
        self.in_flight = Some(index);
        Some(index)
    }

    /// The crossfade finished: swap slots and start any pending frame.
    pub fn crossfade_complete(&mut self) -> Option<usize> {
        let finished = self.in_flight.take()?;
        self.displayed = Some(finished);
        self.primary = self.primary.other();
        self.pending.take().and_then(|next| self.request_frame(next))
    }

    /// The secondary frame failed to load: keep the current frame and try
    /// the pending one, if any.
    pub fn transition_aborted(&mut self) -> Option<usize> {
        let failed = self.in_flight.take()?;
        debug!(frame = failed, "cube transition abandoned");
        self.pending.take().and_then(|next| self.request_frame(next))
    }

    /// Back to the dormant placeholder. Used on teardown.
    pub fn reset(&mut self) {
        *self = Self::new(self.total, self.device);
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.total.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn progress(index: usize, total: usize, loaded: bool) -> FrameProgress<()> {
        FrameProgress {
            index,
            attempted: index + 1,
            total,
            loaded: loaded.then(|| LoadedFrame {
                index,
                src: String::new(),
                image: (),
            }),
        }
    }

    fn interactive(total: usize) -> CubeAnimation {
        let mut cube = CubeAnimation::new(total, DeviceClass::Desktop);
        cube.activate();
        cube.seed_settled(true);
        for index in 0..total {
            cube.record_progress(&progress(index, total, true));
        }
        cube
    }

    #[test]
    fn constrained_devices_never_activate() {
        let mut cube = CubeAnimation::new(142, DeviceClass::Constrained);
        assert_eq!(cube.activate(), None);
        assert_eq!(cube.phase(), CubePhase::Dormant);
        assert!(cube.shows_placeholder());
        assert!(!cube.tracks_pointer());
    }

    #[test]
    fn only_desktop_sequences_track_the_pointer() {
        assert!(CubeAnimation::new(142, DeviceClass::Desktop).tracks_pointer());
        assert!(!CubeAnimation::new(142, DeviceClass::Constrained).tracks_pointer());
        assert!(!CubeAnimation::new(0, DeviceClass::Desktop).tracks_pointer());
    }

    #[test]
    fn activation_happens_once() {
        let mut cube = CubeAnimation::new(142, DeviceClass::Desktop);
        assert_eq!(cube.activate(), Some(71));
        assert_eq!(cube.activate(), None);
        assert_eq!(cube.phase(), CubePhase::InitialLoading);
    }

    #[test]
    fn failed_seed_still_moves_on() {
        let mut cube = CubeAnimation::new(10, DeviceClass::Desktop);
        cube.activate();
        cube.seed_settled(false);
        assert_eq!(cube.phase(), CubePhase::SequentialPreloading);
        assert_eq!(cube.displayed(), None);
    }

    #[test]
    fn preload_reaches_interactive_after_last_attempt() {
        let mut cube = CubeAnimation::new(4, DeviceClass::Desktop);
        cube.activate();
        cube.seed_settled(true);
        assert_eq!(cube.record_progress(&progress(0, 4, true)), Some(0));
        assert_eq!(cube.record_progress(&progress(1, 4, false)), None);
        assert_eq!(cube.progress(), 50);
        assert_eq!(cube.displayed(), Some(0));
        cube.record_progress(&progress(2, 4, true));
        assert_eq!(cube.phase(), CubePhase::SequentialPreloading);
        cube.record_progress(&progress(3, 4, false));
        assert_eq!(cube.phase(), CubePhase::Interactive);
        assert_eq!(cube.progress(), 100);
    }

    #[test]
    fn pointer_mapping_stays_in_range() {
        let cube = CubeAnimation::new(142, DeviceClass::Desktop);
        assert_eq!(cube.frame_for_pointer(0.0, 1200.0), 0);
        assert_eq!(cube.frame_for_pointer(600.0, 1200.0), 71);
        assert_eq!(cube.frame_for_pointer(1200.0, 1200.0), 141);
        assert_eq!(cube.frame_for_pointer(-40.0, 1200.0), 0);
        assert_eq!(cube.frame_for_pointer(9_999.0, 1200.0), 141);
        assert_eq!(cube.frame_for_pointer(300.0, 0.0), 0);
        assert_eq!(cube.frame_for_pointer(f64::NAN, 1200.0), 0);
    }

    #[test]
    fn same_frame_twice_requests_nothing() {
        let mut cube = interactive(142);
        let first = cube.pointer_moved(100.0, 1000.0);
        assert_eq!(first, Some(14));
        cube.crossfade_complete();
        assert_eq!(cube.pointer_moved(101.0, 1000.0), None);
        assert!(!cube.is_transitioning());
    }

    #[test]
    fn latest_target_wins_during_crossfade() {
        let mut cube = interactive(142);
        assert_eq!(cube.request_frame(10), Some(10));
        let primary = cube.primary();
        assert_eq!(cube.request_frame(20), None);
        assert_eq!(cube.request_frame(30), None);
        assert_eq!(cube.pending(), Some(30));

        assert_eq!(cube.crossfade_complete(), Some(30));
        assert_eq!(cube.displayed(), Some(10));
        assert_eq!(cube.primary(), primary.other());

        assert_eq!(cube.crossfade_complete(), None);
        assert_eq!(cube.displayed(), Some(30));
        assert_eq!(cube.primary(), primary);
    }

    #[test]
    fn aborted_transition_keeps_previous_frame() {
        let mut cube = interactive(142);
        let before = cube.displayed();
        cube.request_frame(5);
        cube.request_frame(6);
        assert_eq!(cube.transition_aborted(), Some(6));
        assert_eq!(cube.displayed(), before);
        assert_eq!(cube.in_flight(), Some(6));
    }

    #[test]
    fn reset_returns_to_placeholder() {
        let mut cube = interactive(8);
        cube.request_frame(2);
        cube.reset();
        assert_eq!(cube.phase(), CubePhase::Dormant);
        assert_eq!(cube.in_flight(), None);
        assert!(cube.shows_placeholder());
        assert_eq!(cube.activate(), Some(4));
    }

    #[test]
    fn empty_sequence_is_inert() {
        let mut cube = CubeAnimation::new(0, DeviceClass::Desktop);
        assert_eq!(cube.activate(), None);
        assert_eq!(cube.frame_for_pointer(50.0, 100.0), 0);
    }
}
