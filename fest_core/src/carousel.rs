//! Drag/snap carousel state machine.
//!
//! One card is visible per page. The position moves by at most one card per
//! gesture and is always clamped to `[0, len - 1]`; requests outside that
//! range are ignored. The DOM layer feeds pointer samples, button clicks,
//! indicator clicks and arrow keys, and animates [`Carousel::track_offset`]
//! with a [`crate::motion::Spring`].

use std::collections::VecDeque;

use crate::config::CarouselConfig;

/// Window of pointer samples used to estimate the release velocity.
const VELOCITY_WINDOW_MS: f64 = 100.0;

/// Direction of a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices (content moves left).
    Forward,
    /// Towards lower indices (content moves right).
    Backward,
}

/// Signed horizontal offset (px) and velocity (px/s) at drag release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Distance from the drag start; negative means dragged left.
    pub offset: f64,
    /// Pointer velocity at release; negative means moving left.
    pub velocity: f64,
}

impl DragRelease {
    /// Classify the release against the configured thresholds.
    pub fn direction(&self, config: &CarouselConfig) -> Option<Direction> {
        let buffer = config.drag_buffer;
        let speed = config.velocity_threshold;
        if self.offset <= -buffer || self.velocity <= -speed {
            Some(Direction::Forward)
        } else if self.offset >= buffer || self.velocity >= speed {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

/// Pointer samples of one drag gesture.
#[derive(Debug, Clone)]
pub struct DragTracker {
    start_x: f64,
    samples: VecDeque<(f64, f64)>,
}

impl DragTracker {
    /// Start tracking at pointer `x` and timestamp `t_ms`.
    pub fn new(x: f64, t_ms: f64) -> Self {
        let mut samples = VecDeque::new();
        samples.push_back((t_ms, x));
        Self {
            start_x: x,
            samples,
        }
    }

    /// Record a pointer sample.
    pub fn record(&mut self, x: f64, t_ms: f64) {
        self.samples.push_back((t_ms, x));
        while let Some(&(t0, _)) = self.samples.front() {
            if t_ms - t0 > VELOCITY_WINDOW_MS && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Offset from the start of the gesture.
    pub fn offset(&self) -> f64 {
        self.samples
            .back()
            .map(|&(_, x)| x - self.start_x)
            .unwrap_or(0.0)
    }

    /// Velocity (px/s) over the recent sample window.
    pub fn velocity(&self) -> f64 {
        match (self.samples.front(), self.samples.back()) {
            (Some(&(t0, x0)), Some(&(t1, x1))) if t1 > t0 => (x1 - x0) / (t1 - t0) * 1000.0,
            _ => 0.0,
        }
    }

    /// Offset and velocity of the finished gesture.
    pub fn release(&self) -> DragRelease {
        DragRelease {
            offset: self.offset(),
            velocity: self.velocity(),
        }
    }
}

/// Carousel position and gesture state.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    len: usize,
    position: usize,
    item_width: f64,
    drag: Option<DragTracker>,
    animating: bool,
}

impl Carousel {
    /// Carousel over `len` items, sized for a typical phone until the first
    /// [`Carousel::resize`].
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            len,
            position: 0,
            item_width: 350.0,
            drag: None,
            animating: false,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current page, always `< len` unless the carousel is empty.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Width of one card in px.
    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    /// Distance between two consecutive cards.
    pub fn stride(&self) -> f64 {
        self.item_width + self.config.gap
    }

    /// Resting translation of the track for the current position.
    pub fn track_offset(&self) -> f64 {
        -(self.position as f64) * self.stride()
    }

    /// Translation while a drag is in progress, with elastic edges.
    pub fn dragged_offset(&self) -> f64 {
        let base = self.track_offset();
        let Some(drag) = &self.drag else {
            return base;
        };
        let raw = base + drag.offset();
        let min = -(self.len.saturating_sub(1) as f64) * self.stride();
        if raw > 0.0 {
            raw * self.config.elasticity
        } else if raw < min {
            min + (raw - min) * self.config.elasticity
        } else {
            raw
        }
    }

    /// Replace the item set. The position always returns to the first card.
    pub fn set_items(&mut self, len: usize) {
        self.len = len;
        self.position = 0;
        self.drag = None;
    }

    /// Recompute the card width from the container width.
    pub fn resize(&mut self, container_width: f64) {
        self.item_width = (container_width - self.config.container_padding).max(0.0);
    }

    /// Jump to `index`. Out of range requests are ignored.
    ///
    /// Returns `true` when the position changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.position {
            return false;
        }
        self.position = index;
        true
    }

    /// Whether a previous page exists.
    pub fn can_prev(&self) -> bool {
        self.position > 0
    }

    /// Whether a next page exists.
    pub fn can_next(&self) -> bool {
        self.position + 1 < self.len
    }

    /// Move one page back if possible.
    pub fn prev(&mut self) -> bool {
        self.can_prev() && self.go_to(self.position - 1)
    }

    /// Move one page forward if possible.
    pub fn next(&mut self) -> bool {
        self.can_next() && self.go_to(self.position + 1)
    }

    /// Step one page in `direction`, clamped to the bounds.
    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.prev(),
        }
    }

    /// Map an arrow key to a page change.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => false,
        }
    }

    /// Spring transition started.
    pub fn animation_started(&mut self) {
        self.animating = true;
    }

    /// Spring transition settled; dragging is allowed again.
    pub fn animation_finished(&mut self) {
        self.animating = false;
    }

    /// Whether a spring transition is running.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether a drag gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin a drag. Refused while animating or when empty.
    pub fn begin_drag(&mut self, x: f64, t_ms: f64) -> bool {
        if self.animating || self.len == 0 {
            return false;
        }
        self.drag = Some(DragTracker::new(x, t_ms));
        true
    }

    /// Pointer moved during a drag.
    pub fn drag_to(&mut self, x: f64, t_ms: f64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.record(x, t_ms);
        }
    }

    /// Finish the active drag at pointer `x`.
    ///
    /// Returns the new position when the gesture changed the page.
    pub fn end_drag(&mut self, x: f64, t_ms: f64) -> Option<usize> {
        let mut drag = self.drag.take()?;
        drag.record(x, t_ms);
        self.release(drag.release())
    }

    /// Abandon the drag without changing page (pointer cancelled).
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Apply a finished gesture.
    ///
    /// Returns the new position when it changed, `None` for a snap-back.
    pub fn release(&mut self, release: DragRelease) -> Option<usize> {
        self.drag = None;
        let direction = release.direction(&self.config)?;
        self.step(direction).then_some(self.position)
    }

    /// Screen reader announcement for the current page.
    pub fn announcement(&self) -> String {
        if self.len == 0 {
            String::new()
        } else {
            format!("Item {} of {}", self.position + 1, self.len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len, CarouselConfig::default())
    }

    fn swipe(offset: f64, velocity: f64) -> DragRelease {
        DragRelease { offset, velocity }
    }

    #[test]
    fn short_slow_drags_snap_back() {
        let mut c = carousel(5);
        c.go_to(2);
        for (offset, velocity) in [(0.0, 0.0), (-49.9, -499.0), (49.0, 499.9), (-10.0, 300.0)] {
            assert_eq!(c.release(swipe(offset, velocity)), None);
            assert_eq!(c.position(), 2);
        }
    }

    #[test]
    fn left_swipe_advances_exactly_one() {
        let mut c = carousel(3);
        assert_eq!(c.release(swipe(-50.0, 0.0)), Some(1));
        assert_eq!(c.release(swipe(-400.0, -2000.0)), Some(2));
        // clamped at the last card
        assert_eq!(c.release(swipe(-400.0, 0.0)), None);
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn fast_flick_counts_even_when_short() {
        let mut c = carousel(4);
        assert_eq!(c.release(swipe(-12.0, -650.0)), Some(1));
        assert_eq!(c.release(swipe(8.0, 900.0)), Some(0));
    }

    #[test]
    fn right_swipe_at_start_is_noop() {
        let mut c = carousel(4);
        assert_eq!(c.release(swipe(200.0, 0.0)), None);
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn position_stays_in_bounds_for_any_sequence() {
        for len in 0..6 {
            let mut c = carousel(len);
            let ops: [&dyn Fn(&mut Carousel); 5] = [
                &|c| {
                    c.next();
                },
                &|c| {
                    c.prev();
                },
                &|c| {
                    c.go_to(7);
                },
                &|c| {
                    c.release(swipe(-80.0, 0.0));
                },
                &|c| {
                    c.release(swipe(80.0, 0.0));
                },
            ];
            for round in 0..40 {
                ops[(round * 7 + len) % ops.len()](&mut c);
                if len == 0 {
                    assert_eq!(c.position(), 0);
                } else {
                    assert!(c.position() < len, "len={len} position={}", c.position());
                }
            }
        }
    }

    #[test]
    fn set_items_resets_to_first_card() {
        let mut c = carousel(6);
        c.go_to(5);
        c.set_items(2);
        assert_eq!(c.position(), 0);
        assert_eq!(c.len(), 2);
        c.set_items(6);
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn out_of_range_indicator_is_ignored() {
        let mut c = carousel(3);
        assert!(!c.go_to(3));
        assert!(c.go_to(2));
        assert!(!c.go_to(2));
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn buttons_disable_at_bounds() {
        let mut c = carousel(2);
        assert!(!c.can_prev());
        assert!(c.can_next());
        assert!(c.next());
        assert!(c.can_prev());
        assert!(!c.can_next());
        assert!(!c.next());
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut c = carousel(3);
        assert!(c.handle_key("ArrowRight"));
        assert!(c.handle_key("ArrowRight"));
        assert!(!c.handle_key("ArrowRight"));
        assert!(c.handle_key("ArrowLeft"));
        assert!(!c.handle_key("Enter"));
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn dragging_is_refused_while_animating() {
        let mut c = carousel(3);
        c.animation_started();
        assert!(!c.begin_drag(100.0, 0.0));
        assert!(!c.is_dragging());
        c.animation_finished();
        assert!(c.begin_drag(100.0, 0.0));
        assert!(c.is_dragging());
    }

    #[test]
    fn empty_carousel_refuses_drags() {
        let mut c = carousel(0);
        assert!(!c.begin_drag(0.0, 0.0));
        assert_eq!(c.announcement(), "");
    }

    #[test]
    fn full_gesture_uses_tracked_offset() {
        let mut c = carousel(3);
        c.resize(398.0);
        assert!(c.begin_drag(300.0, 0.0));
        c.drag_to(260.0, 40.0);
        c.drag_to(220.0, 80.0);
        assert_eq!(c.dragged_offset(), -80.0);
        assert_eq!(c.end_drag(200.0, 400.0), Some(1));
        assert!(!c.is_dragging());
        assert_eq!(c.track_offset(), -(350.0 + 16.0));
    }

    #[test]
    fn slow_tiny_gesture_snaps_back() {
        let mut c = carousel(3);
        assert!(c.begin_drag(100.0, 0.0));
        c.drag_to(90.0, 200.0);
        assert_eq!(c.end_drag(85.0, 400.0), None);
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn overscroll_is_elastic() {
        let mut c = carousel(2);
        c.resize(398.0);
        c.begin_drag(0.0, 0.0);
        c.drag_to(100.0, 16.0);
        assert_eq!(c.dragged_offset(), 10.0);
    }

    #[test]
    fn resize_subtracts_padding() {
        let mut c = carousel(1);
        c.resize(390.0);
        assert_eq!(c.item_width(), 342.0);
        c.resize(10.0);
        assert_eq!(c.item_width(), 0.0);
    }

    #[test]
    fn velocity_uses_recent_window() {
        let mut tracker = DragTracker::new(0.0, 0.0);
        tracker.record(-10.0, 500.0);
        tracker.record(-20.0, 1000.0);
        tracker.record(-70.0, 1050.0);
        tracker.record(-120.0, 1100.0);
        // 100px over the last 100ms
        assert_eq!(tracker.velocity(), -1000.0);
        assert_eq!(tracker.offset(), -120.0);
    }

    #[test]
    fn announcement_is_one_based() {
        let mut c = carousel(4);
        c.next();
        assert_eq!(c.announcement(), "Item 2 of 4");
    }
}
