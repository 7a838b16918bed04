//! Wheel gesture state - continuous input to discrete steps.
//!
//! Converts mouse-wheel notches and press-drag motion into discrete
//! advance/retreat steps for one wheel column. The state machine knows
//! nothing about the field it drives; wrap and clamp rules live with
//! the caller, which matches on the returned [`Step`].
//!
//! Two debouncing strategies:
//! - **Wheel** - deltas accumulate; crossing the threshold emits one
//!   step and resets the accumulator to zero.
//! - **Drag** - displacement is measured from an anchor; crossing the
//!   (smaller) threshold emits one step and re-anchors at the current
//!   position, so a single long drag emits a step per threshold
//!   crossing instead of one step total.
//!
//! Sub-threshold input never emits and never errors.

// =============================================================================
// CONSTANTS
// =============================================================================

/// Accumulated wheel delta required to emit one step.
pub const WHEEL_THRESHOLD: f32 = 20.0;

/// Drag displacement required to emit one step. Deliberately lower
/// than the wheel threshold: drags are slower, deliberate gestures.
pub const DRAG_THRESHOLD: f32 = 15.0;

/// Accumulator units contributed by one wheel notch. One notch is
/// enough to cross [`WHEEL_THRESHOLD`].
pub const WHEEL_NOTCH_DELTA: f32 = 24.0;

/// Displacement units contributed by one terminal row of drag. One row
/// is enough to cross [`DRAG_THRESHOLD`].
pub const DRAG_ROW_DELTA: f32 = 16.0;

// =============================================================================
// TYPES
// =============================================================================

/// One discrete wheel movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move the field forward (scroll down / drag up).
    Advance,
    /// Move the field backward (scroll up / drag down).
    Retreat,
}

/// Gesture state for one wheel column.
#[derive(Debug, Default)]
pub struct WheelState {
    /// Unconsumed wheel input magnitude.
    accumulator: f32,
    /// Row the current drag is measured from, if a drag is active.
    drag_anchor: Option<u16>,
    /// Steps emitted by the current drag.
    drag_steps: u32,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a wheel delta. Positive deltas advance, negative retreat.
    ///
    /// Emits at most one step; the accumulator resets to zero on
    /// emission.
    pub fn feed_wheel(&mut self, delta: f32) -> Option<Step> {
        self.accumulator += delta;

        if self.accumulator > WHEEL_THRESHOLD {
            self.accumulator = 0.0;
            Some(Step::Advance)
        } else if self.accumulator < -WHEEL_THRESHOLD {
            self.accumulator = 0.0;
            Some(Step::Retreat)
        } else {
            None
        }
    }

    /// Feed one wheel notch in the advance (scroll down) direction.
    pub fn wheel_notch_down(&mut self) -> Option<Step> {
        self.feed_wheel(WHEEL_NOTCH_DELTA)
    }

    /// Feed one wheel notch in the retreat (scroll up) direction.
    pub fn wheel_notch_up(&mut self) -> Option<Step> {
        self.feed_wheel(-WHEEL_NOTCH_DELTA)
    }

    /// Begin a drag gesture at a terminal row. Clears leftover wheel
    /// accumulation so the two input sources do not bleed together.
    pub fn begin_drag(&mut self, row: u16) {
        self.drag_anchor = Some(row);
        self.drag_steps = 0;
        self.accumulator = 0.0;
    }

    /// Feed a drag position update. Emits one step per threshold
    /// crossing, re-anchoring at the current row each time so the
    /// gesture keeps producing steps for as long as it keeps moving.
    ///
    /// Dragging upward (toward row 0) advances, mirroring a wheel that
    /// spins away from the user.
    pub fn feed_drag(&mut self, row: u16) -> Option<Step> {
        let anchor = self.drag_anchor?;
        let displacement = (anchor as f32 - row as f32) * DRAG_ROW_DELTA;

        let step = if displacement > DRAG_THRESHOLD {
            Some(Step::Advance)
        } else if displacement < -DRAG_THRESHOLD {
            Some(Step::Retreat)
        } else {
            None
        };

        if step.is_some() {
            self.drag_anchor = Some(row);
            self.drag_steps += 1;
        }
        step
    }

    /// End the drag gesture. Returns how many steps it emitted, which
    /// lets callers treat a motionless press-release as a click.
    pub fn end_drag(&mut self) -> u32 {
        self.drag_anchor = None;
        std::mem::take(&mut self.drag_steps)
    }

    /// Whether a drag gesture is currently active.
    pub fn dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    #[cfg(test)]
    fn accumulator(&self) -> f32 {
        self.accumulator
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_below_threshold_emits_nothing() {
        let mut wheel = WheelState::new();
        assert_eq!(wheel.feed_wheel(10.0), None);
        assert_eq!(wheel.feed_wheel(9.0), None);
        assert_eq!(wheel.accumulator(), 19.0);
    }

    #[test]
    fn test_wheel_crossing_threshold_emits_once_and_resets() {
        let mut wheel = WheelState::new();

        // Deltas summing past the threshold, no intermediate emission.
        assert_eq!(wheel.feed_wheel(10.0), None);
        assert_eq!(wheel.feed_wheel(11.0), Some(Step::Advance));
        assert_eq!(wheel.accumulator(), 0.0);

        // Next delta starts from scratch.
        assert_eq!(wheel.feed_wheel(10.0), None);
    }

    #[test]
    fn test_wheel_negative_direction() {
        let mut wheel = WheelState::new();
        assert_eq!(wheel.feed_wheel(-21.0), Some(Step::Retreat));
        assert_eq!(wheel.accumulator(), 0.0);
    }

    #[test]
    fn test_opposing_deltas_cancel() {
        let mut wheel = WheelState::new();
        assert_eq!(wheel.feed_wheel(15.0), None);
        assert_eq!(wheel.feed_wheel(-15.0), None);
        assert_eq!(wheel.accumulator(), 0.0);
        // Still no emission: magnitude never crossed the threshold.
    }

    #[test]
    fn test_single_notch_steps_once() {
        let mut wheel = WheelState::new();
        assert_eq!(wheel.wheel_notch_down(), Some(Step::Advance));
        assert_eq!(wheel.wheel_notch_up(), Some(Step::Retreat));
    }

    #[test]
    fn test_drag_emits_per_threshold_crossing() {
        let mut wheel = WheelState::new();
        wheel.begin_drag(10);

        // One continuous upward drag crossing the threshold three
        // times yields three discrete steps, re-anchoring each time.
        assert_eq!(wheel.feed_drag(9), Some(Step::Advance));
        assert_eq!(wheel.feed_drag(8), Some(Step::Advance));
        assert_eq!(wheel.feed_drag(7), Some(Step::Advance));
        assert_eq!(wheel.end_drag(), 3);
    }

    #[test]
    fn test_drag_downward_retreats() {
        let mut wheel = WheelState::new();
        wheel.begin_drag(5);
        assert_eq!(wheel.feed_drag(6), Some(Step::Retreat));
    }

    #[test]
    fn test_drag_without_begin_is_ignored() {
        let mut wheel = WheelState::new();
        assert_eq!(wheel.feed_drag(3), None);
        assert_eq!(wheel.end_drag(), 0);
    }

    #[test]
    fn test_stationary_drag_emits_nothing() {
        let mut wheel = WheelState::new();
        wheel.begin_drag(10);
        assert_eq!(wheel.feed_drag(10), None);
        assert_eq!(wheel.end_drag(), 0);
    }

    #[test]
    fn test_begin_drag_clears_wheel_accumulation() {
        let mut wheel = WheelState::new();
        wheel.feed_wheel(19.0);
        wheel.begin_drag(4);
        wheel.end_drag();
        // A fresh notch-sized delta must be judged on its own.
        assert_eq!(wheel.feed_wheel(19.0), None);
    }
}
