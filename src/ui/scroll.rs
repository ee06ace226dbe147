//! # Animated Scrolling
//!
//! Linear scroll interpolation for one axis of a view.
//!
//! [`ScrollAnimation`] is the pure math: a fixed number of equal steps from a
//! start offset to a target, with the final step landing on the target
//! exactly (no accumulated float drift). [`AxisScroll`] pairs the current
//! offset with a single animation slot and its [`Ticker`]; starting a new
//! animation replaces whatever was in flight, so offsets never jump or
//! oscillate between competing targets.

use std::time::{Duration, Instant};

use crate::ui::ticker::Ticker;

/// Number of interpolation steps for one centering scroll.
pub const SCROLL_STEPS: u32 = 10;

/// Interval between interpolation steps.
pub const SCROLL_TICK: Duration = Duration::from_millis(10);

/// A linear glide from one scroll offset to another.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start: f32,
    target: f32,
    total_steps: u32,
    current_step: u32,
}

impl ScrollAnimation {
    pub fn new(start: f32, target: f32, total_steps: u32) -> Self {
        Self {
            start,
            target,
            total_steps: total_steps.max(1),
            current_step: 0,
        }
    }

    /// Advance one step and return the new offset.
    ///
    /// The final step returns `target` itself rather than an interpolated
    /// value. Stepping past the end keeps returning the target.
    pub fn step(&mut self) -> f32 {
        self.current_step = (self.current_step + 1).min(self.total_steps);
        if self.is_done() {
            self.target
        } else {
            let t = self.current_step as f32 / self.total_steps as f32;
            self.start + (self.target - self.start) * t
        }
    }

    pub fn is_done(&self) -> bool {
        self.current_step >= self.total_steps
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

/// Scroll state for a single axis: the offset painted from, plus the one
/// animation that may currently be moving it.
#[derive(Debug, Default)]
pub struct AxisScroll {
    offset: f32,
    anim: Option<ScrollAnimation>,
    ticker: Ticker,
}

impl AxisScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset in fractional cells.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current offset rounded to whole cells, for painting.
    pub fn offset_cells(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    /// Set the offset immediately, canceling any in-flight animation.
    pub fn jump_to(&mut self, offset: f32) {
        self.offset = offset.max(0.0);
        self.anim = None;
        self.ticker.clear();
    }

    /// Begin an animated glide to `target`, replacing any in-flight
    /// animation on this axis.
    pub fn animate_to(&mut self, target: f32, now: Instant) {
        self.anim = Some(ScrollAnimation::new(
            self.offset,
            target.max(0.0),
            SCROLL_STEPS,
        ));
        self.ticker.start(SCROLL_TICK, now);
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Apply every animation step due by `now`.
    pub fn pump(&mut self, now: Instant) {
        let Self {
            offset,
            anim,
            ticker,
        } = self;
        ticker.drive(now, || {
            let Some(animation) = anim.as_mut() else {
                return false;
            };
            *offset = animation.step();
            if animation.is_done() {
                *anim = None;
                false
            } else {
                true
            }
        });
    }

    /// Pull an out-of-bounds offset back into `[0, max]` after the content
    /// or viewport shrank. In-flight animations are left alone; their
    /// targets were clamped when they started.
    pub fn clamp_to(&mut self, max: f32) {
        self.offset = self.offset.clamp(0.0, max.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_interpolation_steps() {
        let mut anim = ScrollAnimation::new(0.0, 10.0, 10);
        assert!((anim.step() - 1.0).abs() < f32::EPSILON);
        for _ in 0..3 {
            anim.step();
        }
        assert!((anim.step() - 5.0).abs() < f32::EPSILON);
        assert!(!anim.is_done());
    }

    #[test]
    fn test_final_step_lands_exactly_on_target() {
        // 1/3 steps do not sum cleanly in binary floats; the last step must
        // still produce the target bit-for-bit.
        let mut anim = ScrollAnimation::new(0.0, 1.0, 3);
        anim.step();
        anim.step();
        assert_eq!(anim.step(), 1.0);
        assert!(anim.is_done());
    }

    #[test]
    fn test_stepping_past_the_end_repeats_the_target() {
        let mut anim = ScrollAnimation::new(2.0, 7.0, 2);
        anim.step();
        anim.step();
        assert_eq!(anim.step(), 7.0);
        assert_eq!(anim.step(), 7.0);
    }

    #[test]
    fn test_backward_animation() {
        let mut anim = ScrollAnimation::new(10.0, 0.0, 10);
        assert!((anim.step() - 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_axis_pump_advances_to_target() {
        let t0 = Instant::now();
        let mut axis = AxisScroll::new();
        axis.animate_to(10.0, t0);
        assert!(axis.is_animating());

        axis.pump(t0 + SCROLL_TICK);
        assert!((axis.offset() - 1.0).abs() < f32::EPSILON);

        axis.pump(t0 + SCROLL_TICK * SCROLL_STEPS);
        assert_eq!(axis.offset(), 10.0);
        assert!(!axis.is_animating());
    }

    #[test]
    fn test_new_animation_replaces_in_flight_one() {
        let t0 = Instant::now();
        let mut axis = AxisScroll::new();
        axis.animate_to(10.0, t0);
        axis.pump(t0 + SCROLL_TICK * 5);
        assert!((axis.offset() - 5.0).abs() < f32::EPSILON);

        // Reverse midway; the new glide starts from the current offset.
        let t1 = t0 + SCROLL_TICK * 5;
        axis.animate_to(0.0, t1);
        axis.pump(t1 + SCROLL_TICK * SCROLL_STEPS);
        assert_eq!(axis.offset(), 0.0);
        assert!(!axis.is_animating());
    }

    #[test]
    fn test_jump_cancels_animation() {
        let t0 = Instant::now();
        let mut axis = AxisScroll::new();
        axis.animate_to(10.0, t0);
        axis.jump_to(3.0);
        assert!(!axis.is_animating());
        assert_eq!(axis.offset(), 3.0);

        // The canceled animation no longer ticks.
        axis.pump(t0 + SCROLL_TICK * SCROLL_STEPS);
        assert_eq!(axis.offset(), 3.0);
    }

    #[test]
    fn test_negative_targets_are_floored_at_zero() {
        let t0 = Instant::now();
        let mut axis = AxisScroll::new();
        axis.animate_to(-5.0, t0);
        axis.pump(t0 + SCROLL_TICK * SCROLL_STEPS);
        assert_eq!(axis.offset(), 0.0);
    }

    #[test]
    fn test_clamp_to_pulls_offset_back_into_range() {
        let mut axis = AxisScroll::new();
        axis.jump_to(12.0);
        axis.clamp_to(8.0);
        assert_eq!(axis.offset(), 8.0);
        axis.clamp_to(20.0);
        assert_eq!(axis.offset(), 8.0);
    }

    #[test]
    fn test_offset_cells_rounds() {
        let mut axis = AxisScroll::new();
        axis.jump_to(3.6);
        assert_eq!(axis.offset_cells(), 4);
        axis.jump_to(3.4);
        assert_eq!(axis.offset_cells(), 3);
    }
}
