//! # Gesture Recognizer
//!
//! Turns a continuous mouse drag into discrete directional swipe events.
//!
//! The detector tracks one reference point per axis (seeded at press). Each
//! drag sample is compared against the reference; when the displacement on an
//! axis reaches that axis's threshold, one event fires for the axis and its
//! reference component moves to the sample, re-arming the detector. A slow
//! drag therefore fires repeatedly, once per threshold crossed, while a tiny
//! jitter fires nothing.
//!
//! Thresholds are recalibrated from content by the owning view; see
//! [`crate::ui::spell_view::SpellView`].

/// A discrete directional event produced from a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// Whether this direction means "advance" in reading order.
    pub fn is_forward(self) -> bool {
        matches!(self, SwipeDirection::Right | SwipeDirection::Down)
    }
}

/// Converts drag samples into [`SwipeDirection`] events.
///
/// Idle until [`begin`](SwipeDetector::begin) is called; samples that arrive
/// while idle (a drag whose press was missed) are ignored.
#[derive(Debug)]
pub struct SwipeDetector {
    reference: Option<(u16, u16)>,
    threshold_x: u16,
    threshold_y: u16,
}

impl SwipeDetector {
    pub fn new(threshold_x: u16, threshold_y: u16) -> Self {
        Self {
            reference: None,
            threshold_x: threshold_x.max(1),
            threshold_y: threshold_y.max(1),
        }
    }

    /// Begin tracking a drag at the press position.
    pub fn begin(&mut self, x: u16, y: u16) {
        self.reference = Some((x, y));
    }

    /// Stop tracking. Idempotent.
    pub fn end(&mut self) {
        self.reference = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.reference.is_some()
    }

    /// Update sensitivity. Thresholds are floored at one cell so a crossing
    /// stays reachable; takes effect from the next sample.
    pub fn set_thresholds(&mut self, x: u16, y: u16) {
        self.threshold_x = x.max(1);
        self.threshold_y = y.max(1);
    }

    pub fn thresholds(&self) -> (u16, u16) {
        (self.threshold_x, self.threshold_y)
    }

    /// Feed one drag sample and collect the events it fires.
    ///
    /// At most one event per axis fires per sample, however large the jump.
    /// A fired axis moves its reference component to the sample so the next
    /// crossing is measured from there; the other axis keeps accumulating.
    pub fn sample(&mut self, x: u16, y: u16) -> Vec<SwipeDirection> {
        let Some(reference) = self.reference.as_mut() else {
            return Vec::new();
        };

        let mut fired = Vec::new();

        let dx = i32::from(x) - i32::from(reference.0);
        if dx.unsigned_abs() >= u32::from(self.threshold_x) {
            fired.push(if dx < 0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            });
            reference.0 = x;
        }

        let dy = i32::from(y) - i32::from(reference.1);
        if dy.unsigned_abs() >= u32::from(self.threshold_y) {
            fired.push(if dy < 0 {
                SwipeDirection::Up
            } else {
                SwipeDirection::Down
            });
            reference.1 = y;
        }

        fired
    }
}
