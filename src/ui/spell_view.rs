//! # Dual-View Renderer
//!
//! Keeps the compact strip and the detailed table showing the same token
//! sequence, and owns the one piece of state they share: the highlight
//! cursor.
//!
//! Rendering is a positional diff against the rows already held by the two
//! [`ListView`]s: overlapping positions are replaced in place, growth is
//! appended, shrinkage truncated. Both views receive identical structural
//! operations in the same order, so their lengths can never diverge.
//!
//! The cursor lives here and nowhere else; the views are projections of it
//! at paint time. Moving it glides all four scroll axes toward centering the
//! highlighted entry.

use std::time::Instant;

use crate::spelling::Token;
use crate::ui::list_view::{ListView, Orientation, Row};
use crate::ui::swipe::{SwipeDetector, SwipeDirection};

/// Swipe thresholds before the first calibration, in cells.
const DEFAULT_THRESHOLD_X: u16 = 6;
const DEFAULT_THRESHOLD_Y: u16 = 1;

/// The synchronized pair of spelling views plus highlight and gesture state.
#[derive(Debug)]
pub struct SpellView {
    compact: ListView,
    detailed: ListView,
    cursor: Option<usize>,
    swipe: SwipeDetector,
    animate: bool,
}

impl SpellView {
    pub fn new() -> Self {
        Self {
            compact: ListView::new(Orientation::Horizontal),
            detailed: ListView::new(Orientation::Vertical),
            cursor: None,
            swipe: SwipeDetector::new(DEFAULT_THRESHOLD_X, DEFAULT_THRESHOLD_Y),
            animate: true,
        }
    }

    /// Disable or re-enable scroll animation. With animation off, centering
    /// jumps straight to the target offset.
    pub fn set_animations(&mut self, enabled: bool) {
        self.animate = enabled;
    }

    // --- rendering ---------------------------------------------------------

    /// Bring both views up to date with a fresh token sequence.
    ///
    /// Idempotent: rendering the same sequence twice leaves identical rows
    /// and touches no structural state. Afterwards the cursor is dropped if
    /// its entry no longer exists (it is never clamped to a different entry)
    /// and the swipe thresholds are recalibrated from the new content.
    pub fn render(&mut self, tokens: &[Token]) {
        let old_len = self.detailed.len();

        for (index, token) in tokens.iter().enumerate() {
            let row = Row::new(token.source.to_string(), token.word.clone());
            if index < old_len {
                let replaced = self
                    .compact
                    .replace(index, row.clone())
                    .and(self.detailed.replace(index, row));
                debug_assert!(replaced.is_ok(), "prefix indices are always in range");
            } else {
                self.compact.append(row.clone());
                self.detailed.append(row);
            }
        }
        if tokens.len() < old_len {
            self.compact.truncate(tokens.len());
            self.detailed.truncate(tokens.len());
        }

        if self.cursor.is_some_and(|index| index >= tokens.len()) {
            self.cursor = None;
        }

        self.recalibrate_swipe();
    }

    /// Derive swipe thresholds from the average entry extents: roughly one
    /// word width horizontally and one line vertically. Skipped when the
    /// sequence is empty so the previous calibration survives.
    fn recalibrate_swipe(&mut self) {
        let (Some(avg_x), Some(avg_y)) = (
            self.compact.average_main_extent(),
            self.detailed.average_main_extent(),
        ) else {
            return;
        };
        self.swipe.set_thresholds(avg_x.round() as u16, avg_y.round() as u16);
    }

    // --- highlight ---------------------------------------------------------

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.detailed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detailed.is_empty()
    }

    /// Highlight the first entry and center both views on it. Returns
    /// `false` on an empty sequence, leaving the cursor unset.
    pub fn highlight_first(&mut self, now: Instant) -> bool {
        if self.is_empty() {
            self.cursor = None;
            return false;
        }
        self.set_cursor(0, now);
        true
    }

    /// Step the highlight one entry forward or back.
    ///
    /// With no highlight set this behaves like [`highlight_first`], so the
    /// first navigation always lands on a defined entry. Returns `false`
    /// when the move is impossible (boundary or empty sequence); nothing
    /// changes in that case.
    ///
    /// [`highlight_first`]: SpellView::highlight_first
    pub fn move_highlight(&mut self, forward: bool, now: Instant) -> bool {
        let Some(current) = self.cursor else {
            return self.highlight_first(now);
        };
        let next = if forward {
            current.checked_add(1)
        } else {
            current.checked_sub(1)
        };
        match next {
            Some(index) if index < self.len() => {
                self.set_cursor(index, now);
                true
            }
            _ => false,
        }
    }

    fn set_cursor(&mut self, index: usize, now: Instant) {
        self.cursor = Some(index);
        if self.animate {
            self.compact.animate_center(index, now);
            self.detailed.animate_center(index, now);
        } else {
            self.compact.jump_center(index);
            self.detailed.jump_center(index);
        }
    }

    // --- scrolling ---------------------------------------------------------

    /// Advance every due animation step on all four axes.
    pub fn pump(&mut self, now: Instant) {
        self.compact.pump(now);
        self.detailed.pump(now);
    }

    pub fn is_animating(&self) -> bool {
        self.compact.is_animating() || self.detailed.is_animating()
    }

    /// Plain one-line scroll of the detailed table, used when a wheel tick
    /// cannot move the highlight any further.
    pub fn nudge_scroll(&mut self, forward: bool) {
        self.detailed.nudge_main(if forward { 1.0 } else { -1.0 });
    }

    // --- gestures ----------------------------------------------------------

    pub fn touch_began(&mut self, x: u16, y: u16) {
        self.swipe.begin(x, y);
    }

    /// Feed a drag sample; returns the swipe events it fired.
    pub fn touch_moved(&mut self, x: u16, y: u16) -> Vec<SwipeDirection> {
        self.swipe.sample(x, y)
    }

    pub fn touch_ended(&mut self) {
        self.swipe.end();
    }

    pub fn swipe_thresholds(&self) -> (u16, u16) {
        self.swipe.thresholds()
    }

    // --- surfaces ----------------------------------------------------------

    pub fn compact(&self) -> &ListView {
        &self.compact
    }

    pub fn detailed(&self) -> &ListView {
        &self.detailed
    }

    pub fn set_compact_viewport(&mut self, width: u16, height: u16) {
        self.compact.set_viewport(width, height);
    }

    pub fn set_detailed_viewport(&mut self, width: u16, height: u16) {
        self.detailed.set_viewport(width, height);
    }
}

impl Default for SpellView {
    fn default() -> Self {
        Self::new()
    }
}
