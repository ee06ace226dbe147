//! # List Widget
//!
//! The retained row list behind each of the two spelling views.
//!
//! A [`ListView`] owns an ordered vector of [`Row`]s plus the scroll state
//! for both axes. Rows have index-based identity: [`replace`] swaps content
//! in place so scroll offsets and highlight indices stay meaningful across
//! renders, while [`append`] and [`truncate`] are the only structural
//! mutations and bump the revision counter.
//!
//! Geometry is measured in terminal cells with `unicode-width`, so centering
//! math stays honest for wide glyphs.
//!
//! [`replace`]: ListView::replace
//! [`append`]: ListView::append
//! [`truncate`]: ListView::truncate

use std::time::Instant;

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::ui::scroll::AxisScroll;

/// Gap between entries in a horizontal strip, in cells.
pub const STRIP_GAP: usize = 1;

/// Width of the letter column in a vertical table, in cells.
pub const LETTER_COL: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// A positional update named a row that does not exist. The renderer's
    /// diff only replaces within the overlapping prefix, so hitting this
    /// means a caller skipped the structural update.
    #[error("row index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// How a view lays its rows out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Entries flow left to right on a single line (the compact preview).
    Horizontal,
    /// One entry per line (the detailed table).
    Vertical,
}

/// One visual entry: the typed character and its code word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub letter: String,
    pub word: String,
}

impl Row {
    pub fn new(letter: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            word: word.into(),
        }
    }

    /// Width of this entry in a horizontal strip, in cells.
    pub fn strip_width(&self) -> usize {
        self.word.width()
    }

    /// The letter padded out to the table's letter column.
    pub fn letter_cell(&self) -> String {
        let pad = LETTER_COL.saturating_sub(self.letter.width()).max(1);
        format!("{}{}", self.letter, " ".repeat(pad))
    }

    /// Width of this entry as a table line, in cells.
    pub fn table_width(&self) -> usize {
        self.letter_cell().width() + self.word.width()
    }
}

/// An ordered list of rows plus its viewport and scroll state.
#[derive(Debug)]
pub struct ListView {
    orientation: Orientation,
    rows: Vec<Row>,
    revision: u64,
    viewport: (u16, u16),
    x: AxisScroll,
    y: AxisScroll,
}

impl ListView {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            rows: Vec::new(),
            revision: 0,
            viewport: (0, 0),
            x: AxisScroll::new(),
            y: AxisScroll::new(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Structural-change counter. Bumped by [`append`](Self::append) and an
    /// effective [`truncate`](Self::truncate), never by in-place replacement.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn append(&mut self, row: Row) {
        self.rows.push(row);
        self.revision += 1;
    }

    /// Swap the content of an existing row, keeping its identity.
    pub fn replace(&mut self, index: usize, row: Row) -> Result<(), ListError> {
        let len = self.rows.len();
        match self.rows.get_mut(index) {
            Some(slot) => {
                *slot = row;
                Ok(())
            }
            None => Err(ListError::IndexOutOfRange { index, len }),
        }
    }

    /// Drop every row at `to_len` and beyond. Asking for the current length
    /// or more is a no-op.
    pub fn truncate(&mut self, to_len: usize) {
        if to_len >= self.rows.len() {
            return;
        }
        self.rows.truncate(to_len);
        self.revision += 1;
        self.clamp_scroll();
    }

    /// Record the inner size of the surface this view is painted into.
    /// Called on every draw so centering math follows resizes.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.clamp_scroll();
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    /// Bounding box of one entry in content coordinates: `(x, y, w, h)` in
    /// cells. `None` for an index past the end.
    pub fn entry_rect(&self, index: usize) -> Option<(f32, f32, f32, f32)> {
        let row = self.rows.get(index)?;
        match self.orientation {
            Orientation::Horizontal => {
                let offset: usize = self.rows[..index]
                    .iter()
                    .map(|r| r.strip_width() + STRIP_GAP)
                    .sum();
                Some((offset as f32, 0.0, row.strip_width() as f32, 1.0))
            }
            Orientation::Vertical => {
                Some((0.0, index as f32, row.table_width() as f32, 1.0))
            }
        }
    }

    /// Total content extent `(width, height)` in cells.
    pub fn content_size(&self) -> (f32, f32) {
        match self.orientation {
            Orientation::Horizontal => {
                if self.rows.is_empty() {
                    return (0.0, 0.0);
                }
                let words: usize = self.rows.iter().map(Row::strip_width).sum();
                let gaps = (self.rows.len() - 1) * STRIP_GAP;
                ((words + gaps) as f32, 1.0)
            }
            Orientation::Vertical => {
                let widest = self
                    .rows
                    .iter()
                    .map(Row::table_width)
                    .max()
                    .unwrap_or(0);
                (widest as f32, self.rows.len() as f32)
            }
        }
    }

    /// Mean extent of one entry along the scrolling axis, used to calibrate
    /// swipe thresholds. `None` while the list is empty.
    pub fn average_main_extent(&self) -> Option<f32> {
        if self.rows.is_empty() {
            return None;
        }
        let (width, height) = self.content_size();
        let main = match self.orientation {
            Orientation::Horizontal => width,
            Orientation::Vertical => height,
        };
        Some(main / self.rows.len() as f32)
    }

    /// Largest valid scroll offset per axis for the current viewport.
    pub fn max_scroll(&self) -> (f32, f32) {
        let (content_w, content_h) = self.content_size();
        let (view_w, view_h) = self.viewport;
        (
            (content_w - f32::from(view_w)).max(0.0),
            (content_h - f32::from(view_h)).max(0.0),
        )
    }

    /// Scroll offsets that center an entry in the viewport, clamped to the
    /// valid range so edge entries settle flush rather than overscrolled.
    pub fn center_target(&self, index: usize) -> Option<(f32, f32)> {
        let (entry_x, entry_y, entry_w, entry_h) = self.entry_rect(index)?;
        let (view_w, view_h) = self.viewport;
        let (max_x, max_y) = self.max_scroll();
        let target_x = entry_x - f32::from(view_w) / 2.0 + entry_w / 2.0;
        let target_y = entry_y - f32::from(view_h) / 2.0 + entry_h / 2.0;
        Some((target_x.clamp(0.0, max_x), target_y.clamp(0.0, max_y)))
    }

    /// Glide both axes toward centering `index`.
    pub fn animate_center(&mut self, index: usize, now: Instant) {
        if let Some((target_x, target_y)) = self.center_target(index) {
            self.x.animate_to(target_x, now);
            self.y.animate_to(target_y, now);
        }
    }

    /// Center `index` immediately (animations disabled).
    pub fn jump_center(&mut self, index: usize) {
        if let Some((target_x, target_y)) = self.center_target(index) {
            self.x.jump_to(target_x);
            self.y.jump_to(target_y);
        }
    }

    /// Plain scroll by `delta` cells along the main axis, clamped to the
    /// valid range. Cancels any animation on that axis.
    pub fn nudge_main(&mut self, delta: f32) {
        let (max_x, max_y) = self.max_scroll();
        match self.orientation {
            Orientation::Horizontal => {
                let next = (self.x.offset() + delta).clamp(0.0, max_x);
                self.x.jump_to(next);
            }
            Orientation::Vertical => {
                let next = (self.y.offset() + delta).clamp(0.0, max_y);
                self.y.jump_to(next);
            }
        }
    }

    pub fn pump(&mut self, now: Instant) {
        self.x.pump(now);
        self.y.pump(now);
    }

    pub fn is_animating(&self) -> bool {
        self.x.is_animating() || self.y.is_animating()
    }

    /// Fractional scroll offsets `(x, y)`.
    pub fn offsets(&self) -> (f32, f32) {
        (self.x.offset(), self.y.offset())
    }

    /// Whole-cell scroll offsets `(x, y)` for painting.
    pub fn scroll_cells(&self) -> (u16, u16) {
        (self.x.offset_cells(), self.y.offset_cells())
    }

    fn clamp_scroll(&mut self) {
        let (max_x, max_y) = self.max_scroll();
        self.x.clamp_to(max_x);
        self.y.clamp_to(max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_with(words: &[&str]) -> ListView {
        let mut view = ListView::new(Orientation::Horizontal);
        for word in words {
            let letter = word.chars().next().map(String::from).unwrap_or_default();
            view.append(Row::new(letter, *word));
        }
        view
    }

    fn table_with(words: &[&str]) -> ListView {
        let mut view = ListView::new(Orientation::Vertical);
        for word in words {
            let letter = word.chars().next().map(String::from).unwrap_or_default();
            view.append(Row::new(letter, *word));
        }
        view
    }

    #[test]
    fn test_append_and_read_back() {
        let view = strip_with(&["Alfa", "Bravo"]);
        assert_eq!(view.len(), 2);
        assert_eq!(view.row(1).map(|r| r.word.as_str()), Some("Bravo"));
    }

    #[test]
    fn test_replace_swaps_content_in_place() {
        let mut view = strip_with(&["Alfa", "Bravo"]);
        view.replace(0, Row::new("C", "Charlie")).unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view.row(0).map(|r| r.word.as_str()), Some("Charlie"));
    }

    #[test]
    fn test_replace_out_of_range_reports_index_and_len() {
        let mut view = strip_with(&["Alfa"]);
        let err = view.replace(3, Row::new("X", "X-ray")).unwrap_err();
        assert_eq!(err, ListError::IndexOutOfRange { index: 3, len: 1 });
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_revision_tracks_structural_changes_only() {
        let mut view = ListView::new(Orientation::Vertical);
        assert_eq!(view.revision(), 0);

        view.append(Row::new("A", "Alfa"));
        view.append(Row::new("B", "Bravo"));
        assert_eq!(view.revision(), 2);

        view.replace(0, Row::new("Z", "Zulu")).unwrap();
        assert_eq!(view.revision(), 2, "replace keeps identity");

        view.truncate(1);
        assert_eq!(view.revision(), 3);

        view.truncate(5);
        assert_eq!(view.revision(), 3, "no-op truncate");
    }

    #[test]
    fn test_truncate_drops_the_suffix() {
        let mut view = table_with(&["Alfa", "Bravo", "Charlie"]);
        view.truncate(1);
        assert_eq!(view.len(), 1);
        assert_eq!(view.row(0).map(|r| r.word.as_str()), Some("Alfa"));
    }

    #[test]
    fn test_horizontal_entry_rects_include_gaps() {
        let view = strip_with(&["Alfa", "Bravo"]);
        assert_eq!(view.entry_rect(0), Some((0.0, 0.0, 4.0, 1.0)));
        // "Alfa" is 4 cells plus a 1-cell gap.
        assert_eq!(view.entry_rect(1), Some((5.0, 0.0, 5.0, 1.0)));
        assert_eq!(view.entry_rect(2), None);
        assert_eq!(view.content_size(), (10.0, 1.0));
    }

    #[test]
    fn test_vertical_entry_rects_are_one_line_each() {
        let view = table_with(&["Hotel", "India"]);
        assert_eq!(view.entry_rect(1), Some((0.0, 1.0, 9.0, 1.0)));
        assert_eq!(view.content_size(), (9.0, 2.0));
    }

    #[test]
    fn test_letter_cell_pads_to_column_width() {
        let row = Row::new("H", "Hotel");
        assert_eq!(row.letter_cell(), "H   ");
        assert_eq!(row.table_width(), 9);
    }

    #[test]
    fn test_average_main_extent() {
        assert_eq!(ListView::new(Orientation::Horizontal).average_main_extent(), None);

        let strip = strip_with(&["Alfa", "Bravo"]);
        // (4 + 1 + 5) cells over two entries.
        assert_eq!(strip.average_main_extent(), Some(5.0));

        let table = table_with(&["Alfa", "Bravo", "Charlie"]);
        assert_eq!(table.average_main_extent(), Some(1.0));
    }

    #[test]
    fn test_center_target_is_clamped_at_both_ends() {
        let mut view = table_with(&[
            "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India",
            "Juliett",
        ]);
        view.set_viewport(20, 4);
        // max_y = 10 - 4 = 6.
        assert_eq!(view.center_target(0).map(|t| t.1), Some(0.0));
        assert_eq!(view.center_target(9).map(|t| t.1), Some(6.0));
        // 5 - 2 + 0.5, inside the valid range.
        assert_eq!(view.center_target(5).map(|t| t.1), Some(3.5));
    }

    #[test]
    fn test_nudge_main_clamps_to_the_scroll_range() {
        let mut view = table_with(&["Alfa", "Bravo", "Charlie", "Delta", "Echo"]);
        view.set_viewport(20, 3);

        view.nudge_main(1.0);
        assert_eq!(view.offsets(), (0.0, 1.0));

        view.nudge_main(100.0);
        assert_eq!(view.offsets(), (0.0, 2.0));

        view.nudge_main(-100.0);
        assert_eq!(view.offsets(), (0.0, 0.0));
    }

    #[test]
    fn test_truncate_pulls_scroll_back_into_range() {
        let mut view = table_with(&[
            "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel",
        ]);
        view.set_viewport(20, 4);
        view.nudge_main(100.0);
        assert_eq!(view.offsets().1, 4.0);

        view.truncate(4);
        assert_eq!(view.offsets().1, 0.0, "content now fits the viewport");
    }

    #[test]
    fn test_animate_center_reaches_the_target() {
        use crate::ui::scroll::{SCROLL_STEPS, SCROLL_TICK};

        let t0 = Instant::now();
        let mut view = table_with(&[
            "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India",
            "Juliett",
        ]);
        view.set_viewport(20, 4);
        view.animate_center(5, t0);
        assert!(view.is_animating());

        view.pump(t0 + SCROLL_TICK * SCROLL_STEPS);
        assert_eq!(view.offsets().1, 3.5);
        assert!(!view.is_animating());
    }

    #[test]
    fn test_wide_glyphs_measure_by_display_width() {
        let mut view = ListView::new(Orientation::Horizontal);
        view.append(Row::new("字", "字word"));
        // The CJK glyph is two cells wide.
        assert_eq!(view.entry_rect(0), Some((0.0, 0.0, 6.0, 1.0)));
    }
}
