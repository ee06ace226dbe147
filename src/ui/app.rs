use std::time::Instant;

use crate::spelling;
use crate::store::WordStore;
use crate::ui::config::Config;
use crate::ui::spell_view::SpellView;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line feedback shown in the footer until the next edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

pub struct App {
    pub input: String,
    pub view: SpellView,
    pub store: WordStore,
    pub config: Config,
    pub theme: Theme,
    pub show_reference: bool,
    pub status: Option<StatusLine>,
    pub should_quit: bool,
    saved_cursor: Option<usize>,
}

impl App {
    pub fn new(initial: String, store: WordStore, config: Config, theme: Theme) -> Self {
        let mut view = SpellView::new();
        view.set_animations(config.animations);
        view.render(&spelling::resolve_tokens(&initial));
        Self {
            input: initial,
            view,
            store,
            config,
            theme,
            show_reference: false,
            status: None,
            should_quit: false,
            saved_cursor: None,
        }
    }

    fn rerender(&mut self) {
        self.view.render(&spelling::resolve_tokens(&self.input));
    }

    // --- editing ---

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.saved_cursor = None;
        self.status = None;
        self.rerender();
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.saved_cursor = None;
            self.status = None;
            self.rerender();
        }
    }

    pub fn clear_input(&mut self) {
        if self.input.is_empty() {
            return;
        }
        self.input.clear();
        self.saved_cursor = None;
        self.status = None;
        self.rerender();
    }

    // --- highlight navigation ---

    pub fn highlight_first(&mut self, now: Instant) -> bool {
        self.view.highlight_first(now)
    }

    pub fn move_highlight(&mut self, forward: bool, now: Instant) -> bool {
        self.view.move_highlight(forward, now)
    }

    /// A wheel tick first tries to move the highlight; at the boundaries it
    /// degrades to a plain one-line scroll so long content stays reachable.
    pub fn wheel(&mut self, forward: bool, now: Instant) {
        if !self.view.move_highlight(forward, now) {
            self.view.nudge_scroll(forward);
        }
    }

    // --- drag gestures ---

    pub fn touch_began(&mut self, x: u16, y: u16) {
        self.view.touch_began(x, y);
    }

    pub fn touch_moved(&mut self, x: u16, y: u16, now: Instant) {
        for direction in self.view.touch_moved(x, y) {
            self.view.move_highlight(direction.is_forward(), now);
        }
    }

    pub fn touch_ended(&mut self) {
        self.view.touch_ended();
    }

    // --- saved words ---

    pub fn save_word(&mut self) {
        if self.input.is_empty() {
            self.status = Some(StatusLine::info("Nothing to save"));
            return;
        }
        if !self.store.add(&self.input) {
            self.status = Some(StatusLine::info(format!(
                "\"{}\" is already saved",
                self.input
            )));
            return;
        }
        self.status = match self.store.save() {
            Ok(()) => Some(StatusLine::success(format!("Saved \"{}\"", self.input))),
            Err(err) => Some(StatusLine::error(format!("Save failed: {err:#}"))),
        };
    }

    /// Load the next (or previous) saved word into the speller.
    pub fn cycle_saved(&mut self, forward: bool) {
        let count = self.store.saved().len();
        if count == 0 {
            self.status = Some(StatusLine::info("No saved words yet"));
            return;
        }
        let next = match self.saved_cursor {
            None if forward => 0,
            None => count - 1,
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
        };
        self.saved_cursor = Some(next);
        self.input = self.store.saved()[next].text.clone();
        self.status = None;
        self.rerender();
    }

    /// Remove the saved word currently loaded via [`cycle_saved`].
    ///
    /// [`cycle_saved`]: App::cycle_saved
    pub fn delete_saved(&mut self) {
        let Some(index) = self.saved_cursor else {
            self.status = Some(StatusLine::info("No saved word selected"));
            return;
        };
        let text = self.store.saved()[index].text.clone();
        self.store.remove(&text);
        self.saved_cursor = None;
        self.status = match self.store.save() {
            Ok(()) => Some(StatusLine::success(format!("Removed \"{text}\""))),
            Err(err) => Some(StatusLine::error(format!("Save failed: {err:#}"))),
        };
    }

    pub fn saved_cursor(&self) -> Option<usize> {
        self.saved_cursor
    }

    // --- session toggles ---

    pub fn toggle_reference(&mut self) {
        self.show_reference = !self.show_reference;
    }

    pub fn cycle_theme(&mut self) {
        let themes = Theme::all();
        let current = themes
            .iter()
            .position(|t| t.name == self.theme.name)
            .unwrap_or(0);
        let next = &themes[(current + 1) % themes.len()];
        self.theme = next.clone();
        self.config.theme = next.name.to_string();
        self.status = Some(StatusLine::info(format!("Theme: {}", next.name)));
    }

    // --- animation ---

    pub fn tick(&mut self, now: Instant) {
        self.view.pump(now);
    }

    pub fn is_animating(&self) -> bool {
        self.view.is_animating()
    }
}
