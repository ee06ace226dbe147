//! # UI Module
//!
//! The terminal user interface of the speller.
//!
//! ## Components
//!
//! - [`App`] - application state (input word, views, saved words, status)
//! - [`SpellView`] - the synchronized pair of spelling views
//! - [`mod@render`] - rendering functions for drawing the TUI
//! - [`Theme`] / [`Config`] - colors and persisted preferences
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               Input (typed word)                 │
//! ├─────────────────────────────────────────────────┤
//! │        Preview (compact one-line strip)          │
//! ├──────────────────────────────┬──────────────────┤
//! │                              │                  │
//! │     Spelling table           │   Saved words    │
//! │   (letter + code word        │                  │
//! │    per line, scrollable)     │                  │
//! │                              │                  │
//! ├──────────────────────────────┴──────────────────┤
//! │              Footer (hints / status)             │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! The preview and the table always show the same sequence; the shared
//! highlight is kept by [`SpellView`] and both panes center on it when it
//! moves.

pub mod app;
pub mod config;
pub mod list_view;
pub mod render;
pub mod scroll;
pub mod spell_view;
pub mod swipe;
pub mod theme;
pub mod ticker;

pub use app::App;
pub use config::Config;
pub use render::render;
pub use spell_view::SpellView;
pub use theme::Theme;
