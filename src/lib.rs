//! AlfaZulu TUI - spell words over the phone without thinking
//!
//! This library provides the core functionality for resolving text against
//! the NATO/ICAO spelling alphabet and presenting it in two synchronized,
//! scrollable terminal views.

pub mod spelling;
pub mod store;
pub mod ui;
