//! Input handling tests
//!
//! Tests for how the app reacts to edits, highlight navigation, wheel
//! scrolling and drag gestures.

use std::time::Instant;

use alfazulu::store::WordStore;
use alfazulu::ui::theme::Theme;
use alfazulu::ui::{App, Config};

/// Helper to create a test app preloaded with `word`.
fn create_test_app(word: &str) -> App {
    App::new(
        word.to_string(),
        WordStore::in_memory(),
        Config::default(),
        Theme::default_theme().clone(),
    )
}

#[tokio::test]
async fn test_new_app_renders_the_initial_word() {
    let app = create_test_app("Hi");
    assert_eq!(app.input, "Hi");
    assert_eq!(app.view.len(), 2);
    assert_eq!(app.view.cursor(), None);
}

#[tokio::test]
async fn test_push_char_appends_one_entry() {
    let mut app = create_test_app("");
    app.push_char('h');
    app.push_char('i');
    assert_eq!(app.view.len(), 2);
    assert_eq!(app.view.detailed().rows()[0].word, "Hotel");
}

#[tokio::test]
async fn test_backspace_shrinks_and_drops_a_trailing_highlight() {
    let now = Instant::now();
    let mut app = create_test_app("ab");
    app.highlight_first(now);
    app.move_highlight(true, now);
    assert_eq!(app.view.cursor(), Some(1));

    app.backspace();
    assert_eq!(app.view.len(), 1);
    assert_eq!(app.view.cursor(), None);

    // Backspace on an empty word changes nothing.
    app.backspace();
    app.backspace();
    assert_eq!(app.input, "");
    assert_eq!(app.view.len(), 0);
}

#[tokio::test]
async fn test_clear_input_empties_both_views() {
    let mut app = create_test_app("hello");
    app.clear_input();
    assert_eq!(app.input, "");
    assert!(app.view.is_empty());
    assert_eq!(app.view.compact().len(), 0);
}

#[tokio::test]
async fn test_editing_clears_the_status_line() {
    let mut app = create_test_app("hi");
    app.save_word();
    assert!(app.status.is_some());

    app.push_char('x');
    assert!(app.status.is_none());
}

#[tokio::test]
async fn test_wheel_walks_the_highlight() {
    let now = Instant::now();
    let mut app = create_test_app("abc");

    app.wheel(true, now);
    assert_eq!(app.view.cursor(), Some(0));
    app.wheel(true, now);
    app.wheel(true, now);
    assert_eq!(app.view.cursor(), Some(2));

    app.wheel(false, now);
    assert_eq!(app.view.cursor(), Some(1));
}

#[tokio::test]
async fn test_wheel_at_the_end_falls_through_to_scrolling() {
    let now = Instant::now();
    let mut app = create_test_app("abcdefgh");
    app.view.set_detailed_viewport(30, 4);

    // Wheel to the last entry faster than the glide can follow.
    for _ in 0..8 {
        app.wheel(true, now);
    }
    assert_eq!(app.view.cursor(), Some(7));
    assert_eq!(app.view.detailed().offsets().1, 0.0);

    // The ninth tick cannot move the highlight, so it scrolls one line.
    app.wheel(true, now);
    assert_eq!(app.view.cursor(), Some(7));
    assert_eq!(app.view.detailed().offsets().1, 1.0);

    app.wheel(true, now);
    assert_eq!(app.view.detailed().offsets().1, 2.0);
}

#[tokio::test]
async fn test_wheel_on_an_empty_word_is_harmless() {
    let now = Instant::now();
    let mut app = create_test_app("");
    app.wheel(true, now);
    app.wheel(false, now);
    assert_eq!(app.view.cursor(), None);
}

#[tokio::test]
async fn test_drag_right_advances_the_highlight() {
    let now = Instant::now();
    let mut app = create_test_app("aaaa");
    // Four entries of "Alfa" calibrate the horizontal threshold to 5 cells.
    assert_eq!(app.view.swipe_thresholds(), (5, 1));

    app.touch_began(0, 10);
    app.touch_moved(5, 10, now);
    assert_eq!(app.view.cursor(), Some(0));

    app.touch_moved(10, 10, now);
    assert_eq!(app.view.cursor(), Some(1));

    app.touch_ended();
    // Samples after release are ignored.
    app.touch_moved(40, 10, now);
    assert_eq!(app.view.cursor(), Some(1));
}

#[tokio::test]
async fn test_vertical_drag_uses_the_row_threshold() {
    let now = Instant::now();
    let mut app = create_test_app("abc");

    app.touch_began(10, 10);
    // One row of vertical travel per entry.
    app.touch_moved(10, 11, now);
    assert_eq!(app.view.cursor(), Some(0));
    app.touch_moved(10, 12, now);
    assert_eq!(app.view.cursor(), Some(1));
    app.touch_moved(10, 11, now);
    assert_eq!(app.view.cursor(), Some(0));
}

#[tokio::test]
async fn test_drag_without_press_is_ignored() {
    let now = Instant::now();
    let mut app = create_test_app("abc");
    app.touch_moved(50, 50, now);
    assert_eq!(app.view.cursor(), None);
}

#[tokio::test]
async fn test_highlight_survives_a_same_length_edit() {
    let now = Instant::now();
    let mut app = create_test_app("abc");
    app.highlight_first(now);
    app.move_highlight(true, now);

    // Replace the last letter: backspace then a different character.
    app.backspace();
    app.push_char('z');
    assert_eq!(app.view.cursor(), Some(1), "entry 1 still exists");
    assert_eq!(app.view.detailed().rows()[2].word, "Zulu");
}
