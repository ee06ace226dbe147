//! # AlfaZulu CLI Entry Point
//!
//! AlfaZulu spells words out loud for you: type a word and read the NATO/ICAO
//! code words off the screen while you are on the phone.
//!
//! ## Usage
//!
//! ```bash
//! # Open the speller (restores the last word)
//! alfazulu
//!
//! # Load a word at startup
//! alfazulu Meier
//!
//! # Print the spelling to stdout and exit
//! alfazulu --print Meier
//!
//! # Pick a theme for this session
//! alfazulu --theme nord
//! ```
//!
//! ## Key Bindings
//!
//! - printable characters / `Backspace` / `Ctrl+U` - edit the word
//! - `Left` / `Up` and `Right` / `Down` - move the highlight
//! - `Home` - highlight the first letter
//! - mouse wheel - move the highlight, plain scroll at the ends
//! - left-button drag - swipe through the letters
//! - `Ctrl+S` - save the current word
//! - `Ctrl+N` / `Ctrl+P` - load the next / previous saved word
//! - `Ctrl+D` - remove the loaded saved word
//! - `Ctrl+R` - toggle the alphabet reference
//! - `Ctrl+T` - cycle the color theme
//! - `Esc` / `Ctrl+C` / `Ctrl+Q` - quit

use alfazulu::spelling;
use alfazulu::store::WordStore;
use alfazulu::ui;
use alfazulu::ui::{App, Config, Theme};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::time::{Duration, Instant};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read terminal event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// AlfaZulu - spell words over the phone with the NATO alphabet
#[derive(Parser, Debug)]
#[command(name = "alfazulu")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Spell words with the NATO/ICAO alphabet", long_about = None)]
struct Args {
    /// Word to load into the speller at startup
    word: Option<String>,

    /// Print the spelling to stdout and exit (no TUI)
    #[arg(short, long, requires = "word")]
    print: bool,

    /// Theme name for this session (overrides the config file)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    // Print mode writes the spelling to stdout without entering the TUI.
    if args.print {
        let word = args.word.clone().unwrap_or_default();
        for line in spelling::spell_lines(&word) {
            println!("{line}");
        }
        return Ok(());
    }

    let config = Config::load();
    let theme_name = args.theme.as_deref().unwrap_or(&config.theme).to_string();
    let theme = match Theme::by_name(&theme_name) {
        Some(theme) => theme.clone(),
        None => {
            eprintln!("Warning: unknown theme \"{theme_name}\", falling back to default");
            Theme::default_theme().clone()
        }
    };

    let store = WordStore::open();
    let initial = args
        .word
        .unwrap_or_else(|| store.current_word().to_string());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(initial, store, config, theme);

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Persist session state; failures only warn.
    app.store.set_current_word(&app.input);
    if let Err(err) = app.store.save() {
        eprintln!("Warning: Failed to save word store: {err:#}");
    }
    if let Err(err) = app.config.save() {
        eprintln!("Warning: Failed to save config: {err:#}");
    }

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Poll fast while a scroll glide is running, relaxed otherwise.
        let poll_timeout = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        let event = match event_reader.read_event(poll_timeout)? {
            Some(event) => event,
            None => continue,
        };

        let now = Instant::now();
        match event {
            Event::Key(key) => handle_key(app, key, now),
            Event::Mouse(mouse) => handle_mouse(app, mouse, now),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // The reference overlay swallows every key except close and quit.
    if app.show_reference {
        match key.code {
            KeyCode::Esc => app.toggle_reference(),
            KeyCode::Char('r') if ctrl => app.toggle_reference(),
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => app.should_quit = true,
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('r') if ctrl => app.toggle_reference(),
        KeyCode::Char('t') if ctrl => app.cycle_theme(),
        KeyCode::Char('s') if ctrl => app.save_word(),
        KeyCode::Char('n') if ctrl => app.cycle_saved(true),
        KeyCode::Char('p') if ctrl => app.cycle_saved(false),
        KeyCode::Char('d') if ctrl => app.delete_saved(),
        KeyCode::Char('u') if ctrl => app.clear_input(),
        KeyCode::Char(c) if !ctrl => app.push_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Left | KeyCode::Up => {
            app.move_highlight(false, now);
        }
        KeyCode::Right | KeyCode::Down => {
            app.move_highlight(true, now);
        }
        KeyCode::Home => {
            app.highlight_first(now);
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.wheel(true, now),
        MouseEventKind::ScrollUp => app.wheel(false, now),
        MouseEventKind::Down(MouseButton::Left) => app.touch_began(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.touch_moved(mouse.column, mouse.row, now),
        MouseEventKind::Up(MouseButton::Left) => app.touch_ended(),
        _ => {}
    }
}
