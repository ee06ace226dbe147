use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::spelling::alphabet::{DIGITS, LETTERS, SYMBOLS};
use crate::ui::app::{App, StatusKind};
use crate::ui::list_view::ListView;
use crate::ui::theme::Theme;

/// Paint one frame. Needs `&mut App` because each surface records its inner
/// size here, which is what keeps centering math correct across resizes.
pub fn render(frame: &mut Frame, app: &mut App) {
    let background = Block::default().style(Style::default().bg(app.theme.bg));
    frame.render_widget(background, frame.area());

    // Main layout: input + strip + body + footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(3), // Compact strip
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_input(frame, app, main_chunks[0]);
    render_strip(frame, app, main_chunks[1]);

    // Split body into the spelling table and the saved-word list
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[2]);

    render_table(frame, app, body_chunks[0]);
    render_saved(frame, app, body_chunks[1]);
    render_footer(frame, app, main_chunks[3]);

    if app.show_reference {
        render_reference(frame, app);
    }
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            app.input.clone(),
            Style::default()
                .fg(app.theme.letter)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("▌", Style::default().fg(app.theme.accent)),
    ]);

    // Keep the cursor visible when the word outgrows the box.
    let inner_width = usize::from(area.width.saturating_sub(2));
    let scroll_x = (app.input.width() + 1).saturating_sub(inner_width) as u16;

    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" AlfaZulu ")
                .border_style(Style::default().fg(app.theme.accent)),
        )
        .scroll((0, scroll_x));

    frame.render_widget(paragraph, area);
}

fn render_strip(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .border_style(Style::default().fg(app.theme.fg_dim));

    let inner = block.inner(area);
    app.view.set_compact_viewport(inner.width, inner.height);

    let line = strip_line(app.view.compact(), app.view.cursor(), &app.theme);
    let (scroll_x, _) = app.view.compact().scroll_cells();

    let paragraph = Paragraph::new(line).block(block).scroll((0, scroll_x));
    frame.render_widget(paragraph, area);
}

fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Spelling ")
        .border_style(Style::default().fg(app.theme.accent));

    let inner = block.inner(area);
    app.view.set_detailed_viewport(inner.width, inner.height);

    let lines = table_lines(app.view.detailed(), app.view.cursor(), &app.theme);
    let (scroll_x, scroll_y) = app.view.detailed().scroll_cells();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_y, scroll_x));
    frame.render_widget(paragraph, area);
}

fn render_saved(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Saved ")
        .border_style(Style::default().fg(app.theme.fg_dim));

    if app.store.saved().is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Ctrl+S saves the current word",
            Style::default().fg(app.theme.fg_dim),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .saved()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let text_style = if app.saved_cursor() == Some(i) {
                Style::default()
                    .fg(app.theme.highlight_fg)
                    .bg(app.theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.fg)
            };
            let line = Line::from(vec![
                Span::styled(word.text.clone(), text_style),
                Span::raw(" "),
                Span::styled(
                    word.saved_at.format("%Y-%m-%d").to_string(),
                    Style::default().fg(app.theme.fg_dim),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => app.theme.fg_dim,
                StatusKind::Success => app.theme.success,
                StatusKind::Error => app.theme.error,
            };
            Paragraph::new(status.text.clone()).style(Style::default().fg(color))
        }
        None => Paragraph::new(
            "[type] spell  [←→] highlight  [Home] first  [^S] save  [^N/^P] cycle  [^R] alphabet  [Esc] quit",
        )
        .style(Style::default().fg(app.theme.fg_dim)),
    };
    frame.render_widget(footer, area);
}

fn render_reference(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.area(), 44, 26);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Spelling Alphabet ")
        .border_style(Style::default().fg(app.theme.accent));

    let paragraph = Paragraph::new(reference_lines(&app.theme))
        .block(block)
        .style(Style::default().bg(app.theme.bg));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Line builders (pure, unit-tested)
// ---------------------------------------------------------------------------

/// The compact strip as one line: code words separated by a single cell,
/// with the highlighted entry inverted.
fn strip_line(view: &ListView, cursor: Option<usize>, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, row) in view.rows().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if cursor == Some(i) {
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };
        spans.push(Span::styled(row.word.clone(), style));
    }
    Line::from(spans)
}

/// One line per entry: the padded letter column, then the code word. The
/// highlighted entry is painted across both columns.
fn table_lines(view: &ListView, cursor: Option<usize>, theme: &Theme) -> Vec<Line<'static>> {
    view.rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if cursor == Some(i) {
                let style = Style::default()
                    .fg(theme.highlight_fg)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD);
                Line::from(vec![
                    Span::styled(row.letter_cell(), style),
                    Span::styled(row.word.clone(), style),
                ])
            } else {
                Line::from(vec![
                    Span::styled(row.letter_cell(), Style::default().fg(theme.letter)),
                    Span::styled(row.word.clone(), Style::default().fg(theme.fg)),
                ])
            }
        })
        .collect()
}

/// The full alphabet reference: letters in two columns, then digits, then
/// symbols.
fn reference_lines(theme: &Theme) -> Vec<Line<'static>> {
    let letter_style = Style::default()
        .fg(theme.letter)
        .add_modifier(Modifier::BOLD);
    let word_style = Style::default().fg(theme.fg);
    let column = move |&(letter, word): &(char, &'static str)| -> Vec<Span<'static>> {
        vec![
            Span::styled(format!("{letter} "), letter_style),
            Span::styled(format!("{word:<12}"), word_style),
        ]
    };

    let mut lines = Vec::new();
    for i in 0..13 {
        let mut spans = column(&LETTERS[i]);
        spans.extend(column(&LETTERS[i + 13]));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    for i in 0..5 {
        let mut spans = column(&DIGITS[i]);
        spans.extend(column(&DIGITS[i + 5]));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    for pair in SYMBOLS.chunks(2) {
        let spans: Vec<Span> = pair.iter().flat_map(&column).collect();
        lines.push(Line::from(spans));
    }
    lines
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
