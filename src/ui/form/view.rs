//! Rendering of the summary form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{
    ACCENT_RED, ACCENT_YELLOW, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR, STATUS_OK,
};

use super::state::{Focus, FormState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INPUT_LABEL: &str = "✍️ Enter Your Text!";
const PLACEHOLDER: &str =
    "📝 Enter your text below to generate a concise and impactful summary.";
const SUMMARY_TITLE: &str = " 🎉 Here's Your Summary! 🎉 ";
const CLEAR_LABEL: &str = "🧹 Clear All";
const ERROR_PREFIX: &str = "⚠ ";

/// Most rows the error banner grows to before the message is clipped.
const MAX_ERROR_ROWS: usize = 4;

/// Size of the summary panel as of the last draw.
///
/// Scrolling is bounded by what was actually rendered, so the caller feeds
/// this back into [`FormIntent::ScrollSummary`](super::FormIntent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryViewport {
    /// Largest useful scroll offset; zero when the summary fits.
    pub max_scroll: u16,
    /// Visible summary rows.
    pub page: u16,
}

/// Render the whole form into `area`.
pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState) -> SummaryViewport {
    let banner = state
        .error_message()
        .map(|message| error_rows(message, area.width.saturating_sub(2)))
        .unwrap_or_default();
    let error_height = if banner.is_empty() {
        0
    } else {
        banner.len() as u16 + 2
    };
    let summary_constraint = if state.shows_summary_panel() {
        Constraint::Fill(1)
    } else {
        Constraint::Length(0)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(error_height),
            Constraint::Length(1),
            Constraint::Length(1),
            summary_constraint,
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            INPUT_LABEL,
            Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );
    render_input(frame, rows[1], state);
    if !banner.is_empty() {
        render_error(frame, rows[2], banner);
    }
    frame.render_widget(Paragraph::new(buttons_line(state)), rows[3]);
    if state.shows_summary_panel() {
        render_summary(frame, rows[5], state)
    } else {
        SummaryViewport::default()
    }
}

/// Render the text input with its character counter.
fn render_input(frame: &mut Frame, area: Rect, state: &FormState) {
    let focused = state.focus() == Focus::Input;
    let border = if focused { ACCENT_RED } else { ACCENT_YELLOW };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} ", state.counter_label()),
                Style::default().fg(HEADER_TEXT).bg(ACCENT_RED),
            ))
            .right_aligned(),
        );

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if state.input().is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(cursor_span());
        }
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(MUTED_TEXT)));
        frame.render_widget(
            Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false }),
            inner,
        );
        return;
    }

    let rows = wrap_chars(state.input(), inner.width as usize);
    let last = rows.len().saturating_sub(1);
    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(HEADER_TEXT))))
        .collect();
    if focused {
        if let Some(line) = lines.get_mut(last) {
            line.spans.push(cursor_span());
        }
    }

    // Keep the end of the text in view.
    let scroll = lines.len().saturating_sub(inner.height as usize) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

/// Banner rows for `message`, wrapped to `width` and capped at
/// [`MAX_ERROR_ROWS`].
fn error_rows(message: &str, width: u16) -> Vec<String> {
    let mut rows = wrap_words(&format!("{}{}", ERROR_PREFIX, message), width as usize);
    rows.truncate(MAX_ERROR_ROWS);
    rows
}

/// Render the error banner.
fn render_error(frame: &mut Frame, area: Rect, rows: Vec<String>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    let style = Style::default()
        .fg(STATUS_ERROR)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the summary panel: spinner while loading, the summary otherwise.
fn render_summary(frame: &mut Frame, area: Rect, state: &FormState) -> SummaryViewport {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_YELLOW))
        .title_top(Line::from(Span::styled(
            SUMMARY_TITLE,
            Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD),
        )));
    if state.shows_copy_button() {
        block = block.title_top(
            Line::from(button_span(
                state.copy_label(),
                state.focus() == Focus::Copy,
                true,
            ))
            .right_aligned(),
        );
    }

    let inner = block.inner(area);
    if state.is_loading() {
        let spinner = SPINNER_FRAMES[(state.animation_tick() as usize) % SPINNER_FRAMES.len()];
        let body = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("✨", Style::default().fg(ACCENT_YELLOW)),
        ]));
        frame.render_widget(body.block(block), area);
        return SummaryViewport::default();
    }

    let rows = wrap_words(state.summary(), inner.width as usize);
    let total = rows.len();
    let page = inner.height;
    let max_scroll = total.saturating_sub(page as usize).min(u16::MAX as usize) as u16;
    let scroll = state.summary_scroll().min(max_scroll);

    if max_scroll > 0 {
        let first = scroll as usize + 1;
        let last = (scroll as usize + page as usize).min(total);
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {}-{} of {} ", first, last, total),
                Style::default().fg(MUTED_TEXT),
            ))
            .right_aligned(),
        );
    }

    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(HEADER_TEXT))
            .scroll((scroll, 0))
            .block(block),
        area,
    );

    SummaryViewport { max_scroll, page }
}

/// The Summarize / Clear All button row.
fn buttons_line(state: &FormState) -> Line<'static> {
    Line::from(vec![
        button_span(
            state.submit_label(),
            state.focus() == Focus::Summarize,
            state.can_submit(),
        ),
        Span::raw("   "),
        button_span(CLEAR_LABEL, state.focus() == Focus::Clear, true),
    ])
}

fn button_span(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    let mut style = Style::default().fg(HEADER_TEXT);
    if focused {
        style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }
    if !enabled {
        style = style.fg(GLOBAL_BORDER).add_modifier(Modifier::DIM);
    }
    Span::styled(format!(" {} ", label), style)
}

fn cursor_span() -> Span<'static> {
    Span::styled("▏", Style::default().fg(ACCENT_RED))
}

/// Hard-wrap `text` into rows of at most `width` characters.
///
/// Every `\n` starts a new row, so an empty line still occupies one.
fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect()));
    }
    rows
}

/// Word-wrap `text` into rows at most `width` cells wide.
///
/// Breaks at the last space that fits; a word longer than a row is split.
/// Every `\n` starts a new row.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row: Vec<char> = Vec::new();
        let mut row_width = 0;
        for ch in line.chars() {
            let ch_width = char_width(ch);
            if ch == ' ' && row_width + ch_width > width {
                rows.push(row.drain(..).collect());
                row_width = 0;
                continue;
            }
            while row_width + ch_width > width && !row.is_empty() {
                match row.iter().rposition(|c| *c == ' ') {
                    Some(space) if space > 0 => {
                        let rest = row.split_off(space + 1);
                        row.pop();
                        rows.push(row.iter().collect());
                        row = rest;
                    }
                    _ => rows.push(row.drain(..).collect()),
                }
                row_width = row.iter().map(|c| char_width(*c)).sum();
            }
            row.push(ch);
            row_width += ch_width;
        }
        rows.push(row.into_iter().collect());
    }
    rows
}

fn char_width(ch: char) -> usize {
    Span::raw(ch.to_string()).width()
}
