use crate::ui::theme::{ACCENT_YELLOW, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const TAGLINE: &str = " 💡 Built with modern AI tools. Delivering clarity, one summary at a time.";

const HINTS: &str = " ^S Summarize │ ^L Clear │ ^Y Copy │ PgUp/PgDn Scroll │ Tab Focus │ ^Q Quit";

/// Bottom bar: tagline with the version, then the key hints.
pub struct Footer;

impl Footer {
    pub fn widget(area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(Line::from(TAGLINE).width())
            .saturating_sub(version.len());

        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let lines = vec![
            Line::from(vec![
                Span::styled(TAGLINE, Style::default().fg(ACCENT_YELLOW)),
                Span::raw(" ".repeat(padding)),
                Span::styled(version, hint_style),
            ]),
            Line::from(Span::styled(HINTS, hint_style)),
        ];

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
