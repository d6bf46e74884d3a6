//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    query: &'a str,
    /// Byte offset of the cursor in the query
    cursor: usize,
    prompt: &'a str,
    theme: &'a Theme,
    /// Number of templates the query currently keeps
    matched: Option<(usize, usize)>,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            prompt,
            theme,
            matched: None,
        }
    }

    /// Show a `matched/total` counter after the query
    #[must_use]
    pub const fn counter(mut self, matched: usize, total: usize) -> Self {
        self.matched = Some((matched, total));
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let (before, after) = self
            .query
            .split_at_checked(self.cursor)
            .unwrap_or((self.query, ""));

        let mut spans = vec![
            Span::styled(self.prompt, self.theme.dimmed_style()),
            Span::raw(" "),
            Span::raw(before),
            cursor,
            Span::raw(after),
        ];

        if let Some((matched, total)) = self.matched {
            spans.push(Span::styled(
                format!("  {matched}/{total}"),
                self.theme.dimmed_style(),
            ));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
