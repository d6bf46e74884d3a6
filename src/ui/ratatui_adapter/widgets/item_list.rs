//! Item list widget for displaying filtered templates

use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::types::DisplayItem;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Item list widget that displays filtered templates with a cursor marker
pub struct ItemList<'a> {
    state: &'a AppState,
    theme: &'a Theme,
    title: String,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        let filtered = state.filtered_indices.len();
        let total = state.items.len();
        let title = format!(" Templates ({filtered}/{total}) ");

        Self {
            state,
            theme,
            title,
        }
    }

    fn render_item(&self, item: &'a DisplayItem, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::raw(item.display.as_str()),
        ];

        if let Some(name) = item.metadata.name.as_deref() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(name, self.theme.dimmed_style()));
        }

        let line = Line::from(spans);
        if is_cursor {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line).style(self.theme.normal_style())
        }
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let visible_height = inner.height as usize;
        let start = self.state.scroll_offset;
        let end = (start + visible_height).min(self.state.filtered_indices.len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|visible_idx| {
                let item_idx = *self.state.filtered_indices.get(visible_idx)?;
                let item = self.state.items.get(item_idx)?;
                Some(self.render_item(item, visible_idx == self.state.cursor))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
