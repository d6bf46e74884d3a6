//! Detail pane widget for the highlighted template

use crate::ui::ratatui_adapter::styled_preview::StyledPreview;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::types::DisplayItem;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shows Name, Path, Tags and the head of the file
pub struct DetailPane<'a> {
    item: Option<&'a DisplayItem>,
    preview: Option<&'a StyledPreview>,
    theme: &'a Theme,
}

impl<'a> DetailPane<'a> {
    #[must_use]
    pub const fn new(
        item: Option<&'a DisplayItem>,
        preview: Option<&'a StyledPreview>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            item,
            preview,
            theme,
        }
    }

    fn field(&self, label: &'static str, value: Span<'a>) -> Line<'a> {
        Line::from(vec![Span::styled(label, self.theme.dimmed_style()), value])
    }

    fn lines(&self, item: &'a DisplayItem) -> Vec<Line<'a>> {
        let name = item.metadata.name.as_deref().unwrap_or_default();
        let tags = item.metadata.tags.join(", ");

        let mut lines = vec![
            self.field("Name:    ", Span::styled(name, self.theme.name_style())),
            self.field("Path:    ", Span::raw(item.display.as_str())),
            self.field("Tags:    ", Span::styled(tags, self.theme.tag_style())),
            self.field("Content: ", Span::raw("")),
        ];

        if let Some(preview) = self.preview {
            for line in &preview.lines {
                lines.push(line.clone());
            }
            if preview.truncated {
                lines.push(Line::styled(
                    format!(
                        "     ... {} of {} lines",
                        preview.lines.len(),
                        preview.total_lines
                    ),
                    self.theme.dimmed_style(),
                ));
            }
        }

        lines
    }
}

impl Widget for DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.item.map_or_else(
            || vec![Line::styled("No matching template", self.theme.dimmed_style())],
            |item| self.lines(item),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Detail ");

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ItemMetadata;

    fn rendered(pane: DetailPane<'_>) -> String {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        pane.render(area, &mut buf);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_fields() {
        let theme = Theme::default();
        let item = DisplayItem::with_metadata(
            "0".into(),
            "~/t/a.go".into(),
            vec![],
            ItemMetadata {
                name: Some("main.go".into()),
                tags: vec!["go".into(), "cli".into()],
            },
        );

        let text = rendered(DetailPane::new(Some(&item), None, &theme));
        assert!(text.contains("Name:    main.go"));
        assert!(text.contains("Path:    ~/t/a.go"));
        assert!(text.contains("Tags:    go, cli"));
        assert!(text.contains("Content:"));
    }

    #[test]
    fn test_renders_placeholder_without_item() {
        let theme = Theme::default();
        let text = rendered(DetailPane::new(None, None, &theme));
        assert!(text.contains("No matching template"));
    }
}
