//! Native ratatui styled preview generation
//!
//! Converts syntect highlighting directly to ratatui styles without
//! intermediate ANSI escape codes. The head of the file comes from
//! [`PreviewGenerator`], so the pane and the plain preview agree on
//! truncation and binary detection.

use crate::preview::{PreviewContent, PreviewGenerator, gutter};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
#[cfg(feature = "syntax-highlighting")]
use ratatui::style::Modifier;
#[cfg(feature = "syntax-highlighting")]
use std::path::Path;
#[cfg(feature = "syntax-highlighting")]
use syntect::easy::HighlightLines;
#[cfg(feature = "syntax-highlighting")]
use syntect::highlighting::{FontStyle, ThemeSet};
#[cfg(feature = "syntax-highlighting")]
use syntect::parsing::SyntaxSet;

/// Theme used when none is configured or the configured one is unknown
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Styled preview content ready for ratatui rendering
#[derive(Debug, Clone)]
pub struct StyledPreview {
    /// Lines of styled text
    pub lines: Vec<Line<'static>>,
    /// Whether the content was truncated
    pub truncated: bool,
    /// Total number of lines in original file
    pub total_lines: usize,
}

impl StyledPreview {
    /// Create a preview with an error message
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        let error_style = Style::default().fg(Color::Red);
        Self {
            lines: vec![Line::styled(message.into(), error_style)],
            truncated: false,
            total_lines: 0,
        }
    }

    /// Create a preview for binary files
    #[must_use]
    pub fn binary() -> Self {
        let dim_style = Style::default().fg(Color::DarkGray);
        Self {
            lines: vec![Line::styled(PreviewContent::Binary.to_string(), dim_style)],
            truncated: false,
            total_lines: 0,
        }
    }
}

fn gutter_span(line_number: usize) -> Span<'static> {
    Span::styled(gutter(line_number), Style::default().fg(Color::DarkGray))
}

/// Generator for styled previews using native ratatui styles
#[cfg(feature = "syntax-highlighting")]
pub struct StyledPreviewGenerator {
    generator: PreviewGenerator,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

#[cfg(feature = "syntax-highlighting")]
impl StyledPreviewGenerator {
    /// Create a new styled preview generator
    ///
    /// `theme` names a syntect theme; unknown names fall back to
    /// [`DEFAULT_THEME`].
    #[must_use]
    pub fn new(generator: PreviewGenerator, theme: Option<&str>) -> Self {
        let theme_set = ThemeSet::load_defaults();
        let theme_name = match theme {
            Some(name) if theme_set.themes.contains_key(name) => name.to_string(),
            Some(name) => {
                log::warn!("unknown syntax theme {name:?}, using {DEFAULT_THEME}");
                DEFAULT_THEME.to_string()
            }
            None => DEFAULT_THEME.to_string(),
        };

        Self {
            generator,
            syntax_set: SyntaxSet::load_defaults_nonewlines(),
            theme_set,
            theme_name,
        }
    }

    /// Name of the syntect theme in use
    #[must_use]
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Generate a styled preview for a template path
    #[must_use]
    pub fn generate(&self, path: &str) -> StyledPreview {
        match self.generator.generate(path) {
            PreviewContent::Text {
                lines,
                truncated,
                total_lines,
            } => StyledPreview {
                lines: self.highlight_lines(&self.generator.expand(path), &lines),
                truncated,
                total_lines,
            },
            PreviewContent::Binary => StyledPreview::binary(),
            PreviewContent::Error(message) => StyledPreview::error(message),
        }
    }

    /// Apply syntax highlighting to lines
    fn highlight_lines(&self, path: &Path, lines: &[String]) -> Vec<Line<'static>> {
        let syntax = self
            .syntax_set
            .find_syntax_for_file(path)
            .ok()
            .flatten()
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let Some(theme) = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
        else {
            return plain_lines(lines);
        };
        let mut highlighter = HighlightLines::new(syntax, theme);

        lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                let mut spans = vec![gutter_span(idx + 1)];
                match highlighter.highlight_line(line, &self.syntax_set) {
                    Ok(ranges) => spans.extend(ranges.iter().map(|(style, text)| {
                        Span::styled((*text).to_string(), syntect_to_ratatui(style))
                    })),
                    Err(_) => spans.push(Span::raw(line.clone())),
                }
                Line::from(spans)
            })
            .collect()
    }
}

/// Convert syntect style to ratatui style
#[cfg(feature = "syntax-highlighting")]
fn syntect_to_ratatui(style: &syntect::highlighting::Style) -> Style {
    let fg = Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b);

    // Background is left to the terminal
    let mut ratatui_style = Style::default().fg(fg);

    if style.font_style.contains(FontStyle::BOLD) {
        ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        ratatui_style = ratatui_style.add_modifier(Modifier::UNDERLINED);
    }

    ratatui_style
}

fn plain_lines(lines: &[String]) -> Vec<Line<'static>> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| Line::from(vec![gutter_span(idx + 1), Span::raw(line.clone())]))
        .collect()
}

/// Fallback generator when syntax-highlighting feature is disabled
#[cfg(not(feature = "syntax-highlighting"))]
pub struct StyledPreviewGenerator {
    generator: PreviewGenerator,
}

#[cfg(not(feature = "syntax-highlighting"))]
impl StyledPreviewGenerator {
    #[must_use]
    pub fn new(generator: PreviewGenerator, _theme: Option<&str>) -> Self {
        Self { generator }
    }

    #[must_use]
    pub fn theme_name(&self) -> &str {
        DEFAULT_THEME
    }

    #[must_use]
    pub fn generate(&self, path: &str) -> StyledPreview {
        match self.generator.generate(path) {
            PreviewContent::Text {
                lines,
                truncated,
                total_lines,
            } => StyledPreview {
                lines: plain_lines(&lines),
                truncated,
                total_lines,
            },
            PreviewContent::Binary => StyledPreview::binary(),
            PreviewContent::Error(message) => StyledPreview::error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::PathResolver;
    use std::fs;
    use tempfile::TempDir;

    fn generator(head_size: usize, theme: Option<&str>) -> (TempDir, StyledPreviewGenerator) {
        let home = TempDir::new().unwrap();
        let resolver = PathResolver::new(home.path(), home.path());
        let styled = StyledPreviewGenerator::new(PreviewGenerator::new(head_size, resolver), theme);
        (home, styled)
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_generator_nonexistent_file() {
        let (_home, generator) = generator(10, None);
        let preview = generator.generate("~/nonexistent.txt");
        assert_eq!(preview.lines.len(), 1);
        assert_eq!(preview.total_lines, 0);
    }

    #[test]
    fn test_generator_text_file_has_gutter() {
        let (home, generator) = generator(10, None);
        fs::write(home.path().join("main.rs"), "fn main() {}\nlet x = 1;\n").unwrap();

        let preview = generator.generate("~/main.rs");
        assert_eq!(preview.lines.len(), 2);
        assert!(!preview.truncated);
        assert_eq!(line_text(&preview.lines[0]), "   1 fn main() {}");
        assert_eq!(line_text(&preview.lines[1]), "   2 let x = 1;");
    }

    #[test]
    fn test_generator_truncation() {
        let (home, generator) = generator(10, None);
        let content: String = (0..100).map(|i| format!("Line {i}\n")).collect();
        fs::write(home.path().join("long.txt"), content).unwrap();

        let preview = generator.generate("~/long.txt");
        assert_eq!(preview.lines.len(), 10);
        assert!(preview.truncated);
        assert_eq!(preview.total_lines, 100);
    }

    #[test]
    fn test_generator_binary() {
        let (home, generator) = generator(10, None);
        fs::write(home.path().join("a.bin"), [0u8, 159, 146, 150]).unwrap();

        let preview = generator.generate("~/a.bin");
        assert_eq!(line_text(&preview.lines[0]), "binary");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let (_home, generator) = generator(10, Some("no-such-theme"));
        assert_eq!(generator.theme_name(), DEFAULT_THEME);
    }

    #[cfg(feature = "syntax-highlighting")]
    #[test]
    fn test_known_theme_is_kept() {
        let (_home, generator) = generator(10, Some("InspiredGitHub"));
        assert_eq!(generator.theme_name(), "InspiredGitHub");
    }
}
