//! Scripted UI implementations for testing

use super::error::Result;
use super::input::{self, UserInput};
use super::output::OutputWriter;
use super::traits::{FinderConfig, FuzzyFinder};
use super::types::FinderResult;
use std::sync::Mutex;

/// What the mock finder does when run
#[derive(Debug, Clone)]
enum Script {
    /// Return this key as the selection
    Select(String),
    /// Type this query and accept the first remaining item
    Query(String),
    /// Simulate the user pressing Esc
    Abort,
}

/// Mock fuzzy finder that returns predetermined selections
#[derive(Debug, Clone)]
pub struct MockFinder {
    script: Script,
}

impl MockFinder {
    /// Create a mock finder that picks the item with `key`
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            script: Script::Select(key.into()),
        }
    }

    /// Create a mock finder that types `query` and presses Enter
    ///
    /// Goes through the configured matcher, so it exercises filtering the
    /// same way the terminal finder does.
    #[must_use]
    pub fn typing(query: impl Into<String>) -> Self {
        Self {
            script: Script::Query(query.into()),
        }
    }

    /// Create a mock finder that simulates user abort
    #[must_use]
    pub const fn aborted() -> Self {
        Self {
            script: Script::Abort,
        }
    }
}

impl FuzzyFinder for MockFinder {
    fn run(&self, config: FinderConfig) -> Result<FinderResult> {
        Ok(match &self.script {
            Script::Select(key) => FinderResult::selected(key.clone()),
            Script::Query(query) => config
                .filter_keys(query)
                .first()
                .map_or_else(FinderResult::aborted, |key| {
                    FinderResult::selected((*key).to_string())
                }),
            Script::Abort => FinderResult::aborted(),
        })
    }
}

/// Mock input that answers every confirmation the same way
#[derive(Debug)]
pub struct MockInput {
    answer: Option<bool>,
    prompts: Mutex<Vec<String>>,
}

impl MockInput {
    /// Answer every prompt with `answer` (`None` = cancelled)
    #[must_use]
    pub const fn answering(answer: Option<bool>) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl UserInput for MockInput {
    fn prompt_confirm(&self, prompt: &str, _default: bool) -> input::Result<Option<bool>> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.answer)
    }
}

/// Output writer that records messages instead of printing them
#[derive(Debug, Default)]
pub struct BufferWriter {
    lines: Mutex<Vec<String>>,
}

impl BufferWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, one entry per message
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    fn push(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.push(message);
    }

    fn error(&self, message: &str) {
        self.push(message);
    }

    fn success(&self, message: &str) {
        self.push(message);
    }

    fn warning(&self, message: &str) {
        self.push(message);
    }

    fn info(&self, message: &str) {
        self.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::DisplayItem;

    fn items() -> Vec<DisplayItem> {
        ["~/t/a.go", "~/t/b.go"]
            .iter()
            .map(|p| DisplayItem::new(p.to_string(), p.to_string(), vec![p.to_string()]))
            .collect()
    }

    #[test]
    fn test_mock_finder_with_selection() {
        let finder = MockFinder::new("~/t/a.go");
        let result = finder.run(FinderConfig::new(items(), "Select".into())).unwrap();

        assert!(!result.aborted);
        assert_eq!(result.selected.as_deref(), Some("~/t/a.go"));
    }

    #[test]
    fn test_mock_finder_typing_filters() {
        let finder = MockFinder::typing("b");
        let result = finder.run(FinderConfig::new(items(), "Select".into())).unwrap();

        assert_eq!(result.selected.as_deref(), Some("~/t/b.go"));
    }

    #[test]
    fn test_mock_finder_typing_without_match_aborts() {
        let finder = MockFinder::typing("zzz");
        let result = finder.run(FinderConfig::new(items(), "Select".into())).unwrap();

        assert!(result.aborted);
    }

    #[test]
    fn test_mock_finder_aborted() {
        let finder = MockFinder::aborted();
        let result = finder.run(FinderConfig::new(vec![], "Select".into())).unwrap();

        assert!(result.aborted);
        assert!(result.selected.is_none());
    }

    #[test]
    fn test_mock_input_records_prompts() {
        let input = MockInput::answering(Some(false));
        assert_eq!(input.prompt_confirm("Overwrite a.go?", false).unwrap(), Some(false));
        assert_eq!(input.prompts(), vec!["Overwrite a.go?".to_string()]);
    }
}
