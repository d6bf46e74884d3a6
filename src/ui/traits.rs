//! Core traits for UI abstraction layer

use super::error::Result;
use super::types::{DisplayItem, FinderResult};
use crate::matcher::TemplateMatcher;

/// Configuration for fuzzy finder
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Items to display in the finder, in display order
    pub items: Vec<DisplayItem>,
    /// Prompt text
    pub prompt: String,
    /// Number of list rows visible at once
    pub visible_rows: usize,
    /// Decides which items the query keeps
    pub matcher: TemplateMatcher,
}

impl FinderConfig {
    /// Create a basic finder configuration
    #[must_use]
    pub fn new(items: Vec<DisplayItem>, prompt: String) -> Self {
        Self {
            items,
            prompt,
            visible_rows: 10,
            matcher: TemplateMatcher::default(),
        }
    }

    /// Set the number of visible list rows
    #[must_use]
    pub const fn with_visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows;
        self
    }

    /// Set the matcher used for incremental search
    #[must_use]
    pub const fn with_matcher(mut self, matcher: TemplateMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Keys of the items `query` keeps, in display order
    #[must_use]
    pub fn filter_keys(&self, query: &str) -> Vec<&str> {
        self.matcher
            .filter(query, self.items.iter().map(|item| item.searchable.as_slice()))
            .into_iter()
            .filter_map(|idx| self.items.get(idx).map(|item| item.key.as_str()))
            .collect()
    }
}

/// Trait for fuzzy finder implementations
///
/// This trait abstracts away the specific fuzzy finder backend, so the
/// selection flow can run against a scripted finder in tests.
pub trait FuzzyFinder {
    /// Run the fuzzy finder with given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the finder cannot be initialized or
    /// if the operation fails.
    fn run(&self, config: FinderConfig) -> Result<FinderResult>;
}
