//! Application state for the ratatui TUI
//!
//! Holds everything mutable while the picker is open: the query, the
//! filtered view of the templates, and the cursor.

use crate::matcher::TemplateMatcher;
use crate::ui::types::DisplayItem;

/// Application state for the fuzzy finder
#[derive(Debug)]
pub struct AppState {
    /// All items available for selection, in display order
    pub items: Vec<DisplayItem>,
    /// Indices into `items` that match the current query, in display order
    pub filtered_indices: Vec<usize>,
    /// Current cursor position in filtered list
    pub cursor: usize,
    /// Current search query
    pub query: String,
    /// Byte position of the cursor within the query string
    pub query_cursor: usize,
    /// Whether the finder should exit
    pub should_exit: bool,
    /// Whether the operation was aborted
    pub aborted: bool,
    /// Scroll offset for the item list
    pub scroll_offset: usize,
    /// Height of the visible item list area (set during render)
    pub visible_height: usize,
    matcher: TemplateMatcher,
}

impl AppState {
    /// Create new application state with given items
    #[must_use]
    pub fn new(items: Vec<DisplayItem>, matcher: TemplateMatcher) -> Self {
        let filtered_indices = (0..items.len()).collect();

        Self {
            items,
            filtered_indices,
            cursor: 0,
            query: String::new(),
            query_cursor: 0,
            should_exit: false,
            aborted: false,
            scroll_offset: 0,
            visible_height: 10,
            matcher,
        }
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filtered_indices.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.filtered_indices.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first item
    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last item
    pub const fn jump_to_end(&mut self) {
        self.cursor = self.filtered_indices.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    const fn adjust_scroll(&mut self) {
        if self.visible_height == 0 {
            self.scroll_offset = self.cursor;
        } else if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.cursor + 1 - self.visible_height;
        }
    }

    /// Get the currently highlighted item
    #[must_use]
    pub fn current_item(&self) -> Option<&DisplayItem> {
        self.filtered_indices
            .get(self.cursor)
            .and_then(|&idx| self.items.get(idx))
    }

    /// Get the key of the currently highlighted item
    #[must_use]
    pub fn current_key(&self) -> Option<&str> {
        self.current_item().map(|item| item.key.as_str())
    }

    /// Re-run the matcher against the current query
    pub fn apply_query(&mut self) {
        let indices = self.matcher.filter(
            &self.query,
            self.items.iter().map(|item| item.searchable.as_slice()),
        );
        self.update_filtered(indices);
    }

    /// Replace the filtered view, keeping the cursor in bounds
    pub fn update_filtered(&mut self, indices: Vec<usize>) {
        self.filtered_indices = indices;
        if self.cursor >= self.filtered_indices.len() {
            self.cursor = self.filtered_indices.len().saturating_sub(1);
        }
        self.scroll_offset = 0;
        self.adjust_scroll();
    }

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove a character from the query (backspace)
    pub fn query_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev_char_boundary = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.query.remove(prev_char_boundary);
            self.query_cursor = prev_char_boundary;
        }
    }

    /// Delete character under cursor
    pub fn query_delete(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
        }
    }

    /// Move query cursor left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move query cursor right
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
    }

    /// Mark the finder to exit with the highlighted item
    pub const fn confirm(&mut self) {
        self.should_exit = true;
        self.aborted = false;
    }

    /// Mark the finder to exit as aborted
    pub const fn abort(&mut self) {
        self.should_exit = true;
        self.aborted = true;
    }
}
