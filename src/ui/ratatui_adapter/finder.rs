//! Ratatui-based fuzzy finder implementation
//!
//! Implements the `FuzzyFinder` trait using ratatui for UI and the
//! configured [`TemplateMatcher`](crate::matcher::TemplateMatcher) for
//! incremental filtering.

use super::events::{EventResult, poll_and_handle};
use super::state::AppState;
use super::styled_preview::{StyledPreview, StyledPreviewGenerator};
use super::theme::Theme;
use super::widgets::{DEFAULT_HINTS, DetailPane, HelpBar, ItemList, SearchBar};
use crate::ui::error::{Result, UiError};
use crate::ui::traits::{FinderConfig, FuzzyFinder};
use crate::ui::types::FinderResult;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Ratatui-based fuzzy finder implementation
pub struct RatatuiFinder {
    styled_generator: Option<StyledPreviewGenerator>,
    theme: Theme,
}

/// Preview for the item the cursor was on when it was generated
struct CachedPreview {
    key: Option<String>,
    preview: Option<StyledPreview>,
}

impl RatatuiFinder {
    /// Create a new ratatui finder without a detail preview
    #[must_use]
    pub fn new() -> Self {
        Self {
            styled_generator: None,
            theme: Theme::default(),
        }
    }

    /// Create a ratatui finder that renders file heads in the detail pane
    #[must_use]
    pub fn with_styled_preview(generator: StyledPreviewGenerator) -> Self {
        Self {
            styled_generator: Some(generator),
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    fn render(
        &self,
        frame: &mut Frame,
        state: &mut AppState,
        config: &FinderConfig,
        preview: Option<&StyledPreview>,
    ) {
        let area = frame.area();
        let list_rows = u16::try_from(config.visible_rows).unwrap_or(u16::MAX);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                            // Search bar
                Constraint::Length(list_rows.saturating_add(2)), // Items
                Constraint::Min(3),                               // Detail pane
                Constraint::Length(1),                            // Help bar
            ])
            .split(area);

        // Borders take two rows
        state.visible_height = layout[1].height.saturating_sub(2) as usize;

        let search_bar = SearchBar::new(&state.query, state.query_cursor, &config.prompt, &self.theme)
            .counter(state.filtered_indices.len(), state.items.len());
        frame.render_widget(search_bar, layout[0]);

        frame.render_widget(ItemList::new(state, &self.theme), layout[1]);

        let detail = DetailPane::new(state.current_item(), preview, &self.theme);
        frame.render_widget(detail, layout[2]);

        frame.render_widget(HelpBar::new(DEFAULT_HINTS, &self.theme), layout[3]);
    }

    /// Regenerate the preview only when the highlighted item changes
    ///
    /// The preview is read from the item's displayed path.
    fn refresh_preview(&self, state: &AppState, cache: &mut CachedPreview) {
        let current = state.current_item();
        let key = current.map(|item| item.key.as_str());
        if cache.key.as_deref() == key {
            return;
        }

        cache.preview = match (&self.styled_generator, current) {
            (Some(generator), Some(item)) => Some(generator.generate(&item.display)),
            _ => None,
        };
        cache.key = key.map(String::from);
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        config: &FinderConfig,
    ) -> Result<FinderResult> {
        let mut state = AppState::new(config.items.clone(), config.matcher);
        let mut cache = CachedPreview {
            key: None,
            preview: None,
        };

        loop {
            self.refresh_preview(&state, &mut cache);

            terminal.draw(|frame| {
                self.render(frame, &mut state, config, cache.preview.as_ref());
            })?;

            match poll_and_handle(&mut state, Duration::from_millis(50))? {
                EventResult::QueryChanged => {
                    state.apply_query();
                    debug!(
                        "query {:?} keeps {} of {} templates",
                        state.query,
                        state.filtered_indices.len(),
                        state.items.len()
                    );
                }
                EventResult::Confirm => {
                    // Enter with nothing matched counts as a cancel
                    if state.current_item().is_some() {
                        state.confirm();
                    } else {
                        state.abort();
                    }
                }
                EventResult::Abort => state.abort(),
                EventResult::Continue | EventResult::Ignored => {}
            }

            if state.should_exit {
                break;
            }
        }

        if state.aborted {
            return Ok(FinderResult::aborted());
        }

        Ok(state
            .current_key()
            .map_or_else(FinderResult::aborted, |key| {
                FinderResult::selected(key.to_string())
            }))
    }
}

impl Default for RatatuiFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyFinder for RatatuiFinder {
    fn run(&self, config: FinderConfig) -> Result<FinderResult> {
        if config.visible_rows == 0 {
            return Err(UiError::InvalidConfig(
                "the list needs at least one visible row".into(),
            ));
        }

        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, &config);

        // Always restore the terminal, even on error
        if let Err(e) = Self::cleanup_terminal() {
            warn!("terminal cleanup failed: {e}");
        }

        result
    }
}
