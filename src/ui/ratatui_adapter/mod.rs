//! Ratatui-based fuzzy finder adapter
//!
//! This module provides an implementation of the `FuzzyFinder` trait
//! using ratatui (TUI framework) and crossterm (terminal events).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiFinder                     │
//! │  (implements FuzzyFinder trait)             │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  Template  │ │  Ratatui  │ │ Crossterm │
//! │  Matcher   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! The screen is a search bar, the template list, a detail pane with the
//! highlighted template's fields and syntax-coloured head, and a help bar.

mod events;
mod finder;
mod state;
mod styled_preview;
mod theme;
pub mod widgets;

pub use finder::RatatuiFinder;
pub use state::AppState;
pub use styled_preview::{DEFAULT_THEME, StyledPreview, StyledPreviewGenerator};
pub use theme::Theme;
