//! UI abstraction layer
//!
//! This module provides a backend-agnostic interface for the interactive
//! template picker, confirmation prompts, and output. Business logic only
//! talks to the traits, so the terminal finder can be replaced by a scripted
//! one in tests.
//!
//! # Core Traits
//!
//! - **`FuzzyFinder`** - Interactive template selection with incremental search
//! - **`UserInput`** - Confirmation prompts
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Business Logic Layer               │
//! │   (selector, install, commands)         │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │  (FuzzyFinder, UserInput, OutputWriter) │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI Adapters  │  │ TUI Adapter       │
//! │ - Dialoguer   │  │ - RatatuiFinder   │
//! │ - Stdout      │  │                   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Finder
//!
//! ```no_run
//! use temple::ui::{FuzzyFinder, FinderConfig, FinderResult, Result};
//!
//! struct FirstItem;
//!
//! impl FuzzyFinder for FirstItem {
//!     fn run(&self, config: FinderConfig) -> Result<FinderResult> {
//!         Ok(config
//!             .items
//!             .first()
//!             .map_or_else(FinderResult::aborted, |item| {
//!                 FinderResult::selected(item.key.clone())
//!             }))
//!     }
//! }
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use temple::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Operation completed!");
//! output.warning("Be careful");
//! output.info("Additional info");
//! ```

mod error;
mod traits;
mod types;

pub mod input;
pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{OutputWriter, StdoutWriter};
pub use ratatui_adapter::RatatuiFinder;
pub use traits::{FinderConfig, FuzzyFinder};
pub use types::{DisplayItem, FinderResult, ItemMetadata};
