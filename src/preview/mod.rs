//! Template preview
//!
//! Produces the head of a template file for the picker's detail pane:
//! - Text files are cut to the first `headSize` lines and numbered
//! - Binary files (detected by sniffing the leading bytes) show `binary`
//! - Read errors are shown as their message instead of failing the picker

mod error;
mod generator;
mod types;

pub use error::{PreviewError, Result};
pub use generator::{PreviewGenerator, preview};
pub use types::{BINARY_SENTINEL, PreviewContent, gutter};
