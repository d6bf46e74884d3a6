use super::error::{PreviewError, Result};
use super::types::PreviewContent;
use crate::paths::PathResolver;
use log::debug;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// How many leading bytes are inspected to tell text from binary
const SNIFF_LEN: u64 = 8192;

/// Render the numbered head of the template at `path`
///
/// Shorthand for building a [`PreviewGenerator`] for a single preview.
#[must_use]
pub fn preview(path: &str, head_size: usize, resolver: &PathResolver) -> String {
    PreviewGenerator::new(head_size, resolver.clone())
        .generate(path)
        .to_string()
}

pub struct PreviewGenerator {
    head_size: usize,
    resolver: PathResolver,
}

impl PreviewGenerator {
    #[must_use]
    pub const fn new(head_size: usize, resolver: PathResolver) -> Self {
        Self {
            head_size,
            resolver,
        }
    }

    /// Template path with `~` expanded
    #[must_use]
    pub fn expand(&self, path: &str) -> PathBuf {
        self.resolver.expand(path)
    }

    /// Generate the preview for a template path
    ///
    /// Failures become `PreviewContent::Error` carrying the error text.
    #[must_use]
    pub fn generate(&self, path: &str) -> PreviewContent {
        let expanded = self.expand(path);
        self.load(&expanded).unwrap_or_else(|e| {
            debug!("preview of {} failed: {e}", expanded.display());
            PreviewContent::Error(e.to_string())
        })
    }

    fn load(&self, path: &Path) -> Result<PreviewContent> {
        if fs::metadata(path)?.is_dir() {
            return Err(PreviewError::NotAFile(path.display().to_string()));
        }

        if is_binary(path)? {
            return Ok(PreviewContent::Binary);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            // Valid head, invalid tail
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                return Ok(PreviewContent::Binary);
            }
            Err(e) => return Err(e.into()),
        };

        let mut all_lines = content.lines();
        let lines: Vec<String> = all_lines
            .by_ref()
            .take(self.head_size)
            .map(String::from)
            .collect();
        let rest = all_lines.count();

        Ok(PreviewContent::Text {
            total_lines: lines.len() + rest,
            truncated: rest > 0,
            lines,
        })
    }
}

/// Sniff the leading bytes of a file
fn is_binary(path: &Path) -> Result<bool> {
    let mut head = Vec::new();
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;
    Ok(looks_binary(&head))
}

/// NUL bytes or malformed UTF-8 mean binary
///
/// A multi-byte sequence cut off at the end of the sample is still text.
fn looks_binary(head: &[u8]) -> bool {
    if head.contains(&0) {
        return true;
    }
    match std::str::from_utf8(head) {
        Ok(_) => false,
        Err(e) => e.error_len().is_some(),
    }
}
