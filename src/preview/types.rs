//! Preview content types

/// What the detail pane shows for a binary template
pub const BINARY_SENTINEL: &str = "binary";

/// Head of a template file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    /// Text file content
    Text {
        /// Leading lines, at most `headSize` of them
        lines: Vec<String>,
        /// Whether the file has more lines than shown
        truncated: bool,
        /// Total number of lines in file
        total_lines: usize,
    },

    /// Binary file, content is not shown
    Binary,

    /// Error occurred during preview generation
    Error(String),
}

/// Line-number gutter used in front of every previewed line
#[must_use]
pub fn gutter(line_number: usize) -> String {
    format!("{line_number:4} ")
}

impl std::fmt::Display for PreviewContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text { lines, .. } => {
                for (idx, line) in lines.iter().enumerate() {
                    write!(f, "\n{}{line}", gutter(idx + 1))?;
                }
                Ok(())
            }
            Self::Binary => f.write_str(BINARY_SENTINEL),
            Self::Error(msg) => f.write_str(msg),
        }
    }
}
