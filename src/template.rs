//! Template catalog entries

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A reusable file registered in the config
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Template {
    /// Optional display name, also used as the destination file name
    #[serde(default)]
    pub name: Option<String>,
    /// Location of the template file, may start with `~`
    pub path: String,
    /// Descriptive tags used for searching
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Template {
    /// Create a template without a name
    #[must_use]
    pub fn new(path: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
            tags,
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name, if set and non-blank
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// File name the template is installed under
    ///
    /// The explicit name wins, otherwise the last component of `path`.
    #[must_use]
    pub fn destination_name(&self) -> Option<String> {
        self.display_name().map(str::to_string).or_else(|| {
            Path::new(&self.path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
    }

    /// Tags joined for display
    #[must_use]
    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }

    /// Text fields the matcher looks at: name, path and all tags
    #[must_use]
    pub fn search_fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(3);
        if let Some(name) = self.display_name() {
            fields.push(name.to_string());
        }
        fields.push(self.path.clone());
        if !self.tags.is_empty() {
            fields.push(self.tags.join(" "));
        }
        fields
    }
}

/// Sort templates by path, the order they are listed in
pub fn sort_by_path(templates: &mut [Template]) {
    templates.sort_by(|a, b| a.path.cmp(&b.path));
}
