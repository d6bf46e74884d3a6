//! Common types for UI abstraction layer

/// Item to display in the fuzzy finder
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Unique identifier (the template path)
    pub key: String,
    /// What the user sees in the list
    pub display: String,
    /// Fields to search against
    pub searchable: Vec<String>,
    /// Additional metadata
    pub metadata: ItemMetadata,
}

impl DisplayItem {
    /// Create a new display item
    #[must_use]
    pub fn new(key: String, display: String, searchable: Vec<String>) -> Self {
        Self {
            key,
            display,
            searchable,
            metadata: ItemMetadata::default(),
        }
    }

    /// Create a display item with metadata
    #[must_use]
    pub const fn with_metadata(
        key: String,
        display: String,
        searchable: Vec<String>,
        metadata: ItemMetadata,
    ) -> Self {
        Self {
            key,
            display,
            searchable,
            metadata,
        }
    }
}

/// Metadata for display items, shown in the detail pane
#[derive(Debug, Clone, Default)]
pub struct ItemMetadata {
    /// Template name, if any
    pub name: Option<String>,
    /// Tags associated with this item
    pub tags: Vec<String>,
}

/// Result from fuzzy finder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderResult {
    /// Key of the chosen item
    pub selected: Option<String>,
    /// Whether the operation was aborted by user
    pub aborted: bool,
}

impl FinderResult {
    /// Create result with a selection
    #[must_use]
    pub const fn selected(key: String) -> Self {
        Self {
            selected: Some(key),
            aborted: false,
        }
    }

    /// Create result for aborted operation
    #[must_use]
    pub const fn aborted() -> Self {
        Self {
            selected: None,
            aborted: true,
        }
    }
}
