//! Configuration module for temple
//!
//! The catalog lives in a single JSON file, `~/.config/temple.json` by
//! default. It carries the display settings and the list of templates:
//!
//! ```json
//! {
//!   "headSize": 20,
//!   "itemSize": 8,
//!   "syntaxHighlight": "base16-ocean.dark",
//!   "templates": [
//!     { "name": "Makefile", "path": "~/templates/Makefile", "tags": ["make"] }
//!   ]
//! }
//! ```

mod setup;

pub use setup::{DEFAULT_CONFIG_URL, download_default_config};

use crate::matcher::MatchPolicy;
use crate::paths::PathResolver;
use crate::template::Template;
use crate::{Result, TempleError};
use config::{Config, ConfigError, File, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_HEAD_SIZE: usize = 10;
const DEFAULT_ITEM_SIZE: usize = 10;

const fn default_head_size() -> usize {
    DEFAULT_HEAD_SIZE
}

const fn default_item_size() -> usize {
    DEFAULT_ITEM_SIZE
}

/// Display settings, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Lines of preview to show
    pub head_size: usize,
    /// Visible rows in the template list
    pub item_size: usize,
    /// Syntax highlighting theme name
    pub syntax_highlight: Option<String>,
    /// How queries are matched against templates
    pub match_policy: MatchPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            head_size: DEFAULT_HEAD_SIZE,
            item_size: DEFAULT_ITEM_SIZE,
            syntax_highlight: None,
            match_policy: MatchPolicy::default(),
        }
    }
}

/// On-disk configuration structure
///
/// Keys may reach us lowercased depending on the config source, hence the
/// aliases.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TempleConfig {
    #[serde(rename = "headSize", alias = "headsize", default = "default_head_size")]
    pub head_size: usize,

    #[serde(rename = "itemSize", alias = "itemsize", default = "default_item_size")]
    pub item_size: usize,

    #[serde(
        rename = "syntaxHighlight",
        alias = "syntaxhighlight",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub syntax_highlight: Option<String>,

    #[serde(rename = "matchPolicy", alias = "matchpolicy", default)]
    pub match_policy: MatchPolicy,

    #[serde(default)]
    pub templates: Vec<Template>,
}

impl Default for TempleConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            head_size: settings.head_size,
            item_size: settings.item_size,
            syntax_highlight: settings.syntax_highlight,
            match_policy: settings.match_policy,
            templates: Vec::new(),
        }
    }
}

impl TempleConfig {
    /// Location of the config file: `~/.config/temple.json`
    #[must_use]
    pub fn default_path(resolver: &PathResolver) -> PathBuf {
        resolver.home().join(".config").join("temple.json")
    }

    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `TempleError::ConfigNotFound` if the file does not exist and
    /// `TempleError::ConfigParse` if it cannot be read or deserialized, or
    /// if a template has an empty path.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(TempleError::ConfigNotFound(path.to_path_buf()));
        }

        debug!("loading config from {}", path.display());
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Json))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;

        debug!("loaded {} templates", config.templates.len());
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if let Some(idx) = self.templates.iter().position(|t| t.path.trim().is_empty()) {
            return Err(ConfigError::Message(format!(
                "template #{} has an empty path",
                idx + 1
            )));
        }
        Ok(())
    }

    /// Display settings of this config
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            head_size: self.head_size,
            item_size: self.item_size,
            syntax_highlight: self.syntax_highlight.clone(),
            match_policy: self.match_policy,
        }
    }

    /// Split into settings and the template catalog
    #[must_use]
    pub fn into_parts(self) -> (Settings, Vec<Template>) {
        let settings = self.settings();
        (settings, self.templates)
    }
}
