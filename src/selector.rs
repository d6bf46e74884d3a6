//! Interactive template selection
//!
//! Turns the configured templates into finder items, runs a [`FuzzyFinder`]
//! and maps the chosen key back to its [`Template`].

use crate::config::Settings;
use crate::matcher::TemplateMatcher;
use crate::template::{Template, sort_by_path};
use crate::ui::{DisplayItem, FinderConfig, FuzzyFinder, ItemMetadata};
use crate::{Result, TempleError};
use log::debug;

/// Prompt shown in the search bar
pub const PROMPT: &str = "temple>";

/// Build the finder item for the template at `index`
///
/// The key is the index into the sorted catalog, so two entries sharing a
/// path stay distinct. The list shows the path.
#[must_use]
pub fn display_item(index: usize, template: &Template) -> DisplayItem {
    DisplayItem::with_metadata(
        index.to_string(),
        template.path.clone(),
        template.search_fields(),
        ItemMetadata {
            name: template.display_name().map(String::from),
            tags: template.tags.clone(),
        },
    )
}

/// Let the user pick one of `templates`
///
/// Templates are shown sorted by path.
///
/// # Errors
///
/// Returns `TempleError::SelectionAborted` when the user cancels or confirms
/// with nothing matched, and `TempleError::Ui` when the finder fails.
pub fn select(
    finder: &dyn FuzzyFinder,
    mut templates: Vec<Template>,
    settings: &Settings,
) -> Result<Template> {
    sort_by_path(&mut templates);

    let items = templates
        .iter()
        .enumerate()
        .map(|(index, template)| display_item(index, template))
        .collect();
    let config = FinderConfig::new(items, PROMPT.to_string())
        .with_visible_rows(settings.item_size)
        .with_matcher(TemplateMatcher::new(settings.match_policy));

    let result = finder.run(config)?;
    if result.aborted {
        return Err(TempleError::SelectionAborted);
    }

    let key = result.selected.ok_or(TempleError::SelectionAborted)?;
    let index = key
        .parse::<usize>()
        .ok()
        .filter(|&index| index < templates.len())
        .ok_or(TempleError::SelectionAborted)?;
    debug!("selected template {}", templates[index].path);

    Ok(templates.swap_remove(index))
}
