//! Pick command - choose a template and install it

use crate::Result;
use crate::cli::Cli;
use crate::config::{Settings, TempleConfig};
use crate::install::{ClipboardSink, InstallOutcome, Installer, SystemClipboard, destination_name};
use crate::paths::PathResolver;
use crate::preview::PreviewGenerator;
use crate::selector;
use crate::template::Template;
use crate::ui::ratatui_adapter::StyledPreviewGenerator;
use crate::ui::{DialoguerInput, FuzzyFinder, OutputWriter, RatatuiFinder, UserInput};
use std::path::Path;

/// Where the chosen template goes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickOptions {
    /// Put the content on the clipboard instead of writing a file
    pub copy: bool,
    /// Destination file name overriding the template's own name
    pub output: Option<String>,
}

impl From<&Cli> for PickOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            copy: cli.copy,
            output: cli.output.clone(),
        }
    }
}

/// Execute the pick command
///
/// # Errors
///
/// Returns the config, selection and install errors of the run.
/// `TempleError::SelectionAborted` is returned when the user cancels.
pub fn execute(
    config_path: &Path,
    options: &PickOptions,
    resolver: &PathResolver,
    output: &dyn OutputWriter,
) -> Result<()> {
    let (settings, templates) = TempleConfig::load(config_path)?.into_parts();

    if templates.is_empty() {
        output.warning(&format!("No templates configured in {}", config_path.display()));
        return Ok(());
    }

    let styled = StyledPreviewGenerator::new(
        PreviewGenerator::new(settings.head_size, resolver.clone()),
        settings.syntax_highlight.as_deref(),
    );
    let picker = Picker {
        finder: &RatatuiFinder::with_styled_preview(styled),
        input: &DialoguerInput::new(),
        resolver,
    };

    let outcome = picker.run(templates, &settings, options, &mut SystemClipboard::new())?;
    report(&outcome, output);
    Ok(())
}

/// The UI pieces a pick runs against
pub struct Picker<'a> {
    pub finder: &'a dyn FuzzyFinder,
    pub input: &'a dyn UserInput,
    pub resolver: &'a PathResolver,
}

impl Picker<'_> {
    /// Select a template and install it as `options` say
    ///
    /// # Errors
    ///
    /// Returns `SelectionAborted` on cancel and the installer's errors.
    pub fn run(
        &self,
        templates: Vec<Template>,
        settings: &Settings,
        options: &PickOptions,
        clipboard: &mut dyn ClipboardSink,
    ) -> Result<InstallOutcome> {
        let template = selector::select(self.finder, templates, settings)?;
        let installer = Installer::new(self.resolver, self.input);

        if options.copy {
            return installer.copy_to_clipboard(&template, clipboard);
        }

        let destination = destination_name(&template, options.output.as_deref())?;
        installer.install(&template, &destination)
    }
}

/// Print the outcome of an install
pub fn report(outcome: &InstallOutcome, output: &dyn OutputWriter) {
    match outcome {
        InstallOutcome::Copied { .. } | InstallOutcome::Clipboard { .. } => {
            output.write(&outcome.to_string());
        }
        InstallOutcome::SamePath { .. } | InstallOutcome::Declined { .. } => {
            output.info(&outcome.to_string());
        }
    }
}
