//! Copying the chosen template to its destination
//!
//! The installer never writes outside the path it was given and only
//! overwrites an existing file after the user agreed to it.

use crate::paths::PathResolver;
use crate::template::Template;
use crate::ui::UserInput;
use crate::{Result, TempleError};
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// What an install did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The template was copied to a file
    Copied {
        source: PathBuf,
        destination: PathBuf,
        bytes: u64,
    },
    /// Source and destination are the same file, nothing was done
    SamePath { path: PathBuf },
    /// The destination exists and the user kept it
    Declined { destination: PathBuf },
    /// The template text was put on the clipboard
    Clipboard { source: PathBuf, bytes: usize },
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied {
                source,
                destination,
                ..
            } => write!(f, "{} -> {}", source.display(), destination.display()),
            Self::SamePath { path } => write!(f, "{} is already in place", path.display()),
            Self::Declined { destination } => {
                write!(f, "{} left unchanged", destination.display())
            }
            Self::Clipboard { source, .. } => write!(f, "{} -> clipboard", source.display()),
        }
    }
}

/// Somewhere template text can be placed
pub trait ClipboardSink {
    /// Replace the clipboard content with `text`
    ///
    /// # Errors
    ///
    /// Returns `TempleError::Clipboard` if the clipboard is unavailable.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, opened on first use
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| TempleError::Clipboard(format!("clipboard unavailable: {e}")))?,
        };

        let result = clipboard
            .set_text(text)
            .map_err(|e| TempleError::Clipboard(e.to_string()));
        self.inner = Some(clipboard);
        result
    }
}

/// Name the template is installed under
///
/// An explicit `output` wins, then the template name, then the file name of
/// its path.
///
/// # Errors
///
/// Returns `TempleError::InvalidInput` if none of them yields a name.
pub fn destination_name(template: &Template, output: Option<&str>) -> Result<String> {
    output
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .or_else(|| template.destination_name())
        .ok_or_else(|| {
            TempleError::InvalidInput(format!(
                "cannot derive a destination name from {}",
                template.path
            ))
        })
}

/// Copies templates into the working directory or onto the clipboard
pub struct Installer<'a> {
    resolver: &'a PathResolver,
    input: &'a dyn UserInput,
}

impl<'a> Installer<'a> {
    #[must_use]
    pub fn new(resolver: &'a PathResolver, input: &'a dyn UserInput) -> Self {
        Self { resolver, input }
    }

    /// Copy `template` to `destination`, relative to the working directory
    ///
    /// # Errors
    ///
    /// Returns `SourceOpen` if the template cannot be read,
    /// `DestinationWrite` if the destination cannot be written and `Input`
    /// if the overwrite prompt fails.
    pub fn install(&self, template: &Template, destination: &str) -> Result<InstallOutcome> {
        let source = self.resolver.resolve(&template.path);
        let destination = self.resolver.resolve(destination);

        if source == destination {
            debug!("{} is its own destination", source.display());
            return Ok(InstallOutcome::SamePath { path: source });
        }

        if destination.exists() && !self.confirm_overwrite(&destination)? {
            return Ok(InstallOutcome::Declined { destination });
        }

        let bytes = copy_file(&source, &destination)?;
        debug!(
            "copied {bytes} bytes from {} to {}",
            source.display(),
            destination.display()
        );

        Ok(InstallOutcome::Copied {
            source,
            destination,
            bytes,
        })
    }

    /// Put the text of `template` on `clipboard`
    ///
    /// Bytes that are not UTF-8 are replaced.
    ///
    /// # Errors
    ///
    /// Returns `SourceOpen` if the template cannot be read and `Clipboard`
    /// if the clipboard rejects the text.
    pub fn copy_to_clipboard(
        &self,
        template: &Template,
        clipboard: &mut dyn ClipboardSink,
    ) -> Result<InstallOutcome> {
        let source = self.resolver.resolve(&template.path);
        let source_open = |e: io::Error| TempleError::SourceOpen {
            path: source.clone(),
            source: e,
        };

        let mut content = Vec::new();
        File::open(&source)
            .and_then(|mut file| file.read_to_end(&mut content))
            .map_err(source_open)?;

        let text = String::from_utf8_lossy(&content);
        clipboard.set_text(&text)?;

        Ok(InstallOutcome::Clipboard {
            bytes: content.len(),
            source,
        })
    }

    fn confirm_overwrite(&self, destination: &Path) -> Result<bool> {
        let prompt = format!("Overwrite {}?", destination.display());
        // Esc counts as no
        Ok(self.input.prompt_confirm(&prompt, false)?.unwrap_or(false))
    }
}

/// Stream `source` into `destination`, creating or truncating it
fn copy_file(source: &Path, destination: &Path) -> Result<u64> {
    let source_open = |e: io::Error| TempleError::SourceOpen {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = File::open(source).map_err(source_open)?;
    if reader.metadata().map_err(source_open)?.is_dir() {
        return Err(source_open(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        )));
    }

    let write_error = |e: io::Error| TempleError::DestinationWrite {
        path: destination.to_path_buf(),
        source: e,
    };

    let mut writer = File::create(destination).map_err(write_error)?;
    io::copy(&mut reader, &mut writer).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::MockInput;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _home: TempDir,
        _cwd: TempDir,
        resolver: PathResolver,
    }

    impl Fixture {
        fn new() -> Self {
            let home = TempDir::new().unwrap();
            let cwd = TempDir::new().unwrap();
            fs::create_dir(home.path().join("t")).unwrap();
            fs::write(home.path().join("t/b.go"), "package b\n").unwrap();
            let resolver = PathResolver::new(home.path(), cwd.path());
            Self {
                _home: home,
                _cwd: cwd,
                resolver,
            }
        }

        fn cwd(&self) -> &Path {
            self.resolver.cwd()
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        text: Option<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_into_working_directory() {
        let fx = Fixture::new();
        let input = MockInput::answering(Some(true));
        let template = Template::new("~/t/b.go", vec![]);

        let outcome = Installer::new(&fx.resolver, &input)
            .install(&template, "b.go")
            .unwrap();

        assert!(matches!(outcome, InstallOutcome::Copied { bytes: 10, .. }));
        assert_eq!(fs::read_to_string(fx.cwd().join("b.go")).unwrap(), "package b\n");
        assert!(input.prompts().is_empty());
        assert_eq!(
            outcome.to_string(),
            format!(
                "{} -> {}",
                fx.resolver.home().join("t/b.go").display(),
                fx.cwd().join("b.go").display()
            )
        );
    }

    #[test]
    fn test_same_path_is_noop() {
        let fx = Fixture::new();
        let input = MockInput::answering(Some(true));
        // Does not exist on disk, so any filesystem access would fail
        let template = Template::new(fx.cwd().join("ghost.txt").display().to_string(), vec![]);

        let outcome = Installer::new(&fx.resolver, &input)
            .install(&template, "ghost.txt")
            .unwrap();

        assert!(matches!(outcome, InstallOutcome::SamePath { .. }));
        assert!(!fx.cwd().join("ghost.txt").exists());
        assert!(input.prompts().is_empty());
    }

    #[test]
    fn test_declined_overwrite_keeps_destination() {
        let fx = Fixture::new();
        fs::write(fx.cwd().join("b.go"), "mine").unwrap();
        let input = MockInput::answering(Some(false));

        let outcome = Installer::new(&fx.resolver, &input)
            .install(&Template::new("~/t/b.go", vec![]), "b.go")
            .unwrap();

        assert!(matches!(outcome, InstallOutcome::Declined { .. }));
        assert_eq!(fs::read_to_string(fx.cwd().join("b.go")).unwrap(), "mine");
        assert_eq!(input.prompts().len(), 1);
    }

    #[test]
    fn test_cancelled_prompt_counts_as_decline() {
        let fx = Fixture::new();
        fs::write(fx.cwd().join("b.go"), "mine").unwrap();
        let input = MockInput::answering(None);

        let outcome = Installer::new(&fx.resolver, &input)
            .install(&Template::new("~/t/b.go", vec![]), "b.go")
            .unwrap();

        assert!(matches!(outcome, InstallOutcome::Declined { .. }));
        assert_eq!(fs::read_to_string(fx.cwd().join("b.go")).unwrap(), "mine");
    }

    #[test]
    fn test_accepted_overwrite_replaces_destination() {
        let fx = Fixture::new();
        fs::write(fx.cwd().join("b.go"), "a much longer existing file").unwrap();
        let input = MockInput::answering(Some(true));

        Installer::new(&fx.resolver, &input)
            .install(&Template::new("~/t/b.go", vec![]), "b.go")
            .unwrap();

        assert_eq!(fs::read_to_string(fx.cwd().join("b.go")).unwrap(), "package b\n");
    }

    #[test]
    fn test_missing_source_is_source_open_error() {
        let fx = Fixture::new();
        let input = MockInput::answering(Some(true));

        let err = Installer::new(&fx.resolver, &input)
            .install(&Template::new("~/t/missing.go", vec![]), "missing.go")
            .unwrap_err();

        assert!(matches!(err, TempleError::SourceOpen { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(!fx.cwd().join("missing.go").exists());
    }

    #[test]
    fn test_unwritable_destination() {
        let fx = Fixture::new();
        let input = MockInput::answering(Some(true));

        let err = Installer::new(&fx.resolver, &input)
            .install(&Template::new("~/t/b.go", vec![]), "no/such/dir/b.go")
            .unwrap_err();

        assert!(matches!(err, TempleError::DestinationWrite { .. }));
    }

    #[test]
    fn test_clipboard_mode() {
        let fx = Fixture::new();
        fs::write(fx.cwd().join("b.go"), "mine").unwrap();
        let input = MockInput::answering(Some(false));
        let mut clipboard = RecordingClipboard::default();

        let outcome = Installer::new(&fx.resolver, &input)
            .copy_to_clipboard(&Template::new("~/t/b.go", vec![]), &mut clipboard)
            .unwrap();

        assert_eq!(clipboard.text.as_deref(), Some("package b\n"));
        assert!(outcome.to_string().ends_with("b.go -> clipboard"));
        assert!(input.prompts().is_empty());
        assert_eq!(fs::read_to_string(fx.cwd().join("b.go")).unwrap(), "mine");
    }

    #[test]
    fn test_destination_name_precedence() {
        let named = Template::new("~/t/a.go", vec![]).with_name("main.go");
        let unnamed = Template::new("~/t/a.go", vec![]);

        assert_eq!(destination_name(&named, Some("x.go")).unwrap(), "x.go");
        assert_eq!(destination_name(&named, None).unwrap(), "main.go");
        assert_eq!(destination_name(&unnamed, None).unwrap(), "a.go");
        assert_eq!(destination_name(&unnamed, Some("  ")).unwrap(), "a.go");
    }
}
