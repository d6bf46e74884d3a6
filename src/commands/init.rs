//! Init command - fetch the default config

use crate::Result;
use crate::config::download_default_config;
use crate::ui::{OutputWriter, UserInput};
use log::debug;
use std::path::Path;

/// Execute the init command
///
/// An existing config is only replaced after confirmation; declining is not
/// an error.
///
/// # Errors
///
/// Returns `TempleError::Download` if the config cannot be fetched and
/// `TempleError::DestinationWrite` if it cannot be saved.
pub fn execute(
    path: &Path,
    url: &str,
    input: &dyn UserInput,
    output: &dyn OutputWriter,
) -> Result<()> {
    if path.exists() {
        let prompt = format!("Overwrite {}?", path.display());
        if !input.prompt_confirm(&prompt, false)?.unwrap_or(false) {
            output.info(&format!("Keeping {}", path.display()));
            return Ok(());
        }
    }

    let bytes = download_default_config(url, path)?;
    debug!("wrote {bytes} bytes to {}", path.display());

    output.write(&format!("{url} -> {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TempleError;
    use crate::ui::mock::{BufferWriter, MockInput};
    use std::fs;
    use tempfile::TempDir;

    // Nothing listens on the discard port
    const DEAD_URL: &str = "http://127.0.0.1:9/temple.json";

    #[test]
    fn test_declined_overwrite_keeps_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("temple.json");
        fs::write(&path, "{}").unwrap();

        let input = MockInput::answering(Some(false));
        let output = BufferWriter::new();
        execute(&path, DEAD_URL, &input, &output).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert_eq!(input.prompts().len(), 1);
        assert!(output.lines()[0].starts_with("Keeping"));
    }

    #[test]
    fn test_download_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".config").join("temple.json");

        let input = MockInput::answering(Some(true));
        let err = execute(&path, DEAD_URL, &input, &BufferWriter::new()).unwrap_err();

        assert!(matches!(err, TempleError::Download(_)));
        assert!(!path.exists());
        // No config yet, so no prompt
        assert!(input.prompts().is_empty());
    }
}
