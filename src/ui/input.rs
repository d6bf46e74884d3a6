//! User input abstraction layer
//!
//! Confirmation prompts go through [`UserInput`] so the install and init
//! flows can be driven by scripted answers in tests.

use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use temple::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
///
/// if let Some(true) = input.prompt_confirm("Overwrite", false).unwrap() {
///     println!("Overwriting...");
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Prompt user for confirmation (yes/no)
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `default` - Default selection (true = yes, false = no)
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bool))` - User confirmed (true) or denied (false)
    /// * `Ok(None)` - User cancelled (ESC)
    /// * `Err(_)` - Input operation failed
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
