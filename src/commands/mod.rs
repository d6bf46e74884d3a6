//! Command implementations
//!
//! Each command is a module with an execute function that takes the parsed
//! CLI options and performs the operation.

pub mod init;
pub mod pick;

pub use init::execute as init;
pub use pick::execute as pick;

use crate::Result;
use crate::cli::Cli;
use crate::config::{DEFAULT_CONFIG_URL, TempleConfig};
use crate::paths::PathResolver;
use crate::ui::{DialoguerInput, OutputWriter};
use std::path::PathBuf;

/// Config file named on the command line, or the default location
#[must_use]
pub fn config_path(cli: &Cli, resolver: &PathResolver) -> PathBuf {
    cli.config.as_ref().map_or_else(
        || TempleConfig::default_path(resolver),
        |path| resolver.resolve(&path.to_string_lossy()),
    )
}

/// Dispatch the parsed command line
///
/// # Errors
///
/// Propagates the error of the command that ran.
pub fn run(cli: &Cli, output: &dyn OutputWriter) -> Result<()> {
    let resolver = PathResolver::from_env()?;
    let config_path = config_path(cli, &resolver);

    if cli.init {
        return init(&config_path, DEFAULT_CONFIG_URL, &DialoguerInput::new(), output);
    }

    pick(&config_path, &pick::PickOptions::from(cli), &resolver, output)
}
