//! Command-line interface definitions and parsing
//!
//! Temple has no subcommands: by default it opens the template picker,
//! `--init` fetches a starter config instead.
//!
//! # Examples
//!
//! ```bash
//! # Pick a template and copy it into the current directory
//! temple
//!
//! # Copy it under another name, or onto the clipboard
//! temple -o Makefile
//! temple -c
//!
//! # Download the default config
//! temple --init
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "temple")]
#[command(about = "Pick a template and copy it into the current directory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Download the default config file and exit
    #[arg(short = 'i', long = "init", conflicts_with_all = ["copy", "output"])]
    pub init: bool,

    /// Copy the template content to the clipboard instead of a file
    #[arg(short = 'c', long = "copy", conflicts_with = "output")]
    pub copy: bool,

    /// Config file to read (default: ~/.config/temple.json)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// File name to write the template to
    #[arg(short = 'o', long = "output", value_name = "NAME")]
    pub output: Option<String>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_pick_into_cwd() {
        let cli = Cli::try_parse_from(["temple"]).unwrap();
        assert!(!cli.init);
        assert!(!cli.copy);
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["temple", "-q", "-o", "Makefile"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.output.as_deref(), Some("Makefile"));

        let cli = Cli::try_parse_from(["temple", "-c"]).unwrap();
        assert!(cli.copy);
    }

    #[test]
    fn test_config_override() {
        let cli = Cli::try_parse_from(["temple", "--config", "/tmp/t.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.json")));
    }

    #[test]
    fn test_init_conflicts_with_copy() {
        assert!(Cli::try_parse_from(["temple", "-i", "-c"]).is_err());
        assert!(Cli::try_parse_from(["temple", "--init", "-o", "x"]).is_err());
    }

    #[test]
    fn test_copy_conflicts_with_output() {
        assert!(Cli::try_parse_from(["temple", "-c", "-o", "x"]).is_err());
    }
}
