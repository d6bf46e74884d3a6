//! Temple CLI application entry point
//!
//! Opens an interactive picker over the templates listed in the config file
//! and copies the chosen one into the current directory.
//!
//! # Usage
//!
//! ```bash
//! # Pick a template (writes ./<name>)
//! temple
//!
//! # Write it under another name
//! temple -o main.go
//!
//! # Put its content on the clipboard
//! temple --copy
//!
//! # Fetch a starter config into ~/.config/temple.json
//! temple --init
//!
//! # Use another config and only print results
//! temple --config ./temple.json -q
//! ```
//!
//! Set `RUST_LOG=debug` for diagnostics.

use log::{LevelFilter, debug};
use std::process::ExitCode;
use temple::TempleError;
use temple::cli::Cli;
use temple::commands;
use temple::ui::{OutputWriter, StdoutWriter};

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse_args();
    let output = StdoutWriter::quiet(cli.quiet);

    match commands::run(&cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(TempleError::SelectionAborted) => {
            debug!("selection aborted");
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
