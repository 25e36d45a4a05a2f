//! Main application entry point and command dispatch.
//!
//! Parses command-line arguments and hands control to the matching command
//! handler. All application logic lives in the library crate; this file only
//! coordinates:
//!
//! 1. Argument parsing and early exit for help/version
//! 2. Configuration loading
//! 3. Dispatch to the watch, convert, or table handler

use anyhow::Result;
use std::path::Path;

use tzclock::args::{self, CliAction, ParsedArgs};
use tzclock::commands;
use tzclock::config::Config;
use tzclock::constants::EXIT_FAILURE;
use tzclock::log_version;

fn main() -> Result<()> {
    let parsed_args = ParsedArgs::from_env();

    match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Watch {
            debug_enabled,
            config_dir,
        } => {
            log_version!();
            let config = Config::load(config_dir.as_deref().map(Path::new))?;
            commands::watch::handle_watch_command(&config, debug_enabled)
        }
        CliAction::Convert {
            debug_enabled,
            config_dir,
            time,
            from,
            to,
            reverse,
        } => {
            log_version!();
            let config = Config::load(config_dir.as_deref().map(Path::new))?;
            commands::convert::handle_convert_command(
                &config,
                &time,
                from.as_deref(),
                to.as_deref(),
                reverse,
                debug_enabled,
            )
        }
        CliAction::Table {
            debug_enabled,
            config_dir,
            reverse,
        } => {
            let config = Config::load(config_dir.as_deref().map(Path::new))?;
            commands::table::handle_table_command(&config, reverse, debug_enabled)
        }
    }
}
