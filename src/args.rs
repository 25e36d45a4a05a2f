//! Command-line argument parsing and processing.
//!
//! Hand-rolled parsing into a `CliAction`: the default action is the live
//! watch loop; `convert` and `table` are one-shot commands. Unknown options
//! fall through to help display rather than erroring opaquely.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the live clock display (default).
    Watch {
        debug_enabled: bool,
        config_dir: Option<String>,
    },
    /// Convert a wall-clock time between the configured zone pair.
    Convert {
        debug_enabled: bool,
        config_dir: Option<String>,
        time: String,
        from: Option<String>,
        to: Option<String>,
        reverse: bool,
    },
    /// Print the 24-hour conversion table.
    Table {
        debug_enabled: bool,
        config_dir: Option<String>,
        reverse: bool,
    },
    /// Display help information and exit.
    ShowHelp,
    /// Display version information and exit.
    ShowVersion,
    /// Show help due to unknown arguments and exit.
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse the process arguments (without the program name).
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args().skip(1))
    }

    /// Parse command-line arguments into a structured result.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        let mut debug_enabled = false;
        let mut config_dir: Option<String> = None;
        let mut reverse = false;
        let mut from: Option<String> = None;
        let mut to: Option<String> = None;
        let mut command: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].as_str();
            match token {
                "--help" | "-h" => return ParsedArgs { action: CliAction::ShowHelp },
                "--version" | "-V" => return ParsedArgs { action: CliAction::ShowVersion },
                "--debug" | "-d" => debug_enabled = true,
                "--reverse" | "-r" => reverse = true,
                "--config-dir" => {
                    i += 1;
                    match tokens.get(i) {
                        Some(value) => config_dir = Some(value.clone()),
                        None => return ParsedArgs { action: CliAction::ShowHelpDueToError },
                    }
                }
                "--from" => {
                    i += 1;
                    match tokens.get(i) {
                        Some(value) => from = Some(value.clone()),
                        None => return ParsedArgs { action: CliAction::ShowHelpDueToError },
                    }
                }
                "--to" => {
                    i += 1;
                    match tokens.get(i) {
                        Some(value) => to = Some(value.clone()),
                        None => return ParsedArgs { action: CliAction::ShowHelpDueToError },
                    }
                }
                _ if token.starts_with('-') => {
                    return ParsedArgs { action: CliAction::ShowHelpDueToError };
                }
                _ if command.is_none() && matches!(token, "watch" | "convert" | "table") => {
                    command = Some(token.to_string());
                }
                _ => positionals.push(token.to_string()),
            }
            i += 1;
        }

        let action = match (command.as_deref().unwrap_or("watch"), positionals.as_slice()) {
            ("convert", [time]) => CliAction::Convert {
                debug_enabled,
                config_dir,
                time: time.clone(),
                from,
                to,
                reverse,
            },
            ("table", []) if from.is_none() && to.is_none() => CliAction::Table {
                debug_enabled,
                config_dir,
                reverse,
            },
            ("watch", []) if from.is_none() && to.is_none() && !reverse => CliAction::Watch {
                debug_enabled,
                config_dir,
            },
            _ => CliAction::ShowHelpDueToError,
        };

        ParsedArgs { action }
    }
}

/// Display version information.
pub fn display_version_info() {
    println!("tzclock v{}", env!("CARGO_PKG_VERSION"));
    println!("Live world clock and timezone converter for the terminal");
}

/// Display help information.
pub fn display_help() {
    println!("tzclock v{}", env!("CARGO_PKG_VERSION"));
    println!("Live world clock and timezone converter for the terminal");
    println!();
    println!("Usage: tzclock [COMMAND] [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  watch                 Show live clocks for the configured zones (default)");
    println!("  convert <HH:MM[:SS]>  Convert a wall-clock time between the zones");
    println!("  table                 Print the 24-hour conversion table");
    println!();
    println!("Options:");
    println!("  --from <ZONE>         Override the source timezone (convert)");
    println!("  --to <ZONE>           Override the target timezone (convert)");
    println!("  -r, --reverse         Swap source and target zones (convert, table)");
    println!("      --config-dir <DIR> Use an alternate configuration directory");
    println!("  -d, --debug           Enable detailed debug output");
    println!("  -h, --help            Print help information");
    println!("  -V, --version         Print version information");
}
