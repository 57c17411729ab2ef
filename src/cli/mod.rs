//! Command-line front end.
//!
//! Parses arguments, installs logging and dispatches to `commands`.

mod commands;

pub use commands::{execute, CliError};

use crate::services::default_services;
use crate::system_dict::SystemDictKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Inspect the macOS system dictionaries
#[derive(Debug, Parser)]
#[command(name = "sysdict", version, about)]
pub struct Cli {
    /// Settings file (defaults to <config dir>/sysdict/settings.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List dictionaries enabled in Dictionary.app
    Active {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every installed dictionary, enabled or not
    Available {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the dictionary with the given identifier
    Find { identifier: String },
    /// Look up a word in a system dictionary
    Lookup {
        word: String,
        /// Dictionary to use (daijirin, wisdom or a full identifier).
        /// Defaults to the configured dictionary.
        #[arg(long = "dict", value_name = "KIND")]
        dict: Option<SystemDictKind>,
    },
    /// Set the dictionary used when --dict is not given
    SetDefault { kind: SystemDictKind },
}

/// Install a log subscriber writing to stderr.
///
/// `log` records from the library are bridged into the subscriber.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Binary entry point. Returns the process exit status.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match execute(&cli, default_services(), &mut out) {
        Ok(()) => 0,
        Err(e) => {
            crate::debug!("Command failed: {:?}", e);
            eprintln!("sysdict: {}", e);
            1
        }
    }
}
