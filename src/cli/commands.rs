//! CLI command definitions

use crate::validators::PatternName;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// vchconf CLI
#[derive(Parser, Debug)]
#[command(
    name = "vchconf",
    version,
    about = "Convert and validate Virtual Container Host configuration"
)]
pub struct Cli {
    /// Settings file (YAML or JSON)
    #[arg(long, global = true, env = "VCHCONF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the settings file
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Convert a wizard (UI model) document into an API request body
    ToApi {
        /// UI document (JSON, or YAML with a .yaml/.yml extension)
        input: PathBuf,
        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Convert an API VCH document into the UI model
    ToUi {
        /// API document (JSON, or YAML with a .yaml/.yml extension)
        input: PathBuf,
        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Check a value against a named pattern (exit status 1 on mismatch)
    Check {
        #[arg(value_enum)]
        pattern: PatternName,
        value: String,
    },

    /// Run the numeric field validators on a value and print the error bag
    Numeric {
        value: String,
        /// Accept "unlimited" as well as digits
        #[arg(long)]
        allow_unlimited: bool,
        /// Form key of the field, used in messages (e.g. cpuLimit)
        #[arg(long, default_value = "value")]
        field: String,
    },

    /// List the available patterns with their sources
    Patterns,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Install Fish shell completions automatically
    InstallFish,

    /// Generate man page
    ManPage,
}
