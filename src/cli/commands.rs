//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "upkeep")]
#[command(about = "Keep MAINTAINERS.txt and SUPPORT.txt registries up to date", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Registry to work on (support, maintainers); defaults to the configured kind
    #[arg(short, long, global = true)]
    pub kind: Option<String>,

    /// Directory holding the registry (default: UPKEEP_DIR or current directory)
    #[arg(short = 'C', long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Reference date used instead of today (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the registry and summarize how long it is covered (default)
    Check,

    /// Print the parsed registry without changing it
    Show,

    /// List every dated entry with its status
    List,

    /// Renew a contact, or add it if it is not listed yet
    Bump {
        /// How far to bump (for days: the day of the current month)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Unit: days, months or years (first letter is enough)
        unit: String,

        /// Contact, e.g. "Name <email>" (default: configured identity)
        name: Option<String>,
    },

    /// Remove entries whose date has passed
    Prune,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
