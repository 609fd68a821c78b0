//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "provtag")]
#[command(about = "Dataset provenance tags and ordinal date conversion", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert ordinal day counts to ISO dates (YYYY-MM-DD)
    DateToStr {
        /// Ordinal day counts (0001-01-01 is day 1)
        #[arg(required = true, allow_negative_numbers = true)]
        ordinals: Vec<i64>,
    },

    /// Convert ISO dates (YYYY-MM-DD) to ordinal day counts
    StrToDate {
        /// Dates in YYYY-MM-DD form
        #[arg(required = true)]
        dates: Vec<String>,
    },

    /// Merge the sources of a provenance manifest into one tag
    Merge {
        /// Manifest file listing [[source]] entries
        manifest: PathBuf,

        /// Write the merged tag to this file as a one-entry manifest
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
