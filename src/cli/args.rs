//! Command line argument parsing for the typochecker CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// typochecker - find likely typos in a text file
#[derive(Parser, Debug, Clone)]
#[command(name = "typochecker")]
#[command(about = "Find likely typos in a text file and suggest corrections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TypoCheckerArgs {
    /// File to check
    #[arg(value_name = "TARGET_FILE")]
    pub target_file: PathBuf,

    /// Word list, one word per line [default: /usr/share/dict/words]
    #[arg(short, long, value_name = "DICT")]
    pub dictionary: Option<PathBuf>,

    /// Additional keyword list, one word per line
    #[arg(short, long, value_name = "KEYWORD_FILE")]
    pub keyword: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Minimum length of checked words [default: 5]
    #[arg(long)]
    pub min_word_len: Option<usize>,

    /// Maximum edit distance of suggestions [default: 1]
    #[arg(long)]
    pub distance: Option<usize>,

    /// Count only insertions, deletions and substitutions as edits
    #[arg(long)]
    pub no_transpositions: bool,

    /// Check lines in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl TypoCheckerArgs {
    /// Get the effective verbosity level. Each `-v` raises it by one from
    /// the default of 1, up to 3.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1).min(3)
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per typo
    Human,
    /// JSON array of typos
    Json,
}
