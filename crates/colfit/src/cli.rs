//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use colfit_filter::{IndexBase, RuleSet};
use colfit_table::{FitTarget, TrimFrom};

use crate::app::FitOptions;
use crate::diag::Level;

/// Drop rows from an aligned text report and re-fit the remaining columns.
///
/// Reads a report such as the output of `df`, removes every row matched by an
/// exclusion rule, and prints the rest with column widths recomputed from
/// the surviving rows.
#[derive(Parser, Debug, Clone)]
#[command(name = "colfit")]
#[command(version)]
#[command(group(ArgGroup::new("volume").args(["quiet", "verbose", "debug"])))]
pub struct CliArgs {
    /// Input file. Reads stdin when absent or `-`.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Exclude rows matching RULE. Repeatable.
    ///
    /// RULE is `PATTERN`, `COLUMN,PATTERN`, `MODE,PATTERN` or
    /// `COLUMN,MODE,PATTERN`. MODE is exact (default), prefix/start,
    /// suffix/end or contains. COLUMN is 1-based unless --zero-based is given.
    #[arg(short = 'x', long = "exclude", value_name = "RULE", allow_hyphen_values = true)]
    pub exclude: Vec<String>,

    /// Count exclusion rule columns from 0 instead of 1.
    #[arg(long)]
    pub zero_based: bool,

    /// Columns to shrink when the table is wider than --term-width.
    /// Comma-separated 0-based indices; negative values count from the end.
    #[arg(
        short = 't',
        long,
        value_name = "COLUMNS",
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "-1,0"
    )]
    pub truncated_columns: Vec<isize>,

    /// When shrinking columns, cut from the start of fields instead of the end.
    #[arg(short = 's', long = "start")]
    pub trim_start: bool,

    /// Spread the columns out to fill the target width.
    #[arg(short, long)]
    pub expand: bool,

    /// Accepted for compatibility. Every row already carries every column.
    #[arg(short = 'i', long)]
    pub include_all_columns: bool,

    /// Fit output into this many columns instead of leaving widths natural.
    #[arg(short = 'w', long, value_name = "WIDTH")]
    pub term_width: Option<usize>,

    /// Write diagnostics to this file instead of stderr. Overwrites the file.
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Report errors only.
    #[arg(short, long)]
    pub quiet: bool,

    /// Report excluded lines and computed widths.
    #[arg(short, long)]
    pub verbose: bool,

    /// Report which rule matched each excluded line.
    #[arg(short = 'D', long)]
    pub debug: bool,
}

impl CliArgs {
    /// Diagnostic level selected by the volume flags.
    pub fn level(&self) -> Level {
        if self.quiet {
            Level::Quiet
        } else if self.debug {
            Level::Debug
        } else if self.verbose {
            Level::Info
        } else {
            Level::Warning
        }
    }

    pub fn index_base(&self) -> IndexBase {
        if self.zero_based {
            IndexBase::Zero
        } else {
            IndexBase::One
        }
    }

    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Target width, if any.
    ///
    /// `--term-width` always sets one. `--expand` alone falls back to
    /// `terminal_width`, which is `None` when stdout is not a terminal.
    pub fn fit_target(&self, terminal_width: Option<usize>) -> Option<FitTarget> {
        let width = match (self.term_width, self.expand) {
            (Some(width), _) => width,
            (None, true) => terminal_width?,
            (None, false) => return None,
        };
        Some(FitTarget {
            width,
            expand: self.expand,
            truncatable: self.truncated_columns.clone(),
            trim: if self.trim_start {
                TrimFrom::Start
            } else {
                TrimFrom::End
            },
        })
    }

    /// Converts the arguments into pipeline options.
    pub fn fit_options(&self, terminal_width: Option<usize>) -> colfit_filter::Result<FitOptions> {
        Ok(FitOptions {
            rules: RuleSet::parse_all(&self.exclude, self.index_base())?,
            target: self.fit_target(terminal_width),
        })
    }
}

/// Width of the terminal attached to stdout, if there is one.
pub fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}
