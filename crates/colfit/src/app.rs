//! The reformatting pipeline: parse, filter, resolve, fit, render.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use colfit_filter::RuleSet;
use colfit_table::{render, resolve_columns, FitTarget, Layout, Report, Row};

use crate::cli::{terminal_width, CliArgs};
use crate::diag::Diagnostics;

/// Everything the pipeline needs besides the input text.
#[derive(Debug, Clone, Default)]
pub struct FitOptions {
    pub rules: RuleSet,
    /// Width to fit into. `None` keeps natural widths.
    pub target: Option<FitTarget>,
}

/// Reformats one report.
///
/// Either the complete reformatted report is returned or an error is; there
/// is no partial output.
pub fn fit_text(text: &str, options: &FitOptions, diag: &mut Diagnostics) -> Result<String> {
    let report = Report::parse(text)?;

    let mut kept: Vec<&Row> = Vec::with_capacity(report.rows().len());
    for row in report.rows() {
        match options.rules.first_match(row.fields()) {
            Some(hit) => {
                diag.info(format_args!("excluding line {}", row.line_number()));
                diag.debug(format_args!(
                    "field {:?} in column {} matches {} rule {:?}",
                    row.fields()[hit.column],
                    hit.column,
                    hit.rule.mode(),
                    hit.rule.pattern()
                ));
            }
            None => kept.push(row),
        }
    }

    let mut layout = Layout::natural(resolve_columns(report.header(), &kept));
    if let Some(target) = &options.target {
        layout = layout.fit(target);
        if layout.total_width() > target.width {
            diag.warn(format_args!(
                "table needs {} columns, more than the target of {}",
                layout.total_width(),
                target.width
            ));
        }
    }
    diag.info(format_args!("calculated widths: {:?}", layout.widths()));

    Ok(render(&report, &kept, &layout))
}

/// Reads the input named by `args` (or stdin) and reformats it.
pub fn run(args: &CliArgs, diag: &mut Diagnostics) -> Result<String> {
    let options = args.fit_options(terminal_width())?;

    let text = match args.input_path() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            text
        }
    };

    fit_text(&text, &options, diag)
}
