//! colfit - Drop rows from aligned text reports and re-fit the columns.
//!
//! The binary wires three pieces together:
//!
//! - [`cli`]: argument decoding into [`CliArgs`] and [`FitOptions`]
//! - [`app`]: the parse, filter, resolve, fit and render pipeline
//! - [`diag`]: leveled diagnostics kept off stdout
//!
//! Parsing and rendering live in `colfit-table`, rule evaluation in
//! `colfit-filter`.

pub mod app;
pub mod cli;
pub mod diag;

pub use app::{fit_text, run, FitOptions};
pub use cli::CliArgs;
pub use diag::{Diagnostics, Level};
