//! # colfit-table - Column recovery and re-fitting for aligned text reports
//!
//! Reports such as `df`, `lsblk` or `free` print a header row and data rows
//! padded with whitespace so that columns line up. Once some rows are
//! removed, the padding that was sized for the widest entries no longer
//! fits. This crate recovers the logical columns, recomputes their widths
//! from whatever rows remain, and renders the table again.
//!
//! ## Pipeline
//!
//! | Stage | Entry point |
//! |-------|-------------|
//! | Column boundaries from the header | [`Header::parse`] |
//! | One [`Row`] per data line | [`extract_row`], [`Report::parse`] |
//! | Widths and alignment | [`resolve_columns`] |
//! | Optional width fitting | [`Layout::fit`] |
//! | Output text | [`render`] |
//!
//! Each stage is a pure function of the previous stage's output, so the
//! same report and row selection always render to the same bytes.
//!
//! ## Example
//!
//! ```rust
//! use colfit_table::{render, resolve_columns, Layout, Report, Row};
//!
//! let text = "\
//! Filesystem      Size  Used Avail Use% Mounted on
//! /dev/sda1        50G   20G   28G  42% /
//! /dev/loop10      56M   56M     0 100% /snap/core18/1880
//! ";
//!
//! let report = Report::parse(text).unwrap();
//! let kept: Vec<&Row> = report
//!     .rows()
//!     .iter()
//!     .filter(|row| !row.fields()[0].starts_with("/dev/loop"))
//!     .collect();
//!
//! let layout = Layout::natural(resolve_columns(report.header(), &kept));
//! assert_eq!(
//!     render(&report, &kept, &layout),
//!     "Filesystem Size Used Avail Use% Mounted on\n/dev/sda1   50G  20G   28G  42% /\n"
//! );
//! ```

mod error;
mod extract;
mod fit;
mod header;
mod render;
mod report;
mod resolve;
mod token;
mod util;

pub use error::{Result, TableError};
pub use extract::{extract_row, Row};
pub use fit::{FitTarget, Layout, TrimFrom, GAP};
pub use header::{Header, HeaderColumn};
pub use render::{render, render_line};
pub use report::{LineEnding, Report};
pub use resolve::{is_numeric, resolve_columns, Align, ColumnSpec, ResolvedColumns};
pub use util::{display_width, pad_left, pad_right, truncate_end, truncate_start, TAB_STOP};
