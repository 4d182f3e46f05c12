//! Column width and alignment resolution.
//!
//! Widths are computed from the header name and the surviving rows only, so
//! removing rows can shrink a column but never widen it. Alignment is decided
//! from the data: a column whose every surviving field looks like a quantity
//! (`42`, `3.9G`, `100%`, `1.5KiB`) is right-aligned, anything else is
//! left-aligned.

use std::borrow::Borrow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::Row;
use crate::header::Header;
use crate::util::display_width;

static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:[.,]\d+)?|[.,]\d+)(?:%|[kKMGTPEZY]i?B?|B)?$")
        .expect("numeric pattern is valid")
});

/// Returns `true` if a field reads as a number, optionally with a unit suffix.
///
/// ```rust
/// use colfit_table::is_numeric;
///
/// assert!(is_numeric("932G"));
/// assert!(is_numeric("42%"));
/// assert!(!is_numeric("/dev/sda1"));
/// ```
pub fn is_numeric(field: &str) -> bool {
    NUMERIC.is_match(field)
}

/// Horizontal alignment of a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
}

/// A resolved column: what the renderer needs to lay it out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    /// 0-based column index.
    pub index: usize,
    pub name: String,
    pub align: Align,
    /// Display width: the widest of the name and every surviving field.
    pub width: usize,
}

/// Resolved specs for all columns of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub columns: Vec<ColumnSpec>,
}

impl ResolvedColumns {
    /// Get a specific column.
    pub fn get(&self, index: usize) -> Option<&ColumnSpec> {
        self.columns.get(index)
    }

    /// Width of each column, left to right.
    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.width).collect()
    }

    /// Sum of all column widths (without gaps).
    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Resolves width and alignment for every header column over `rows`.
///
/// A column with no surviving rows is left-aligned and as wide as its name.
///
/// ```rust
/// use colfit_table::{resolve_columns, Align, Report};
///
/// let report = Report::parse("NAME SIZE\nsda  1.8T\nnvme0n1 932G\n").unwrap();
/// let resolved = resolve_columns(report.header(), report.rows());
/// assert_eq!(resolved.widths(), vec![7, 4]);
/// assert_eq!(resolved.get(1).unwrap().align, Align::Right);
/// ```
pub fn resolve_columns<R: Borrow<Row>>(header: &Header, rows: &[R]) -> ResolvedColumns {
    let columns = header
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let mut width = display_width(&column.name);
            let mut numeric = !rows.is_empty();
            for row in rows {
                if let Some(field) = row.borrow().field(index) {
                    width = width.max(display_width(field));
                    numeric = numeric && is_numeric(field);
                }
            }
            ColumnSpec {
                index,
                name: column.name.clone(),
                align: if numeric { Align::Right } else { Align::Left },
                width,
            }
        })
        .collect();

    ResolvedColumns { columns }
}
