//! Re-rendering a report from its surviving rows.

use std::borrow::Borrow;

use crate::extract::Row;
use crate::fit::{Layout, TrimFrom};
use crate::report::Report;
use crate::resolve::{Align, ColumnSpec};
use crate::util::{display_width, pad_left, pad_right, truncate_end, truncate_start};

/// Renders the header and `rows` of `report` with `layout`.
///
/// Each field is padded to its column width according to the column's
/// alignment. The final column is never padded on the right, so no line
/// carries trailing whitespace. Lines are joined with the report's own
/// terminator, and a final terminator is written only if the input had one.
///
/// ```rust
/// use colfit_table::{render, resolve_columns, Layout, Report};
///
/// let report = Report::parse("NAME    SIZE\nsda     1.8T\nnvme0n1 932G\n").unwrap();
/// let layout = Layout::natural(resolve_columns(report.header(), report.rows()));
/// let out = render(&report, report.rows(), &layout);
/// assert_eq!(out, "NAME    SIZE\nsda     1.8T\nnvme0n1 932G\n");
/// ```
pub fn render<R: Borrow<Row>>(report: &Report, rows: &[R], layout: &Layout) -> String {
    let eol = report.line_ending().as_str();
    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 1);

    let names: Vec<&str> = report.header().names().collect();
    lines.push(render_line(&names, layout));
    for row in rows {
        let fields: Vec<&str> = row.borrow().fields().iter().map(String::as_str).collect();
        lines.push(render_line(&fields, layout));
    }

    let mut out = lines.join(eol);
    if report.ends_with_newline() {
        out.push_str(eol);
    }
    out
}

/// Renders one line of cells.
pub fn render_line(cells: &[&str], layout: &Layout) -> String {
    let last = layout.columns.len().saturating_sub(1);
    let mut line = String::new();

    for (spec, cell) in layout.columns.columns.iter().zip(cells) {
        line.push_str(&format_cell(cell, spec, layout.trim, spec.index == last));
        if let Some(&gap) = layout.gaps.get(spec.index) {
            line.extend(std::iter::repeat(' ').take(gap));
        }
    }

    line
}

fn format_cell(cell: &str, spec: &ColumnSpec, trim: TrimFrom, is_last: bool) -> String {
    let text = if display_width(cell) > spec.width {
        match trim {
            TrimFrom::End => truncate_end(cell, spec.width),
            TrimFrom::Start => truncate_start(cell, spec.width),
        }
    } else {
        cell.to_string()
    };

    match spec.align {
        Align::Right => pad_left(&text, spec.width),
        Align::Left if is_last => text,
        Align::Left => pad_right(&text, spec.width),
    }
}
