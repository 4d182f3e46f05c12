//! Field extraction for data lines.
//!
//! A data line is tokenized on whitespace, then tokens are merged into
//! logical columns using the header anchors. Walking the tokens left to
//! right with a current column `c`:
//!
//! - the first token opens column 0;
//! - at the last column every remaining token is absorbed, so the rightmost
//!   column always runs to end of line;
//! - when the tokens left equal the columns left to fill, the walk must
//!   advance;
//! - otherwise it advances once a token reaches past the next column's
//!   anchor offset.
//!
//! Merged tokens are rejoined with single spaces.

use crate::error::{Result, TableError};
use crate::header::Header;
use crate::token::tokenize;

/// One data line split into exactly one field per header column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
    source: String,
    line: usize,
}

impl Row {
    /// The logical fields, one per header column.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Get a specific field.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields. Always equal to the header's column count.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The line this row was extracted from, without its terminator.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 1-based line number in the source text.
    pub fn line_number(&self) -> usize {
        self.line
    }
}

/// Splits one data line into a [`Row`] shaped like `header`.
///
/// Returns `Ok(None)` for a blank line. A line with fewer tokens than the
/// header has columns fails with [`TableError::FieldCountMismatch`].
///
/// ```rust
/// use colfit_table::{extract_row, Header};
///
/// let header = Header::parse("Filesystem      Size  Used Avail Use% Mounted on").unwrap();
/// let row = extract_row(&header, "/dev/sdb1       932G  410G  522G  44% /mnt/My Drive", 2)
///     .unwrap()
///     .unwrap();
/// assert_eq!(row.field(5), Some("/mnt/My Drive"));
/// ```
pub fn extract_row(header: &Header, line: &str, line_number: usize) -> Result<Option<Row>> {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return Ok(None);
    }

    let columns = header.len();
    if tokens.len() < columns {
        return Err(TableError::FieldCountMismatch {
            line: line_number,
            expected: columns,
            found: tokens.len(),
        });
    }

    let mut groups: Vec<Vec<&str>> = vec![Vec::new(); columns];
    let mut column = 0;
    for (k, token) in tokens.iter().enumerate() {
        if k > 0 && column + 1 < columns {
            let tokens_left = tokens.len() - k;
            let columns_left = columns - column - 1;
            let next_anchor = header.anchor(column + 1).unwrap_or(usize::MAX);
            if tokens_left == columns_left || token.end > next_anchor {
                column += 1;
            }
        }
        groups[column].push(token.text);
    }

    Ok(Some(Row {
        fields: groups.into_iter().map(|g| g.join(" ")).collect(),
        source: line.to_string(),
        line: line_number,
    }))
}
