//! Column boundary resolution.
//!
//! The header line is the only structural definition of a report: it fixes
//! how many logical columns exist and where each one starts. Those start
//! offsets (anchors) are what the field extractor uses to decide which
//! column a data token belongs to.
//!
//! Column names are split on whitespace, with one exception: a lowercase
//! token that follows a capitalized one after exactly one space continues
//! its name. That keeps headers such as `Use% Mounted on` at two columns
//! instead of three, while `name size path` stays at three.

use crate::error::{Result, TableError};
use crate::token::{tokenize, Token};

/// One header column: its name and where it sits on the header line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderColumn {
    /// Column name as printed, inner spaces normalized to one.
    pub name: String,
    /// Display column where the name starts (the anchor offset).
    pub start: usize,
    /// Display column just past the name.
    pub end: usize,
}

/// The parsed header of a report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    columns: Vec<HeaderColumn>,
}

impl Header {
    /// Resolves the columns of a header line.
    ///
    /// Fails with [`TableError::MalformedInput`] when the line holds no
    /// column names at all.
    ///
    /// ```rust
    /// use colfit_table::Header;
    ///
    /// let header = Header::parse("Filesystem      Size  Used Avail Use% Mounted on").unwrap();
    /// assert_eq!(header.len(), 6);
    /// assert_eq!(header.anchor(1), Some(16));
    /// assert_eq!(header.name(5), Some("Mounted on"));
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Err(TableError::MalformedInput(
                "header line has no column names".to_string(),
            ));
        }

        let mut columns: Vec<HeaderColumn> = Vec::new();
        let mut prev: Option<Token<'_>> = None;
        for token in tokens {
            let continues = match (&prev, columns.last_mut()) {
                (Some(p), Some(last)) if continues_name(line, p, &token) => {
                    last.name.push(' ');
                    last.name.push_str(token.text);
                    last.end = token.end;
                    true
                }
                _ => false,
            };
            if !continues {
                columns.push(HeaderColumn {
                    name: token.text.to_string(),
                    start: token.start,
                    end: token.end,
                });
            }
            prev = Some(token);
        }

        Ok(Self { columns })
    }

    /// Number of logical columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns. Never true for a parsed header.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns, left to right.
    pub fn columns(&self) -> &[HeaderColumn] {
        &self.columns
    }

    /// Get the name of a specific column.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|c| c.name.as_str())
    }

    /// Get the anchor offset of a specific column.
    pub fn anchor(&self, index: usize) -> Option<usize> {
        self.columns.get(index).map(|c| c.start)
    }

    /// Column names, left to right.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

fn continues_name(line: &str, prev: &Token<'_>, token: &Token<'_>) -> bool {
    &line[prev.byte_end..token.byte_start] == " "
        && prev.text.chars().next().is_some_and(char::is_uppercase)
        && token.text.chars().next().is_some_and(char::is_lowercase)
}
