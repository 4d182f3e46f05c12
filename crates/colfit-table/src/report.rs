//! Whole-report parsing.

use crate::error::{Result, TableError};
use crate::extract::{extract_row, Row};
use crate::header::Header;

/// Line terminator convention of a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Detects the convention from the first terminator in `text`.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if text[..idx].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A parsed report: one header and the data rows below it.
///
/// Immutable once parsed. Blank lines are dropped during parsing and never
/// become rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    header: Header,
    rows: Vec<Row>,
    line_ending: LineEnding,
    trailing_newline: bool,
}

impl Report {
    /// Parses report text.
    ///
    /// The first non-blank line is the header. Fails with
    /// [`TableError::MalformedInput`] if there is none, and with
    /// [`TableError::FieldCountMismatch`] on the first data line that has too
    /// few fields.
    ///
    /// ```rust
    /// use colfit_table::Report;
    ///
    /// let report = Report::parse("NAME  SIZE\nsda   1.8T\nsdb   932G\n").unwrap();
    /// assert_eq!(report.header().len(), 2);
    /// assert_eq!(report.rows().len(), 2);
    /// assert!(report.ends_with_newline());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let line_ending = LineEnding::detect(text);
        let trailing_newline = text.ends_with('\n');

        let mut lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate()
            .map(|(idx, line)| (idx + 1, line))
            .skip_while(|(_, line)| line.trim().is_empty());

        let header = match lines.next() {
            Some((_, line)) => Header::parse(line)?,
            None => {
                return Err(TableError::MalformedInput(
                    "input has no header line".to_string(),
                ))
            }
        };

        let mut rows = Vec::new();
        for (number, line) in lines {
            if let Some(row) = extract_row(&header, line, number)? {
                rows.push(row);
            }
        }

        Ok(Self {
            header,
            rows,
            line_ending,
            trailing_newline,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Data rows in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Whether the input's final line was terminated.
    pub fn ends_with_newline(&self) -> bool {
        self.trailing_newline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_malformed() {
        assert!(matches!(
            Report::parse(""),
            Err(TableError::MalformedInput(_))
        ));
        assert!(matches!(
            Report::parse("\n  \n\t\n"),
            Err(TableError::MalformedInput(_))
        ));
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        let report = Report::parse("\n\nA B\n1 2\n").unwrap();
        assert_eq!(report.header().name(0), Some("A"));
        assert_eq!(report.rows()[0].line_number(), 4);
    }

    #[test]
    fn blank_data_lines_are_not_rows() {
        let report = Report::parse("A B\n1 2\n\n3 4\n").unwrap();
        assert_eq!(report.rows().len(), 2);
        assert_eq!(report.rows()[1].line_number(), 4);
    }

    #[test]
    fn header_only_report_has_no_rows() {
        let report = Report::parse("A B\n").unwrap();
        assert!(report.rows().is_empty());
    }

    #[test]
    fn detects_crlf() {
        let report = Report::parse("A B\r\n1 2\r\n").unwrap();
        assert_eq!(report.line_ending(), LineEnding::CrLf);
        assert_eq!(report.rows()[0].field(1), Some("2"));
        assert!(report.ends_with_newline());
    }

    #[test]
    fn detects_missing_final_newline() {
        let report = Report::parse("A B\n1 2").unwrap();
        assert_eq!(report.line_ending(), LineEnding::Lf);
        assert!(!report.ends_with_newline());
    }

    #[test]
    fn short_data_line_reports_its_line_number() {
        let err = Report::parse("A B C\n1 2 3\n4 5\n").unwrap_err();
        assert_eq!(
            err,
            TableError::FieldCountMismatch {
                line: 3,
                expected: 3,
                found: 2
            }
        );
    }
}
