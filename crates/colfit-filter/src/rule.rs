//! Exclusion rules and their string grammar.
//!
//! A rule is written as up to three comma-separated parts:
//!
//! | Form | Meaning |
//! |------|---------|
//! | `PATTERN` | exact match against any column |
//! | `INDEX,PATTERN` | exact match against one column |
//! | `MODE,PATTERN` | `MODE` match against any column |
//! | `INDEX,MODE,PATTERN` | `MODE` match against one column |
//!
//! The string is split at the first two commas only, so a three-part rule's
//! pattern may itself contain commas. Whether `INDEX` counts from 0 or 1 is
//! chosen by the caller with [`IndexBase`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RuleError};
use crate::mode::MatchMode;

/// Which fields of a row a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Every field.
    Any,
    /// One field, by 0-based index.
    Column(usize),
}

/// Numbering convention for column indices in rule strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexBase {
    /// The first column is `0`.
    Zero,
    /// The first column is `1`.
    #[default]
    One,
}

impl IndexBase {
    fn first(self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

/// A predicate that removes a row from the output when it matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExclusionRule {
    target: Target,
    mode: MatchMode,
    pattern: String,
}

impl ExclusionRule {
    /// Creates a new rule.
    pub fn new(target: Target, mode: MatchMode, pattern: impl Into<String>) -> Self {
        Self {
            target,
            mode,
            pattern: pattern.into(),
        }
    }

    /// Exact match on the 0-based column `index`.
    pub fn exact(index: usize, pattern: impl Into<String>) -> Self {
        Self::new(Target::Column(index), MatchMode::Exact, pattern)
    }

    /// Prefix match on the 0-based column `index`.
    pub fn prefix(index: usize, pattern: impl Into<String>) -> Self {
        Self::new(Target::Column(index), MatchMode::Prefix, pattern)
    }

    /// Parses a rule string, reading column indices with `base`.
    ///
    /// ```rust
    /// use colfit_filter::{ExclusionRule, IndexBase, MatchMode, Target};
    ///
    /// let rule = ExclusionRule::parse("1,prefix,/dev/loop", IndexBase::One).unwrap();
    /// assert_eq!(rule.target(), Target::Column(0));
    /// assert_eq!(rule.mode(), MatchMode::Prefix);
    /// assert_eq!(rule.pattern(), "/dev/loop");
    /// ```
    pub fn parse(spec: &str, base: IndexBase) -> Result<Self> {
        if spec.is_empty() {
            return Err(RuleError::invalid(spec, "empty rule"));
        }

        let parts: Vec<&str> = spec.splitn(3, ',').collect();
        match parts.as_slice() {
            [pattern] => Ok(Self::new(Target::Any, MatchMode::Exact, *pattern)),
            [first, pattern] if looks_like_index(first) => {
                let index = column_index(spec, first, base)?;
                Ok(Self::new(Target::Column(index), MatchMode::Exact, *pattern))
            }
            [mode, pattern] => {
                let mode = match_mode(spec, mode)?;
                Ok(Self::new(Target::Any, mode, *pattern))
            }
            [index, mode, pattern] => {
                let index = column_index(spec, index, base)?;
                let mode = match_mode(spec, mode)?;
                Ok(Self::new(Target::Column(index), mode, *pattern))
            }
            _ => Err(RuleError::invalid(spec, "expected 1 to 3 comma-separated parts")),
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` if a single field value matches, ignoring the target.
    pub fn matches_field(&self, field: &str) -> bool {
        self.mode.matches(field, &self.pattern)
    }

    /// Returns the index of the first targeted field that matches.
    ///
    /// A column target outside the row never matches.
    pub fn matching_column<S: AsRef<str>>(&self, fields: &[S]) -> Option<usize> {
        match self.target {
            Target::Column(index) => fields
                .get(index)
                .filter(|field| self.matches_field(field.as_ref()))
                .map(|_| index),
            Target::Any => fields.iter().position(|f| self.matches_field(f.as_ref())),
        }
    }

    /// Returns `true` if this rule matches the row.
    pub fn matches<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        self.matching_column(fields).is_some()
    }
}

impl FromStr for ExclusionRule {
    type Err = RuleError;

    /// Parses with 1-based column indices.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, IndexBase::One)
    }
}

impl fmt::Display for ExclusionRule {
    /// Writes the rule as `MODE,PATTERN` or `INDEX,MODE,PATTERN`.
    ///
    /// Indices are written 0-based, so the text parses back with
    /// [`IndexBase::Zero`]. An any-column rule whose pattern contains a comma
    /// does not parse back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Target::Any => write!(f, "{},{}", self.mode, self.pattern),
            Target::Column(index) => write!(f, "{},{},{}", index, self.mode, self.pattern),
        }
    }
}

fn looks_like_index(part: &str) -> bool {
    part.trim().parse::<i64>().is_ok()
}

fn column_index(spec: &str, part: &str, base: IndexBase) -> Result<usize> {
    let first = base.first();
    match part.trim().parse::<usize>() {
        Ok(n) if n >= first => Ok(n - first),
        _ => Err(RuleError::invalid(
            spec,
            format!("column {part:?} is not an index of {first} or more"),
        )),
    }
}

fn match_mode(spec: &str, part: &str) -> Result<MatchMode> {
    MatchMode::from_keyword(part)
        .ok_or_else(|| RuleError::invalid(spec, format!("unknown match mode {part:?}")))
}
