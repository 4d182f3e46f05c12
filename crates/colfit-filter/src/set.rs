//! Rule sets: the OR of any number of exclusion rules.

use crate::error::Result;
use crate::rule::{ExclusionRule, IndexBase};

/// Which rule matched a row, and on which column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub rule: &'a ExclusionRule,
    /// 0-based index of the matching field.
    pub column: usize,
}

/// A collection of exclusion rules.
///
/// A row is excluded when at least one rule matches it. Rules are
/// independent of each other and of their order; an empty set keeps every
/// row.
///
/// # Example
///
/// ```rust
/// use colfit_filter::{ExclusionRule, RuleSet};
///
/// let rules: RuleSet = vec![
///     ExclusionRule::prefix(0, "/dev/loop"),
///     ExclusionRule::exact(0, "tmpfs"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(rules.excludes(&["tmpfs", "3.9G"]));
/// assert!(rules.excludes(&["/dev/loop0", "56M"]));
/// assert!(rules.keeps(&["/dev/sda1", "50G"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<ExclusionRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every rule string, failing on the first invalid one.
    pub fn parse_all<I, S>(specs: I, base: IndexBase) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        specs
            .into_iter()
            .map(|spec| ExclusionRule::parse(spec.as_ref(), base))
            .collect()
    }

    /// Adds a rule.
    pub fn push(&mut self, rule: ExclusionRule) {
        self.rules.push(rule);
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExclusionRule> {
        self.rules.iter()
    }

    /// Finds the first rule that matches the row.
    pub fn first_match<S: AsRef<str>>(&self, fields: &[S]) -> Option<RuleMatch<'_>> {
        self.rules.iter().find_map(|rule| {
            rule.matching_column(fields)
                .map(|column| RuleMatch { rule, column })
        })
    }

    /// Returns `true` if any rule matches the row.
    pub fn excludes<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        self.rules.iter().any(|rule| rule.matches(fields))
    }

    /// Returns `true` if no rule matches the row.
    pub fn keeps<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        !self.excludes(fields)
    }

    /// Keeps the items whose fields no rule matches, preserving order.
    pub fn filter<'a, T, S, F>(&self, items: &'a [T], fields: F) -> Vec<&'a T>
    where
        S: AsRef<str> + 'a,
        F: Fn(&'a T) -> &'a [S],
    {
        items.iter().filter(|item| self.keeps(fields(*item))).collect()
    }
}

impl FromIterator<ExclusionRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = ExclusionRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<ExclusionRule> for RuleSet {
    fn extend<I: IntoIterator<Item = ExclusionRule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a ExclusionRule;
    type IntoIter = std::slice::Iter<'a, ExclusionRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
