//! Match modes for exclusion rules.

use std::fmt;

/// How a rule's pattern is compared with a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Whole-field equality.
    #[default]
    Exact,
    /// Field starts with the pattern.
    Prefix,
    /// Field ends with the pattern.
    Suffix,
    /// Field contains the pattern anywhere.
    Contains,
}

impl MatchMode {
    /// Looks up a mode keyword.
    ///
    /// `start` and `end` are accepted as aliases for `prefix` and `suffix`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "exact" => Some(MatchMode::Exact),
            "prefix" | "start" => Some(MatchMode::Prefix),
            "suffix" | "end" => Some(MatchMode::Suffix),
            "contains" => Some(MatchMode::Contains),
            _ => None,
        }
    }

    /// Returns `true` if `field` matches `pattern` under this mode.
    pub fn matches(self, field: &str, pattern: &str) -> bool {
        match self {
            MatchMode::Exact => field == pattern,
            MatchMode::Prefix => field.starts_with(pattern),
            MatchMode::Suffix => field.ends_with(pattern),
            MatchMode::Contains => field.contains(pattern),
        }
    }

    /// Returns the canonical keyword of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::Prefix => "prefix",
            MatchMode::Suffix => "suffix",
            MatchMode::Contains => "contains",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_aliases() {
        assert_eq!(MatchMode::from_keyword("exact"), Some(MatchMode::Exact));
        assert_eq!(MatchMode::from_keyword("prefix"), Some(MatchMode::Prefix));
        assert_eq!(MatchMode::from_keyword("start"), Some(MatchMode::Prefix));
        assert_eq!(MatchMode::from_keyword("suffix"), Some(MatchMode::Suffix));
        assert_eq!(MatchMode::from_keyword("end"), Some(MatchMode::Suffix));
        assert_eq!(MatchMode::from_keyword("contains"), Some(MatchMode::Contains));
        assert_eq!(MatchMode::from_keyword("Exact"), None);
        assert_eq!(MatchMode::from_keyword(""), None);
    }

    #[test]
    fn mode_matching() {
        assert!(MatchMode::Exact.matches("tmpfs", "tmpfs"));
        assert!(!MatchMode::Exact.matches("tmpfs2", "tmpfs"));

        assert!(MatchMode::Prefix.matches("/dev/loop0", "/dev/loop"));
        assert!(!MatchMode::Prefix.matches("/dev/sda1", "/dev/loop"));

        assert!(MatchMode::Suffix.matches("/snap/core18", "core18"));
        assert!(!MatchMode::Suffix.matches("/snap/core18", "snap"));

        assert!(MatchMode::Contains.matches("/run/user/1000", "user"));
        assert!(!MatchMode::Contains.matches("/run", "user"));
    }

    #[test]
    fn empty_pattern_matches_for_substring_modes() {
        assert!(MatchMode::Prefix.matches("x", ""));
        assert!(MatchMode::Contains.matches("x", ""));
        assert!(!MatchMode::Exact.matches("x", ""));
    }

    #[test]
    fn display_uses_canonical_keyword() {
        assert_eq!(MatchMode::Prefix.to_string(), "prefix");
        assert_eq!(MatchMode::from_keyword("end").unwrap().to_string(), "suffix");
    }
}
