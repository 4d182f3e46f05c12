//! colfit-filter - Row exclusion rules for aligned text reports.
//!
//! An [`ExclusionRule`] pairs a column target, a [`MatchMode`] and a
//! pattern. A [`RuleSet`] drops a row when any of its rules matches. Rules
//! work on plain slices of strings, so they apply equally to parsed report
//! rows or to any other tabular data.
//!
//! # Quick Start
//!
//! ```rust
//! use colfit_filter::{IndexBase, RuleSet};
//!
//! let rules = RuleSet::parse_all(["1,prefix,/dev/loop", "1,tmpfs"], IndexBase::One).unwrap();
//!
//! assert!(rules.excludes(&["/dev/loop0", "56M", "/snap/core18/1880"]));
//! assert!(rules.excludes(&["tmpfs", "3.9G", "/dev/shm"]));
//! assert!(rules.keeps(&["/dev/sda1", "50G", "/"]));
//! ```
//!
//! # Rule Grammar
//!
//! | Form | Meaning |
//! |------|---------|
//! | `PATTERN` | exact match against any column |
//! | `INDEX,PATTERN` | exact match against one column |
//! | `MODE,PATTERN` | `MODE` match against any column |
//! | `INDEX,MODE,PATTERN` | `MODE` match against one column |
//!
//! Modes are `exact`, `prefix` (or `start`), `suffix` (or `end`) and
//! `contains`. Anything else is a [`RuleError::InvalidRule`].

mod error;
mod mode;
mod rule;
mod set;

pub use error::{Result, RuleError};
pub use mode::MatchMode;
pub use rule::{ExclusionRule, IndexBase, Target};
pub use set::{RuleMatch, RuleSet};
