//! # Declarative Rule Specifications
//!
//! Expected-value specs as they appear in a compliance check document.
//! The rule-runner deserializes these out of its check files and hands
//! them to the comparators together with the observed value.
//!
//! The comparison mode of a security-policy value check is written as a
//! free-form label in check documents (e.g. `Reg_SZ_equal`,
//! `account_contains`). [`ValueSpecMode::resolve`] collapses the label
//! into a closed enum exactly once, at rule-parse time; evaluation then
//! dispatches on the enum, so an unrecognized label can only ever
//! surface as an undefined verdict, never as a silent pass.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel required-value meaning "no maximum permission asserted".
pub const PERMISSION_UNSET: &str = "None";

/// Expected-value spec for a file-permission check.
///
/// ```yaml
/// comparator:
///   type: file_permission
///   match:
///     required_value: 644
///     allow_more_strict: true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionRule {
    /// Maximum allowed mode, 3 octal digits, or the `"None"` sentinel.
    pub required_value: String,

    /// Accept modes that are the same or more restrictive.
    #[serde(default)]
    pub allow_more_strict: bool,
}

impl PermissionRule {
    pub fn exact(required_value: impl Into<String>) -> Self {
        Self {
            required_value: required_value.into(),
            allow_more_strict: false,
        }
    }

    pub fn at_most(required_value: impl Into<String>) -> Self {
        Self {
            required_value: required_value.into(),
            allow_more_strict: true,
        }
    }
}

/// Expected-value spec for a string check.
///
/// Exactly one of `match_value` / `match_any` is expected; the comparator
/// reports a missing-field input error otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringRule {
    /// Single expected string or pattern.
    #[serde(rename = "match", default)]
    pub match_value: Option<String>,

    /// List of candidates; the check passes if any of them matches.
    #[serde(default)]
    pub match_any: Option<Vec<String>>,

    /// Treat the expected value as a regex, searched anywhere in the
    /// observed value.
    #[serde(default)]
    pub is_regex: bool,

    /// Anchor `^`/`$` at line boundaries. Only meaningful with `is_regex`.
    #[serde(default = "default_multiline")]
    pub is_multiline: bool,
}

fn default_multiline() -> bool {
    true
}

impl StringRule {
    pub fn exact(expected: impl Into<String>) -> Self {
        Self {
            match_value: Some(expected.into()),
            match_any: None,
            is_regex: false,
            is_multiline: true,
        }
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            match_value: Some(pattern.into()),
            match_any: None,
            is_regex: true,
            is_multiline: true,
        }
    }

    pub fn any_of(candidates: Vec<String>) -> Self {
        Self {
            match_value: None,
            match_any: Some(candidates),
            is_regex: false,
            is_multiline: true,
        }
    }
}

/// Comparison mode of a security-policy value check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSpecMode {
    Equal,
    More,
    Less,
    Contains,
    AccountContains,
    Account,
    Configured,
}

impl ValueSpecMode {
    /// Resolve a free-form value-type label into a mode.
    ///
    /// Keywords are matched case-insensitively against the label, most
    /// specific first, so a label carrying both `account` and `contains`
    /// resolves to `AccountContains`. Returns `None` for labels with no
    /// known keyword; the evaluator surfaces those as an undefined
    /// verdict.
    pub fn resolve(label: &str) -> Option<Self> {
        let label = label.to_lowercase();
        if label.contains("more") {
            Some(ValueSpecMode::More)
        } else if label.contains("less") {
            Some(ValueSpecMode::Less)
        } else if label.contains("equal") {
            Some(ValueSpecMode::Equal)
        } else if label.contains("account_contains") {
            Some(ValueSpecMode::AccountContains)
        } else if label.contains("contains") {
            Some(ValueSpecMode::Contains)
        } else if label.contains("account") {
            Some(ValueSpecMode::Account)
        } else if label.contains("configured") {
            Some(ValueSpecMode::Configured)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSpecMode::Equal => "equal",
            ValueSpecMode::More => "more",
            ValueSpecMode::Less => "less",
            ValueSpecMode::Contains => "contains",
            ValueSpecMode::AccountContains => "account_contains",
            ValueSpecMode::Account => "account",
            ValueSpecMode::Configured => "configured",
        }
    }
}

impl fmt::Display for ValueSpecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
