//! # Security-Policy Value Evaluation
//!
//! Evaluates observed Windows security-configuration values (exported
//! local security policy, already collected by the agent) against the
//! declarative expected values of a check document. Purely functional:
//! the export data, expected spec, and account-SID map all arrive as
//! call arguments.

pub mod accounts;
pub mod policy;
pub mod registry;
pub mod symbolic;
pub mod translate;

pub use accounts::{resolve_accounts, SidAccounts};
pub use policy::{evaluate_policy_check, CheckKind, PolicyCheck};
pub use registry::normalize_display_value;
pub use symbolic::translate_symbol;
pub use translate::translate;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// An observed or expected security-policy value.
///
/// Policy export lines are plain strings; compound registry-encoded
/// values are split into lists by the caller before evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicyValue {
    Scalar(String),
    List(Vec<String>),
}

impl PolicyValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        PolicyValue::Scalar(value.into())
    }

    pub fn list(items: Vec<String>) -> Self {
        PolicyValue::List(items)
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            PolicyValue::Scalar(s) => Some(s),
            PolicyValue::List(_) => None,
        }
    }

    /// Comma-joined rendition, used where a mode operates on the
    /// compound string form.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            PolicyValue::Scalar(s) => Cow::Borrowed(s),
            PolicyValue::List(items) => Cow::Owned(items.join(",")),
        }
    }

    /// Entries of the value: list items as-is, scalars comma-split.
    pub fn entries(&self) -> Vec<String> {
        match self {
            PolicyValue::Scalar(s) => s.split(',').map(str::to_string).collect(),
            PolicyValue::List(items) => items.clone(),
        }
    }
}

impl From<&str> for PolicyValue {
    fn from(value: &str) -> Self {
        PolicyValue::Scalar(value.to_string())
    }
}

impl From<String> for PolicyValue {
    fn from(value: String) -> Self {
        PolicyValue::Scalar(value)
    }
}

impl From<Vec<String>> for PolicyValue {
    fn from(items: Vec<String>) -> Self {
        PolicyValue::List(items)
    }
}

impl fmt::Display for PolicyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}
