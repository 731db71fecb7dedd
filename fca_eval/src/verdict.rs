//! # Evaluation Verdicts
//!
//! Three-way result of evaluating one compliance check. `Undefined` is
//! reserved for checks the engine could not evaluate (unrecognized
//! comparison mode, insufficient inputs) and must never be collapsed
//! into `Fail` by callers: a failing check is a compliance finding, an
//! undefined check is an evaluation defect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum Verdict {
    /// The observed value satisfies the rule.
    Pass,

    /// The rule was evaluated and did not hold.
    Fail(String),

    /// The rule could not be evaluated.
    Undefined(String),
}

impl Verdict {
    /// Build a failing verdict from anything stringish.
    pub fn fail(reason: impl Into<String>) -> Self {
        Verdict::Fail(reason.into())
    }

    /// Build an undefined verdict from anything stringish.
    pub fn undefined(reason: impl Into<String>) -> Self {
        Verdict::Undefined(reason.into())
    }

    /// Lift a plain boolean comparison result, attaching `reason` on failure.
    pub fn from_bool(passed: bool, reason: impl FnOnce() -> String) -> Self {
        if passed {
            Verdict::Pass
        } else {
            Verdict::Fail(reason())
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Verdict::Fail(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Verdict::Undefined(_))
    }

    /// Explanation string for non-passing verdicts.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(reason) | Verdict::Undefined(reason) => Some(reason),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Fail(reason) => write!(f, "fail: {}", reason),
            Verdict::Undefined(reason) => write!(f, "undefined: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bool() {
        assert_eq!(Verdict::from_bool(true, || unreachable!()), Verdict::Pass);
        let failed = Verdict::from_bool(false, || "expected=1 got=0".to_string());
        assert_eq!(failed.reason(), Some("expected=1 got=0"));
    }

    #[test]
    fn test_undefined_is_not_fail() {
        let undefined = Verdict::undefined("unknown mode 'frobnicate'");
        assert!(undefined.is_undefined());
        assert!(!undefined.is_fail());
        assert!(!undefined.is_pass());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Verdict::fail("nope")).unwrap();
        assert_eq!(json["status"], "fail");
        assert_eq!(json["reason"], "nope");

        let json = serde_json::to_value(Verdict::Pass).unwrap();
        assert_eq!(json["status"], "pass");
    }
}
