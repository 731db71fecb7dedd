//! # Evaluation Errors
//!
//! Input errors are fatal for a single check only: the rule-runner
//! catches them per check and continues with the rest of the rule set.
//! They are distinct from [`Verdict::Fail`](crate::Verdict::Fail)
//! (rule evaluated, did not hold) and from
//! [`Verdict::Undefined`](crate::Verdict::Undefined) (rule mode not
//! recognized or inputs insufficient).

/// Error types for rule evaluation
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("Invalid permission digit '{digit}' in mode '{mode}': each digit must be 0-7")]
    InvalidPermissionDigit { digit: char, mode: String },

    #[error("Invalid permission mode '{mode}': expected 3 octal digits")]
    InvalidPermissionMode { mode: String },

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Rule for audit '{audit_id}' is missing required field '{field}'")]
    MissingField { audit_id: String, field: String },
}
