//! # FCA Eval - Fleet Compliance Audit evaluation engine
//!
//! Pure rule-evaluation comparators for a fleet compliance agent:
//! file-permission lattice comparison, string/regex matching, and the
//! multi-mode security-policy value translator. All entry points are
//! stateless functions of (observed value, rule spec); collection of
//! the observed values and scheduling of checks live in the agent, not
//! here.

pub mod comparators;
pub mod error;
pub mod report;
pub mod rule;
pub mod secedit;
pub mod verdict;

// Convenience re-exports
pub use error::EvalError;
pub use verdict::Verdict;

pub mod prelude {
    pub use crate::comparators::{check_mode, match_any, match_permission, match_string};

    pub use crate::error::EvalError;
    pub use crate::verdict::Verdict;

    pub use crate::rule::{PermissionRule, StringRule, ValueSpecMode};

    pub use crate::secedit::{
        evaluate_policy_check, normalize_display_value, resolve_accounts, translate,
        translate_symbol, CheckKind, PolicyCheck, PolicyValue, SidAccounts,
    };

    pub use crate::report::{AuditReport, AuditStatus, CheckOutcome};
}
