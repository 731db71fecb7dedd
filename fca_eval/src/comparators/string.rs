//! # String Comparator
//!
//! Exact or regex matching of an observed string against one expected
//! value (`match`) or a list of candidates (`match_any`). Regex
//! patterns are searched, not fully anchored: a partial match anywhere
//! in the observed value suffices. `is_multiline` (default on) makes
//! `^`/`$` anchor at line boundaries instead of string boundaries.

use crate::error::EvalError;
use crate::rule::StringRule;
use crate::verdict::Verdict;
use log::debug;
use regex::Regex;

/// Match an observed value against the rule's single `match` spec.
pub fn match_string(
    audit_id: &str,
    observed: &str,
    rule: &StringRule,
) -> Result<Verdict, EvalError> {
    debug!("running string::match for audit_id: {}", audit_id);

    let expected = rule
        .match_value
        .as_deref()
        .ok_or_else(|| EvalError::MissingField {
            audit_id: audit_id.to_string(),
            field: "match".to_string(),
        })?;

    if compare(observed, expected, rule)? {
        return Ok(Verdict::Pass);
    }

    Ok(Verdict::fail(format!(
        "string match failed for audit '{}': expected={}, got={}",
        audit_id, expected, observed
    )))
}

/// Match an observed value against the rule's `match_any` candidates,
/// short-circuiting on the first success.
pub fn match_any(
    audit_id: &str,
    observed: &str,
    rule: &StringRule,
) -> Result<Verdict, EvalError> {
    debug!("running string::match_any for audit_id: {}", audit_id);

    let candidates = rule
        .match_any
        .as_deref()
        .ok_or_else(|| EvalError::MissingField {
            audit_id: audit_id.to_string(),
            field: "match_any".to_string(),
        })?;

    for candidate in candidates {
        if compare(observed, candidate, rule)? {
            return Ok(Verdict::Pass);
        }
    }

    Ok(Verdict::fail(format!(
        "string match_any failed for audit '{}': none of {:?} matched, got={}",
        audit_id, candidates, observed
    )))
}

/// Compare one observed/expected pair under the rule's regex options.
fn compare(observed: &str, expected: &str, rule: &StringRule) -> Result<bool, EvalError> {
    if !rule.is_regex {
        return Ok(observed == expected);
    }

    let pattern = if rule.is_multiline {
        format!("(?m){}", expected)
    } else {
        expected.to_string()
    };

    let re = Regex::new(&pattern).map_err(|e| EvalError::InvalidPattern {
        pattern: expected.to_string(),
        reason: e.to_string(),
    })?;

    Ok(re.is_match(observed))
}
