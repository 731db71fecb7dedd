//! # Regex Target Matcher
//!
//! Matches the host identifier against a regex anchored at the start
//! of the identifier (the pattern may still match a prefix only).

use crate::error::TargetError;
use regex::Regex;

/// True if `target` matches at the beginning of the host identifier.
pub fn matches(host_id: &str, target: &str) -> Result<bool, TargetError> {
    // Anchor at the start; a bare `^` inside a group keeps user
    // alternations from escaping the anchor.
    let pattern = format!("^(?:{})", target);

    let re = Regex::new(&pattern).map_err(|e| TargetError::InvalidRegex {
        target: target.to_string(),
        reason: e.to_string(),
    })?;

    Ok(re.is_match(host_id))
}
