//! # Glob Target Matcher
//!
//! The default targeting predicate: matches the host identifier
//! against a shell-style glob (`web-*`, `db-0?`).

use crate::error::TargetError;
use globset::Glob;

/// True if `target` glob-matches the host identifier.
pub fn matches(host_id: &str, target: &str) -> Result<bool, TargetError> {
    let matcher = Glob::new(target)
        .map_err(|e| TargetError::InvalidGlob {
            target: target.to_string(),
            reason: e.to_string(),
        })?
        .compile_matcher();

    Ok(matcher.is_match(host_id))
}
