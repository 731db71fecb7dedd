//! # File-Permission Comparator
//!
//! Compares an observed file mode against the maximum mode a check
//! allows. With `allow_more_strict` the observed mode may also be more
//! restrictive than the required one; without it the comparison is
//! exact.
//!
//! The caller passes the raw observed mode string including its leading
//! file-type character (e.g. `"0644"`); the comparator strips that
//! prefix itself. The literal value `"0"` is a sentinel meaning there
//! was no meaningful permission to check (path not found, no ACL) and
//! always passes.

use crate::error::EvalError;
use crate::rule::{PermissionRule, PERMISSION_UNSET};
use crate::verdict::Verdict;
use log::debug;

/// Match an observed file mode against a permission rule.
pub fn match_permission(
    audit_id: &str,
    observed: &str,
    rule: &PermissionRule,
) -> Result<Verdict, EvalError> {
    debug!("running file_permission::match for audit_id: {}", audit_id);

    let given = if observed == "0" {
        observed
    } else {
        // Drop the leading file-type character from the raw mode.
        let mut chars = observed.chars();
        chars.next();
        chars.as_str()
    };

    if check_mode(&rule.required_value, given, rule.allow_more_strict)? {
        return Ok(Verdict::Pass);
    }

    Ok(Verdict::fail(format!(
        "file permission check failed for audit '{}': allow_more_strict={}, expected={}, got={}",
        audit_id, rule.allow_more_strict, rule.required_value, given
    )))
}

/// Check whether `given` is equal to `max` or, when `allow_more_strict`
/// is set, more restrictive than it.
///
/// Both modes are strings of 3 octal digits. Examples:
///
/// ```text
/// check_mode("644", "644", false)  ->  true
/// check_mode("644", "600", false)  ->  false
/// check_mode("644", "644", true)   ->  true
/// check_mode("644", "600", true)   ->  true
/// check_mode("644", "655", true)   ->  false
/// ```
pub fn check_mode(
    max_permission: &str,
    given_permission: &str,
    allow_more_strict: bool,
) -> Result<bool, EvalError> {
    if given_permission == "0" {
        return Ok(true);
    }

    if !allow_more_strict || max_permission == PERMISSION_UNSET {
        return Ok(max_permission == given_permission);
    }

    let max_digits = mode_digits(max_permission)?;
    let given_digits = mode_digits(given_permission)?;

    Ok(max_digits
        .iter()
        .zip(given_digits.iter())
        .all(|(&max, &given)| permission_in_limit(max, given)))
}

/// Decompose a 3-digit octal mode string into its owner/group/other digits.
fn mode_digits(mode: &str) -> Result<[u8; 3], EvalError> {
    let mut digits = [0u8; 3];
    let mut count = 0;

    for ch in mode.chars() {
        if count == 3 {
            return Err(EvalError::InvalidPermissionMode {
                mode: mode.to_string(),
            });
        }
        match ch.to_digit(8) {
            Some(d) => digits[count] = d as u8,
            None => {
                return Err(EvalError::InvalidPermissionDigit {
                    digit: ch,
                    mode: mode.to_string(),
                })
            }
        }
        count += 1;
    }

    if count != 3 {
        return Err(EvalError::InvalidPermissionMode {
            mode: mode.to_string(),
        });
    }

    Ok(digits)
}

/// True only if `given` is not more lenient than `max`: a capability
/// (read, write, execute) present in `given` but absent in `max` fails
/// the limit.
fn permission_in_limit(max: u8, given: u8) -> bool {
    let mut max = max;
    let mut given = given;

    let allowed_r = max >= 4;
    if allowed_r {
        max -= 4;
    }
    let allowed_w = max >= 2;
    if allowed_w {
        max -= 2;
    }
    let allowed_x = max >= 1;

    let given_r = given >= 4;
    if given_r {
        given -= 4;
    }
    let given_w = given >= 2;
    if given_w {
        given -= 2;
    }
    let given_x = given >= 1;

    if given_r && !allowed_r {
        return false;
    }
    if given_w && !allowed_w {
        return false;
    }
    // Execute must not be introduced unless explicitly allowed.
    !given_x || allowed_x
}
