//! # Single-Check Policy Evaluation
//!
//! Whitelist/blacklist evaluation of one security-policy check against
//! the already-collected policy export. Whitelist checks require the
//! observed value to satisfy the expected spec; blacklist checks
//! require it not to, and the special expected value `no one` requires
//! the key to be absent from the export altogether.
//!
//! Export collection, rule loading, and tag matching happen elsewhere;
//! this module only sees one check and one observed value.

use crate::secedit::accounts::SidAccounts;
use crate::secedit::registry::normalize_display_value;
use crate::secedit::translate::translate;
use crate::secedit::PolicyValue;
use crate::verdict::Verdict;
use log::debug;
use serde::{Deserialize, Serialize};

/// Whether the check whitelists or blacklists its expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Whitelist,
    Blacklist,
}

/// One security-policy check from a check document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyCheck {
    /// Policy key name as it appears in the export
    /// (e.g. `SeDenyNetworkLogonRight`, `MACHINE\...\LimitBlankPasswordUse`).
    pub name: String,

    pub kind: CheckKind,

    /// Free-form value-type label selecting the comparison mode.
    pub value_type: String,

    /// Expected value, spelled the way the policy editor displays it.
    pub match_output: String,
}

/// Evaluate one policy check against the observed export value.
///
/// `observed` is `None` when the key is absent from the export.
pub fn evaluate_policy_check(
    check: &PolicyCheck,
    observed: Option<&str>,
    accounts: Option<&SidAccounts>,
) -> Verdict {
    debug!("evaluating {:?} policy check '{}'", check.kind, check.name);

    match check.kind {
        CheckKind::Blacklist => evaluate_blacklist(check, observed, accounts),
        CheckKind::Whitelist => evaluate_whitelist(check, observed, accounts),
    }
}

fn evaluate_blacklist(
    check: &PolicyCheck,
    observed: Option<&str>,
    accounts: Option<&SidAccounts>,
) -> Verdict {
    // "no one" means the key must not be configured at all.
    if check.match_output.to_lowercase().contains("no one") {
        return match observed {
            Some(_) => Verdict::fail(format!(
                "No value/account should be configured under '{}', but at least one \
                 value/account is configured on the system",
                check.name
            )),
            None => Verdict::Pass,
        };
    }

    let Some(value) = observed else {
        return Verdict::Pass;
    };

    match translate(
        &PolicyValue::scalar(value),
        &check.value_type,
        &PolicyValue::scalar(&check.match_output),
        accounts,
    ) {
        Verdict::Pass => Verdict::fail(format!(
            "Value of the key '{}' is configured to a blacklisted value '{}({})'",
            check.name, check.match_output, check.value_type
        )),
        Verdict::Fail(_) => Verdict::Pass,
        undefined => undefined,
    }
}

fn evaluate_whitelist(
    check: &PolicyCheck,
    observed: Option<&str>,
    accounts: Option<&SidAccounts>,
) -> Verdict {
    let Some(value) = observed else {
        return Verdict::fail(format!(
            "Value of the key '{}' could not be found in the policy export. \
             It should be set to '{}({})'",
            check.name, check.match_output, check.value_type
        ));
    };

    // Registry-path keys store their expected value registry-encoded.
    let expected = if check.name.contains("MACHINE\\") {
        normalize_display_value(&check.match_output)
    } else {
        check.match_output.clone()
    };

    // Compound registry values ("4,1" next to a path with backslashes)
    // compare entry-wise.
    let (current, expected) = if value.contains(',') && value.contains('\\') {
        (
            PolicyValue::list(value.split(',').map(str::to_string).collect()),
            PolicyValue::list(expected.split(',').map(str::to_string).collect()),
        )
    } else {
        (PolicyValue::scalar(value), PolicyValue::scalar(expected))
    };

    match translate(&current, &check.value_type, &expected, accounts) {
        Verdict::Pass => Verdict::Pass,
        Verdict::Fail(_) => Verdict::fail(format!(
            "Value of the key '{}' is configured to invalid value '{}'. \
             It should be set to '{}({})'",
            check.name, value, check.match_output, check.value_type
        )),
        undefined => undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whitelist(name: &str, value_type: &str, match_output: &str) -> PolicyCheck {
        PolicyCheck {
            name: name.to_string(),
            kind: CheckKind::Whitelist,
            value_type: value_type.to_string(),
            match_output: match_output.to_string(),
        }
    }

    fn blacklist(name: &str, value_type: &str, match_output: &str) -> PolicyCheck {
        PolicyCheck {
            name: name.to_string(),
            kind: CheckKind::Blacklist,
            value_type: value_type.to_string(),
            match_output: match_output.to_string(),
        }
    }

    #[test]
    fn test_whitelist_equal_pass() {
        let check = whitelist("PasswordComplexity", "equal", "Enabled");
        assert!(evaluate_policy_check(&check, Some("1"), None).is_pass());
    }

    #[test]
    fn test_whitelist_missing_key_fails_with_reason() {
        let check = whitelist("PasswordComplexity", "equal", "Enabled");
        let verdict = evaluate_policy_check(&check, None, None);
        assert!(verdict.is_fail());
        let reason = verdict.reason().unwrap();
        assert!(reason.contains("PasswordComplexity"));
        assert!(reason.contains("Enabled"));
    }

    #[test]
    fn test_whitelist_registry_key_normalizes_expected() {
        let check = whitelist(
            "MACHINE\\System\\CurrentControlSet\\Control\\Lsa\\LimitBlankPasswordUse",
            "equal",
            "Enabled",
        );
        // registry display form "Enabled" encodes to 4,1
        assert!(evaluate_policy_check(&check, Some("4,1"), None).is_pass());
    }

    #[test]
    fn test_whitelist_compound_value_splits() {
        let check = whitelist(
            "MACHINE\\Software\\Policies\\Example\\Setting",
            "equal",
            "Enabled",
        );
        let observed = "4,1"; // no backslash in value, stays scalar
        assert!(evaluate_policy_check(&check, Some(observed), None).is_pass());
    }

    #[test]
    fn test_whitelist_invalid_value_reason_wording() {
        let check = whitelist("LockoutBadCount", "more", "5");
        let verdict = evaluate_policy_check(&check, Some("3"), None);
        assert!(verdict.is_fail());
        let reason = verdict.reason().unwrap();
        assert!(reason.contains("LockoutBadCount"));
        assert!(reason.contains('3'));
        assert!(reason.contains('5'));
    }

    #[test]
    fn test_blacklist_no_one_present_fails() {
        let check = blacklist("SeTrustedCredManAccessPrivilege", "account", "No One");
        let verdict = evaluate_policy_check(&check, Some("*S-1-5-32-544"), None);
        assert!(verdict.is_fail());
    }

    #[test]
    fn test_blacklist_no_one_absent_passes() {
        let check = blacklist("SeTrustedCredManAccessPrivilege", "account", "No One");
        assert!(evaluate_policy_check(&check, None, None).is_pass());
    }

    #[test]
    fn test_blacklist_match_is_failure() {
        let check = blacklist("EnableGuestAccount", "equal", "Enabled");
        let verdict = evaluate_policy_check(&check, Some("1"), None);
        assert!(verdict.is_fail());
        assert!(verdict.reason().unwrap().contains("blacklisted"));
    }

    #[test]
    fn test_blacklist_mismatch_is_pass() {
        let check = blacklist("EnableGuestAccount", "equal", "Enabled");
        assert!(evaluate_policy_check(&check, Some("0"), None).is_pass());
    }

    #[test]
    fn test_blacklist_absent_key_passes() {
        let check = blacklist("EnableGuestAccount", "equal", "Enabled");
        assert!(evaluate_policy_check(&check, None, None).is_pass());
    }

    #[test]
    fn test_undefined_mode_propagates() {
        let check = whitelist("SomeKey", "mystery_type", "whatever");
        let verdict = evaluate_policy_check(&check, Some("x"), None);
        assert!(verdict.is_undefined());
    }
}
