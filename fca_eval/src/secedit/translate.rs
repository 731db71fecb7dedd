//! # Value-Spec Translator
//!
//! The multi-mode comparison at the heart of security-policy checks:
//! takes the observed value, the check's value-type label, and the
//! expected value, and produces a verdict. The label resolves to a
//! closed [`ValueSpecMode`] before any comparison runs; labels with no
//! known keyword yield an undefined verdict rather than a silent pass.

use crate::rule::ValueSpecMode;
use crate::secedit::accounts::{resolve_accounts, SidAccounts};
use crate::secedit::symbolic::translate_symbol;
use crate::secedit::PolicyValue;
use crate::verdict::Verdict;
use log::debug;
use std::borrow::Cow;
use std::collections::HashSet;

/// Evaluate an observed security-policy value against an expected spec.
///
/// `accounts` is only consulted by the account-oriented modes; when one
/// of those runs without a map the verdict is `Undefined`, never a
/// crash or a silent skip.
pub fn translate(
    current: &PolicyValue,
    value_type: &str,
    evaluator: &PolicyValue,
    accounts: Option<&SidAccounts>,
) -> Verdict {
    let Some(mode) = ValueSpecMode::resolve(value_type) else {
        debug!("unrecognized value_type label '{}'", value_type);
        return Verdict::undefined(format!(
            "unrecognized value_type label '{}': expected={}, got={}",
            value_type, evaluator, current
        ));
    };

    match mode {
        ValueSpecMode::More | ValueSpecMode::Less => translate_numeric(current, evaluator, mode),
        ValueSpecMode::Equal => translate_equal(current, evaluator),
        ValueSpecMode::AccountContains | ValueSpecMode::Account => {
            translate_accounts(current, evaluator, accounts, mode)
        }
        ValueSpecMode::Contains => translate_contains(current, evaluator),
        ValueSpecMode::Configured => translate_configured(current, evaluator),
    }
}

/// `more`: observed >= expected; `less`: observed <= expected with the
/// extra rule that an observed zero never satisfies "less" (zero means
/// the policy is not configured at all).
fn translate_numeric(current: &PolicyValue, evaluator: &PolicyValue, mode: ValueSpecMode) -> Verdict {
    let cur_raw = numeric_segment(&current.joined());
    let ev_raw = numeric_segment(&evaluator.joined());

    let (Ok(cur), Ok(ev)) = (cur_raw.parse::<i64>(), ev_raw.parse::<i64>()) else {
        return Verdict::undefined(format!(
            "non-numeric value in '{}' comparison: expected={}, got={}",
            mode, ev_raw, cur_raw
        ));
    };

    let passed = match mode {
        ValueSpecMode::More => cur >= ev,
        _ => cur <= ev && cur_raw != "0",
    };

    Verdict::from_bool(passed, || {
        format!(
            "secedit value check failed: mode={}, expected={}, got={}",
            mode, ev_raw, cur_raw
        )
    })
}

/// Registry-encoded numbers arrive as `type,value` pairs; the number of
/// interest is the second comma segment. Surrounding quotes are noise.
fn numeric_segment(value: &str) -> String {
    let segment = match value.split(',').nth(1) {
        Some(second) => second,
        None => value,
    };
    segment.replace('"', "")
}

/// Resolve a plain scalar token through the symbolic translator;
/// compound or list values and unresolved tokens keep their original
/// spelling.
fn symbolic_or_original(value: &PolicyValue) -> Cow<'_, str> {
    match value.as_scalar() {
        Some(scalar) if !scalar.contains(',') => match translate_symbol(scalar) {
            Some(digit) => Cow::Borrowed(digit),
            None => Cow::Borrowed(scalar),
        },
        _ => value.joined(),
    }
}

fn translate_equal(current: &PolicyValue, evaluator: &PolicyValue) -> Verdict {
    // Both sides may be spelled symbolically ("Enabled") or in the
    // exported digit form ("1"); normalize each before comparing so
    // the check is insensitive to which spelling the document and the
    // export happen to use.
    let evaluator_value = symbolic_or_original(evaluator);

    let passed = match (current, evaluator) {
        // Compound registry values arrive pre-split on both sides;
        // each observed entry must be one of the expected entries,
        // not merely a substring of their joined form.
        (PolicyValue::List(items), PolicyValue::List(expected)) => items
            .iter()
            .all(|item| expected.iter().any(|e| e.eq_ignore_ascii_case(item))),
        (PolicyValue::List(items), PolicyValue::Scalar(_)) => {
            let expected = evaluator_value.to_lowercase();
            items
                .iter()
                .all(|item| expected.contains(&item.to_lowercase()))
        }
        (PolicyValue::Scalar(_), _) => {
            let current_value = symbolic_or_original(current);
            current_value.eq_ignore_ascii_case(&evaluator_value)
        }
    };

    Verdict::from_bool(passed, || {
        format!(
            "secedit value check failed: mode=equal, expected={}, got={}",
            evaluator_value, current
        )
    })
}

fn translate_contains(current: &PolicyValue, evaluator: &PolicyValue) -> Verdict {
    let current_entries: HashSet<String> = current
        .entries()
        .into_iter()
        .map(|e| e.to_lowercase())
        .collect();

    let missing: Vec<String> = evaluator
        .entries()
        .into_iter()
        .filter(|e| !current_entries.contains(&e.to_lowercase()))
        .collect();

    Verdict::from_bool(missing.is_empty(), || {
        format!(
            "secedit value check failed: mode=contains, missing={:?}, expected={}, got={}",
            missing, evaluator, current
        )
    })
}

/// Literal SID-list marker: an evaluator already spelled as
/// `*S-...`-prefixed identifiers needs no account resolution.
const SID_MARKER: &str = "*S-";

fn translate_accounts(
    current: &PolicyValue,
    evaluator: &PolicyValue,
    accounts: Option<&SidAccounts>,
    mode: ValueSpecMode,
) -> Verdict {
    let ev_raw = evaluator.joined();

    let ev_resolved: Cow<'_, str> = if ev_raw.contains(SID_MARKER) {
        ev_raw
    } else {
        match accounts {
            // An empty map means collection failed; resolving against
            // it would drop every name and report a bogus mismatch.
            Some(map) if !map.is_empty() => Cow::Owned(resolve_accounts(&ev_raw, map)),
            _ => {
                debug!("account map unavailable for mode={}", mode);
                return Verdict::undefined(format!(
                    "account map unavailable: mode={}, expected={}, got={}",
                    mode, evaluator, current
                ));
            }
        }
    };

    let evaluator_set: HashSet<&str> =
        ev_resolved.split(',').filter(|e| !e.is_empty()).collect();
    let cur_joined = current.joined();
    let current_set: HashSet<&str> =
        cur_joined.split(',').filter(|e| !e.is_empty()).collect();

    let passed = match mode {
        // Required accounts must be present; extras are fine.
        ValueSpecMode::AccountContains => evaluator_set.is_subset(&current_set),
        // Exact membership both ways, order-independent.
        _ => evaluator_set == current_set,
    };

    Verdict::from_bool(passed, || {
        format!(
            "secedit value check failed: mode={}, expected={}, got={}",
            mode, ev_resolved, cur_joined
        )
    })
}

fn translate_configured(current: &PolicyValue, evaluator: &PolicyValue) -> Verdict {
    let cur = current.joined();
    let passed = !cur.is_empty()
        && cur
            .to_lowercase()
            .contains(&evaluator.joined().to_lowercase());

    Verdict::from_bool(passed, || {
        format!(
            "secedit value check failed: mode=configured, expected={}, got={}",
            evaluator, current
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> PolicyValue {
        PolicyValue::scalar(s)
    }

    #[test]
    fn test_more() {
        assert!(translate(&scalar("1"), "more", &scalar("1"), None).is_pass());
        assert!(translate(&scalar("5"), "more", &scalar("3"), None).is_pass());
        assert!(translate(&scalar("2"), "more", &scalar("3"), None).is_fail());
    }

    #[test]
    fn test_more_with_registry_compound() {
        // type,value pairs: the second segment is the number of interest
        assert!(translate(&scalar("4,10"), "more", &scalar("4,5"), None).is_pass());
        assert!(translate(&scalar(r#"4,"10""#), "more", &scalar("4,15"), None).is_fail());
    }

    #[test]
    fn test_less_excludes_zero() {
        assert!(translate(&scalar("0"), "less", &scalar("1"), None).is_fail());
        assert!(translate(&scalar("1"), "less", &scalar("1"), None).is_pass());
        assert!(translate(&scalar("1"), "less", &scalar("5"), None).is_pass());
        assert!(translate(&scalar("7"), "less", &scalar("5"), None).is_fail());
    }

    #[test]
    fn test_non_numeric_is_undefined() {
        let verdict = translate(&scalar("abc"), "more", &scalar("1"), None);
        assert!(verdict.is_undefined());
    }

    #[test]
    fn test_equal_symbolic_round_trip() {
        assert!(translate(&scalar("1"), "equal", &scalar("Enabled"), None).is_pass());
        assert!(translate(&scalar("enabled"), "equal", &scalar("Enabled"), None).is_pass());
        assert!(translate(&scalar("0"), "equal", &scalar("Disabled"), None).is_pass());
        assert!(translate(&scalar("0"), "equal", &scalar("Enabled"), None).is_fail());
        // unresolved symbolic token keeps its original spelling
        assert!(translate(&scalar("lanman"), "equal", &scalar("LanMan"), None).is_pass());
    }

    #[test]
    fn test_equal_with_list_current() {
        let current = PolicyValue::list(vec!["4".to_string(), "1".to_string()]);
        assert!(translate(&current, "equal", &scalar("4,1"), None).is_pass());
        let current = PolicyValue::list(vec!["4".to_string(), "2".to_string()]);
        assert!(translate(&current, "equal", &scalar("4,1"), None).is_fail());
    }

    #[test]
    fn test_equal_list_evaluator_requires_membership() {
        let current = PolicyValue::list(vec!["4".to_string(), "1".to_string()]);
        // "1" is a substring of "10" but not one of the expected entries
        let expected = PolicyValue::list(vec!["4".to_string(), "10".to_string()]);
        assert!(translate(&current, "equal", &expected, None).is_fail());

        let expected = PolicyValue::list(vec!["1".to_string(), "4".to_string()]);
        assert!(translate(&current, "equal", &expected, None).is_pass());
    }

    #[test]
    fn test_contains_subset() {
        assert!(translate(&scalar("a,b,c"), "contains", &scalar("a,c"), None).is_pass());
        let verdict = translate(&scalar("a,b"), "contains", &scalar("a,d"), None);
        assert!(verdict.is_fail());
        assert!(verdict.reason().unwrap().contains('d'));
    }

    #[test]
    fn test_account_contains_allows_extras() {
        let mut accounts = SidAccounts::new();
        accounts.insert("Administrators", "S-1-5-32-544");
        let current = scalar("*S-1-5-32-544,*S-1-5-32-551");
        let verdict = translate(
            &current,
            "account_contains",
            &scalar("Administrators"),
            Some(&accounts),
        );
        assert!(verdict.is_pass());
    }

    #[test]
    fn test_account_requires_set_equality() {
        let mut accounts = SidAccounts::new();
        accounts.insert("Administrators", "S-1-5-32-544");
        accounts.insert("Backup Operators", "S-1-5-32-551");

        let expected = scalar("Administrators, Backup Operators");
        // same sets, different order
        let current = scalar("*S-1-5-32-551,*S-1-5-32-544");
        assert!(translate(&current, "account", &expected, Some(&accounts)).is_pass());

        // extra entry on the host side fails the generic account mode
        let current = scalar("*S-1-5-32-551,*S-1-5-32-544,*S-1-5-32-545");
        assert!(translate(&current, "account", &expected, Some(&accounts)).is_fail());

        // missing entry fails too
        let current = scalar("*S-1-5-32-544");
        assert!(translate(&current, "account", &expected, Some(&accounts)).is_fail());
    }

    #[test]
    fn test_account_literal_sid_evaluator_skips_resolution() {
        let verdict = translate(
            &scalar("*S-1-5-19"),
            "account",
            &scalar("*S-1-5-19"),
            None,
        );
        assert!(verdict.is_pass());
    }

    #[test]
    fn test_account_without_map_is_undefined() {
        let verdict = translate(&scalar("*S-1-5-19"), "account", &scalar("LOCAL SERVICE"), None);
        assert!(verdict.is_undefined());
    }

    #[test]
    fn test_account_empty_map_is_undefined() {
        let accounts = SidAccounts::new();
        let verdict = translate(
            &scalar("*S-1-5-19"),
            "account",
            &scalar("LOCAL SERVICE"),
            Some(&accounts),
        );
        assert!(verdict.is_undefined());
    }

    #[test]
    fn test_configured() {
        assert!(translate(&scalar(""), "configured", &scalar("x"), None).is_fail());
        assert!(
            translate(&scalar("Configured Value"), "configured", &scalar("value"), None).is_pass()
        );
        assert!(translate(&scalar("other"), "configured", &scalar("value"), None).is_fail());
    }

    #[test]
    fn test_unknown_mode_is_undefined() {
        let verdict = translate(&scalar("1"), "frobnicate", &scalar("1"), None);
        assert!(verdict.is_undefined());
        assert!(verdict.reason().unwrap().contains("frobnicate"));
    }

    #[test]
    fn test_idempotence() {
        let a = translate(&scalar("5"), "more", &scalar("3"), None);
        let b = translate(&scalar("5"), "more", &scalar("3"), None);
        assert_eq!(a, b);
    }
}
