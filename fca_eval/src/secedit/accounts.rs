//! # Account Identity Resolution
//!
//! Account-oriented comparison modes need the stable security
//! identifier behind each account/group display name. The map is
//! collected elsewhere (out of scope here) and injected per evaluation
//! call; the evaluator never caches it.

use log::debug;
use std::collections::HashMap;

/// Account/group display name to SID map, request-scoped.
#[derive(Debug, Clone, Default)]
pub struct SidAccounts {
    map: HashMap<String, String>,
}

impl SidAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from collected (name, sid) pairs and fill in the
    /// well-known service SIDs the collector commonly omits.
    pub fn from_collected(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut accounts = Self {
            map: pairs.into_iter().collect(),
        };
        for (name, sid) in [
            ("LOCAL SERVICE", "S-1-5-19"),
            ("NETWORK SERVICE", "S-1-5-20"),
            ("SERVICE", "S-1-5-6"),
        ] {
            accounts
                .map
                .entry(name.to_string())
                .or_insert_with(|| sid.to_string());
        }
        accounts
    }

    pub fn insert(&mut self, name: impl Into<String>, sid: impl Into<String>) {
        self.map.insert(name.into(), sid.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Resolve a comma-space-delimited list of account display names into a
/// comma-delimited list of `*`-prefixed SIDs.
///
/// The literal name `Guest` is kept verbatim, un-prefixed, alongside
/// resolved identifiers. Names absent from the map are dropped; the
/// resulting list then fails the containment comparison and the check
/// reports the mismatch.
pub fn resolve_accounts(names: &str, accounts: &SidAccounts) -> String {
    let mut resolved = String::new();

    for name in names.split(", ") {
        if name == "Guest" {
            push_entry(&mut resolved, name);
            continue;
        }
        match accounts.get(name) {
            Some(sid) => push_entry(&mut resolved, &format!("*{}", sid)),
            None => debug!("no SID collected for account '{}'", name),
        }
    }

    resolved
}

fn push_entry(list: &mut String, entry: &str) {
    if !list.is_empty() {
        list.push(',');
    }
    list.push_str(entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> SidAccounts {
        SidAccounts::from_collected([
            ("Administrators".to_string(), "S-1-5-32-544".to_string()),
            ("Backup Operators".to_string(), "S-1-5-32-551".to_string()),
        ])
    }

    #[test]
    fn test_resolves_to_prefixed_sids() {
        let accounts = fixture();
        assert_eq!(
            resolve_accounts("Administrators, Backup Operators", &accounts),
            "*S-1-5-32-544,*S-1-5-32-551"
        );
    }

    #[test]
    fn test_guest_kept_verbatim() {
        let accounts = fixture();
        assert_eq!(
            resolve_accounts("Guest, Administrators", &accounts),
            "Guest,*S-1-5-32-544"
        );
    }

    #[test]
    fn test_unknown_names_dropped() {
        let accounts = fixture();
        assert_eq!(resolve_accounts("Nobody Special", &accounts), "");
        assert_eq!(
            resolve_accounts("Nobody, Administrators", &accounts),
            "*S-1-5-32-544"
        );
    }

    #[test]
    fn test_new_map_is_empty() {
        assert!(SidAccounts::new().is_empty());
        assert!(!fixture().is_empty());
    }

    #[test]
    fn test_well_known_sids_filled_in() {
        let accounts = SidAccounts::from_collected([]);
        assert_eq!(accounts.get("LOCAL SERVICE"), Some("S-1-5-19"));
        assert_eq!(accounts.get("NETWORK SERVICE"), Some("S-1-5-20"));
        assert_eq!(accounts.get("SERVICE"), Some("S-1-5-6"));
    }
}
