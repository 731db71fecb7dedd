//! # Registry Display-Value Normalizer
//!
//! Security-policy keys under `MACHINE\` are stored registry-encoded as
//! a `type,value` pair, while check documents spell the expected value
//! the way the policy editor displays it. This fixed table maps the
//! known display strings to their encoded form; downstream equality
//! comparisons depend on the encoded strings matching exactly.

/// Normalize a human-readable policy display string to its
/// registry-encoded `type,value` representation.
///
/// Unrecognized strings pass through case-folded.
pub fn normalize_display_value(input: &str) -> String {
    let folded = input.to_lowercase();
    let encoded = match folded.as_str() {
        "administrators" => r#"1,"0""#,
        "defined (blank)" => "7,",
        "disabled" | "automatically deny elevation requests" => "4,0",
        "enabled"
        | "accept if provided by client"
        | "classic - local users authenticate as themselves"
        | "negotiate signing" => "4,1",
        "lock workstation" => r#"1,"1""#,
        "prompt for consent on the secure desktop" => "4,2",
        "rc4_hmac_md5, aes128_hmac_sha1, aes256_hmac_sha1, future encryption types" => {
            "4,2147483644"
        }
        "require ntlmv2 session security, require 128-bit encryption" => "4,537395200",
        "send ntlmv2 response only. refuse lm & ntlm" => "4,5",
        "users cant add or log on with microsoft accounts" => "4,3",
        _ => return folded,
    };
    encoded.to_string()
}
