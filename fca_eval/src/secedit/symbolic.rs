//! # Symbolic Value Translator
//!
//! Check documents describe audit-policy values with free-form words
//! (`Enabled`, `Success, Failure`); the exported security-policy data
//! encodes them as digit strings. This table normalizes the words to
//! the digits the export actually contains.

/// Translate a symbolic policy word to its exported digit string.
///
/// Returns `None` when the word is not part of the vocabulary; the
/// caller keeps its original evaluator string in that case.
pub fn translate_symbol(input: &str) -> Option<&'static str> {
    let folded: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    // Combination audits first: they contain "success"/"failure" and
    // would otherwise resolve to the single-flag digit.
    match folded.as_str() {
        "success,failure" | "failure,success" => return Some("3"),
        "0" => return Some("0"),
        "1" => return Some("1"),
        "2" => return Some("2"),
        "3" => return Some("3"),
        _ => {}
    }

    if folded.contains("enabled") {
        Some("1")
    } else if folded.contains("disabled") {
        Some("0")
    } else if folded.contains("success") {
        Some("1")
    } else if folded.contains("failure") {
        Some("2")
    } else {
        None
    }
}
