//! Utility functions for markdown parsing.
//!
//! Shared text helpers used across the parser module.

use regex::Regex;
use std::sync::OnceLock;

/// Collapse bold markup around annotation labels.
///
/// `**type:** \`boolean\`` becomes `type: \`boolean\``; any remaining `**`
/// markers are dropped.
///
/// # Examples
///
/// ```
/// # use lintdoc::parser::utils::normalize_label;
/// assert_eq!(normalize_label("**Default:** `true`"), "Default: `true`");
/// assert_eq!(normalize_label("**type**: `string`"), "type: `string`");
/// ```
pub fn normalize_label(text: &str) -> String {
    static BOLD_LABEL: OnceLock<Regex> = OnceLock::new();
    let re = BOLD_LABEL.get_or_init(|| Regex::new(r"\*\*(.+?):\*\*").unwrap());

    re.replace_all(text, "$1:").replace("**", "")
}

/// Replace non-breaking and typographic spaces with a plain space.
///
/// Covers U+00A0, U+2000 through U+200B, U+202F, U+205F and U+3000.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{00A0}' | '\u{2000}'..='\u{200B}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => ' ',
            other => other,
        })
        .collect()
}
