use std::sync::LazyLock;

use regex::Regex;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$").expect("valid hardcoded regex")
});

/// Strips every character outside `0-9`.
///
/// Applied to keystrokes on numeric fields before they reach the form state.
/// This is an input filter only; values set through [`FormFields::with`]
/// are not filtered.
///
/// [`FormFields::with`]: super::FormFields::with
pub fn filter_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` if `input` has the shape of a decimal number.
///
/// Accepts surrounding whitespace, a sign, a fractional part, and an exponent
/// (`" 12 "`, `"-3.5"`, `".5"`, `"1e3"`). Blank input is not a number.
pub fn is_number(input: &str) -> bool {
    NUMBER_RE.is_match(input)
}
