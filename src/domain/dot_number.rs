//! Helpers for the numeric tail of dot-separated identifiers
//!
//! Pre-release and build-metadata labels are bumped by incrementing their
//! last numeric dot-component (`rc.1` -> `rc.2`), and a release-line bump
//! drops every numeric component from the end of the pre-release label
//! (`alpha.1.2` -> `alpha`). All functions here work on byte offsets of an
//! immutable `&str` and return fresh `String`s.

use std::ops::Range;

/// Parse an integer that is not zero-padded.
///
/// Only ASCII digits are accepted, so `"+1"` and `"-1"` are rejected, and a
/// leading `0` is only allowed for the single digit `"0"`.
///
/// # Examples
/// ```
/// use semver_tool::domain::parse_number;
/// assert_eq!(parse_number("12"), Some(12));
/// assert_eq!(parse_number("0"), Some(0));
/// assert_eq!(parse_number("01"), None);
/// ```
pub fn parse_number(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse::<u64>().ok()
}

/// The numeric dot-components found at the end of a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingNumbers {
    /// Byte range covering the collected components, without the dot that
    /// precedes the first one. Empty (at `len()`) when nothing was collected.
    pub range: Range<usize>,
    /// Collected values, in the order they appear in the string
    pub numbers: Vec<u64>,
}

impl TrailingNumbers {
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Collect up to `max_count` numeric dot-components from the end of `s`.
///
/// Scanning stops at the first component that is not a valid
/// not-zero-padded integer.
pub fn trailing_dot_numbers(s: &str, max_count: usize) -> TrailingNumbers {
    let mut numbers = Vec::new();
    let mut start = s.len();
    let mut end = s.len();

    if max_count > 0 {
        for component in s.rsplit('.') {
            let Some(number) = parse_number(component) else {
                break;
            };
            numbers.push(number);
            start = end - component.len();

            if numbers.len() == max_count {
                break;
            }
            // step over the separating dot
            end = start.saturating_sub(1);
        }
    }

    numbers.reverse();
    TrailingNumbers {
        range: start..s.len(),
        numbers,
    }
}

/// Strip every trailing numeric dot-component from `s`.
///
/// `"beta.1.2"` becomes `"beta"`; a string made only of numbers becomes `""`.
pub fn removing_trailing_dot_numbers(s: &str) -> String {
    let tail = trailing_dot_numbers(s, usize::MAX);
    if tail.is_empty() {
        return s.to_string();
    }
    match tail.range.start {
        0 => String::new(),
        start => s[..start - 1].to_string(),
    }
}

/// Increment the last numeric dot-component of `s`, or append `.1`.
///
/// Everything before the incremented component is preserved verbatim.
/// Returns `None` only when the component is already `u64::MAX`.
pub fn semver_increment(s: &str) -> Option<String> {
    let tail = trailing_dot_numbers(s, 1);
    match tail.numbers.last() {
        Some(last) => {
            let next = last.checked_add(1)?;
            Some(format!("{}{}", &s[..tail.range.start], next))
        }
        None => Some(format!("{}.1", s)),
    }
}

/// The dot-component of `s` at `index`, if in bounds
pub fn dot_component(s: &str, index: usize) -> Option<&str> {
    s.split('.').nth(index)
}
