//! Field extraction from raw version strings
//!
//! Extraction never fails loudly: a field that is missing or malformed is
//! simply `None`.

use serde::{Deserialize, Serialize};

use crate::domain::{dot_component, parse_number, Part};

/// Where build metadata starts when a string holds more than one `+`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataSplit {
    /// Metadata is everything after the first `+`
    #[default]
    First,
    /// Metadata is only the last `+`-delimited segment
    Last,
}

/// A raw version string cut into its three textual regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    /// The dotted `major.minor.patch` text
    pub version: &'a str,
    pub pre: Option<&'a str>,
    pub meta: Option<&'a str>,
}

impl<'a> RawFields<'a> {
    /// Text of a field, without sub-component indexing
    pub fn text(&self, part: Part) -> Option<&'a str> {
        match part.index() {
            Some(index) => self.version.split('.').nth(index),
            None if part == Part::Pre => self.pre,
            None => self.meta,
        }
    }

    /// Integer value of a numeric field, honoring the not-zero-padded rule
    pub fn number(&self, part: Part) -> Option<u64> {
        if !part.is_numeric() {
            return None;
        }
        self.text(part).and_then(parse_number)
    }
}

/// Split `raw` using the default (first `+`) metadata rule
pub fn split(raw: &str) -> RawFields<'_> {
    split_with(raw, MetadataSplit::First)
}

/// Split `raw` into version, pre-release and metadata regions.
///
/// The version side always ends at the first `+`. Inside it, the first `-`
/// separates the dotted numbers from the pre-release, so later hyphens stay
/// part of the pre-release label.
pub fn split_with(raw: &str, split: MetadataSplit) -> RawFields<'_> {
    let (head, meta) = match raw.split_once('+') {
        Some((head, rest)) => {
            let meta = match split {
                MetadataSplit::First => rest,
                MetadataSplit::Last => rest.rsplit('+').next().unwrap_or(rest),
            };
            (head, Some(meta))
        }
        None => (raw, None),
    };

    let (version, pre) = match head.split_once('-') {
        Some((version, pre)) => (version, Some(pre)),
        None => (head, None),
    };

    RawFields { version, pre, meta }
}

/// Extract the text of `part` from `raw`.
///
/// # Example
/// ```
/// use semver_tool::domain::Part;
/// use semver_tool::parser::string_for;
/// let raw = "3.12.2-alpha.1.a-b+2016-12-22-08-32";
/// assert_eq!(string_for(Part::Minor, raw).as_deref(), Some("12"));
/// assert_eq!(string_for(Part::Pre, raw).as_deref(), Some("alpha.1.a-b"));
/// ```
pub fn string_for(part: Part, raw: &str) -> Option<String> {
    string_for_with(part, raw, MetadataSplit::First)
}

pub fn string_for_with(part: Part, raw: &str, split: MetadataSplit) -> Option<String> {
    split_with(raw, split).text(part).map(str::to_string)
}

/// Extract the value of `part` from `raw` as it should be reported.
///
/// Numeric parts go through the not-zero-padded rule and are rendered back
/// from the integer, so `"v1"` or `"02"` give `None`. Labels are returned
/// verbatim.
pub fn value_for_with(part: Part, raw: &str, split: MetadataSplit) -> Option<String> {
    let fields = split_with(raw, split);
    if part.is_numeric() {
        fields.number(part).map(|n| n.to_string())
    } else {
        fields.text(part).map(str::to_string)
    }
}

/// Extract a pre-release or metadata label, optionally one dot-component of it.
///
/// Numeric parts have no sub-components and always yield `None` here.
pub fn sub_string(part: Part, raw: &str, index: Option<usize>) -> Option<String> {
    sub_string_with(part, raw, index, MetadataSplit::First)
}

pub fn sub_string_with(
    part: Part,
    raw: &str,
    index: Option<usize>,
    split: MetadataSplit,
) -> Option<String> {
    if part.is_numeric() {
        return None;
    }
    let label = split_with(raw, split).text(part)?;
    match index {
        Some(index) => dot_component(label, index).map(str::to_string),
        None => Some(label.to_string()),
    }
}

pub fn major(raw: &str) -> Option<u64> {
    split(raw).number(Part::Major)
}

pub fn minor(raw: &str) -> Option<u64> {
    split(raw).number(Part::Minor)
}

pub fn patch(raw: &str) -> Option<u64> {
    split(raw).number(Part::Patch)
}
