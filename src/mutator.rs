//! Set and bump operations on version strings
//!
//! Both operations are string in, string out. An input without a valid
//! major yields `""`; a result that cannot be serialized (for example a
//! pre-release containing `_`) yields the input unchanged.

use tracing::debug;

use crate::domain::{parse_number, removing_trailing_dot_numbers, semver_increment, Part, Version};
use crate::parser::MetadataSplit;

/// Overwrite `part` of `raw` with `new_value`.
///
/// Numeric parts take `new_value` through the not-zero-padded rule: an
/// invalid value keeps the old major but clears minor or patch. Labels are
/// stored verbatim, so an empty value removes them.
pub fn set(part: Part, new_value: &str, raw: &str) -> String {
    set_with(part, new_value, raw, MetadataSplit::First)
}

pub fn set_with(part: Part, new_value: &str, raw: &str, split: MetadataSplit) -> String {
    let Some(mut version) = Version::parse_with(raw, split) else {
        debug!(raw, "set: no valid major");
        return String::new();
    };

    match part {
        Part::Major => version.major = parse_number(new_value).unwrap_or(version.major),
        Part::Minor => version.minor = parse_number(new_value),
        Part::Patch => version.patch = parse_number(new_value),
        Part::Pre => version.pre = Some(new_value.to_string()),
        Part::Meta => version.meta = Some(new_value.to_string()),
    }

    finish(version, raw)
}

/// Increment `part` of `raw` and reset the less significant fields.
///
/// - **Major**: major += 1, minor = 0, patch = 0, numeric pre tail dropped
/// - **Minor**: minor += 1, patch = 0, numeric pre tail dropped
/// - **Patch**: patch += 1, numeric pre tail dropped
/// - **Pre** / **Meta**: last numeric dot-component += 1 (or `.1` appended)
///
/// Resets only touch fields that are present; a missing minor or patch being
/// bumped counts from 0. A missing pre or meta label is left missing.
///
/// # Example
/// ```
/// use semver_tool::domain::Part;
/// use semver_tool::mutator::bump;
/// assert_eq!(bump(Part::Minor, "3.12.2-alpha.1.2+00101"), "3.13.0-alpha+00101");
/// assert_eq!(bump(Part::Pre, "1.0.0-rc.1"), "1.0.0-rc.2");
/// ```
pub fn bump(part: Part, raw: &str) -> String {
    bump_with(part, raw, MetadataSplit::First)
}

pub fn bump_with(part: Part, raw: &str, split: MetadataSplit) -> String {
    let Some(mut version) = Version::parse_with(raw, split) else {
        debug!(raw, "bump: no valid major");
        return String::new();
    };

    let incremented = match part {
        Part::Major => version.major.checked_add(1).map(|major| version.major = major),
        Part::Minor => increment_number(&mut version.minor),
        Part::Patch => increment_number(&mut version.patch),
        Part::Pre => increment_label(&mut version.pre),
        Part::Meta => increment_label(&mut version.meta),
    };
    if incremented.is_none() {
        debug!(raw, %part, "increment overflows, keeping input");
        return raw.to_string();
    }

    if part == Part::Major && version.minor.is_some() {
        version.minor = Some(0);
    }
    if matches!(part, Part::Major | Part::Minor) && version.patch.is_some() {
        version.patch = Some(0);
    }
    if part.is_numeric() {
        version.pre = version.pre.as_deref().map(removing_trailing_dot_numbers);
    }

    finish(version, raw)
}

/// Absent counts as 0
fn increment_number(field: &mut Option<u64>) -> Option<()> {
    *field = Some(field.unwrap_or(0).checked_add(1)?);
    Some(())
}

/// Absent stays absent
fn increment_label(field: &mut Option<String>) -> Option<()> {
    if let Some(label) = field.as_deref() {
        let next = semver_increment(label)?;
        *field = Some(next);
    }
    Some(())
}

fn finish(version: Version, raw: &str) -> String {
    match version.make() {
        Some(out) => out,
        None => {
            debug!(raw, ?version, "result not serializable, keeping input");
            raw.to_string()
        }
    }
}
