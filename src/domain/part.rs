//! The five addressable fields of a semantic version

use crate::error::{Result, SemverError};
use std::fmt;
use std::str::FromStr;

/// A field of `MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Major,
    Minor,
    Patch,
    /// Pre-release label
    Pre,
    /// Build metadata label
    Meta,
}

impl Part {
    /// All parts in serialization order
    pub const ALL: [Part; 5] = [Part::Major, Part::Minor, Part::Patch, Part::Pre, Part::Meta];

    /// True for the dotted integer fields
    pub fn is_numeric(&self) -> bool {
        matches!(self, Part::Major | Part::Minor | Part::Patch)
    }

    /// Position inside the dotted `major.minor.patch` string
    pub fn index(&self) -> Option<usize> {
        match self {
            Part::Major => Some(0),
            Part::Minor => Some(1),
            Part::Patch => Some(2),
            Part::Pre | Part::Meta => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Part::Major => "major",
            Part::Minor => "minor",
            Part::Patch => "patch",
            Part::Pre => "pre",
            Part::Meta => "meta",
        }
    }
}

impl FromStr for Part {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Part::ALL
            .into_iter()
            .find(|part| part.as_str() == s)
            .ok_or_else(|| SemverError::invalid_part(format!("'{}'", s)))
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
