use crate::domain::Part;
use crate::error::{Result, SemverError};
use crate::parser::{self, MetadataSplit};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// Only `major` is mandatory. Missing fields are left out of the serialized
/// form, so `1`, `1.2` and `1.2.3-rc.1+build` are all representable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub pre: Option<String>,
    pub meta: Option<String>,
}

impl Version {
    /// Create a new version from explicit fields
    pub fn new(
        major: u64,
        minor: Option<u64>,
        patch: Option<u64>,
        pre: Option<String>,
        meta: Option<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre,
            meta,
        }
    }

    pub fn with_minor(mut self, minor: u64) -> Self {
        self.minor = Some(minor);
        self
    }

    pub fn with_patch(mut self, patch: u64) -> Self {
        self.patch = Some(patch);
        self
    }

    pub fn with_pre(mut self, pre: impl Into<String>) -> Self {
        self.pre = Some(pre.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    /// Parse a version string, splitting metadata at the first `+`.
    ///
    /// Returns `None` when the major component is missing or is not a
    /// not-zero-padded integer; every other field is independently optional.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::parse_with(raw, MetadataSplit::First)
    }

    /// Parse a version string using the given metadata split rule
    pub fn parse_with(raw: &str, split: MetadataSplit) -> Option<Self> {
        let fields = parser::split_with(raw, split);
        let major = fields.number(Part::Major)?;

        Some(Version {
            major,
            minor: fields.number(Part::Minor),
            patch: fields.number(Part::Patch),
            pre: fields.pre.map(str::to_string),
            meta: fields.meta.map(str::to_string),
        })
    }

    /// Serialize into `MAJOR[.MINOR[.PATCH]][-PRE][+META]`.
    ///
    /// Returns `None` if `pre` or `meta` holds a character outside
    /// `[0-9A-Za-z.-]`. Empty labels are omitted, and `patch` is only
    /// written after a `minor`.
    ///
    /// # Example
    /// ```
    /// use semver_tool::domain::Version;
    /// let v = Version::new(3, Some(12), Some(2), Some("alpha.1".into()), None);
    /// assert_eq!(v.make().as_deref(), Some("3.12.2-alpha.1"));
    /// ```
    pub fn make(&self) -> Option<String> {
        let mut out = self.major.to_string();

        if let Some(minor) = self.minor {
            out.push_str(&format!(".{}", minor));
            if let Some(patch) = self.patch {
                out.push_str(&format!(".{}", patch));
            }
        }

        if let Some(pre) = self.pre.as_deref().filter(|pre| !pre.is_empty()) {
            if !is_identifier_text(pre) {
                return None;
            }
            out.push('-');
            out.push_str(pre);
        }

        if let Some(meta) = self.meta.as_deref().filter(|meta| !meta.is_empty()) {
            if !is_identifier_text(meta) {
                return None;
            }
            out.push('+');
            out.push_str(meta);
        }

        Some(out)
    }
}

/// True when every character is an ASCII alphanumeric, `.` or `-`
pub fn is_identifier_text(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s).ok_or_else(|| {
            SemverError::invalid_version(format!("'{}' has no valid major component", s))
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.make() {
            Some(s) => f.write_str(&s),
            None => f.write_str("Invalid parts"),
        }
    }
}
