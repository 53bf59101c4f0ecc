//! Command words and their execution
//!
//! A command line is a command word followed by positional arguments. The
//! word selects the operation; missing or malformed arguments make the
//! command produce an empty result rather than an error.

use tracing::debug;

use crate::domain::{parse_number, Part, Version};
use crate::mutator;
use crate::parser::{self, MetadataSplit};
use crate::ui;

/// A fully resolved request, ready to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Build a version string from fields
    Make(Version),
    /// Print one field of a version
    Extract { part: Part, version: String },
    /// Print one dot-component of the pre-release or metadata label
    Component {
        part: Part,
        index: usize,
        version: String,
    },
    Set {
        part: Part,
        value: String,
        version: String,
    },
    Bump {
        part: Part,
        version: String,
    },
    /// Print the tool description
    About,
}

impl Request {
    /// Resolve a command word and its arguments.
    ///
    /// Returns `None` for unknown words and for commands whose required
    /// arguments are missing or invalid.
    ///
    /// # Examples
    /// ```
    /// use semver_tool::cli::command::Request;
    /// use semver_tool::domain::Part;
    ///
    /// let args = vec!["1.0.0-rc.1".to_string()];
    /// assert_eq!(
    ///     Request::from_args("pre[1]", &args),
    ///     Some(Request::Component { part: Part::Pre, index: 1, version: "1.0.0-rc.1".to_string() })
    /// );
    /// ```
    pub fn from_args(word: &str, args: &[String]) -> Option<Self> {
        match word {
            "make" => make_request(args),
            "set" => match args {
                [part, value, version, ..] => Some(Request::Set {
                    part: part.parse().ok()?,
                    value: value.clone(),
                    version: version.clone(),
                }),
                _ => None,
            },
            "bump" => match args {
                [part, version, ..] => Some(Request::Bump {
                    part: part.parse().ok()?,
                    version: version.clone(),
                }),
                _ => None,
            },
            "version" => Some(Request::About),
            other => {
                let version = args.first()?.clone();
                if let Ok(part) = other.parse::<Part>() {
                    return Some(Request::Extract { part, version });
                }
                let (part, index) = parse_component_word(other)?;
                Some(Request::Component {
                    part,
                    index,
                    version,
                })
            }
        }
    }

    /// Run the request and return the line to print.
    pub fn execute(&self, split: MetadataSplit) -> String {
        let output = match self {
            Request::Make(version) => version.make().unwrap_or_default(),
            Request::Extract { part, version } => {
                parser::value_for_with(*part, version, split).unwrap_or_default()
            }
            Request::Component {
                part,
                index,
                version,
            } => parser::sub_string_with(*part, version, Some(*index), split).unwrap_or_default(),
            Request::Set {
                part,
                value,
                version,
            } => mutator::set_with(*part, value, version, split),
            Request::Bump { part, version } => mutator::bump_with(*part, version, split),
            Request::About => ui::about_text(),
        };
        debug!(request = ?self, %output, "executed");
        output
    }
}

fn make_request(args: &[String]) -> Option<Request> {
    let major = parse_number(args.first()?)?;
    let minor = args.get(1).and_then(|s| parse_number(s));
    let patch = args.get(2).and_then(|s| parse_number(s));
    let pre = args.get(3).cloned();
    let meta = args.get(4).cloned();
    Some(Request::Make(Version::new(major, minor, patch, pre, meta)))
}

/// Parse `pre2`, `pre[2]`, `meta0` or `meta[0]` into a part and index.
///
/// The index follows the not-zero-padded rule.
pub fn parse_component_word(word: &str) -> Option<(Part, usize)> {
    let re = regex::Regex::new(r"^(pre|meta)(?:\[([0-9]+)\]|([0-9]+))$").ok()?;
    let caps = re.captures(word)?;
    let part = caps.get(1)?.as_str().parse::<Part>().ok()?;
    let digits = caps.get(2).or_else(|| caps.get(3))?.as_str();
    let index = usize::try_from(parse_number(digits)?).ok()?;
    Some((part, index))
}
