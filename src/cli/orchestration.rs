//! Single-invocation workflow
//!
//! Decouples the clap argument struct from the work so the whole command
//! line behaviour can be driven programmatically.

use tracing::debug;

use crate::cli::command::Request;
use crate::config::Config;

/// Arguments for one invocation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunArgs {
    /// Command word (`make`, `bump`, `pre2`, ...)
    pub command: String,

    /// Positional arguments following the command word
    pub args: Vec<String>,

    /// Treat an empty result as failure
    pub strict: bool,
}

/// Result of one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// The single line to print (possibly empty)
    pub output: String,

    /// False only in strict mode when the output is empty
    pub success: bool,
}

impl RunOutcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }
}

/// Resolve and execute one command.
///
/// Strict mode is on when either the arguments or the configuration ask
/// for it.
pub fn run(args: &RunArgs, config: &Config) -> RunOutcome {
    let output = match Request::from_args(&args.command, &args.args) {
        Some(request) => request.execute(config.parser.metadata_split),
        None => {
            debug!(command = %args.command, args = ?args.args, "unresolved command");
            String::new()
        }
    };

    let strict = args.strict || config.output.strict;
    RunOutcome {
        success: !(strict && output.is_empty()),
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, ParserConfig};
    use crate::parser::MetadataSplit;

    fn run_args(command: &str, args: &[&str], strict: bool) -> RunArgs {
        RunArgs {
            command: command.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            strict,
        }
    }

    #[test]
    fn test_run_default_is_lenient() {
        let outcome = run(&run_args("major", &["x.1.2"], false), &Config::default());
        assert_eq!(outcome.output, "");
        assert!(outcome.success);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_run_strict_flag() {
        let outcome = run(&run_args("major", &["x.1.2"], true), &Config::default());
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_run_strict_from_config() {
        let config = Config {
            output: OutputConfig { strict: true },
            ..Config::default()
        };
        let failed = run(&run_args("nope", &[], false), &config);
        assert_eq!(failed.exit_code(), 1);
        let ok = run(&run_args("bump", &["patch", "1.2.3"], false), &config);
        assert_eq!(ok.output, "1.2.4");
        assert!(ok.success);
    }

    #[test]
    fn test_run_uses_configured_metadata_split() {
        let config = Config {
            parser: ParserConfig {
                metadata_split: MetadataSplit::Last,
            },
            ..Config::default()
        };
        let outcome = run(&run_args("meta", &["1.0.0+a+b"], false), &config);
        assert_eq!(outcome.output, "b");
        let default = run(&run_args("meta", &["1.0.0+a+b"], false), &Config::default());
        assert_eq!(default.output, "a+b");
    }
}
