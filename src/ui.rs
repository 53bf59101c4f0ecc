//! Terminal output for the command line shell.
//!
//! Results go to stdout as exactly one line; diagnostics go to stderr so
//! scripts capturing the result never see them.

use std::io::{self, Write};

use console::style;

/// Format and print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a command result. An empty result prints an empty line.
///
/// Unlike `println!`, a closed stdout (e.g. `semver major v | head -0`) is
/// reported as an error instead of a panic.
pub fn display_result(result: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", result)?;
    stdout.flush()
}

/// Text printed by the `version` command.
pub fn about_text() -> String {
    format!(
        "Version: {}\n\nCommand line tool used to perform operations on semantic versions \
         (https://semver.org). Current implementation follows Semantic Versioning 2.0.0",
        env!("CARGO_PKG_VERSION")
    )
}
