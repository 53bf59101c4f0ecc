use anyhow::{Context, Result};
use clap::Parser;

use semver_tool::cli::{self, RunArgs};
use semver_tool::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "semver",
    about = "Parse, build, set and bump semantic version strings",
    after_help = "Commands:\n  \
        make <major> [minor] [patch] [pre] [meta]\n  \
        major|minor|patch|pre|meta <version>\n  \
        preN|pre[N]|metaN|meta[N] <version>\n  \
        set <field> <value> <version>\n  \
        bump <field> <version>\n  \
        version"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,

    #[arg(long, help = "Exit with status 1 when the result is empty")]
    strict: bool,

    #[arg(help = "Command word")]
    command: String,

    #[arg(
        help = "Command arguments",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        init_tracing();
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(2);
        }
    };

    let run_args = RunArgs {
        command: args.command,
        args: args.args,
        strict: args.strict,
    };
    let outcome = cli::run(&run_args, &config);
    ui::display_result(&outcome.output).context("failed to write result")?;

    if !outcome.success {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
