use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

mod check;
mod cli;
mod error;
mod manifest;
mod paths;

use check::{check_resources, CheckReport};
use cli::CheckArgs;
use paths::ResourcePaths;

/// Exit status for invalid arguments, shared with manifest failures.
const USAGE_ERROR: u8 = 1;

/// Initialize tracing on stderr so stdout only carries the report.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    // Usage errors must not collide with the missing-files status.
    let args = match CheckArgs::try_parse() {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(USAGE_ERROR);
        }
    };
    init_tracing(args.verbose);

    let paths = ResourcePaths::new(args.root, args.manifest);
    let report = match check_resources(&paths) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    if let Err(err) = print_report(&report, args.json) {
        eprintln!("ERROR: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::from(report.exit_code())
}

fn print_report(report: &CheckReport, json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        let text = serde_json::to_string_pretty(report).context("serialize check report")?;
        writeln!(stdout, "{text}").context("write check report")?;
    } else {
        stdout
            .write_all(report.render_text().as_bytes())
            .context("write check report")?;
    }
    Ok(())
}
