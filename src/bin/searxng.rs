//! SearXNG CLI Binary
//!
//! Command-line interface for searching a SearXNG instance.

use clap::Parser;
use searxng_cli::cli::{hoist_global_options, map_error, Cli, RunContext};
use searxng_cli::error::ApiError;
use searxng_cli::logging::{init_logging, LoggingConfig};
use std::ffi::OsString;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = match Cli::try_parse_from(hoisted_args(std::env::args_os())) {
        Ok(cli) => cli,
        // Usage errors exit 2; --help and --version exit 0.
        Err(e) => e.exit(),
    };

    if let Err(e) = init_logging(Some(&LoggingConfig::for_verbosity(cli.verbose))) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(version = searxng_cli::VERSION, "SearXNG CLI starting");

    let mut context = match RunContext::new(cli.config.clone(), cli.verbose) {
        Ok(ctx) => ctx,
        Err(e) => fail(e, cli.verbose),
    };

    match context.execute(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => fail(e, context.verbose()),
    }
}

/// Program name followed by the remaining arguments with global options hoisted.
fn hoisted_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| OsString::from("searxng"));
    let rest: Vec<OsString> = args.collect();

    let mut argv = Vec::with_capacity(rest.len() + 1);
    argv.push(program);
    argv.extend(hoist_global_options(&rest));
    argv
}

fn fail(e: ApiError, verbose: bool) -> ! {
    error!("Command failed: {}", e);
    eprintln!("{}", map_error(&e));
    if verbose {
        // anyhow's debug form lists the cause chain and, when enabled, a backtrace.
        eprintln!("{:?}", anyhow::Error::new(e));
    }
    process::exit(1);
}
