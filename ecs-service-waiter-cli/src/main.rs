//! ECS service waiter CLI entry point.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use ecs_service_waiter_core::{EcsServiceInventory, ServiceWaiter};
use log::Level;
use std::io::Write;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print().ok();
            // --help and --version are reported as errors by clap but are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose, cli.json);

    match run(&cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Progress lines go to stdout unless stdout is reserved for the JSON summary
fn init_logging(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let target = if json {
        env_logger::Target::Stderr
    } else {
        env_logger::Target::Stdout
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(target)
        .format(|buf, record| {
            if record.level() <= Level::Warn {
                writeln!(buf, "{}: {}", record.level(), record.args())
            } else {
                writeln!(buf, "{}", record.args())
            }
        })
        .init();
}

async fn run(cli: &Cli) -> Result<ExitCode> {
    // Validate before touching AWS so bad invocations fail fast
    let config = cli.wait_config()?;

    let inventory = EcsServiceInventory::from_options(&cli.aws_options()).await;
    let waiter = ServiceWaiter::new(inventory, config);
    let summary = waiter.run().await;

    if cli.json {
        let line = serde_json::to_string(&summary).context("Failed to serialize summary")?;
        println!("{line}");
    } else {
        println!("{summary}");
    }

    Ok(if summary.is_ready() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
