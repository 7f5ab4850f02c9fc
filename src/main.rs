#[macro_use]
extern crate log;

use std::io::Write;
use std::process::ExitCode;
use std::{env, thread};

use anyhow::{Context, Result};
use chrono::Local;
use env_logger::Env;
use structopt::StructOpt;

use crate::args::Args;
use crate::check::checker::ColumnPresenceChecker;
use crate::common::helpers::print_error_chain;
use crate::config::load_config;

mod args;
mod check;
mod common;
mod config;
mod connection;
mod inspect;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match init().await.with_context(|| "Column check failed") {
        Ok(code) => ExitCode::from(code),
        Err(errors) => {
            print_error_chain(&errors);
            ExitCode::FAILURE
        }
    }
}

async fn init() -> Result<u8> {
    let options = Args::from_args();

    initialize_logger(options.verbose, options.quiet);

    let (config_file, explicit) = options.config_file();
    let config = load_config(&config_file, explicit)
        .context("Failed to load config file")?
        .with_overrides(&options)?;

    debug!("Loaded configuration: {:?}", config);
    info!(
        "Checking {}.{} in {}",
        config.table,
        config.column,
        config.database_path.display()
    );

    let checker = ColumnPresenceChecker::new(config);
    let outcome = checker.run().await?;

    info!("{}", outcome);

    Ok(outcome.exit_code())
}

fn initialize_logger(verbose: bool, quiet: bool) {
    // Set the `RUST_LOG` environment variable to control the logging level

    if quiet {
        env::set_var("RUST_LOG", "warn");
    } else {
        env::set_var("RUST_LOG", if verbose { "debug" } else { "info" });
    }

    // Initialize the logger with the desired format and additional configuration
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("sqlx", log::LevelFilter::Error)
        .format(|buf, record| {
            let timestamp = Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "{} {:<5} [{}] - {}",
                timestamp,
                record.level(),
                thread::current().name().unwrap_or("<unnamed>"),
                record.args()
            )
        })
        .init();
}
