//! `bradify`: print the ratios of consecutive Lucas sequence terms until they settle.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod config;
mod driver;
mod error;
mod json_types;
mod ratio;
mod selection;

use args::{Cli, OutputFormat};
use config::DriverConfig;
use driver::ConvergenceDriver;
use error::ConfigError;
use json_types::{ConvergenceJsonOutput, ErrorJsonOutput};
use selection::SequenceSelection;

const EXIT_CONFIG_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = cli.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if format == OutputFormat::Json {
                print_pretty_json(&ErrorJsonOutput::new(format!("{e:#}")));
            }
            eprintln!("error: {e:#}");
            if e.downcast_ref::<ConfigError>().is_some() {
                ExitCode::from(EXIT_CONFIG_ERROR)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = if verbose > 0 { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    // everything the user typed is validated before the first term is computed
    let selection = SequenceSelection::from_args(&cli.sequence)?;
    let settings = DriverConfig::load(cli.config.as_deref())?.resolve(
        cli.iterations,
        cli.precision,
        cli.stride,
    );

    let mut sequence = selection.build(settings.stride);
    tracing::debug!(
        sequence = %selection,
        stride = sequence.stride(),
        iterations = settings.iterations,
        precision = settings.precision,
        "starting convergence run"
    );

    let driver = ConvergenceDriver::new(settings);
    match cli.format {
        OutputFormat::Text => {
            let mut out = io::stdout().lock();
            driver.run(&mut sequence, |point| {
                writeln!(
                    out,
                    "φ[{}] = {}",
                    point.index,
                    point.ratio.to_decimal_string(settings.precision)
                )?;
                Ok(())
            })?;
            out.flush()?;
        }
        OutputFormat::Json => {
            let mut output = ConvergenceJsonOutput::new(&selection, &settings, sequence.stride());
            let stop = driver.run(&mut sequence, |point| {
                output.push(point, settings.precision);
                Ok(())
            })?;
            output.finish(stop);
            print_pretty_json(&output);
        }
    }
    Ok(())
}

fn print_pretty_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
