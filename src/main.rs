#[macro_use]
extern crate log;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Error, Result};
use clap::Parser;
use fqview::{FastqError, render_file};

mod cli;

use cli::Cli;

fn try_main(cli: &Cli) -> Result<()> {
    let opts = cli.render_options();
    debug!("options: {opts:?}");

    let out = BufWriter::new(io::stdout().lock());
    match render_file(&cli.fastq, opts, out) {
        Ok(n) => {
            info!("rendered {n} record(s) from {}", cli.fastq);
            Ok(())
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("output closed early: {e}");
            Ok(())
        }
        Err(e @ FastqError::NotFound { .. }) => Err(Error::new(e).context("Error")),
        Err(e @ FastqError::Output(_)) => Err(Error::new(e).context("Error writing output")),
        Err(e) => Err(Error::new(e).context("Error reading FASTQ file")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_target(false)
        .init();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
