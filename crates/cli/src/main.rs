#![warn(clippy::pedantic)]

use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use log::debug;

use liftlog_app::{Settings, log::Stderr};

use cli::{Cli, Command};

mod alert;
mod cli;
mod command;
mod input;
mod render;
mod ticker;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    liftlog_app::log::init(
        Arc::new(Mutex::new(Stderr)),
        cli.verbosity.log_level_filter(),
    )
    .context("failed to initialize logging")?;

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    debug!("using {settings:?}");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start runtime")?;

    runtime.block_on(async {
        match cli.command {
            Command::Plates { weights } => {
                command::plates(&settings, &weights);
                Ok(())
            }
            Command::Dashboard => command::dashboard(&settings).await,
            Command::Weight { exercise, change } => {
                command::weight(&settings, &exercise, &change).await
            }
            Command::Timer { stopwatch, seconds } => {
                command::timer(&settings, stopwatch, seconds).await
            }
            Command::Workout { program } => command::workout(&settings, program.as_deref()).await,
        }
    })
}
