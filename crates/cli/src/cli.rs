use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(name = "liftlog", version, about = "Strength training tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// JSON file with bar, plate and timer settings.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the plates to load on each side for the given total weights.
    Plates {
        #[arg(required = true)]
        weights: Vec<f64>,
    },
    /// List the exercises with warm-up suggestions and plate loading.
    Dashboard,
    /// Change the current weight of an exercise.
    Weight {
        exercise: String,
        /// `up`, `down` or an explicit weight.
        change: String,
    },
    /// Run the rest timer.
    Timer {
        /// Count up instead of down.
        #[arg(long)]
        stopwatch: bool,
        /// Countdown length, defaults to the configured rest time.
        #[arg(long)]
        seconds: Option<u32>,
    },
    /// Track a workout set by set.
    Workout {
        /// Program key, defaults to the first program.
        #[arg(long)]
        program: Option<String>,
    },
}
