use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ration planner: derives personal nutrient ranges and finds the cheapest diet meeting them.
#[derive(Parser, Debug)]
#[command(name = "ration_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the nutrient range table for a person.
    Ranges {
        /// Path to the physiological parameters JSON file.
        #[arg(short, long, default_value = "params.json")]
        params: PathBuf,

        /// Write the range table to this JSON file.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Find the cheapest diet meeting the person's nutrient ranges.
    Optimize {
        /// Path to the physiological parameters JSON file.
        #[arg(short, long, default_value = "params.json")]
        params: PathBuf,

        /// Path to the food database JSON file.
        #[arg(short, long, default_value = "food_database.json")]
        catalog: PathBuf,

        /// Write the diet as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the diet as a ration JSON file.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Check a ration against the person's nutrient ranges.
    Evaluate {
        /// Path to the physiological parameters JSON file.
        #[arg(short, long, default_value = "params.json")]
        params: PathBuf,

        /// Path to the food database JSON file.
        #[arg(short, long, default_value = "food_database.json")]
        catalog: PathBuf,

        /// Path to the ration JSON file.
        #[arg(short, long)]
        ration: PathBuf,
    },

    /// Enter physiological parameters interactively and save them.
    InitParams {
        /// Output path for the parameters JSON file.
        #[arg(short, long, default_value = "params.json")]
        out: PathBuf,
    },
}
