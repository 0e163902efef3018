// src/cli/mod.rs
// Headless entry points; without a subcommand the GUI starts.

pub mod compute;
pub mod prefs;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use crate::cross::CrossError;

#[derive(Parser)]
#[command(name = "cross_calculator")]
#[command(about = "Cross Calculator - five-cell numerology cross with category layouts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the cross for a number and print it
    Compute {
        /// Number to compute (9 or more; ASCII or Urdu digits)
        input: String,
        /// Category tag: naari, maai, hawaai or khaki
        #[arg(short, long, default_value = "naari")]
        category: String,
        /// Digit script for the printed values: western or urdu
        #[arg(short, long, default_value = "western")]
        script: String,
        /// Print JSON instead of the cross layout
        #[arg(long)]
        json: bool,
    },

    /// Inspect or change stored preferences
    Prefs {
        /// Settings file to use instead of the per-user config file
        #[arg(long, global = true)]
        file: Option<PathBuf>,
        #[command(subcommand)]
        action: prefs::PrefsCommands,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Cross(#[from] CrossError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Cross(e) if e.is_configuration() => 2,
            _ => 1,
        }
    }
}

pub fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Compute {
            input,
            category,
            script,
            json,
        } => {
            let output = compute::run(&input, &category, &script, json)?;
            println!("{}", output);
            Ok(())
        }
        Commands::Prefs { file, action } => {
            let output = prefs::run(file.as_deref(), action)?;
            println!("{}", output);
            Ok(())
        }
    }
}
