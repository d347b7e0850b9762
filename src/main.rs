//! enlazar CLI
//!
//! Hyperparameter search entry point for the enlazar library.
//!
//! # Usage
//!
//! ```bash
//! # Search for the best configuration
//! enlazar search space.yaml --corpus kg.txt --seed 42
//!
//! # Pick the selection metric and device
//! enlazar search space.yaml --corpus kg.txt --metric mean_rank --device cpu
//!
//! # Validate a config
//! enlazar validate space.yaml
//! ```

use clap::Parser;
use enlazar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
