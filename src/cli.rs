//! enlazar CLI commands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::device::ComputeDevice;
use crate::error::Result;
use crate::eval::{Metric, RankEvaluator};
use crate::hpo::{HyperOptimizer, RandomSearch, SearchConfig};

/// Hyperparameter search for knowledge-graph embeddings.
#[derive(Debug, Parser)]
#[command(name = "enlazar", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a random hyperparameter search.
    Search {
        /// Search config (YAML).
        config: PathBuf,

        /// Triple corpus (whitespace-delimited subject predicate object).
        #[arg(short, long)]
        corpus: PathBuf,

        /// Compute device (cpu, cuda, cuda:N).
        #[arg(short, long, default_value = "cpu")]
        device: ComputeDevice,

        /// Base seed for all stochastic choices.
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Selection metric (mean_rank, mrr, hits_at_10).
        #[arg(short, long, default_value = "mrr")]
        metric: Metric,
    },

    /// Validate a search config without running anything.
    Validate {
        /// Search config (YAML).
        config: PathBuf,
    },
}

/// Execute a parsed CLI command.
pub fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Search {
            config,
            corpus,
            device,
            seed,
            metric,
        } => {
            let config = SearchConfig::from_path(&config)?;
            let search = RandomSearch::new(Box::new(RankEvaluator::new(metric)));
            let outcome = search.optimize_hyperparams(&config, &corpus, device, seed)?;

            println!(
                "best {} = {:.4} at trial {} ({} completed, {} disqualified)",
                outcome.metric,
                outcome.score,
                outcome.iteration,
                outcome.trials.len(),
                outcome.disqualified.len(),
            );
            for dq in &outcome.disqualified {
                eprintln!("trial {} disqualified: {}", dq.iteration, dq.reason);
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&outcome.candidate)
                    .expect("candidate serializes")
            );
            Ok(())
        }
        Command::Validate { config } => {
            let config = SearchConfig::from_path(&config)?;
            config.validate()?;
            println!("config ok: {} trials over the space", config.hyper_params.max_iters);
            Ok(())
        }
    }
}
