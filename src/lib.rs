//! # enlazar
//!
//! Hyperparameter search for knowledge-graph embedding models.
//!
//! A knowledge graph stores facts as (subject, predicate, object) triples;
//! embedding models learn vector representations whose geometry predicts
//! missing links. Which learning rate, margin, dimension, and model family
//! work best is an empirical question. `enlazar` answers it by searching a
//! discrete configuration space, training one fresh model per trial, and
//! keeping the best artifact under a declared metric.
//!
//! ## Pipeline
//!
//! ```text
//! corpus ──► negatives ──► split ──┐
//!                                  │ per trial
//!            sample candidate ──► encode ──► train ──► evaluate
//!                                  │
//!                        record ──► select best ──► SearchOutcome
//! ```
//!
//! ## Quick start
//!
//! ```ignore
//! use enlazar::eval::{Metric, RankEvaluator};
//! use enlazar::hpo::{HyperOptimizer, RandomSearch, SearchConfig};
//! use enlazar::ComputeDevice;
//!
//! let config = SearchConfig::from_path("search.yaml".as_ref())?;
//! let search = RandomSearch::new(Box::new(RankEvaluator::new(Metric::MeanReciprocalRank)));
//! let best = search.optimize_hyperparams(
//!     &config,
//!     "kg.txt".as_ref(),
//!     ComputeDevice::Cpu,
//!     42,
//! )?;
//! println!("best {} = {:.4}", best.metric, best.score);
//! ```
//!
//! Everything stochastic (candidate sampling, negative synthesis, split
//! partitioning, weight init, epoch shuffling) derives from the one seed,
//! so a search outcome is replayable from its config and seed alone.

pub mod cli;
pub mod data;
pub mod device;
pub mod error;
pub mod eval;
pub mod hpo;
pub mod model;
pub mod train;

pub use device::ComputeDevice;
pub use error::{Error, Result};
