//! Command-line configuration for the terminal binary.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};

use crate::engine::{DriverConfig, DEFAULT_MAX_PENDING_INPUTS};
use crate::types::Variant;

#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Falling-block and tile-merge puzzles in the terminal"
)]
pub struct Args {
    /// Game to play: falling-block (tetris) or tile-merge (2048)
    #[arg(long, env = "GRID_PUZZLE_VARIANT", default_value = "falling-block", value_parser = parse_variant)]
    pub variant: Variant,

    /// RNG seed; the same seed and inputs replay the same game (default: wall clock)
    #[arg(long, env = "GRID_PUZZLE_SEED", value_name = "N")]
    pub seed: Option<u32>,

    /// JSON file holding best scores
    #[arg(long, env = "GRID_PUZZLE_STORE", value_name = "FILE", default_value = "grid_puzzle_scores.json")]
    pub store: PathBuf,

    /// Append logs to this file; logging is off without one
    #[arg(long, env = "GRID_PUZZLE_LOG", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "grid_puzzle_core=debug" (RUST_LOG wins)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Inputs that may wait between frames before new ones are dropped
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_PENDING_INPUTS)]
    pub max_pending: usize,
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    Variant::from_str(s).ok_or_else(|| format!("unknown variant '{s}' (expected falling-block or tile-merge)"))
}

impl Args {
    /// Seed from the command line, or derived from the clock
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u32)
                .unwrap_or(1)
        })
    }

    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            max_pending_inputs: self.max_pending.max(1),
        }
    }

    /// Route `log` output to the log file, if one was given
    ///
    /// The terminal is in raw alternate-screen mode while playing, so logs
    /// never go to stderr.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        env_logger::Builder::from_env(Env::default().default_filter_or(self.log_level.as_str()))
            .target(Target::Pipe(Box::new(file)))
            .try_init()
            .context("logger already initialized")?;
        Ok(())
    }
}
