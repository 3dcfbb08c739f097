//! Command-line arguments and run configuration

use std::env;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::engine::BatchOptions;
use crate::io::OutputFormat;

/// Environment variable supplying the default worker count
pub const ENV_JOBS: &str = "TETRIS_STACK_JOBS";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File with one comma-separated command sequence per line
    pub input: PathBuf,

    /// File to write one resulting height per sequence into
    pub output: PathBuf,

    /// Worker threads (0 = one per core); defaults to $TETRIS_STACK_JOBS or 0
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub batch: BatchOptions,
}

impl Config {
    /// Layer parsed arguments over the process environment
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        Self::resolve(args, env::var(ENV_JOBS).ok())
    }

    /// Layer parsed arguments over an explicit `TETRIS_STACK_JOBS` value
    ///
    /// The flag wins over the environment; a blank variable counts as unset.
    pub fn resolve(args: Args, env_jobs: Option<String>) -> Result<Self, ConfigError> {
        let jobs = match (args.jobs, env_jobs) {
            (Some(jobs), _) => jobs,
            (None, Some(raw)) if !raw.trim().is_empty() => {
                raw.trim().parse::<usize>().map_err(|_| {
                    ConfigError::InvalidConfiguration(format!(
                        "{ENV_JOBS} must be a non-negative integer, got {raw:?}"
                    ))
                })?
            }
            (None, _) => 0,
        };

        Ok(Self {
            input: args.input,
            output: args.output,
            format: args.format,
            batch: BatchOptions { jobs },
        })
    }
}
