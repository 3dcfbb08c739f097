//! Batch replay of many independent sequences
//!
//! Every input line is its own simulation with its own grid, so lines are
//! replayed in parallel on a rayon pool. Results come back in input order.

use log::{debug, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::core::EngineError;
use crate::parse::{parse_line, ParseError};
use crate::simulation::run_sequence;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Worker threads; 0 lets rayon pick one per core, 1 runs inline
    pub jobs: usize,
}

/// Final height of one input line (1-based line number)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHeight {
    pub line: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("failed to replay line {line}")]
    Line {
        line: usize,
        #[source]
        source: LineError,
    },
}

impl BatchError {
    pub fn line(&self) -> usize {
        match self {
            BatchError::Line { line, .. } => *line,
        }
    }
}

/// Replay every non-blank line and collect heights in input order
///
/// Blank lines are skipped. If any line fails, the error for the lowest
/// failing line number is returned.
pub fn run_batch<S>(lines: &[S], options: &BatchOptions) -> Result<Vec<LineHeight>, BatchError>
where
    S: AsRef<str> + Sync,
{
    let outcomes = if options.jobs == 1 {
        replay_sequential(lines)
    } else {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(options.jobs)
            .build()
        {
            Ok(pool) => pool.install(|| {
                lines
                    .par_iter()
                    .enumerate()
                    .map(|(i, text)| replay_line(i + 1, text.as_ref()))
                    .collect::<Vec<_>>()
            }),
            Err(e) => {
                warn!("failed to create thread pool ({e}), running sequentially");
                replay_sequential(lines)
            }
        }
    };

    let mut heights = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        if let Some(height) = outcome? {
            heights.push(height);
        }
    }
    Ok(heights)
}

fn replay_sequential<S: AsRef<str>>(lines: &[S]) -> Vec<Result<Option<LineHeight>, BatchError>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, text)| replay_line(i + 1, text.as_ref()))
        .collect()
}

fn replay_line(line: usize, text: &str) -> Result<Option<LineHeight>, BatchError> {
    if text.trim().is_empty() {
        warn!("line {line} is blank, skipping");
        return Ok(None);
    }

    let wrap = |source: LineError| BatchError::Line { line, source };
    let commands = parse_line(text).map_err(|e| wrap(e.into()))?;
    let height = run_sequence(&commands).map_err(|e| wrap(e.into()))?;

    debug!("line {line}: {} command(s), height {height}", commands.len());
    Ok(Some(LineHeight { line, height }))
}
