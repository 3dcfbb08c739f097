use log::trace;

use crate::core::{lookup, EngineError, Grid};
use crate::types::Command;

/// One replay of a command sequence against its own grid
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    grid: Grid,
}

impl Simulation {
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Resolve, place, then clear completed rows
    pub fn apply(&mut self, command: &Command) -> Result<(), EngineError> {
        let shape = lookup(command.shape)?;
        self.grid.place(shape, command.start_column)?;
        self.grid.clear_completed();

        trace!("after {command}:\n{}", self.grid);
        Ok(())
    }

    /// Run the trailing clear pass and report the final height
    pub fn finish(mut self) -> usize {
        let late = self.grid.clear_completed();
        if late > 0 {
            trace!("trailing clear removed {late} row(s)");
        }
        self.grid.height()
    }
}

/// Replay `commands` on a fresh grid and return the resulting stack height
///
/// The first failing command aborts the replay.
pub fn run_sequence(commands: &[Command]) -> Result<usize, EngineError> {
    let mut sim = Simulation::new();
    for command in commands {
        sim.apply(command)?;
    }
    Ok(sim.finish())
}
