//! Property tests for grid invariants over random placement sequences
//!
//! Invariants covered:
//! - Cached column heights always match a fresh scan of the rows.
//! - Placement never lowers any column height.
//! - After a clear, no row is full, and a second clear finds nothing.
//! - Batch replay agrees with replaying each line on its own.

use proptest::prelude::*;
use tetris_stack::core::{shape, Grid};
use tetris_stack::engine::{run_batch, run_sequence, BatchOptions, Simulation};
use tetris_stack::types::{Command, ShapeKind, GRID_WIDTH};

fn command_strategy() -> impl Strategy<Value = Command> {
    prop::sample::select(ShapeKind::ALL.to_vec()).prop_flat_map(|kind| {
        let last = GRID_WIDTH - shape(kind).width();
        (0..=last).prop_map(move |col| Command::from((kind, col)))
    })
}

fn sequence_strategy() -> impl Strategy<Value = Vec<Command>> {
    prop::collection::vec(command_strategy(), 0..120)
}

proptest! {
    #[test]
    fn column_heights_track_rows(commands in sequence_strategy()) {
        let mut sim = Simulation::new();
        for c in &commands {
            sim.apply(c).unwrap();
            let grid = sim.grid();
            prop_assert!(grid.column_heights_consistent(), "after {}:\n{}", c, grid);
            for r in 0..grid.height() {
                prop_assert!(!grid.is_row_full(r), "row {} full after {}", r, c);
            }
        }
    }

    #[test]
    fn placement_never_lowers_columns(commands in sequence_strategy()) {
        let mut grid = Grid::new();
        for c in &commands {
            let before = *grid.column_heights();
            let s = tetris_stack::core::lookup(c.shape).unwrap();
            grid.place(s, c.start_column).unwrap();
            let after = grid.column_heights();
            for col in 0..GRID_WIDTH {
                prop_assert!(after[col] >= before[col]);
            }
            prop_assert!(grid.column_heights_consistent());
        }
    }

    #[test]
    fn clearing_twice_is_idempotent(commands in sequence_strategy()) {
        let mut grid = Grid::new();
        for c in &commands {
            grid.place(shape(ShapeKind::from_char(c.shape).unwrap()), c.start_column).unwrap();
        }
        let rows_before = grid.height();
        let removed = grid.clear_completed();
        prop_assert_eq!(grid.height(), rows_before - removed);
        prop_assert!(grid.column_heights_consistent());

        let once = grid.clone();
        prop_assert_eq!(grid.clear_completed(), 0);
        prop_assert_eq!(grid, once);
    }

    #[test]
    fn trailing_clear_finds_nothing(commands in sequence_strategy()) {
        let mut sim = Simulation::new();
        for c in &commands {
            sim.apply(c).unwrap();
        }
        let height = sim.grid().height();
        prop_assert_eq!(sim.finish(), height);
    }

    #[test]
    fn batch_matches_individual_runs(lines in prop::collection::vec(sequence_strategy(), 1..12)) {
        let text: Vec<String> = lines
            .iter()
            .map(|cmds| cmds.iter().map(ToString::to_string).collect::<Vec<_>>().join(","))
            .collect();
        let out = run_batch(&text, &BatchOptions { jobs: 4 }).unwrap();

        let expected: Vec<usize> = lines
            .iter()
            .filter(|cmds| !cmds.is_empty())
            .map(|cmds| run_sequence(cmds).unwrap())
            .collect();
        let got: Vec<usize> = out.iter().map(|h| h.height).collect();
        prop_assert_eq!(got, expected);
    }
}
