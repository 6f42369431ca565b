//! Conway's Game of Life on a bounded board
//!
//! The core is [`Board`] plus [`GameOfLifeRules::next_generation`]: cells off the
//! board count as dead neighbours, direct writes off the board are errors, and each
//! generation is computed entirely from the previous one.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, LifeResult};
pub use game_of_life::{Board, GameOfLifeRules, Pattern};
pub use simulation::{Simulation, Snapshot, Stability};

use anyhow::{Context, Result};
use game_of_life::load_board_from_file;

/// Build the starting board described by `settings`
pub fn initial_board(settings: &Settings) -> Result<Board> {
    let mut board = Board::new(settings.board.width, settings.board.height)?;
    let origin = settings.input.origin;

    if let Some(ref file) = settings.input.pattern_file {
        let pattern = load_board_from_file(file)?;
        board.stamp(&pattern, origin).with_context(|| {
            format!(
                "Pattern {} does not fit at ({}, {})",
                file.display(),
                origin.0,
                origin.1
            )
        })?;
    } else if let Some(preset) = settings.input.preset {
        preset
            .seed(&mut board, origin)
            .with_context(|| format!("Preset {} does not fit at ({}, {})", preset, origin.0, origin.1))?;
    }

    Ok(board)
}
