//! Conway's transition rule and generation stepping

use super::Board;
use rayon::prelude::*;

/// Conway rules engine (B3/S23)
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation from `current` without modifying it.
    /// Every cell of the result is derived from `current` alone.
    pub fn next_generation(current: &Board) -> Board {
        let width = current.width;

        let next_cells: Vec<bool> = (0..current.height)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..width).map(move |x| {
                    let (x, y) = (x as isize, y as isize);
                    Self::should_be_alive(current.is_alive(x, y), current.count_live_neighbors(x, y))
                })
            })
            .collect();

        Board::from_buffer(width, current.height, next_cells)
    }

    /// Advance a board by several generations
    pub fn evolve_generations(mut board: Board, generations: usize) -> Board {
        for _ in 0..generations {
            board = Self::next_generation(&board);
        }
        board
    }

    /// Next state of a single cell given its current state and live neighbour count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}
