//! Preset seed patterns

use super::Board;
use crate::error::LifeResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Well known starting patterns, placed relative to a top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Diagonal spaceship, moves (+1, +1) every 4 generations
    Glider,
    /// Period 2 oscillator
    Blinker,
    /// Still life
    Block,
    /// Period 2 oscillator made of two blocks
    Beacon,
    /// Period 2 oscillator
    Toad,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Glider,
        Pattern::Blinker,
        Pattern::Block,
        Pattern::Beacon,
        Pattern::Toad,
    ];

    /// Living cell offsets as (x, y)
    pub fn cells(&self) -> &'static [(isize, isize)] {
        match self {
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
            Pattern::Blinker => &[(0, 1), (1, 1), (2, 1)],
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Beacon => &[
                (0, 0), (1, 0), (0, 1),
                (3, 2), (2, 3), (3, 3),
            ],
            Pattern::Toad => &[
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        }
    }

    /// Width and height of the pattern's bounding box
    pub fn extent(&self) -> (usize, usize) {
        let cells = self.cells();
        let w = cells.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
        let h = cells.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
        (w as usize, h as usize)
    }

    /// Set the pattern's cells alive on `board` with the top-left corner at `origin`.
    /// The first cell that falls off the board is reported and nothing after it is written.
    pub fn seed(&self, board: &mut Board, origin: (isize, isize)) -> LifeResult<()> {
        for &offset in self.cells() {
            let (x, y) = board.offset(origin, offset)?;
            board.set_alive(x, y, true)?;
        }
        Ok(())
    }

    /// The pattern alone on a board that exactly fits it
    pub fn to_board(&self) -> LifeResult<Board> {
        let (w, h) = self.extent();
        let mut board = Board::new(w, h)?;
        self.seed(&mut board, (0, 0))?;
        Ok(board)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::Blinker => "blinker",
            Pattern::Block => "block",
            Pattern::Beacon => "beacon",
            Pattern::Toad => "toad",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown pattern '{}'", s))
    }
}
