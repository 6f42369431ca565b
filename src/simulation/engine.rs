//! Generation driver: compute the next board, then commit it

use crate::error::LifeResult;
use crate::game_of_life::{Board, GameOfLifeRules};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;

/// Long-run behaviour of the current board, judged against retained history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    /// No living cells remain
    Extinct,
    /// The board equals the previous generation
    StillLife,
    /// The board repeats a generation `period` steps back
    Oscillator { period: usize },
    /// No repetition within the retained history
    Evolving,
}

impl Stability {
    /// Whether further steps can only repeat known states
    pub fn is_settled(&self) -> bool {
        !matches!(self, Stability::Evolving)
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stability::Extinct => write!(f, "extinct"),
            Stability::StillLife => write!(f, "still life"),
            Stability::Oscillator { period } => write!(f, "oscillator (period {})", period),
            Stability::Evolving => write!(f, "evolving"),
        }
    }
}

/// Owns the authoritative board and advances it one tick at a time
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Board,
    generation: u64,
    history: VecDeque<Board>,
    history_limit: usize,
}

impl Simulation {
    /// Start a simulation from `board`, keeping at most `history_limit` past generations
    pub fn new(board: Board, history_limit: usize) -> Self {
        Self {
            current: board,
            generation: 0,
            history: VecDeque::with_capacity(history_limit),
            history_limit,
        }
    }

    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Retained past generations, most recent first
    pub fn history(&self) -> impl Iterator<Item = &Board> {
        self.history.iter()
    }

    /// Advance one generation and return the new current board
    pub fn step(&mut self) -> &Board {
        let next = GameOfLifeRules::next_generation(&self.current);
        let previous = std::mem::replace(&mut self.current, next);
        self.generation += 1;

        if self.history_limit > 0 {
            if self.history.len() == self.history_limit {
                self.history.pop_back();
            }
            self.history.push_front(previous);
        }

        trace!(
            "Generation {}: {} living cells",
            self.generation,
            self.current.living_count()
        );
        &self.current
    }

    /// Step up to `generations` times, stopping early once the board settles
    /// if `stop_when_stable` is set. Returns the number of steps taken.
    pub fn run(&mut self, generations: usize, stop_when_stable: bool) -> usize {
        match self.run_with(generations, stop_when_stable, |_| Ok::<(), Infallible>(())) {
            Ok(taken) => taken,
            Err(never) => match never {},
        }
    }

    /// Like [`Simulation::run`], calling `on_step` after every committed generation.
    /// An error from `on_step` stops the run and is returned.
    pub fn run_with<E, F>(
        &mut self,
        generations: usize,
        stop_when_stable: bool,
        mut on_step: F,
    ) -> Result<usize, E>
    where
        F: FnMut(&Simulation) -> Result<(), E>,
    {
        for taken in 0..generations {
            if stop_when_stable {
                let stability = self.stability();
                if stability.is_settled() {
                    debug!("Stopping at generation {}: {}", self.generation, stability);
                    return Ok(taken);
                }
            }
            self.step();
            on_step(self)?;
        }
        Ok(generations)
    }

    /// Restore the previous generation, if it was retained
    pub fn undo(&mut self) -> bool {
        match self.history.pop_front() {
            Some(previous) => {
                self.current = previous;
                self.generation -= 1;
                true
            }
            None => false,
        }
    }

    /// Edit a cell between ticks
    pub fn set_alive(&mut self, x: isize, y: isize, alive: bool) -> LifeResult<()> {
        self.current.set_alive(x, y, alive)?;
        self.forget_history();
        Ok(())
    }

    /// Flip a cell between ticks
    pub fn toggle(&mut self, x: isize, y: isize) -> LifeResult<bool> {
        let alive = self.current.toggle(x, y)?;
        self.forget_history();
        Ok(alive)
    }

    // An edited board no longer follows from its history
    fn forget_history(&mut self) {
        self.history.clear();
    }

    pub fn stability(&self) -> Stability {
        if self.current.is_empty() {
            return Stability::Extinct;
        }

        match self.history.iter().position(|past| *past == self.current) {
            Some(0) => Stability::StillLife,
            Some(i) => Stability::Oscillator { period: i + 1 },
            None => Stability::Evolving,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Pattern;

    fn seeded(pattern: Pattern, size: usize, history: usize) -> Simulation {
        let mut board = Board::new(size, size).unwrap();
        pattern.seed(&mut board, (1, 1)).unwrap();
        Simulation::new(board, history)
    }

    #[test]
    fn test_step_commits_next_generation() {
        let mut sim = seeded(Pattern::Blinker, 5, 4);
        let start = sim.board().clone();

        let expected = GameOfLifeRules::next_generation(&start);
        assert_eq!(*sim.step(), expected);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.history().next(), Some(&start));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut sim = seeded(Pattern::Glider, 10, 2);
        sim.run(5, false);
        assert_eq!(sim.history().count(), 2);
        assert_eq!(sim.generation(), 5);
    }

    #[test]
    fn test_undo() {
        let mut sim = seeded(Pattern::Glider, 10, 3);
        let start = sim.board().clone();

        sim.step();
        assert!(sim.undo());
        assert_eq!(*sim.board(), start);
        assert_eq!(sim.generation(), 0);
        assert!(!sim.undo());
    }

    #[test]
    fn test_stability_detection() {
        let mut block = seeded(Pattern::Block, 4, 4);
        assert_eq!(block.stability(), Stability::Evolving);
        block.step();
        assert_eq!(block.stability(), Stability::StillLife);

        let mut blinker = seeded(Pattern::Blinker, 5, 4);
        blinker.run(2, false);
        assert_eq!(blinker.stability(), Stability::Oscillator { period: 2 });

        let mut lone = Board::new(3, 3).unwrap();
        lone.set_alive(1, 1, true).unwrap();
        let mut lone = Simulation::new(lone, 0);
        lone.step();
        assert_eq!(lone.stability(), Stability::Extinct);
    }

    #[test]
    fn test_run_stops_when_stable() {
        let mut sim = seeded(Pattern::Block, 4, 4);
        let taken = sim.run(50, true);
        assert_eq!(taken, 1);
        assert_eq!(sim.generation(), 1);

        let mut sim = seeded(Pattern::Glider, 30, 4);
        assert_eq!(sim.run(8, true), 8);
    }

    #[test]
    fn test_run_with_reports_every_step() {
        let mut sim = seeded(Pattern::Blinker, 5, 4);
        let mut seen = Vec::new();

        let taken = sim
            .run_with(10, true, |s| {
                seen.push((s.generation(), s.board().living_count()));
                Ok::<(), String>(())
            })
            .unwrap();

        // Blinker repeats after two steps, so the third step never happens
        assert_eq!(taken, 2);
        assert_eq!(seen, vec![(1, 3), (2, 3)]);
    }

    #[test]
    fn test_run_with_stops_on_callback_error() {
        let mut sim = seeded(Pattern::Glider, 10, 0);
        let result = sim.run_with(10, false, |s| {
            if s.generation() == 3 {
                Err("halt")
            } else {
                Ok(())
            }
        });

        assert_eq!(result, Err("halt"));
        assert_eq!(sim.generation(), 3);
    }

    #[test]
    fn test_edits_clear_history() {
        let mut sim = seeded(Pattern::Block, 6, 4);
        sim.step();
        assert!(sim.toggle(5, 5).unwrap());
        assert_eq!(sim.history().count(), 0);
        assert_eq!(sim.stability(), Stability::Evolving);

        assert!(sim.set_alive(6, 0, true).is_err());
    }
}
