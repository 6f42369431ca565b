//! Board representation and cell-level operations

use crate::error::{LifeError, LifeResult};
use anyhow::Result;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bounded Game of Life board, stored row-major as `y * width + x`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    pub width: usize,
    pub height: usize,
    cells: Vec<bool>,
}

/// Unchecked wire form of a [`Board`]
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawBoard> for Board {
    type Error = anyhow::Error;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let expected = Self::cell_count(raw.width, raw.height)?;
        if raw.cells.len() != expected {
            anyhow::bail!(
                "Board {}x{} needs {} cells, got {}",
                raw.width,
                raw.height,
                expected,
                raw.cells.len()
            );
        }
        Ok(Self::from_buffer(raw.width, raw.height, raw.cells))
    }
}

impl Board {
    /// Create a new board with every cell dead
    pub fn new(width: usize, height: usize) -> LifeResult<Self> {
        let count = Self::cell_count(width, height)?;

        Ok(Self {
            width,
            height,
            cells: vec![false; count],
        })
    }

    fn cell_count(width: usize, height: usize) -> LifeResult<usize> {
        match width.checked_mul(height) {
            Some(count) if count > 0 && count <= isize::MAX as usize => Ok(count),
            _ => Err(LifeError::InvalidDimension { width, height }),
        }
    }

    /// Create a board from rows of cells, `rows[y][x]`
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Board cannot be empty");
        }

        let height = rows.len();
        let width = rows[0].len();

        if width == 0 {
            anyhow::bail!("Board width cannot be zero");
        }

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", y, row.len(), width);
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a board from an already computed row-major buffer
    pub(crate) fn from_buffer(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether (x, y) lies on the board
    #[inline]
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// `origin + offset`, or `OutOfBounds` at `origin` when the sum overflows
    pub fn offset(&self, origin: (isize, isize), offset: (isize, isize)) -> LifeResult<(isize, isize)> {
        match (origin.0.checked_add(offset.0), origin.1.checked_add(offset.1)) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(LifeError::OutOfBounds {
                x: origin.0,
                y: origin.1,
                width: self.width,
                height: self.height,
            }),
        }
    }

    fn checked_index(&self, x: isize, y: isize) -> LifeResult<usize> {
        if !self.contains(x, y) {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(x as usize, y as usize))
    }

    /// Raw row-major cell buffer
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Cell state at (x, y); anything off the board is dead
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        if self.contains(x, y) {
            self.cells[self.index(x as usize, y as usize)]
        } else {
            false
        }
    }

    /// Set a single cell's state
    pub fn set_alive(&mut self, x: isize, y: isize, alive: bool) -> LifeResult<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip a single cell and return its new state
    pub fn toggle(&mut self, x: isize, y: isize) -> LifeResult<bool> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Count living cells in the Moore neighbourhood of (x, y).
    /// Neighbours off the board count as dead.
    pub fn count_live_neighbors(&self, x: isize, y: isize) -> u8 {
        let mut count = 0;

        for dy in [-1, 0, 1] {
            for dx in [-1, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let alive = match (x.checked_add(dx), y.checked_add(dy)) {
                    (Some(nx), Some(ny)) => self.is_alive(nx, ny),
                    _ => false,
                };
                if alive {
                    count += 1;
                }
            }
        }

        count
    }

    /// Copy the living cells of `pattern` onto this board with its top-left corner at `origin`.
    /// Nothing is written unless every living cell lands on the board.
    pub fn stamp(&mut self, pattern: &Board, origin: (isize, isize)) -> LifeResult<()> {
        let targets = pattern
            .living_cells()
            .into_iter()
            .map(|(x, y)| {
                let (x, y) = self.offset(origin, (x as isize, y as isize))?;
                self.checked_index(x, y)
            })
            .collect::<LifeResult<Vec<_>>>()?;

        for idx in targets {
            self.cells[idx] = true;
        }
        Ok(())
    }

    /// Coordinates of every living cell in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(y, x)| self.cells[self.index(x, y)])
            .map(|(y, x)| (x, y))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the board has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Fraction of cells alive, 0.0 to 1.0
    pub fn density(&self) -> f64 {
        self.living_count() as f64 / self.cells.len() as f64
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &cell in row {
                write!(f, "{}", if cell { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.width, 4);
        assert_eq!(board.height, 3);
        assert_eq!(board.cells().len(), 12);
        assert!(board.is_empty());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Board::new(0, 5),
            Err(LifeError::InvalidDimension { width: 0, height: 5 })
        );
        assert_eq!(
            Board::new(5, 0),
            Err(LifeError::InvalidDimension { width: 5, height: 0 })
        );
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();
        assert_eq!(board.width, 3);
        assert_eq!(board.height, 2);
        assert_eq!(board.living_cells(), vec![(0, 0), (2, 0), (1, 1)]);

        assert!(Board::from_rows(vec![]).is_err());
        assert!(Board::from_rows(vec![vec![true], vec![true, false]]).is_err());
    }

    #[test]
    fn test_set_and_toggle_out_of_bounds() {
        let mut board = Board::new(5, 5).unwrap();

        for (x, y) in [(5, 0), (-1, 0), (0, 5), (0, -1)] {
            assert!(matches!(
                board.set_alive(x, y, true),
                Err(LifeError::OutOfBounds { .. })
            ));
            assert!(matches!(board.toggle(x, y), Err(LifeError::OutOfBounds { .. })));
        }
        assert!(board.is_empty());
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut board = Board::new(3, 3).unwrap();
        assert!(board.toggle(1, 2).unwrap());
        assert!(board.is_alive(1, 2));
        assert!(!board.toggle(1, 2).unwrap());
        assert!(!board.is_alive(1, 2));
    }

    #[test]
    fn test_neighbor_counting() {
        let board = Board::from_rows(vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ])
        .unwrap();

        assert_eq!(board.count_live_neighbors(1, 1), 8);
        // Corner sees only its three on-board neighbours, one of them dead
        assert_eq!(board.count_live_neighbors(0, 0), 2);
    }

    #[test]
    fn test_corner_neighbors_never_exceed_three() {
        let mut board = Board::new(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                board.set_alive(x, y, true).unwrap();
            }
        }
        assert_eq!(board.count_live_neighbors(0, 0), 3);
        assert_eq!(board.count_live_neighbors(3, 3), 3);
        assert_eq!(board.count_live_neighbors(3, 0), 3);
        assert_eq!(board.count_live_neighbors(0, 3), 3);
    }

    #[test]
    fn test_stamp() {
        let pattern = Board::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        let mut board = Board::new(4, 4).unwrap();

        board.stamp(&pattern, (2, 1)).unwrap();
        assert_eq!(board.living_cells(), vec![(2, 1), (3, 2)]);

        let mut small = Board::new(2, 2).unwrap();
        assert!(matches!(
            small.stamp(&pattern, (1, 0)),
            Err(LifeError::OutOfBounds { x: 2, y: 1, .. })
        ));
        assert!(small.is_empty());
    }

    #[test]
    fn test_oversized_dimensions() {
        assert_eq!(
            Board::new(usize::MAX, 2),
            Err(LifeError::InvalidDimension { width: usize::MAX, height: 2 })
        );
    }

    #[test]
    fn test_neighbor_counting_at_coordinate_limits() {
        let mut board = Board::new(2, 2).unwrap();
        board.set_alive(0, 0, true).unwrap();

        assert_eq!(board.count_live_neighbors(isize::MAX, isize::MAX), 0);
        assert_eq!(board.count_live_neighbors(isize::MIN, 0), 0);
    }

    #[test]
    fn test_stamp_with_overflowing_origin() {
        let pattern = Board::from_rows(vec![vec![false, true]]).unwrap();
        let mut board = Board::new(4, 4).unwrap();

        assert_eq!(
            board.stamp(&pattern, (isize::MAX, 0)),
            Err(LifeError::OutOfBounds { x: isize::MAX, y: 0, width: 4, height: 4 })
        );
        assert!(board.is_empty());
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let board = Board::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        assert!(serde_json::from_str::<Board>(r#"{"width":0,"height":0,"cells":[]}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"width":2,"height":2,"cells":[]}"#).is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows(vec![vec![true, false], vec![false, false]]).unwrap();
        assert_eq!(board.to_string(), "█·\n··\n");
    }
}
