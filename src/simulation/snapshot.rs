//! Serialisable view of a single generation

use crate::game_of_life::Board;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One generation as written to JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub width: usize,
    pub height: usize,
    /// Living cells as (x, y), row-major
    pub living: Vec<(usize, usize)>,
}

impl Snapshot {
    pub fn capture(board: &Board, generation: u64) -> Self {
        Self {
            generation,
            width: board.width,
            height: board.height,
            living: board.living_cells(),
        }
    }

    /// Rebuild the board this snapshot was taken from
    pub fn to_board(&self) -> Result<Board> {
        let mut board = Board::new(self.width, self.height)?;
        for &(x, y) in &self.living {
            board
                .set_alive(x as isize, y as isize, true)
                .with_context(|| format!("Snapshot of generation {} is inconsistent", self.generation))?;
        }
        Ok(board)
    }

    /// Single-line JSON, one snapshot per line of output
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write snapshot: {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snapshot: {}", path.as_ref().display()))?;
        Ok(Self::from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Pattern;
    use tempfile::tempdir;

    #[test]
    fn test_capture_and_rebuild() {
        let mut board = Board::new(6, 6).unwrap();
        Pattern::Glider.seed(&mut board, (1, 1)).unwrap();

        let snapshot = Snapshot::capture(&board, 7);
        assert_eq!(snapshot.generation, 7);
        assert_eq!(snapshot.living.len(), 5);
        assert_eq!(snapshot.to_board().unwrap(), board);
    }

    #[test]
    fn test_json_shape() {
        let mut board = Board::new(3, 2).unwrap();
        board.set_alive(2, 1, true).unwrap();

        let json = Snapshot::capture(&board, 0).to_json().unwrap();
        assert_eq!(json, r#"{"generation":0,"width":3,"height":2,"living":[[2,1]]}"#);
    }

    #[test]
    fn test_inconsistent_snapshot_is_rejected() {
        let snapshot = Snapshot {
            generation: 1,
            width: 2,
            height: 2,
            living: vec![(2, 0)],
        };
        assert!(snapshot.to_board().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("gen.json");

        let snapshot = Snapshot::capture(&Pattern::Block.to_board().unwrap(), 3);
        snapshot.save_to_file(&path).unwrap();
        assert_eq!(Snapshot::load_from_file(&path).unwrap(), snapshot);
    }
}
