//! Plain-text pattern files

use super::{Board, Pattern};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::Path;

/// Load a board from a text file.
/// Format: one line per row, '1' or '#' for alive cells and '0' or '.' for dead cells
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    let board = parse_board_from_string(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))?;
    debug!(
        "Loaded {}x{} board with {} living cells from {}",
        board.width,
        board.height,
        board.living_count(),
        path.as_ref().display()
    );
    Ok(board)
}

/// Parse a board from its text representation
pub fn parse_board_from_string(content: &str) -> Result<Board> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let width = lines[0].chars().count();
    let mut rows = Vec::with_capacity(lines.len());

    for (y, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                y, len, width
            );
        }

        let row = line
            .chars()
            .enumerate()
            .map(|(x, ch)| match ch {
                '0' | '.' => Ok(false),
                '1' | '#' => Ok(true),
                _ => Err(anyhow::anyhow!(
                    "Invalid character '{}' at ({}, {}). Only '0', '1', '.' and '#' are allowed",
                    ch, x, y
                )),
            })
            .collect::<Result<Vec<bool>>>()?;
        rows.push(row);
    }

    Board::from_rows(rows)
}

/// Save a board to a text file, creating parent directories as needed
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, board_to_string(board))
        .with_context(|| format!("Failed to write board to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a board to its text representation
pub fn board_to_string(board: &Board) -> String {
    let mut result = String::with_capacity(board.height * (board.width + 1));

    for row in board.cells().chunks(board.width) {
        result.extend(row.iter().map(|&cell| if cell { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

/// Load every `.txt` pattern in a directory, sorted by file stem.
/// Files that fail to parse are skipped with a warning.
pub fn load_boards_from_directory<P: AsRef<Path>>(dir_path: P) -> Result<Vec<(String, Board)>> {
    let dir = std::fs::read_dir(&dir_path)
        .with_context(|| format!("Failed to read directory: {}", dir_path.as_ref().display()))?;

    let mut boards = Vec::new();

    for entry in dir {
        let path = entry.context("Failed to read directory entry")?.path();

        if !path.is_file() || path.extension().map_or(true, |ext| ext != "txt") {
            continue;
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        match load_board_from_file(&path) {
            Ok(board) => boards.push((name, board)),
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }

    boards.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(boards)
}

/// Write the example pattern files (glider, blinker, block, beacon)
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for pattern in [Pattern::Glider, Pattern::Blinker, Pattern::Block, Pattern::Beacon] {
        let (w, h) = pattern.extent();
        // One cell of dead margin on every side
        let mut board = Board::new(w + 2, h + 2)?;
        pattern.seed(&mut board, (1, 1))?;

        let path = dir.join(format!("{}.txt", pattern.name()));
        save_board_to_file(&board, &path)?;
    }

    Ok(())
}
