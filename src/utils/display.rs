//! Display and output formatting utilities

use crate::config::{OutputConfig, OutputFormat};
use crate::game_of_life::Board;
use crate::simulation::Snapshot;
use anyhow::Result;
use itertools::Itertools;

/// Renders boards for the console
pub struct BoardFormatter {
    alive: char,
    dead: char,
}

impl Default for BoardFormatter {
    fn default() -> Self {
        Self::new('█', '·')
    }
}

impl BoardFormatter {
    pub fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::new(output.alive_glyph, output.dead_glyph)
    }

    fn glyph(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }

    /// One line per row, row-major
    pub fn format_compact(&self, board: &Board) -> String {
        let mut output = String::with_capacity(board.height * (board.width + 1));
        for row in board.cells().chunks(board.width) {
            output.extend(row.iter().map(|&cell| self.glyph(cell)));
            output.push('\n');
        }
        output
    }

    /// Board with column numbers on top and row numbers down the left
    pub fn format_with_coords(&self, board: &Board) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..board.width {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (y, row) in board.cells().chunks(board.width).enumerate() {
            output.push_str(&format!("{:2} ", y));
            for &cell in row {
                let glyph = self.glyph(cell);
                output.push(glyph);
                output.push(glyph);
            }
            output.push('\n');
        }

        output
    }

    /// Live neighbour count of every cell, dead cells with no neighbours left blank
    pub fn format_neighbor_counts(board: &Board) -> String {
        (0..board.height as isize)
            .map(|y| {
                (0..board.width as isize)
                    .map(|x| match board.count_live_neighbors(x, y) {
                        0 if !board.is_alive(x, y) => ' ',
                        n => char::from(b'0' + n),
                    })
                    .collect::<String>()
            })
            .join("\n")
            + "\n"
    }

    /// Render one generation in the configured format
    pub fn render(&self, board: &Board, generation: u64, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => format!(
                "Generation {} (living: {}):\n{}",
                generation,
                board.living_count(),
                self.format_compact(board)
            ),
            OutputFormat::Coords => format!(
                "Generation {} (living: {}):\n{}",
                generation,
                board.living_count(),
                self.format_with_coords(board)
            ),
            OutputFormat::Json => Snapshot::capture(board, generation).to_json()? + "\n",
        })
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
