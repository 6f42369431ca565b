//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod layout;
pub mod patterns;
pub mod rules;

pub use grid::Board;
pub use io::{create_example_patterns, load_board_from_file, save_board_to_file};
pub use layout::CanvasLayout;
pub use patterns::Pattern;
pub use rules::GameOfLifeRules;
