//! Error types for board operations

use thiserror::Error;

/// Errors raised by direct board access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A board or canvas was requested with a zero-sized side
    #[error("Invalid board dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: usize, height: usize },

    /// A cell write targeted coordinates outside the board
    #[error("Coordinates ({x}, {y}) out of bounds for {width}x{height} board")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
}

pub type LifeResult<T> = std::result::Result<T, LifeError>;
