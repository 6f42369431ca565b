//! Mapping between a pixel canvas and board cells

use crate::error::{LifeError, LifeResult};
use serde::{Deserialize, Serialize};

/// A drawing surface split into square cells of `cell_size` pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasLayout {
    pub width_px: u32,
    pub height_px: u32,
    pub cell_size: u32,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            width_px: 600,
            height_px: 600,
            cell_size: 20,
        }
    }
}

impl CanvasLayout {
    pub fn new(width_px: u32, height_px: u32, cell_size: u32) -> Self {
        Self {
            width_px,
            height_px,
            cell_size,
        }
    }

    /// Number of whole cells that fit across and down the canvas
    pub fn board_dimensions(&self) -> LifeResult<(usize, usize)> {
        let (width, height) = match self.cell_size {
            0 => (0, 0),
            size => ((self.width_px / size) as usize, (self.height_px / size) as usize),
        };
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        Ok((width, height))
    }

    /// Cell under a pixel position, or `None` when the pixel is outside the cell grid
    pub fn cell_at(&self, px: i32, py: i32) -> Option<(isize, isize)> {
        let (width, height) = self.board_dimensions().ok()?;
        if px < 0 || py < 0 {
            return None;
        }

        let x = (px as u32 / self.cell_size) as usize;
        let y = (py as u32 / self.cell_size) as usize;
        (x < width && y < height).then_some((x as isize, y as isize))
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, x: usize, y: usize) -> (u32, u32) {
        (x as u32 * self.cell_size, y as u32 * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_thirty_square() {
        assert_eq!(CanvasLayout::default().board_dimensions().unwrap(), (30, 30));
    }

    #[test]
    fn test_partial_cells_are_dropped() {
        let layout = CanvasLayout::new(105, 47, 10);
        assert_eq!(layout.board_dimensions().unwrap(), (10, 4));
        // Pixels in the leftover strip do not map to a cell
        assert_eq!(layout.cell_at(101, 5), None);
        assert_eq!(layout.cell_at(5, 45), None);
    }

    #[test]
    fn test_invalid_layouts() {
        assert!(matches!(
            CanvasLayout::new(600, 600, 0).board_dimensions(),
            Err(LifeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            CanvasLayout::new(10, 600, 20).board_dimensions(),
            Err(LifeError::InvalidDimension { width: 0, height: 30 })
        ));
    }

    #[test]
    fn test_cell_at() {
        let layout = CanvasLayout::default();
        assert_eq!(layout.cell_at(0, 0), Some((0, 0)));
        assert_eq!(layout.cell_at(19, 19), Some((0, 0)));
        assert_eq!(layout.cell_at(20, 59), Some((1, 2)));
        assert_eq!(layout.cell_at(599, 599), Some((29, 29)));
        assert_eq!(layout.cell_at(600, 10), None);
        assert_eq!(layout.cell_at(-1, 10), None);
        assert_eq!(layout.cell_origin(1, 2), (20, 40));
    }
}
