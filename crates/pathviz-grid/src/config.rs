use crate::error::GridError;
use crate::grid::Grid;
use crate::pos::Pos;

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 20;
/// Default number of columns.
pub const DEFAULT_COLS: usize = 35;

/// Dimensions and initial marker positions of a new grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Pos,
    pub end: Pos,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: Pos::new(10, 5),
            end: Pos::new(10, 30),
        }
    }
}

impl GridConfig {
    /// Build the grid this configuration describes.
    pub fn build(&self) -> Result<Grid, GridError> {
        Grid::build(self.rows, self.cols, self.start, self.end)
    }
}
