//! Random wall placement.

use crate::cell::CellKind;
use crate::grid::Grid;
use rand::Rng;

/// Scatters walls over the Empty cells of a grid.
///
/// Each Empty cell independently becomes a Wall with probability `density`.
/// Markers and existing walls are left alone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallScatter {
    pub density: f64,
}

impl Default for WallScatter {
    fn default() -> Self {
        Self { density: 0.25 }
    }
}

impl WallScatter {
    pub fn new(density: f64) -> Self {
        Self { density }
    }

    /// Place walls and return how many were added.
    pub fn scatter(&self, grid: &mut Grid, rng: &mut impl Rng) -> usize {
        let p = if self.density.is_nan() {
            0.0
        } else {
            self.density.clamp(0.0, 1.0)
        };
        let targets: Vec<_> = grid
            .cells()
            .filter(|c| c.kind == CellKind::Empty)
            .map(|c| c.pos)
            .collect();
        let mut placed = 0;
        for pos in targets {
            if rng.random_bool(p) && grid.toggle_wall(pos) {
                placed += 1;
            }
        }
        placed
    }
}
