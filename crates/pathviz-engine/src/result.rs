use pathviz_grid::Pos;

/// Output of one search run.
///
/// Positions identify cells of the grid that was searched; read kind and
/// working state back through that grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Every non-Wall cell finalized, in the order it was finalized.
    pub visited: Vec<Pos>,
    /// Cells from Start to End inclusive, or empty if End is unreachable.
    pub path: Vec<Pos>,
}

impl RunResult {
    /// Whether a path to End was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Path length in edges, or `None` if no path was found.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}
