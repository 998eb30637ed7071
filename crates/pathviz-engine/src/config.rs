/// How the next cell to finalize is chosen.
///
/// Both strategies pick the remaining cell with the smallest
/// `(distance, row-major index)` and therefore produce identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Scan every remaining cell for the minimum on each iteration.
    /// Quadratic in the number of cells.
    #[default]
    LinearScan,
    /// Binary heap with lazy deletion of stale entries.
    Heap,
}

/// Engine settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub selection: Selection,
}
