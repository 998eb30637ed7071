//! The [`Grid`] model: a row-major arena of [`Cell`]s with a side table of
//! per-run [`WorkingState`].
//!
//! The grid is split into two parts. [`Topology`] holds dimensions and cell
//! kinds and is what the search reads; the working-state table is what the
//! search writes. [`Grid::split_mut`] hands out both at once so a search can
//! update state while walking neighbours without cloning either.

use crate::cell::{Cell, CellKind, Marker, WorkingState};
use crate::error::GridError;
use crate::pos::Pos;

// ---------------------------------------------------------------------------
// Topology
// ---------------------------------------------------------------------------

/// Read-only shape of a grid: dimensions and the kind of every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Topology {
    fn new(rows: usize, cols: usize, kinds: impl IntoIterator<Item = CellKind>) -> Self {
        let cells = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Cell::new(Pos::new(i / cols, i % cols), kind))
            .collect();
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    /// Convert a position to its row-major index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub fn idx(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row * self.cols + p.col)
    }

    /// Convert a row-major index back to a position.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        Pos::new(idx / self.cols, idx % self.cols)
    }

    /// Cell at a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Kind at a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn kind_at(&self, idx: usize) -> CellKind {
        self.cells[idx].kind
    }

    /// Append the in-bounds 4-connected neighbours of `idx` into `buf`, in
    /// the order up, down, left, right. The caller clears `buf` first.
    pub fn neighbors(&self, idx: usize, buf: &mut Vec<usize>) {
        let Pos { row, col } = self.pos(idx);
        if row > 0 {
            buf.push(idx - self.cols);
        }
        if row + 1 < self.rows {
            buf.push(idx + self.cols);
        }
        if col > 0 {
            buf.push(idx - 1);
        }
        if col + 1 < self.cols {
            buf.push(idx + 1);
        }
    }

    /// Row-major indices of every cell with the given kind.
    pub fn indices_of(&self, kind: CellKind) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.kind == kind)
            .map(|(i, _)| i)
    }

    fn set_kind(&mut self, idx: usize, kind: CellKind) {
        self.cells[idx].kind = kind;
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows × cols` grid of cells with exactly one Start and one End when
/// built through this API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    topo: Topology,
    work: Vec<WorkingState>,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl Grid {
    /// Build a grid where every cell is Empty except `start` and `end`.
    pub fn build(rows: usize, cols: usize, start: Pos, end: Pos) -> Result<Self, GridError> {
        if rows < 1 || cols < 1 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        for p in [start, end] {
            if p.row >= rows || p.col >= cols {
                return Err(GridError::InvalidPosition { pos: p, rows, cols });
            }
        }
        if start == end {
            return Err(GridError::CoincidingMarkers(start));
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::InvalidDimensions { rows, cols })?;
        let mut grid = Self::assemble(rows, cols, vec![CellKind::Empty; len]);
        grid.place(start, CellKind::Start);
        grid.place(end, CellKind::End);
        grid.start = Some(start);
        grid.end = Some(end);
        Ok(grid)
    }

    /// Assemble a grid from row-major kinds.
    ///
    /// Only the dimensions are checked: the grid may lack a marker or carry
    /// several, which a search reports as invalid endpoints. Cached marker
    /// positions are the first Start/End found, if any.
    pub fn from_kinds(rows: usize, cols: usize, kinds: Vec<CellKind>) -> Result<Self, GridError> {
        let len = rows.checked_mul(cols);
        if rows < 1 || cols < 1 || len != Some(kinds.len()) {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self::assemble(rows, cols, kinds))
    }

    pub(crate) fn assemble(rows: usize, cols: usize, kinds: Vec<CellKind>) -> Self {
        debug_assert_eq!(kinds.len(), rows * cols);
        let len = kinds.len();
        let topo = Topology::new(rows, cols, kinds);
        let start = topo.indices_of(CellKind::Start).next().map(|i| topo.pos(i));
        let end = topo.indices_of(CellKind::End).next().map(|i| topo.pos(i));
        Self {
            topo,
            work: vec![WorkingState::default(); len],
            start,
            end,
        }
    }

    fn place(&mut self, p: Pos, kind: CellKind) {
        if let Some(i) = self.topo.idx(p) {
            self.topo.set_kind(i, kind);
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> usize {
        self.topo.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.topo.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.topo.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.topo.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.topo.contains(p)
    }

    /// Read-only topology.
    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topo
    }

    /// Cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Pos) -> Option<Cell> {
        self.topo.idx(p).map(|i| self.topo.cell_at(i))
    }

    /// Kind at `p`, or `None` if out of bounds.
    pub fn kind(&self, p: Pos) -> Option<CellKind> {
        self.cell(p).map(|c| c.kind)
    }

    /// Working state at `p`, or `None` if out of bounds.
    pub fn state(&self, p: Pos) -> Option<&WorkingState> {
        self.topo.idx(p).map(|i| &self.work[i])
    }

    /// Predecessor of `p` from the last run, as a position.
    pub fn predecessor(&self, p: Pos) -> Option<Pos> {
        self.state(p)?.predecessor.map(|i| self.topo.pos(i))
    }

    /// The whole working-state table in row-major order.
    #[inline]
    pub fn working_state(&self) -> &[WorkingState] {
        &self.work
    }

    /// Cached Start position.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// Cached End position.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    /// Cached position of a marker.
    #[inline]
    pub fn marker(&self, m: Marker) -> Option<Pos> {
        match m {
            Marker::Start => self.start,
            Marker::End => self.end,
        }
    }

    /// Row-major iterator over every cell.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.topo.cells.iter().copied()
    }

    /// First position (row-major) holding `kind`.
    pub fn find(&self, kind: CellKind) -> Option<Pos> {
        self.topo.indices_of(kind).next().map(|i| self.topo.pos(i))
    }

    /// Number of cells holding `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.topo.indices_of(kind).count()
    }

    /// Borrow the topology read-only and the working-state table mutably.
    ///
    /// This is the only way to write working state; cell kinds cannot change
    /// through it.
    #[inline]
    pub fn split_mut(&mut self) -> (&Topology, &mut [WorkingState]) {
        (&self.topo, &mut self.work)
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Flip the cell at `p` between Empty and Wall.
    ///
    /// Returns `false` and leaves the grid unchanged if `p` is out of bounds
    /// or holds a marker.
    pub fn toggle_wall(&mut self, p: Pos) -> bool {
        let Some(i) = self.topo.idx(p) else {
            return false;
        };
        let next = match self.topo.kind_at(i) {
            CellKind::Empty => CellKind::Wall,
            CellKind::Wall => CellKind::Empty,
            CellKind::Start | CellKind::End => return false,
        };
        self.topo.set_kind(i, next);
        true
    }

    /// Relocate `marker` to `p`, reverting its old cell to Empty.
    ///
    /// A Wall at `p` is overwritten. Returns `false` and leaves the grid
    /// unchanged if `p` is out of bounds, if `p` already holds a marker, or if
    /// the grid has no cell of that marker kind.
    pub fn move_marker(&mut self, marker: Marker, p: Pos) -> bool {
        let Some(dst) = self.topo.idx(p) else {
            return false;
        };
        if self.topo.kind_at(dst).is_marker() {
            return false;
        }
        let kind = CellKind::from(marker);
        let old = self
            .marker(marker)
            .filter(|&q| self.kind(q) == Some(kind))
            .or_else(|| self.find(kind));
        let Some(old) = old else {
            return false;
        };
        self.place(old, CellKind::Empty);
        self.topo.set_kind(dst, kind);
        match marker {
            Marker::Start => self.start = Some(p),
            Marker::End => self.end = Some(p),
        }
        true
    }

    /// Turn every Wall back into Empty. Markers are kept.
    pub fn clear_walls(&mut self) {
        for c in self.topo.cells.iter_mut() {
            if c.is_wall() {
                c.kind = CellKind::Empty;
            }
        }
    }

    /// Reset every cell's working state: not visited, unreachable, no
    /// predecessor. Must be called before each search run.
    pub fn reset_working_state(&mut self) {
        for s in self.work.iter_mut() {
            *s = WorkingState::default();
        }
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

/// Serialized shape of a [`Grid`]: dimensions plus row-major kinds.
/// Working state is not persisted.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: usize,
    cols: usize,
    kinds: Vec<CellKind>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            rows: self.rows(),
            cols: self.cols(),
            kinds: self.cells().map(|c| c.kind).collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        Grid::from_kinds(repr.rows, repr.cols, repr.kinds).map_err(serde::de::Error::custom)
    }
}
