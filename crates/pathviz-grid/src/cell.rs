//! The [`Cell`] entity, its [`CellKind`], and per-run [`WorkingState`].

use crate::pos::Pos;
use std::fmt;

/// Sentinel distance meaning "not reached yet".
pub const UNREACHABLE: u32 = u32::MAX;

/// Classification of a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    End,
}

impl CellKind {
    /// Whether this is the Start or End kind.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Layout character for this kind.
    pub const fn rune(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Parse a layout character.
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

/// One of the two unique cells a grid must carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    Start,
    End,
}

impl From<Marker> for CellKind {
    fn from(m: Marker) -> Self {
        match m {
            Marker::Start => CellKind::Start,
            Marker::End => CellKind::End,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// A grid cell: fixed identity plus its current kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Pos,
    pub kind: CellKind,
}

impl Cell {
    /// Create a cell at `pos` with the given kind.
    #[inline]
    pub const fn new(pos: Pos, kind: CellKind) -> Self {
        Self { pos, kind }
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self.kind, CellKind::Wall)
    }
}

/// Mutable per-run search state of one cell.
///
/// Kept in a side table next to the grid topology so that a reset is a single
/// pass over plain data and the engine's write scope stays explicit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkingState {
    pub visited: bool,
    /// Best known edge count from Start, or [`UNREACHABLE`].
    pub distance: u32,
    /// Row-major index of the cell this one was last relaxed from.
    pub predecessor: Option<usize>,
}

impl WorkingState {
    /// Whether a finite distance has been assigned.
    #[inline]
    pub const fn is_reached(&self) -> bool {
        self.distance != UNREACHABLE
    }
}

impl Default for WorkingState {
    #[inline]
    fn default() -> Self {
        Self {
            visited: false,
            distance: UNREACHABLE,
            predecessor: None,
        }
    }
}
