use crate::cell::Marker;
use crate::pos::Pos;
use std::fmt;

/// Errors raised while building or parsing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or zero columns were requested.
    InvalidDimensions { rows: usize, cols: usize },
    /// A marker position lies outside the grid.
    InvalidPosition { pos: Pos, rows: usize, cols: usize },
    /// Start and End were requested at the same position.
    CoincidingMarkers(Pos),
    /// Layout lines have different widths.
    InconsistentWidth { line: usize, expected: usize, found: usize },
    /// A layout character outside `.#SE` was found.
    InvalidRune { ch: char, pos: Pos },
    /// A layout has no cell of the given marker kind.
    MissingMarker(Marker),
    /// A layout has more than one cell of the given marker kind.
    DuplicateMarker(Marker),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid: invalid dimensions {rows}x{cols}")
            }
            Self::InvalidPosition { pos, rows, cols } => {
                write!(f, "grid: position {pos} is outside a {rows}x{cols} grid")
            }
            Self::CoincidingMarkers(pos) => {
                write!(f, "grid: start and end both requested at {pos}")
            }
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout: invalid rune '{ch}' at {pos}")
            }
            Self::MissingMarker(m) => write!(f, "layout: no {m} cell"),
            Self::DuplicateMarker(m) => write!(f, "layout: more than one {m} cell"),
        }
    }
}

impl std::error::Error for GridError {}
