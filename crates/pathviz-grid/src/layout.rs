//! Text layouts for grids.
//!
//! A layout is one line per row using `.` for Empty, `#` for Wall, `S` for
//! Start and `E` for End:
//!
//! ```text
//! S..#
//! .#..
//! ...E
//! ```
//!
//! Leading and trailing whitespace of the whole string is trimmed, but not of
//! individual lines. Every line must have the same width.

use crate::cell::{CellKind, Marker};
use crate::error::GridError;
use crate::grid::Grid;
use crate::pos::Pos;
use std::fmt;
use std::str::FromStr;

impl Grid {
    /// Parse a grid from a text layout. Exactly one `S` and one `E` are
    /// required.
    pub fn parse_layout(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut kinds = Vec::new();
        let mut rows = 0;
        let mut cols = 0;
        for (row, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let width = line.chars().count();
            if row == 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::InconsistentWidth {
                    line: row,
                    expected: cols,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let kind = CellKind::from_rune(ch).ok_or(GridError::InvalidRune {
                    ch,
                    pos: Pos::new(row, col),
                })?;
                kinds.push(kind);
            }
            rows += 1;
        }
        if rows < 1 || cols < 1 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        for m in [Marker::Start, Marker::End] {
            let kind = CellKind::from(m);
            match kinds.iter().filter(|&&k| k == kind).count() {
                0 => return Err(GridError::MissingMarker(m)),
                1 => {}
                _ => return Err(GridError::DuplicateMarker(m)),
            }
        }
        Ok(Grid::assemble(rows, cols, kinds))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_layout(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells().enumerate() {
            if i > 0 && c.pos.col == 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", c.kind.rune())?;
        }
        Ok(())
    }
}
