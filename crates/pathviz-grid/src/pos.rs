//! Grid coordinates: [`Pos`].

use std::fmt;

/// A cell coordinate. Rows grow downward, columns grow to the right.
///
/// Positions order row-major, which is also the order cells are stored and
/// enumerated in a [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance between two positions.
    #[inline]
    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is one of the four cardinal neighbours of `self`.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 2), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]);
    }

    #[test]
    fn manhattan_and_adjacency() {
        let a = Pos::new(2, 3);
        assert_eq!(a.manhattan(Pos::new(0, 0)), 5);
        assert!(a.is_adjacent(Pos::new(1, 3)));
        assert!(a.is_adjacent(Pos::new(2, 4)));
        assert!(!a.is_adjacent(Pos::new(1, 2)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn display() {
        assert_eq!(Pos::new(4, 7).to_string(), "(4, 7)");
    }
}
