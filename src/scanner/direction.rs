//! Line orientations scanned for qualifying sequences

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Along a row, left to right
    Horizontal,
    /// Down a column
    Vertical,
    /// Down and to the right
    DiagonalDown,
    /// Down and to the left
    AntiDiagonal,
}

impl Direction {
    /// Scan order used everywhere a direction sequence matters
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::AntiDiagonal,
    ];

    /// (row step, column step)
    pub fn delta(self) -> (usize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// Cell `steps` away from `(row, col)`, or `None` if it leaves an `n`×`n` grid
    pub fn step(self, row: usize, col: usize, steps: usize, n: usize) -> Option<(usize, usize)> {
        // every direction moves at least one cell per step on some axis
        if steps >= n {
            return None;
        }
        let (dr, dc) = self.delta();
        let r = row.checked_add(dr.checked_mul(steps)?)?;
        let dc = dc.checked_mul(isize::try_from(steps).ok()?)?;
        let c = isize::try_from(col).ok()?.checked_add(dc)?;
        if r < n && c >= 0 && (c as usize) < n {
            Some((r, c as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalDown => "diagonal",
            Direction::AntiDiagonal => "anti-diagonal",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_bounds() {
        assert_eq!(Direction::Horizontal.step(0, 0, 3, 4), Some((0, 3)));
        assert_eq!(Direction::Horizontal.step(0, 1, 3, 4), None);
        assert_eq!(Direction::Vertical.step(1, 2, 3, 4), None);
        assert_eq!(Direction::DiagonalDown.step(0, 0, 3, 4), Some((3, 3)));
        assert_eq!(Direction::AntiDiagonal.step(0, 3, 3, 4), Some((3, 0)));
        assert_eq!(Direction::AntiDiagonal.step(0, 2, 3, 4), None);
        assert_eq!(Direction::Horizontal.step(0, 0, 0, 4), Some((0, 0)));
    }

    #[test]
    fn test_step_huge_distance() {
        for dir in Direction::ALL {
            assert_eq!(dir.step(0, 3, isize::MAX as usize + 2, 4), None);
            assert_eq!(dir.step(0, 0, usize::MAX, 4), None);
            assert_eq!(dir.step(0, 0, usize::MAX, usize::MAX), None);
        }
    }
}
