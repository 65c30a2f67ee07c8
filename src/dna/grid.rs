//! Grid — a validated N×N matrix of nucleotides
//!
//! The only way to obtain a `Grid` is through [`super::validate`], so every
//! value in circulation is square, non-empty and drawn from `A C G T`.

use super::{validate, Nucleotide, ValidationError};
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Row-major cells, `n * n` long
    cells: Vec<Nucleotide>,
    n: usize,
}

impl Grid {
    /// Build from already-checked cells. Callers guarantee `cells.len() == n * n`.
    pub(super) fn from_cells(cells: Vec<Nucleotide>, n: usize) -> Self {
        debug_assert_eq!(cells.len(), n * n);
        Self { cells, n }
    }

    /// Side length N
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cell at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Nucleotide> {
        if row < self.n && col < self.n {
            Some(self.cells[row * self.n + col])
        } else {
            None
        }
    }

    /// Cell at `(row, col)` without an option wrapper; panics out of bounds.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Nucleotide {
        self.cells[row * self.n + col]
    }

    pub fn row(&self, row: usize) -> Option<&[Nucleotide]> {
        (row < self.n).then(|| &self.cells[row * self.n..(row + 1) * self.n])
    }

    /// Rows rendered back to text
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.n)
            .map(|r| r.iter().map(|c| c.as_char()).collect())
            .collect()
    }

    /// SHA256 of the comma-joined rows, hex encoded. Used as a dedup key.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (i, row) in self.cells.chunks(self.n).enumerate() {
            if i > 0 {
                hasher.update(b",");
            }
            let text: String = row.iter().map(|c| c.as_char()).collect();
            hasher.update(text.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Parses comma-separated rows, e.g. `"ATGC,CAGT,TTAT,AGAA"`. Every piece is
/// a row, so `"AT,,GT"` holds an empty row and is rejected; `""` has no rows.
impl FromStr for Grid {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return validate::<&str>(&[]);
        }
        let rows: Vec<&str> = s.split(',').collect();
        validate(&rows)
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = ValidationError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        validate(&rows)
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}
