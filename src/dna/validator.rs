//! Grid validation — the single enforcement point for shape and alphabet
//!
//! Rows are checked in order and the first violation is returned. Within a
//! row: emptiness, then length against the row count, then every letter.
//! Input is never coerced (no trimming, padding or uppercasing).

use super::{Grid, Nucleotide};
use serde::{Deserialize, Serialize};

/// Which rule a rejected grid broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    EmptyInput,
    NotSquare,
    InvalidCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No rows at all (`row: None`) or a zero-length row
    #[error("{}", empty_message(.row))]
    EmptyInput { row: Option<usize> },

    #[error("DNA must be an NxN matrix: row {row} has length {actual}, expected {expected}")]
    NotSquare { row: usize, expected: usize, actual: usize },

    #[error("Invalid character '{found}' at row {row}, column {col}: only A, C, G, T are allowed")]
    InvalidCharacter { row: usize, col: usize, found: char },
}

fn empty_message(row: &Option<usize>) -> String {
    match row {
        Some(r) => format!("DNA row {} is empty", r),
        None => "DNA sequence is empty".to_string(),
    }
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::EmptyInput { .. } => ValidationErrorKind::EmptyInput,
            ValidationError::NotSquare { .. } => ValidationErrorKind::NotSquare,
            ValidationError::InvalidCharacter { .. } => ValidationErrorKind::InvalidCharacter,
        }
    }

    /// Offending row index, when the failure is tied to one
    pub fn row(&self) -> Option<usize> {
        match self {
            ValidationError::EmptyInput { row } => *row,
            ValidationError::NotSquare { row, .. } => Some(*row),
            ValidationError::InvalidCharacter { row, .. } => Some(*row),
        }
    }
}

/// Validate raw rows into a [`Grid`].
pub fn validate<S: AsRef<str>>(rows: &[S]) -> Result<Grid, ValidationError> {
    let n = rows.len();
    if n == 0 {
        return Err(ValidationError::EmptyInput { row: None });
    }

    let mut cells = Vec::with_capacity(n * n);
    for (r, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.is_empty() {
            return Err(ValidationError::EmptyInput { row: Some(r) });
        }

        let len = row.chars().count();
        if len != n {
            return Err(ValidationError::NotSquare { row: r, expected: n, actual: len });
        }

        for (c, ch) in row.chars().enumerate() {
            let base = Nucleotide::from_char(ch)
                .ok_or(ValidationError::InvalidCharacter { row: r, col: c, found: ch })?;
            cells.push(base);
        }
    }

    Ok(Grid::from_cells(cells, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example_is_valid() {
        let rows = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
        let grid = validate(&rows).unwrap();
        assert_eq!(grid.size(), 6);
        assert_eq!(grid.rows(), rows);
    }

    #[test]
    fn test_single_cell_is_valid() {
        let grid = validate(&["G"]).unwrap();
        assert_eq!(grid.size(), 1);
    }

    #[test]
    fn test_empty_input() {
        let rows: [&str; 0] = [];
        let err = validate(&rows).unwrap_err();
        assert_eq!(err, ValidationError::EmptyInput { row: None });
        assert_eq!(err.kind(), ValidationErrorKind::EmptyInput);
        assert_eq!(err.row(), None);
    }

    #[test]
    fn test_empty_row() {
        let err = validate(&["AT", ""]).unwrap_err();
        assert_eq!(err, ValidationError::EmptyInput { row: Some(1) });
        assert_eq!(err.row(), Some(1));
    }

    #[test]
    fn test_more_columns_than_rows() {
        let err = validate(&["ATGC", "CAGT", "TTAT"]).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::NotSquare);
        assert_eq!(err, ValidationError::NotSquare { row: 0, expected: 3, actual: 4 });
    }

    #[test]
    fn test_ragged_row_rejected_at_every_index() {
        for bad in 0..4 {
            let mut rows = vec!["ATGC".to_string(); 4];
            rows[bad] = "ATG".to_string();
            let err = validate(&rows).unwrap_err();
            assert_eq!(err, ValidationError::NotSquare { row: bad, expected: 4, actual: 3 });

            rows[bad] = "ATGCA".to_string();
            let err = validate(&rows).unwrap_err();
            assert_eq!(err, ValidationError::NotSquare { row: bad, expected: 4, actual: 5 });
        }
    }

    #[test]
    fn test_invalid_character() {
        let err = validate(&["ATGX", "CAGT", "TTAT", "AGAA"]).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidCharacter);
        assert_eq!(err, ValidationError::InvalidCharacter { row: 0, col: 3, found: 'X' });
        assert_eq!(err.row(), Some(0));
    }

    #[test]
    fn test_lowercase_rejected() {
        let err = validate(&["ATGC", "CAGT", "ttat", "AGAA"]).unwrap_err();
        assert_eq!(err, ValidationError::InvalidCharacter { row: 2, col: 0, found: 't' });
    }

    #[test]
    fn test_first_violation_wins() {
        // row 1 is short, row 2 has a bad letter: the earlier row is reported
        let err = validate(&["ATG", "CA", "TNA"]).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::NotSquare);
        assert_eq!(err.row(), Some(1));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::EmptyInput { row: None }.to_string(),
            "DNA sequence is empty"
        );
        assert_eq!(
            ValidationError::EmptyInput { row: Some(2) }.to_string(),
            "DNA row 2 is empty"
        );
        let msg = ValidationError::InvalidCharacter { row: 0, col: 3, found: 'X' }.to_string();
        assert!(msg.contains("'X'"));
        assert!(msg.contains("row 0"));
    }
}
