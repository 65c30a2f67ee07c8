//! Request and response bodies exchanged with clients

use crate::dna::{ValidationError, ValidationErrorKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{"dna": ["ATGCGA", ...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaRequest {
    pub dna: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: 400,
            error: "Bad Request".to_string(),
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn from_validation(err: &ValidationError, path: impl Into<String>) -> Self {
        Self::bad_request(err.to_string(), path)
    }
}

/// Short machine-readable code for each rejection kind
pub fn error_code(kind: ValidationErrorKind) -> &'static str {
    match kind {
        ValidationErrorKind::EmptyInput => "EMPTY_INPUT",
        ValidationErrorKind::NotSquare => "NOT_SQUARE",
        ValidationErrorKind::InvalidCharacter => "INVALID_CHARACTER",
    }
}
