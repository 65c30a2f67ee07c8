//! DNA input — nucleotides, validated grids and the validator
//!
//! Raw rows of text enter through [`validate`]; everything downstream works
//! on [`Grid`] values that already satisfy the shape and alphabet rules.

mod nucleotide;
mod grid;
mod validator;

pub use nucleotide::Nucleotide;
pub use grid::Grid;
pub use validator::{validate, ValidationError, ValidationErrorKind};
