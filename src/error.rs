use std::fmt;

use thiserror::Error;

/// Which input failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanField {
    Principal,
    Rate,
    Term,
    /// Each field is valid alone but together they overflow `f64`.
    Combination,
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoanField::Principal => "principal",
            LoanField::Rate => "annual rate",
            LoanField::Term => "term",
            LoanField::Combination => "inputs",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    #[error("Invalid loan input: {field} {reason}")]
    InvalidLoanInput {
        field: LoanField,
        reason: &'static str,
    },
}

impl LoanError {
    pub fn field(&self) -> LoanField {
        match self {
            LoanError::InvalidLoanInput { field, .. } => *field,
        }
    }
}
