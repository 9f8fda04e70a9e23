//! error types for GF(2^n) arithmetic

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors raised by field element arithmetic.
///
/// Every variant is a contract violation detected at the point of misuse;
/// none of them is transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Operands belong to fields with different moduli
    #[error("polynomials do not match")]
    FieldMismatch,

    /// The extended Euclidean algorithm ended on a gcd other than one
    #[error("element has no inverse")]
    NoInverse,

    /// Polynomial division by the zero polynomial
    #[error("division by zero polynomial")]
    DivisionByZero,
}
