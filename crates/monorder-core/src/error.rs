//! Errors produced while comparing or ordering monomials.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OrderError>;

/// Errors that can occur while comparing or ordering monomials.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrderError {
    /// A monomial does not live in the same exponent space as the precedence.
    #[error("term {term} has {found} exponents, expected {expected}")]
    LengthMismatch {
        /// Number of variables the precedence covers.
        expected: usize,
        /// Length of the offending monomial.
        found: usize,
        /// Position of the offending monomial in its collection.
        term: usize,
    },

    /// The precedence names a variable outside `0..num_vars`.
    #[error("variable index {index} out of range for {num_vars} variables")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of variables.
        num_vars: usize,
    },

    /// The precedence lists a variable twice.
    #[error("variable index {index} appears more than once in the precedence")]
    DuplicateIndex {
        /// The repeated index.
        index: usize,
    },

    /// Two terms compare equal and would be placed at the same rank.
    #[error("terms {first} and {second} are tied at rank {rank}")]
    TiedRankCollision {
        /// The shared rank.
        rank: usize,
        /// Input position of the earlier term.
        first: usize,
        /// Input position of the later term.
        second: usize,
    },
}

impl OrderError {
    /// Returns true for malformed input (bad lengths or a non-permutation).
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, OrderError::TiedRankCollision { .. })
    }
}
