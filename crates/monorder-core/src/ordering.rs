//! Monomial orderings.
//!
//! Each ordering is parameterized by a [`Precedence`] deciding which variable
//! is consulted first when breaking ties.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OrderError, Result};
use crate::monomial::{cmp_glex, cmp_grevlex, cmp_lex, Monomial};
use crate::precedence::Precedence;

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// With precedence x > y > z, x^a y^b z^c > x^d y^e z^f iff the first
    /// nonzero difference (a-d, b-e, c-f) is positive.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Glex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then walks the precedence from the least
    /// significant variable with the comparison reversed.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// All orderings, in the order reports list them.
    pub const ALL: [MonomialOrder; 3] = [
        MonomialOrder::Lex,
        MonomialOrder::Glex,
        MonomialOrder::Grevlex,
    ];

    /// Compares two monomials according to this ordering.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::LengthMismatch`] if either monomial does not
    /// have exactly `precedence.num_vars()` exponents.
    pub fn compare(
        &self,
        a: &Monomial,
        b: &Monomial,
        precedence: &Precedence,
    ) -> Result<Ordering> {
        check_len(a, precedence, 0)?;
        check_len(b, precedence, 1)?;
        Ok(self.compare_unchecked(a.exponents(), b.exponents(), precedence.as_slice()))
    }

    /// Compares raw exponent slices whose lengths have already been checked.
    pub(crate) fn compare_unchecked(
        &self,
        a: &[u32],
        b: &[u32],
        precedence: &[usize],
    ) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b, precedence),
            MonomialOrder::Glex => cmp_glex(a, b, precedence),
            MonomialOrder::Grevlex => cmp_grevlex(a, b, precedence),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Glex => "glex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }

    /// Returns the descriptive label used in reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "Lex",
            MonomialOrder::Glex => "Graded Lex",
            MonomialOrder::Grevlex => "Graded Reverse Lex",
        }
    }
}

impl fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown ordering name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown monomial order '{0}' (expected lex, glex or grevlex)")]
pub struct ParseOrderError(String);

impl FromStr for MonomialOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lex" => Ok(MonomialOrder::Lex),
            "glex" | "grlex" | "deglex" => Ok(MonomialOrder::Glex),
            "grevlex" | "degrevlex" => Ok(MonomialOrder::Grevlex),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

fn check_len(m: &Monomial, precedence: &Precedence, term: usize) -> Result<()> {
    if m.num_vars() == precedence.num_vars() {
        Ok(())
    } else {
        Err(OrderError::LengthMismatch {
            expected: precedence.num_vars(),
            found: m.num_vars(),
            term,
        })
    }
}

/// Compares two monomials lexicographically under `precedence`.
///
/// # Errors
///
/// Returns [`OrderError::LengthMismatch`] on a length mismatch.
pub fn compare_by_lex(m1: &Monomial, m2: &Monomial, precedence: &Precedence) -> Result<Ordering> {
    MonomialOrder::Lex.compare(m1, m2, precedence)
}

/// Compares two monomials by graded lexicographic order under `precedence`.
///
/// # Errors
///
/// Returns [`OrderError::LengthMismatch`] on a length mismatch.
pub fn compare_by_glex(m1: &Monomial, m2: &Monomial, precedence: &Precedence) -> Result<Ordering> {
    MonomialOrder::Glex.compare(m1, m2, precedence)
}

/// Compares two monomials by graded reverse lexicographic order under
/// `precedence`.
///
/// # Errors
///
/// Returns [`OrderError::LengthMismatch`] on a length mismatch.
pub fn compare_by_grevlex(m1: &Monomial, m2: &Monomial, precedence: &Precedence) -> Result<Ordering> {
    MonomialOrder::Grevlex.compare(m1, m2, precedence)
}
