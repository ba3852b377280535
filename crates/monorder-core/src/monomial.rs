//! Exponent-vector monomials and the raw comparison kernels.
//!
//! A monomial x₁^a₁ x₂^a₂ ... xₙ^aₙ is stored as the vector `[a₁, ..., aₙ]`.
//! Vectors up to eight variables are kept inline.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A monomial represented by its exponent vector.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Monomial {
    exponents: SmallVec<[u32; 8]>,
}

impl Monomial {
    /// Creates a monomial from exponents.
    #[must_use]
    pub fn new(exps: &[u32]) -> Self {
        Self {
            exponents: SmallVec::from_slice(exps),
        }
    }

    /// Creates the monomial 1 (all exponents zero).
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self {
            exponents: SmallVec::from_elem(0, num_vars),
        }
    }

    /// Creates the monomial x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars);
        let mut m = Self::one(num_vars);
        m.exponents[i] = 1;
        m
    }

    /// Returns the exponent of variable i.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.exponents[i]
    }

    /// Returns the exponents as a slice.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.exponents.len()
    }

    /// Computes the total degree over every variable.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        total_degree(&self.exponents)
    }

    /// Checks if this is the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }
}

impl From<Vec<u32>> for Monomial {
    fn from(exps: Vec<u32>) -> Self {
        Self {
            exponents: SmallVec::from_vec(exps),
        }
    }
}

impl From<&[u32]> for Monomial {
    fn from(exps: &[u32]) -> Self {
        Self::new(exps)
    }
}

impl<const N: usize> From<[u32; N]> for Monomial {
    fn from(exps: [u32; N]) -> Self {
        Self::new(&exps)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &e) in self.exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            if e == 1 {
                write!(f, "x{}", i + 1)?;
            } else {
                write!(f, "x{}^{}", i + 1, e)?;
            }
        }
        if first {
            write!(f, "1")?;
        }
        Ok(())
    }
}

pub(crate) fn total_degree(exps: &[u32]) -> u64 {
    exps.iter().map(|&e| u64::from(e)).sum()
}

// The kernels below index `a` and `b` through `precedence` without bounds
// reporting; callers validate lengths first.

/// Lexicographic comparison following `precedence`, most significant first.
pub(crate) fn cmp_lex(a: &[u32], b: &[u32], precedence: &[usize]) -> Ordering {
    for &i in precedence {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Total degree first, then lex.
pub(crate) fn cmp_glex(a: &[u32], b: &[u32], precedence: &[usize]) -> Ordering {
    match total_degree(a).cmp(&total_degree(b)) {
        Ordering::Equal => {}
        ord => return ord,
    }

    cmp_lex(a, b, precedence)
}

/// Total degree first, then reverse precedence with the comparison reversed.
pub(crate) fn cmp_grevlex(a: &[u32], b: &[u32], precedence: &[usize]) -> Ordering {
    match total_degree(a).cmp(&total_degree(b)) {
        Ordering::Equal => {}
        ord => return ord,
    }

    for &i in precedence.iter().rev() {
        match b[i].cmp(&a[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
