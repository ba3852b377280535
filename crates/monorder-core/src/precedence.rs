//! Variable precedence permutations.
//!
//! A precedence lists variable indices from most to least significant.
//! `[2, 1, 0]` reads as x₃ > x₂ > x₁.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{OrderError, Result};

/// A validated permutation of `0..num_vars`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Precedence(SmallVec<[usize; 8]>);

impl Precedence {
    /// Creates a precedence, checking that `order` is a permutation of
    /// `0..order.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::IndexOutOfRange`] or
    /// [`OrderError::DuplicateIndex`] if `order` is not a permutation.
    pub fn new(order: &[usize]) -> Result<Self> {
        let num_vars = order.len();
        let mut seen: SmallVec<[bool; 8]> = SmallVec::from_elem(false, num_vars);

        for &index in order {
            if index >= num_vars {
                return Err(OrderError::IndexOutOfRange { index, num_vars });
            }
            if seen[index] {
                return Err(OrderError::DuplicateIndex { index });
            }
            seen[index] = true;
        }

        Ok(Self(SmallVec::from_slice(order)))
    }

    /// x₀ > x₁ > ... > xₙ₋₁.
    #[must_use]
    pub fn identity(num_vars: usize) -> Self {
        Self((0..num_vars).collect())
    }

    /// xₙ₋₁ > ... > x₁ > x₀.
    #[must_use]
    pub fn descending(num_vars: usize) -> Self {
        Self((0..num_vars).rev().collect())
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Returns the indices, most significant first.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Iterates the indices, most significant first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<usize>> for Precedence {
    type Error = OrderError;

    fn try_from(order: Vec<usize>) -> Result<Self> {
        Self::new(&order)
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "()");
        }
        let names: Vec<String> = self.0.iter().map(|i| format!("x{}", i + 1)).collect();
        write!(f, "{}", names.join(" > "))
    }
}
