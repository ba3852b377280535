//! Validated configuration for one ordering run.
//!
//! An [`OrderingContext`] fixes the ordering, the precedence (and with it the
//! number of variables) and the output direction. Term collections are
//! checked against it once, after which the comparison kernels run without
//! further length checks.

use std::cmp::Ordering;

use crate::error::{OrderError, Result};
use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;
use crate::precedence::Precedence;
use crate::ranking::{self, TiePolicy};

/// Collections at least this large get their ranks computed on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Direction of the produced sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    /// Smallest term first.
    #[default]
    Ascending,
    /// Largest (leading) term first, the usual way of writing a polynomial.
    Descending,
}

/// Ordering, precedence and direction for ordering a term collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderingContext {
    order: MonomialOrder,
    precedence: Precedence,
    direction: Direction,
    parallel_threshold: usize,
}

impl OrderingContext {
    /// Creates an ascending context.
    #[must_use]
    pub fn new(order: MonomialOrder, precedence: Precedence) -> Self {
        Self {
            order,
            precedence,
            direction: Direction::Ascending,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Builds a context from a raw precedence slice.
    ///
    /// # Errors
    ///
    /// Fails if `precedence` is not a permutation of `0..precedence.len()`.
    pub fn from_indices(order: MonomialOrder, precedence: &[usize]) -> Result<Self> {
        Ok(Self::new(order, Precedence::new(precedence)?))
    }

    /// Sets the output direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the collection size from which ranks are computed in parallel.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns the ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the precedence.
    #[must_use]
    pub fn precedence(&self) -> &Precedence {
        &self.precedence
    }

    /// Returns the output direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of variables every term must have.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.precedence.num_vars()
    }

    /// Checks that every term has exactly [`Self::num_vars`] exponents.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::LengthMismatch`] naming the first bad term.
    pub fn validate(&self, terms: &[Monomial]) -> Result<()> {
        let expected = self.num_vars();
        match terms.iter().position(|t| t.num_vars() != expected) {
            None => Ok(()),
            Some(term) => Err(OrderError::LengthMismatch {
                expected,
                found: terms[term].num_vars(),
                term,
            }),
        }
    }

    /// Compares two monomials under this context's ordering, ignoring the
    /// output direction.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::LengthMismatch`] on a length mismatch.
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Result<Ordering> {
        self.order.compare(a, b, &self.precedence)
    }

    /// Compares in output order: `Less` means `a` is placed before `b`.
    pub(crate) fn placement_cmp(&self, a: &Monomial, b: &Monomial) -> Ordering {
        let ord = self
            .order
            .compare_unchecked(a.exponents(), b.exponents(), self.precedence.as_slice());
        match self.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }

    pub(crate) fn use_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }

    /// Returns the rank of every term: the number of terms placed strictly
    /// before it.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::LengthMismatch`] on a malformed collection.
    pub fn ranks(&self, terms: &[Monomial]) -> Result<Vec<usize>> {
        self.validate(terms)?;
        Ok(ranking::rank_counts(self, terms))
    }

    /// Orders `terms` by rank-counting placement.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::LengthMismatch`] on a malformed collection, or
    /// [`OrderError::TiedRankCollision`] under [`TiePolicy::Strict`].
    pub fn sort(&self, terms: &[Monomial], ties: TiePolicy) -> Result<Vec<Monomial>> {
        self.validate(terms)?;
        log::debug!(
            "ordering {} terms in {} variables by {} ({:?}, {:?})",
            terms.len(),
            self.num_vars(),
            self.order,
            self.direction,
            ties
        );
        ranking::place(self, terms, ties)
    }

    /// Orders `terms` by raw rank, letting tied terms overwrite each other.
    ///
    /// Slots left unfilled by a collision are `None`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::LengthMismatch`] on a malformed collection.
    pub fn sort_collapsing(&self, terms: &[Monomial]) -> Result<Vec<Option<Monomial>>> {
        self.validate(terms)?;
        Ok(ranking::place_collapsing(self, terms))
    }

    /// Checks that `terms` is already in output order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::LengthMismatch`] on a malformed collection.
    pub fn is_sorted(&self, terms: &[Monomial]) -> Result<bool> {
        self.validate(terms)?;
        Ok(terms
            .windows(2)
            .all(|w| self.placement_cmp(&w[0], &w[1]) != Ordering::Greater))
    }
}
