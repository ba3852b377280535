//! # monorder-core
//!
//! Monomial orderings for term ordering in computer algebra.
//!
//! This crate provides:
//! - Exponent-vector monomials with inline storage
//! - Validated variable precedence permutations
//! - Lex, glex and grevlex comparison under any precedence
//! - Rank-counting placement of term collections, optionally on rayon
//!
//! ## Tie handling
//!
//! Rank-counting writes each term at the number of terms below it, so terms
//! that compare equal land on the same slot. The `determine_by_*` functions
//! break such ties by input position. [`determine_collapsing`] keeps the raw
//! placement, and [`TiePolicy::Strict`] reports the collision instead.
//!
//! ```
//! use monorder_core::{determine_by_grevlex, Monomial, Precedence};
//!
//! let terms = vec![Monomial::new(&[2, 8, 0]), Monomial::new(&[5, 1, 4])];
//! let p = Precedence::new(&[2, 1, 0]).unwrap();
//! let sorted = determine_by_grevlex(&terms, &p).unwrap();
//! assert_eq!(sorted[0], Monomial::new(&[5, 1, 4]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod error;
pub mod monomial;
pub mod ordering;
pub mod precedence;
pub mod ranking;

#[cfg(test)]
mod proptests;

pub use context::{Direction, OrderingContext, DEFAULT_PARALLEL_THRESHOLD};
pub use error::{OrderError, Result};
pub use monomial::Monomial;
pub use ordering::{
    compare_by_glex, compare_by_grevlex, compare_by_lex, MonomialOrder, ParseOrderError,
};
pub use precedence::Precedence;
pub use ranking::{
    determine, determine_by_glex, determine_by_grevlex, determine_by_lex, determine_collapsing,
    par_ranks, TiePolicy,
};
