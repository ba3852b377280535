//! Rank-counting placement of term collections.
//!
//! Every term is written to the output position equal to the number of terms
//! placed strictly before it. This costs O(n²) comparisons but each rank is
//! independent of the others, so large collections are ranked on the rayon
//! pool.
//!
//! Two terms that compare equal share a rank. [`TiePolicy`] decides what
//! happens then; [`OrderingContext::sort_collapsing`] keeps the raw
//! behaviour where the later term overwrites the earlier one.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::context::OrderingContext;
use crate::error::{OrderError, Result};
use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;
use crate::precedence::Precedence;

/// How terms that compare equal are placed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TiePolicy {
    /// Equal terms keep their input order.
    #[default]
    Stable,
    /// Equal terms are an error.
    Strict,
}

/// Counts, for term `i`, the terms placed before it. With `stable` set,
/// equal terms earlier in the input count as well.
fn position_of(ctx: &OrderingContext, terms: &[Monomial], i: usize, stable: bool) -> usize {
    let ti = &terms[i];
    let mut count = 0;
    for (j, tj) in terms.iter().enumerate() {
        match ctx.placement_cmp(tj, ti) {
            Ordering::Less => count += 1,
            Ordering::Equal if stable && j < i => count += 1,
            _ => {}
        }
    }
    count
}

fn positions(ctx: &OrderingContext, terms: &[Monomial], stable: bool) -> Vec<usize> {
    if ctx.use_parallel(terms.len()) {
        (0..terms.len())
            .into_par_iter()
            .map(|i| position_of(ctx, terms, i, stable))
            .collect()
    } else {
        (0..terms.len())
            .map(|i| position_of(ctx, terms, i, stable))
            .collect()
    }
}

/// Raw ranks of an already validated collection.
pub(crate) fn rank_counts(ctx: &OrderingContext, terms: &[Monomial]) -> Vec<usize> {
    positions(ctx, terms, false)
}

/// Computes raw ranks on the rayon pool regardless of collection size.
///
/// # Errors
///
/// Returns [`OrderError::LengthMismatch`] on a malformed collection.
pub fn par_ranks(ctx: &OrderingContext, terms: &[Monomial]) -> Result<Vec<usize>> {
    ctx.validate(terms)?;
    Ok((0..terms.len())
        .into_par_iter()
        .map(|i| position_of(ctx, terms, i, false))
        .collect())
}

pub(crate) fn place(
    ctx: &OrderingContext,
    terms: &[Monomial],
    ties: TiePolicy,
) -> Result<Vec<Monomial>> {
    let stable = ties == TiePolicy::Stable;
    let pos = positions(ctx, terms, stable);

    // Stable positions are a permutation of 0..n. Raw ranks are one only
    // when no two terms tie, which the slot scan checks.
    let mut slots: Vec<Option<usize>> = vec![None; terms.len()];
    for (i, &p) in pos.iter().enumerate() {
        if let Some(first) = slots[p] {
            return Err(OrderError::TiedRankCollision {
                rank: p,
                first,
                second: i,
            });
        }
        slots[p] = Some(i);
    }

    Ok(slots
        .into_iter()
        .flatten()
        .map(|i| terms[i].clone())
        .collect())
}

pub(crate) fn place_collapsing(ctx: &OrderingContext, terms: &[Monomial]) -> Vec<Option<Monomial>> {
    let ranks = positions(ctx, terms, false);
    let mut out: Vec<Option<Monomial>> = vec![None; terms.len()];

    for (i, &r) in ranks.iter().enumerate() {
        if out[r].is_some() {
            log::warn!("term {i} overwrites a tied term at rank {r}");
        }
        out[r] = Some(terms[i].clone());
    }

    let holes = out.iter().filter(|slot| slot.is_none()).count();
    if holes > 0 {
        log::warn!("{holes} of {} output slots left empty by rank ties", out.len());
    }
    out
}

/// Orders `terms` ascending under `order` and `precedence`.
///
/// # Errors
///
/// Returns [`OrderError::LengthMismatch`] on a malformed collection, or
/// [`OrderError::TiedRankCollision`] under [`TiePolicy::Strict`].
pub fn determine(
    terms: &[Monomial],
    order: MonomialOrder,
    precedence: &Precedence,
    ties: TiePolicy,
) -> Result<Vec<Monomial>> {
    OrderingContext::new(order, precedence.clone()).sort(terms, ties)
}

/// Orders `terms` ascending by raw rank, reproducing the collapse of tied
/// terms: a later tied term overwrites the earlier one and the freed slot
/// stays `None`.
///
/// # Errors
///
/// Returns [`OrderError::LengthMismatch`] on a malformed collection.
pub fn determine_collapsing(
    terms: &[Monomial],
    order: MonomialOrder,
    precedence: &Precedence,
) -> Result<Vec<Option<Monomial>>> {
    OrderingContext::new(order, precedence.clone()).sort_collapsing(terms)
}

/// Orders `terms` ascending in lex order. Ties keep their input order.
///
/// # Errors
///
/// Returns [`OrderError::LengthMismatch`] on a malformed collection.
pub fn determine_by_lex(terms: &[Monomial], precedence: &Precedence) -> Result<Vec<Monomial>> {
    determine(terms, MonomialOrder::Lex, precedence, TiePolicy::Stable)
}

/// Orders `terms` ascending in glex order. Ties keep their input order.
///
/// # Errors
///
/// Returns [`OrderError::LengthMismatch`] on a malformed collection.
pub fn determine_by_glex(terms: &[Monomial], precedence: &Precedence) -> Result<Vec<Monomial>> {
    determine(terms, MonomialOrder::Glex, precedence, TiePolicy::Stable)
}

/// Orders `terms` ascending in grevlex order. Ties keep their input order.
///
/// # Errors
///
/// Returns [`OrderError::LengthMismatch`] on a malformed collection.
pub fn determine_by_grevlex(terms: &[Monomial], precedence: &Precedence) -> Result<Vec<Monomial>> {
    determine(terms, MonomialOrder::Grevlex, precedence, TiePolicy::Stable)
}
