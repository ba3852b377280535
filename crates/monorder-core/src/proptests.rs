//! Property-based tests for monomial orderings and rank placement.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use crate::{
        compare_by_glex, compare_by_grevlex, compare_by_lex, determine, determine_collapsing,
        par_ranks, Monomial, MonomialOrder, OrderingContext, Precedence, TiePolicy,
    };

    // Strategy for a shuffled precedence over n variables
    fn precedence(n: usize) -> impl Strategy<Value = Precedence> {
        Just((0..n).collect::<Vec<usize>>())
            .prop_shuffle()
            .prop_map(|p| Precedence::new(&p).unwrap())
    }

    fn monomial(n: usize) -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u32..6, n).prop_map(Monomial::from)
    }

    fn any_order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Glex),
            Just(MonomialOrder::Grevlex),
        ]
    }

    // Two monomials in the same space plus a precedence for it
    fn pair() -> impl Strategy<Value = (Monomial, Monomial, Precedence)> {
        (1usize..=6).prop_flat_map(|n| (monomial(n), monomial(n), precedence(n)))
    }

    // Two monomials of equal total degree: the second moves one unit of
    // degree from variable j to variable i of the first
    fn same_degree_pair() -> impl Strategy<Value = (Monomial, Monomial, Precedence)> {
        (1usize..=6).prop_flat_map(|n| (monomial(n), precedence(n), 0..n, 0..n)).prop_map(
            |(base, p, i, j)| {
                let mut lower = base.exponents().to_vec();
                lower[j] += 1;
                let mut moved = lower.clone();
                moved[j] -= 1;
                moved[i] += 1;
                (Monomial::from(lower), Monomial::from(moved), p)
            },
        )
    }

    // Two monomials whose total degrees differ
    fn unequal_degree_pair() -> impl Strategy<Value = (Monomial, Monomial, Precedence)> {
        pair().prop_map(|(a, b, p)| {
            if a.total_degree() == b.total_degree() {
                let mut bumped = b.exponents().to_vec();
                bumped[0] += 1;
                (a, Monomial::from(bumped), p)
            } else {
                (a, b, p)
            }
        })
    }

    // A term collection (duplicates likely) plus a precedence
    fn collection() -> impl Strategy<Value = (Vec<Monomial>, Precedence)> {
        (1usize..=5).prop_flat_map(|n| {
            (
                proptest::collection::vec(monomial(n), 0..24),
                precedence(n),
            )
        })
    }

    fn degree_cmp(a: &Monomial, b: &Monomial) -> Ordering {
        a.total_degree().cmp(&b.total_degree())
    }

    proptest! {
        // Comparator consistency

        #[test]
        fn lex_antisymmetric((a, b, p) in pair()) {
            let ab = compare_by_lex(&a, &b, &p).unwrap();
            let ba = compare_by_lex(&b, &a, &p).unwrap();
            prop_assert_eq!(ab, ba.reverse());
            prop_assert_eq!(compare_by_lex(&a, &a, &p).unwrap(), Ordering::Equal);
        }

        #[test]
        fn orders_antisymmetric((a, b, p) in pair(), order in any_order()) {
            let ab = order.compare(&a, &b, &p).unwrap();
            let ba = order.compare(&b, &a, &p).unwrap();
            prop_assert_eq!(ab, ba.reverse());
        }

        #[test]
        fn equal_only_when_identical((a, b, p) in pair(), order in any_order()) {
            let equal = order.compare(&a, &b, &p).unwrap() == Ordering::Equal;
            prop_assert_eq!(equal, a == b);
        }

        // Degree precedence

        #[test]
        fn glex_degree_first((a, b, p) in unequal_degree_pair()) {
            prop_assert_ne!(a.total_degree(), b.total_degree());
            prop_assert_eq!(compare_by_glex(&a, &b, &p).unwrap(), degree_cmp(&a, &b));
        }

        #[test]
        fn grevlex_degree_first((a, b, p) in unequal_degree_pair()) {
            prop_assert_ne!(a.total_degree(), b.total_degree());
            prop_assert_eq!(compare_by_grevlex(&a, &b, &p).unwrap(), degree_cmp(&a, &b));
        }

        #[test]
        fn glex_ties_fall_back_to_lex((a, b, p) in same_degree_pair()) {
            prop_assert_eq!(a.total_degree(), b.total_degree());
            prop_assert_eq!(
                compare_by_glex(&a, &b, &p).unwrap(),
                compare_by_lex(&a, &b, &p).unwrap()
            );
        }

        // Moving one unit of degree onto the least significant variable makes
        // a monomial smaller in grevlex.
        #[test]
        fn grevlex_inverts_last_variable(
            (base, p, k) in (2usize..=6).prop_flat_map(|n| (monomial(n), precedence(n), 0..n - 1))
        ) {
            let n = p.num_vars();
            let last = p.as_slice()[n - 1];
            let other = p.as_slice()[k];

            let mut lower = base.exponents().to_vec();
            lower[other] += 1;
            let mut higher = lower.clone();
            higher[last] += 1;
            higher[other] -= 1;

            let m1 = Monomial::from(higher);
            let m2 = Monomial::from(lower);
            prop_assert_eq!(m1.total_degree(), m2.total_degree());
            prop_assert_eq!(compare_by_grevlex(&m1, &m2, &p).unwrap(), Ordering::Less);
        }

        // Ranking

        #[test]
        fn stable_placement_matches_stable_sort((terms, p) in collection(), order in any_order()) {
            let placed = determine(&terms, order, &p, TiePolicy::Stable).unwrap();

            let mut expected = terms.clone();
            expected.sort_by(|a, b| order.compare(a, b, &p).unwrap());
            prop_assert_eq!(placed, expected);
        }

        #[test]
        fn distinct_terms_sorted((terms, p) in collection(), order in any_order()) {
            let mut distinct = terms;
            distinct.sort_by(|a, b| a.exponents().cmp(b.exponents()));
            distinct.dedup();

            let placed = determine(&distinct, order, &p, TiePolicy::Strict).unwrap();
            prop_assert_eq!(placed.len(), distinct.len());
            for w in placed.windows(2) {
                prop_assert_ne!(order.compare(&w[0], &w[1], &p).unwrap(), Ordering::Greater);
            }

            let collapsed = determine_collapsing(&distinct, order, &p).unwrap();
            let collapsed: Vec<Monomial> = collapsed.into_iter().flatten().collect();
            prop_assert_eq!(collapsed, placed);
        }

        #[test]
        fn collapsing_loses_one_slot_per_tie((terms, p) in collection(), order in any_order()) {
            let mut distinct = terms.clone();
            distinct.sort_by(|a, b| a.exponents().cmp(b.exponents()));
            distinct.dedup();

            let collapsed = determine_collapsing(&terms, order, &p).unwrap();
            prop_assert_eq!(collapsed.len(), terms.len());
            prop_assert_eq!(collapsed.iter().flatten().count(), distinct.len());
        }

        #[test]
        fn parallel_ranks_match((terms, p) in collection(), order in any_order()) {
            let ctx = OrderingContext::new(order, p);
            prop_assert_eq!(par_ranks(&ctx, &terms).unwrap(), ctx.ranks(&terms).unwrap());
        }
    }
}
