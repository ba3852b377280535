//! Built-in term collections used by the demo command.

use monorder_core::{Monomial, Precedence};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A named term collection together with its precedence.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Short name used in file names (`test_<name>_lex.ppm`).
    pub name: &'static str,
    /// Report header line.
    pub heading: String,
    /// Heatmap title prefix.
    pub caption: &'static str,
    /// Terms in their original order.
    pub terms: Vec<Monomial>,
    /// Variable precedence, most significant first.
    pub precedence: Precedence,
}

fn rows(rows: &[&[u32]]) -> Vec<Monomial> {
    rows.iter().map(|r| Monomial::new(r)).collect()
}

fn indicator(num_vars: usize, step: usize) -> Monomial {
    (0..num_vars)
        .map(|i| u32::from(i % step == 0))
        .collect::<Vec<u32>>()
        .into()
}

/// 2x₁²x₂⁸ - 3x₁⁵x₂x₃⁴ + x₁x₂x₃³ - x₁x₂⁴ with x₃ > x₂ > x₁.
#[must_use]
pub fn textbook() -> Scenario {
    Scenario {
        name: "2.2.3.b",
        heading: "Test 2.2.3.b with polynomial 2x₁²x₂⁸-3x₁⁵x₂x₃⁴+x₁x₂x₃³-x₁x₂⁴:".to_string(),
        caption: "Test 2.2.3.b",
        terms: rows(&[&[2, 8, 0], &[5, 1, 4], &[1, 1, 3], &[1, 4, 0]]),
        precedence: Precedence::descending(3),
    }
}

/// x w², w y z, x² z and w x y with w > z > y > x.
#[must_use]
pub fn four_variables() -> Scenario {
    Scenario {
        name: "4var",
        heading: "Test with 4 variables:".to_string(),
        caption: "4 variables",
        terms: rows(&[&[1, 0, 0, 2], &[0, 1, 1, 1], &[2, 0, 1, 0], &[1, 1, 0, 1]]),
        precedence: Precedence::descending(4),
    }
}

/// a b i, b c h and d f g with i > h > ... > a.
#[must_use]
pub fn nine_variables() -> Scenario {
    Scenario {
        name: "9var",
        heading: "Test with 9 variables:".to_string(),
        caption: "9 variables",
        terms: rows(&[
            &[1, 0, 0, 0, 1, 0, 0, 0, 1],
            &[0, 1, 1, 0, 0, 0, 0, 1, 0],
            &[0, 0, 0, 1, 0, 1, 1, 0, 0],
        ]),
        precedence: Precedence::descending(9),
    }
}

/// Every third, every second and every fifth variable set to 1.
#[must_use]
pub fn thirty_variables() -> Scenario {
    Scenario {
        name: "30var",
        heading: "Test with 30 variables:".to_string(),
        caption: "30 variables",
        terms: vec![indicator(30, 3), indicator(30, 2), indicator(30, 5)],
        precedence: Precedence::descending(30),
    }
}

/// Three random terms in 1024 variables with exponents in 0..=10.
#[must_use]
pub fn wide_random(seed: u64) -> Scenario {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let terms: Vec<Monomial> = (0..3)
        .map(|_| Monomial::from((0..1024).map(|_| rng.gen_range(0..=10)).collect::<Vec<u32>>()))
        .collect();

    Scenario {
        name: "1024var",
        heading: "Test with 1024 variables:".to_string(),
        caption: "1024 variables",
        terms,
        precedence: Precedence::descending(1024),
    }
}

/// All demo scenarios in report order.
#[must_use]
pub fn builtin(seed: u64) -> Vec<Scenario> {
    vec![
        textbook(),
        four_variables(),
        nine_variables(),
        thirty_variables(),
        wide_random(seed),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        for scenario in builtin(42) {
            let n = scenario.precedence.num_vars();
            assert!(scenario.terms.iter().all(|t| t.num_vars() == n), "{}", scenario.name);
        }
    }

    #[test]
    fn test_highest_variable_most_significant() {
        for scenario in builtin(42) {
            let n = scenario.precedence.num_vars();
            assert_eq!(scenario.precedence.as_slice()[0], n - 1, "{}", scenario.name);
            assert_eq!(scenario.precedence.as_slice()[n - 1], 0, "{}", scenario.name);
        }
    }

    #[test]
    fn test_thirty_variables_indicators() {
        let s = thirty_variables();
        assert_eq!(s.terms[0].total_degree(), 10);
        assert_eq!(s.terms[1].total_degree(), 15);
        assert_eq!(s.terms[2].total_degree(), 6);
        assert_eq!(s.terms[2].exponent(25), 1);
        assert_eq!(s.terms[2].exponent(26), 0);
    }

    #[test]
    fn test_wide_random_is_seeded() {
        let a = wide_random(7);
        let b = wide_random(7);
        assert_eq!(a.terms, b.terms);
        assert!(a.terms[0].exponents().iter().all(|&e| e <= 10));
    }
}
