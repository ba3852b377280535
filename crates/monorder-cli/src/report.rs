//! Text report of ordered scenarios.

use std::io::{self, Write};

use monorder_core::{Direction, Monomial, MonomialOrder, OrderingContext, TiePolicy};

use crate::scenarios::Scenario;

/// A scenario ordered under every monomial order.
#[derive(Debug)]
pub struct OrderedScenario<'a> {
    pub scenario: &'a Scenario,
    pub results: Vec<(MonomialOrder, Vec<Monomial>)>,
}

/// Orders a scenario under lex, glex and grevlex.
///
/// # Errors
///
/// Fails if the scenario's terms do not match its precedence.
pub fn order_scenario(
    scenario: &Scenario,
    direction: Direction,
) -> monorder_core::Result<OrderedScenario<'_>> {
    let results = MonomialOrder::ALL
        .iter()
        .map(|&order| {
            let ctx = OrderingContext::new(order, scenario.precedence.clone())
                .with_direction(direction);
            ctx.sort(&scenario.terms, TiePolicy::Stable)
                .map(|sorted| (order, sorted))
        })
        .collect::<monorder_core::Result<Vec<_>>>()?;

    log::info!(
        "ordered {} terms in {} variables ({})",
        scenario.terms.len(),
        scenario.precedence.num_vars(),
        scenario.name
    );
    Ok(OrderedScenario { scenario, results })
}

/// Formats terms as nested lists: `[[2, 8, 0], [5, 1, 4]]`.
#[must_use]
pub fn format_terms(terms: &[Monomial]) -> String {
    let rows: Vec<&[u32]> = terms.iter().map(Monomial::exponents).collect();
    format!("{rows:?}")
}

/// Formats a collapsed placement, marking unfilled slots.
#[must_use]
pub fn format_slots(slots: &[Option<Monomial>]) -> String {
    let rows: Vec<String> = slots
        .iter()
        .map(|slot| match slot {
            Some(m) => format!("{:?}", m.exponents()),
            None => "None".to_string(),
        })
        .collect();
    format!("[{}]", rows.join(", "))
}

/// Writes the report, one block per scenario separated by blank lines.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_report<W: Write>(out: &mut W, runs: &[OrderedScenario<'_>]) -> io::Result<()> {
    for (i, run) in runs.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", run.scenario.heading)?;
        writeln!(out, "Original Terms: {}", format_terms(&run.scenario.terms))?;
        for (order, sorted) in &run.results {
            writeln!(out, "{} Ordered Terms: {}", order.label(), format_terms(sorted))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios;

    #[test]
    fn test_format_terms() {
        let terms = vec![Monomial::new(&[2, 8, 0]), Monomial::new(&[5, 1, 4])];
        assert_eq!(format_terms(&terms), "[[2, 8, 0], [5, 1, 4]]");
        assert_eq!(format_terms(&[]), "[]");
    }

    #[test]
    fn test_format_slots() {
        let slots = vec![Some(Monomial::new(&[1, 0])), None];
        assert_eq!(format_slots(&slots), "[[1, 0], None]");
    }

    #[test]
    fn test_textbook_report_leading_term_first() {
        let scenario = scenarios::textbook();
        let run = order_scenario(&scenario, Direction::Descending).unwrap();

        let mut buf = Vec::new();
        write_report(&mut buf, &[run]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let expected = "\
Test 2.2.3.b with polynomial 2x₁²x₂⁸-3x₁⁵x₂x₃⁴+x₁x₂x₃³-x₁x₂⁴:
Original Terms: [[2, 8, 0], [5, 1, 4], [1, 1, 3], [1, 4, 0]]
Lex Ordered Terms: [[5, 1, 4], [1, 1, 3], [2, 8, 0], [1, 4, 0]]
Graded Lex Ordered Terms: [[5, 1, 4], [2, 8, 0], [1, 1, 3], [1, 4, 0]]
Graded Reverse Lex Ordered Terms: [[2, 8, 0], [5, 1, 4], [1, 1, 3], [1, 4, 0]]
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_blocks_separated() {
        let a = scenarios::four_variables();
        let b = scenarios::nine_variables();
        let runs = vec![
            order_scenario(&a, Direction::Ascending).unwrap(),
            order_scenario(&b, Direction::Ascending).unwrap(),
        ];

        let mut buf = Vec::new();
        write_report(&mut buf, &runs).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Lex Ordered Terms: [[2, 0, 1, 0], [1, 1, 0, 1], [0, 1, 1, 1], [1, 0, 0, 2]]\n"));
        assert!(text.contains("\n\nTest with 9 variables:\n"));
        assert!(text.ends_with("]\n"));
    }
}
