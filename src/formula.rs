//! Formula parsing and molar mass evaluation.
//!
//! Parsing is lenient: it never fails. Characters that are not part of an
//! element term or a count are skipped, so half-typed input still yields a
//! mass.

use tracing::{debug, warn};

use crate::element::element_by_symbol;

/// One element term of a formula, e.g. `H2` in `H2O`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub symbol: String,
    pub count: u64,
}

/// A parsed formula: a global multiplier and its element terms in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    /// Leading digit run, applied to every component. 1 when absent.
    pub multiplier: u64,
    pub components: Vec<Component>,
}

/// Result of evaluating a formula.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Evaluation {
    /// Total molar mass in g/mol.
    pub mass: f64,
    /// Symbols that were not in the periodic table, in input order.
    pub unresolved: Vec<String>,
}

impl Formula {
    /// Parse a formula in a single left-to-right pass.
    pub fn parse(formula: &str) -> Self {
        let mut scanner = Scanner::new(formula);

        // only counts as a multiplier when it is the very first character
        let multiplier = match scanner.peek() {
            Some(c) if c.is_ascii_digit() => scanner.digits(),
            _ => 1,
        };

        let mut components = Vec::new();
        while let Some(c) = scanner.peek() {
            if c.is_ascii_uppercase() {
                let symbol = scanner.symbol();
                let count = scanner.count().unwrap_or(1);
                components.push(Component { symbol, count });
            } else {
                scanner.bump();
            }
        }

        let parsed = Self {
            multiplier,
            components,
        };
        debug!(formula, ?parsed, "parsed formula");
        parsed
    }

    /// Resolve every component and sum the weighted masses.
    pub fn evaluate(&self) -> Evaluation {
        let mut evaluation = Evaluation::default();
        for comp in &self.components {
            match element_by_symbol(&comp.symbol) {
                Some(element) => {
                    evaluation.mass +=
                        element.molar_mass * comp.count as f64 * self.multiplier as f64;
                }
                None => evaluation.unresolved.push(comp.symbol.clone()),
            }
        }
        evaluation
    }
}

impl Evaluation {
    /// Emit one warning per unresolved symbol.
    pub fn log_unresolved(&self) {
        for symbol in &self.unresolved {
            warn!("element '{symbol}' not found");
        }
    }
}

/// Parse and evaluate `formula`, reporting unresolved symbols in the result.
pub fn evaluate(formula: &str) -> Evaluation {
    Formula::parse(formula).evaluate()
}

/// Molar mass of `formula` in g/mol.
///
/// Unknown symbols contribute nothing and are logged as warnings. Empty input
/// or input without any element term gives `0.0`.
pub fn molar_mass(formula: &str) -> f64 {
    let evaluation = evaluate(formula);
    evaluation.log_unresolved();
    evaluation.mass
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    /// Uppercase letter followed by any lowercase letters.
    fn symbol(&mut self) -> String {
        let mut symbol = String::new();
        if let Some(first) = self.bump() {
            symbol.push(first);
        }
        while let Some(c) = self.peek().filter(char::is_ascii_lowercase) {
            symbol.push(c);
            self.bump();
        }
        symbol
    }

    /// Count following a symbol, if any. Whitespace before the count is
    /// skipped and a single `_` directly in front of the digits is a marker,
    /// not part of the value. Nothing is consumed when no count follows.
    fn count(&mut self) -> Option<u64> {
        let ahead = self.rest.trim_start();
        let digits_at = if ahead.starts_with(|c: char| c.is_ascii_digit()) {
            ahead
        } else if ahead
            .strip_prefix('_')
            .is_some_and(|after| after.starts_with(|c: char| c.is_ascii_digit()))
        {
            &ahead[1..]
        } else {
            return None;
        };
        self.rest = digits_at;
        Some(self.digits())
    }

    /// Greedy run of decimal digits. Saturates at `u64::MAX`.
    fn digits(&mut self) -> u64 {
        let mut value: u64 = 0;
        while let Some(d) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value.saturating_mul(10).saturating_add(u64::from(d));
            self.bump();
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{element_by_symbol, periodic_table};
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a subscriber that records WARN and above.
    fn with_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        (value, logs)
    }

    fn mass_with_logs(formula: &str) -> (f64, String) {
        with_logs(|| molar_mass(formula))
    }

    fn mass(symbol: &str) -> f64 {
        element_by_symbol(symbol).unwrap().molar_mass
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn comp(symbol: &str, count: u64) -> Component {
        Component {
            symbol: symbol.to_string(),
            count,
        }
    }

    #[test]
    fn parses_water() {
        let parsed = Formula::parse("H2O");
        assert_eq!(parsed.multiplier, 1);
        assert_eq!(parsed.components, vec![comp("H", 2), comp("O", 1)]);
    }

    #[test]
    fn parses_leading_multiplier() {
        let parsed = Formula::parse("12CO2");
        assert_eq!(parsed.multiplier, 12);
        assert_eq!(parsed.components, vec![comp("C", 1), comp("O", 2)]);
    }

    #[test]
    fn multiplier_applies_to_every_term() {
        let expected = 2.0 * (2.0 * mass("H") + mass("O"));
        assert_close(molar_mass("2H2O"), expected);
    }

    #[test]
    fn multiplier_only_counts_at_start() {
        let parsed = Formula::parse(" 2H2O");
        assert_eq!(parsed.multiplier, 1);
        assert_eq!(parsed.components, vec![comp("H", 2), comp("O", 1)]);
    }

    #[test]
    fn multi_letter_symbols() {
        assert_close(molar_mass("NaCl"), mass("Na") + mass("Cl"));
        assert_close(
            molar_mass("C6H12O6"),
            6.0 * mass("C") + 12.0 * mass("H") + 6.0 * mass("O"),
        );
    }

    #[test]
    fn single_element_with_count() {
        for e in periodic_table() {
            let formula = format!("{}7", e.symbol);
            assert_close(molar_mass(&formula), e.molar_mass * 7.0);
        }
    }

    #[test]
    fn underscore_marks_a_count() {
        let parsed = Formula::parse("H_2O");
        assert_eq!(parsed.components, vec![comp("H", 2), comp("O", 1)]);
        assert_close(molar_mass("H_2O"), molar_mass("H2O"));
    }

    #[test]
    fn lone_underscore_is_skipped() {
        let parsed = Formula::parse("H_O");
        assert_eq!(parsed.components, vec![comp("H", 1), comp("O", 1)]);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_close(molar_mass(" H 2 O "), molar_mass("H2O"));
        assert_close(molar_mass("Na Cl"), molar_mass("NaCl"));
    }

    #[test]
    fn stray_characters_are_skipped() {
        assert_close(molar_mass("H2-O!"), molar_mass("H2O"));
        assert_close(molar_mass("(H2O)"), molar_mass("H2O"));
        assert_close(molar_mass("H2Oé"), molar_mass("H2O"));
    }

    #[test]
    fn empty_and_termless_input() {
        assert_eq!(molar_mass(""), 0.0);
        assert_eq!(molar_mass("   "), 0.0);
        assert_eq!(molar_mass("42"), 0.0);
        assert_eq!(molar_mass("h2o"), 0.0);
    }

    #[test]
    fn unresolved_symbols_are_reported() {
        let evaluation = evaluate("Xx9");
        assert_eq!(evaluation.mass, 0.0);
        assert_eq!(evaluation.unresolved, vec!["Xx".to_string()]);
    }

    #[test]
    fn unresolved_symbol_logs_one_warning() {
        let (mass, logs) = mass_with_logs("Xx9");
        assert_eq!(mass, 0.0);
        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 1, "{logs}");
        assert!(lines[0].contains("WARN"), "{logs}");
        assert!(lines[0].contains("element 'Xx' not found"), "{logs}");
    }

    #[test]
    fn each_unresolved_symbol_is_logged() {
        let (_, logs) = mass_with_logs("QH2Zz");
        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 2, "{logs}");
        assert!(lines[0].contains("element 'Q' not found"));
        assert!(lines[1].contains("element 'Zz' not found"));
    }

    #[test]
    fn evaluation_logs_its_unresolved_symbols() {
        let evaluation = evaluate("XxO");
        let (_, logs) = with_logs(|| evaluation.log_unresolved());
        assert_eq!(logs.lines().count(), 1, "{logs}");
        assert!(logs.contains("element 'Xx' not found"));
    }

    #[test]
    fn known_formula_logs_nothing() {
        let (_, logs) = mass_with_logs("H2O");
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn unresolved_symbols_do_not_stop_evaluation() {
        let evaluation = evaluate("HQO");
        assert_close(evaluation.mass, mass("H") + mass("O"));
        assert_eq!(evaluation.unresolved, vec!["Q".to_string()]);
    }

    #[test]
    fn zero_counts_contribute_nothing() {
        assert_eq!(molar_mass("0H2O"), 0.0);
        assert_close(molar_mass("H0O"), mass("O"));
    }

    #[test]
    fn long_digit_runs_saturate() {
        let parsed = Formula::parse("H99999999999999999999999");
        assert_eq!(parsed.components, vec![comp("H", u64::MAX)]);
        assert!(molar_mass("99999999999999999999999H").is_finite());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let first = molar_mass("3Ca3P2O8");
        for _ in 0..5 {
            assert_eq!(molar_mass("3Ca3P2O8"), first);
        }
    }
}
