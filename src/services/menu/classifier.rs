//! Pass 1: split raw menu text into lines and assign each line a role.

use crate::models::config::ClassifierConfig;
use crate::models::parsed_line::ParsedLine;
use tracing::debug;

use super::price;
use super::rules::{self, RuleContext, Verdict};

/// Split OCR text into trimmed, non-empty lines.
///
/// Blank lines carry no signal; the classifier's one-line lookahead works
/// over the surviving sequence.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Classify each line with limited lookahead at the immediately following
/// line. Skip-filtered boilerplate is excluded from the result entirely.
pub fn classify_lines(lines: &[&str], config: &ClassifierConfig) -> Vec<ParsedLine> {
    let mut parsed = Vec::with_capacity(lines.len());
    let mut skipped = 0usize;

    for (i, &line) in lines.iter().enumerate() {
        let ctx = RuleContext {
            text: line,
            next: lines.get(i + 1).copied(),
            config,
        };

        match rules::classify(&ctx) {
            Verdict::Skip => skipped += 1,
            Verdict::Role(role) => {
                let price = price::extract_price(line, config);
                parsed.push(ParsedLine::new(line, role, price));
            }
        }
    }

    debug!(
        total = lines.len(),
        kept = parsed.len(),
        skipped,
        "classified menu lines"
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parsed_line::LineRole;

    #[test]
    fn test_split_lines_drops_blanks() {
        let lines = split_lines("APPETIZERS\n\n  Caesar Salad  \n\n\n$12.95\n");
        assert_eq!(lines, vec!["APPETIZERS", "Caesar Salad", "$12.95"]);
    }

    #[test]
    fn test_classification_with_lookahead() {
        let lines = vec!["PIZZA", "CHEESE", "$13.99"];
        let parsed = classify_lines(&lines, &ClassifierConfig::default());

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].role, LineRole::Category);
        assert_eq!(
            parsed[1].role,
            LineRole::Dish,
            "the bare price below makes CHEESE a dish"
        );
        assert_eq!(parsed[2].role, LineRole::Price);
        assert_eq!(parsed[2].price.as_deref(), Some("13.99"));
    }

    #[test]
    fn test_boilerplate_is_excluded_from_output() {
        let lines = vec!["Thank You", "(949) 555-0100", "Caesar Salad"];
        let parsed = classify_lines(&lines, &ClassifierConfig::default());

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].text, "Caesar Salad");
    }

    #[test]
    fn test_embedded_price_is_extracted_for_every_role() {
        let lines = vec!["PIZZA OLIVA (Halal) $24.99"];
        let parsed = classify_lines(&lines, &ClassifierConfig::default());

        assert_eq!(parsed[0].role, LineRole::Dish);
        assert_eq!(parsed[0].price.as_deref(), Some("24.99"));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let lines = split_lines("APPETIZERS\nCaesar Salad\nFresh romaine lettuce\n$12.95");
        let config = ClassifierConfig::default();

        let first = classify_lines(&lines, &config);
        let second = classify_lines(&lines, &config);
        assert_eq!(first, second, "pass 1 is a pure function of its input");
    }
}
