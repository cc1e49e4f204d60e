//! Price extraction and text normalization shared by the classifier and
//! the dish assembler.

use crate::models::config::ClassifierConfig;
use once_cell::sync::Lazy;
use regex::Regex;

// Ordered extraction patterns. The dollar forms come first because they
// dominate the scanned corpus; the bare-number form is the last resort.
static DOLLAR_PREFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s*(\d{1,3}(?:\.\d{2})?)\b").unwrap());
static DOLLAR_SUFFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,3}(?:\.\d{2})?)\s*\$").unwrap());
static ALT_PREFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[€£¥]\s*(\d{1,3}(?:\.\d{2})?)\b").unwrap());
static ALT_SUFFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,3}(?:\.\d{2})?)\s*[€£¥]").unwrap());
static BARE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,3}(?:\.\d{2})?)\b").unwrap());

// A whole line that is nothing but a number, optionally wrapped in a
// currency symbol
static PRICE_ONLY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([$€£¥])?\s*(\d{1,3}(?:\.\d{2})?)\s*([$€£¥])?\s*$").unwrap()
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static COMMA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,[\s,]*").unwrap());

/// Extract the first plausible price from a line of text.
///
/// Patterns are tried in a fixed order; a candidate is accepted only if
/// its numeric value falls inside the configured price range, which
/// rejects years, page numbers and phone-number fragments. Returns the
/// unit-less numeric string (e.g. "12.95").
pub fn extract_price(text: &str, config: &ClassifierConfig) -> Option<String> {
    let patterns: [&Regex; 5] = [
        &DOLLAR_PREFIXED,
        &DOLLAR_SUFFIXED,
        &ALT_PREFIXED,
        &ALT_SUFFIXED,
        &BARE_NUMBER,
    ];

    for pattern in patterns {
        for caps in pattern.captures_iter(text) {
            let candidate = &caps[1];
            if let Ok(value) = candidate.parse::<f64>() {
                if value >= config.min_price && value <= config.max_price {
                    return Some(candidate.to_string());
                }
            }
        }
    }

    None
}

/// Whether the entire trimmed line is a bare price.
///
/// Pure integer lines ("12", "2024") are treated as page-number noise,
/// not prices; a currency symbol or decimal part is required.
pub fn is_bare_price(text: &str, config: &ClassifierConfig) -> bool {
    let Some(caps) = PRICE_ONLY_LINE.captures(text) else {
        return false;
    };

    let marked = caps.get(1).is_some() || caps.get(3).is_some() || caps[2].contains('.');
    if !marked {
        return false;
    }

    caps[2]
        .parse::<f64>()
        .is_ok_and(|v| v >= config.min_price && v <= config.max_price)
}

/// Normalize a raw price fragment to a single canonical currency marker.
///
/// Strips any currency symbol, keeps the first numeric substring, and
/// re-prefixes the configured marker. Returns None if no numeric
/// substring survives.
pub fn normalize_price(raw: &str, config: &ClassifierConfig) -> Option<String> {
    let caps = BARE_NUMBER.captures(raw)?;
    Some(format!("{}{}", config.currency_symbol, &caps[1]))
}

/// Remove price substrings and stray 1-3 digit numbers from a dish-name
/// line, collapsing the leftover whitespace.
pub fn strip_prices(text: &str) -> String {
    let mut cleaned = DOLLAR_PREFIXED.replace_all(text, " ").into_owned();
    cleaned = DOLLAR_SUFFIXED.replace_all(&cleaned, " ").into_owned();
    cleaned = ALT_PREFIXED.replace_all(&cleaned, " ").into_owned();
    cleaned = ALT_SUFFIXED.replace_all(&cleaned, " ").into_owned();
    cleaned = BARE_NUMBER.replace_all(&cleaned, " ").into_owned();
    collapse_whitespace(&cleaned)
}

/// Collapse whitespace runs to single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Collapse repeated commas and normalize the spacing around them
pub fn collapse_commas(text: &str) -> String {
    let collapsed = COMMA_RUN.replace_all(text, ", ").into_owned();
    collapse_whitespace(collapsed.trim_matches(|c: char| c == ',' || c.is_whitespace()))
}

/// Number of commas in the line
pub fn comma_count(text: &str) -> usize {
    text.matches(',').count()
}

/// Number of whitespace-separated words in the line
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
