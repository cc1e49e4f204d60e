//! Ordered classification rules for menu text lines.
//!
//! Each rule is a named predicate over a [`RuleContext`]; the first rule
//! that returns a verdict wins. Keeping the rules in a flat table lets
//! them be unit-tested and reordered individually.

use crate::models::config::ClassifierConfig;
use crate::models::parsed_line::LineRole;
use once_cell::sync::Lazy;
use regex::Regex;

use super::keywords;
use super::price;

/// What a rule decided for a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Boilerplate; excluded entirely from further processing
    Skip,
    Role(LineRole),
}

/// Everything a rule may look at: the line itself, the immediately
/// following line, and the tunable bounds. Rules never see lines farther
/// away than the next one.
pub struct RuleContext<'a> {
    pub text: &'a str,
    pub next: Option<&'a str>,
    pub config: &'a ClassifierConfig,
}

pub struct Rule {
    pub name: &'static str,
    pub check: fn(&RuleContext) -> Option<Verdict>,
}

/// Classification rules in precedence order
pub const RULES: &[Rule] = &[
    Rule {
        name: "skip-boilerplate",
        check: skip_boilerplate,
    },
    Rule {
        name: "category-header",
        check: category_header,
    },
    Rule {
        name: "contact-info",
        check: contact_info,
    },
    Rule {
        name: "bare-price",
        check: bare_price,
    },
    Rule {
        name: "dish-name",
        check: dish_name,
    },
    Rule {
        name: "description",
        check: description,
    },
];

/// Run the rule table over one line; unmatched lines fall back to Other.
pub fn classify(ctx: &RuleContext) -> Verdict {
    for rule in RULES {
        if let Some(verdict) = (rule.check)(ctx) {
            return verdict;
        }
    }
    Verdict::Role(LineRole::Other)
}

// ---------------------------------------------------------------------
// Skip filters
// ---------------------------------------------------------------------

static MENU_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*menu\s*$").unwrap());
static COURTESY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)thank\s+you|visit\s+us|follow\s+us").unwrap());
static PURE_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\s*$").unwrap());
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-=_*~]{3,}\s*$").unwrap());
static PAGE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*page\s*\d+\s*$").unwrap());
static PHONE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\(\d{3}\)").unwrap());
static ZIP_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d{5}(?:-\d{4})?\s*$").unwrap());
static STREET_SUFFIX_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:st|ave|blvd|rd|dr|ln|street|avenue|road|drive|boulevard|lane)\.?\s*$")
        .unwrap()
});
static ENDS_WITH_MENU: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bmenu\s*$").unwrap());
static PURE_PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\(.*\)\s*$").unwrap());

fn skip_boilerplate(ctx: &RuleContext) -> Option<Verdict> {
    let text = ctx.text;

    let is_noise = MENU_ONLY.is_match(text)
        || COURTESY.is_match(text)
        || PAGE_NUMBER.is_match(text)
        || PURE_NUMERIC.is_match(text)
        || SEPARATOR.is_match(text)
        || PHONE_PREFIX.is_match(text)
        || ZIP_ONLY.is_match(text)
        || STREET_SUFFIX_ONLY.is_match(text)
        || PURE_PARENTHETICAL.is_match(text)
        // "<restaurant name> Menu" title lines
        || (ENDS_WITH_MENU.is_match(text) && price::word_count(text) <= 4);

    is_noise.then_some(Verdict::Skip)
}

// ---------------------------------------------------------------------
// Contact info
// ---------------------------------------------------------------------

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]\d{3}[-.\s]\d{4}").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.]+").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bwww\.|https?://|\.com\b").unwrap());
static ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:street|avenue|road|address|blvd|boulevard|suite|ave)\b").unwrap()
});

/// Shared with the category rule, which must not fire on address lines
pub(crate) fn looks_like_contact(text: &str) -> bool {
    PHONE.is_match(text) || EMAIL.is_match(text) || URL.is_match(text) || ADDRESS.is_match(text)
}

fn contact_info(ctx: &RuleContext) -> Option<Verdict> {
    looks_like_contact(ctx.text).then_some(Verdict::Role(LineRole::Contact))
}

// ---------------------------------------------------------------------
// Category headers
// ---------------------------------------------------------------------

fn is_all_uppercase(text: &str) -> bool {
    let mut has_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if c.is_lowercase() {
                return false;
            }
        }
    }
    has_alpha
}

fn is_headerish(text: &str, config: &ClassifierConfig) -> bool {
    let len = text.chars().count();
    len >= config.category_min_len
        && len <= config.category_max_len
        && price::word_count(text) <= config.category_max_words
        && is_all_uppercase(text)
}

fn category_header(ctx: &RuleContext) -> Option<Verdict> {
    let text = ctx.text.trim();
    let config = ctx.config;

    if price::extract_price(text, config).is_some() {
        return None;
    }
    if looks_like_contact(text) {
        return None;
    }
    if keywords::is_single_ingredient_word(text) {
        return None;
    }
    if price::comma_count(text) > 1 {
        return None;
    }
    if keywords::starts_with_ingredient(text) || keywords::starts_with_descriptor(text) {
        return None;
    }
    // A short uppercase line directly above a bare price is a dish, not
    // a section header
    if ctx
        .next
        .is_some_and(|n| price::is_bare_price(n, config))
    {
        return None;
    }
    if !is_headerish(text, config) {
        return None;
    }

    Some(Verdict::Role(LineRole::Category))
}

// ---------------------------------------------------------------------
// Bare price lines
// ---------------------------------------------------------------------

fn bare_price(ctx: &RuleContext) -> Option<Verdict> {
    price::is_bare_price(ctx.text, ctx.config).then_some(Verdict::Role(LineRole::Price))
}

// ---------------------------------------------------------------------
// Dish names
// ---------------------------------------------------------------------

fn starts_with_capital(text: &str) -> bool {
    text.chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(|c| c.is_uppercase())
}

/// "X, Y" where both sides are single known ingredient nouns
fn is_ingredient_pair(text: &str) -> bool {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    parts.len() == 2 && parts.iter().all(|p| keywords::is_single_ingredient_word(p))
}

fn dish_name(ctx: &RuleContext) -> Option<Verdict> {
    let config = ctx.config;
    let text = ctx.text.trim();

    let embedded = price::extract_price(text, config);
    let residue = price::strip_prices(text);
    if !residue.chars().any(|c| c.is_alphabetic()) {
        return None;
    }

    let next_is_price = ctx
        .next
        .is_some_and(|n| price::is_bare_price(n, config));
    // A price on the line, or alone directly below it, is strong dish
    // evidence and relaxes the word-count and lone-ingredient
    // restrictions (menus list entries like "CHEESE $13.99")
    let price_evidence = embedded.is_some() || next_is_price;

    // Ingredient lists and descriptive sentences stay out of the dish
    // role even when a price follows: descriptions sit directly above
    // the price line in single-column menus
    if price::comma_count(&residue) >= 2 {
        return None;
    }
    if is_ingredient_pair(&residue) {
        return None;
    }
    if keywords::starts_with_ingredient(&residue) && price::comma_count(&residue) >= 1 {
        return None;
    }
    if keywords::starts_with_descriptor(&residue) {
        return None;
    }

    if price_evidence {
        if residue.chars().count() > config.dish_max_len {
            return None;
        }
    } else {
        if keywords::is_single_ingredient_word(&residue) {
            return None;
        }
        let len = residue.chars().count();
        if len < config.dish_min_len || len > config.dish_max_len {
            return None;
        }
        if price::word_count(&residue) > config.dish_max_words {
            return None;
        }
    }

    if !residue.chars().any(|c| c.is_uppercase()) {
        return None;
    }
    if keywords::contains_dish_keyword(&residue) || starts_with_capital(&residue) {
        return Some(Verdict::Role(LineRole::Dish));
    }

    None
}

// ---------------------------------------------------------------------
// Descriptions
// ---------------------------------------------------------------------

fn description(ctx: &RuleContext) -> Option<Verdict> {
    let config = ctx.config;
    let text = ctx.text.trim();

    let commas = price::comma_count(text);
    let words = price::word_count(text);

    // Comma-separated ingredient lists
    if commas >= 2 && words >= 3 {
        return Some(Verdict::Role(LineRole::Description));
    }
    if commas == 1 && (keywords::starts_with_ingredient(text) || is_ingredient_pair(text)) {
        return Some(Verdict::Role(LineRole::Description));
    }
    // Descriptive sentences ("Fresh romaine lettuce with parmesan")
    if keywords::descriptive_word_count(text) >= 1 && words >= 3 {
        return Some(Verdict::Role(LineRole::Description));
    }
    // A lone ingredient word belongs to the dish above it, unless a price
    // follows directly, which makes the word itself a dish
    let next_is_price = ctx
        .next
        .is_some_and(|n| price::is_bare_price(n, config));
    if keywords::is_single_ingredient_word(text) && !next_is_price {
        return Some(Verdict::Role(LineRole::Description));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClassifierConfig {
        ClassifierConfig::default()
    }

    fn classify_with_next(text: &str, next: Option<&str>) -> Verdict {
        let config = config();
        classify(&RuleContext {
            text,
            next,
            config: &config,
        })
    }

    fn classify_line(text: &str) -> Verdict {
        classify_with_next(text, None)
    }

    #[test]
    fn test_skip_filters() {
        for line in [
            "Menu",
            "OLIVA Menu",
            "Thank You",
            "Visit us on facebook",
            "Follow Us",
            "42",
            "2024",
            "Page 3",
            "-----",
            "=====",
            "(949) 555-0100",
            "92618",
            "Blvd.",
            "(Halal)",
            "(Choice of meat)",
            "(BEEF/CHICKEN)",
        ] {
            assert_eq!(
                classify_line(line),
                Verdict::Skip,
                "'{}' should be skipped",
                line
            );
        }
    }

    #[test]
    fn test_category_headers() {
        for line in ["APPETIZERS", "ENTREES", "DESSERTS", "HEALTHY WRAPS", "SIDE"] {
            assert_eq!(
                classify_line(line),
                Verdict::Role(LineRole::Category),
                "'{}' should be a category",
                line
            );
        }
    }

    #[test]
    fn test_dish_keyword_header_is_still_a_category() {
        // "SANDWICH" contains a dish keyword, but the header rule has
        // precedence when the next line is a dish rather than a price
        assert_eq!(
            classify_with_next("SANDWICH", Some("OLIVA (Halal) $15.99")),
            Verdict::Role(LineRole::Category)
        );
    }

    #[test]
    fn test_uppercase_word_above_bare_price_is_a_dish() {
        // Column reconstruction often puts the price on its own line
        assert_eq!(
            classify_with_next("CHEESE", Some("$13.99")),
            Verdict::Role(LineRole::Dish),
            "price below relaxes the ingredient restriction"
        );
        // Without the price, the same word is a description fragment
        assert_eq!(
            classify_line("CHEESE"),
            Verdict::Role(LineRole::Description)
        );
    }

    #[test]
    fn test_mixed_case_headers_are_not_categories() {
        assert_ne!(
            classify_line("Caesar Salad"),
            Verdict::Role(LineRole::Category)
        );
    }

    #[test]
    fn test_contact_lines() {
        for line in [
            "Call 714-555-0187 for delivery",
            "info@olivapizza.com",
            "www.olivapizza.com",
            "123 Main Street",
            "Suite 450",
        ] {
            assert_eq!(
                classify_line(line),
                Verdict::Role(LineRole::Contact),
                "'{}' should be contact info",
                line
            );
        }
    }

    #[test]
    fn test_bare_price_lines() {
        assert_eq!(classify_line("$12.95"), Verdict::Role(LineRole::Price));
        assert_eq!(classify_line("24.99"), Verdict::Role(LineRole::Price));
        assert_eq!(classify_line("12.95$"), Verdict::Role(LineRole::Price));
    }

    #[test]
    fn test_dish_names() {
        for line in [
            "Caesar Salad",
            "Tomato Soup",
            "Grilled Salmon",
            "Beef Ribeye Steak",
            "Chicken Parmesan",
            "Chocolate Cake",
            "Apple Pie",
            "Coffee",
            "Orange Juice",
            "PIZZA OLIVA (Halal) $24.99",
            "VEGGIE $17.99",
            "BUILD YOUR OWN $24.99",
            "CHICKEN LETTUCE WRAP $11.99",
        ] {
            assert_eq!(
                classify_line(line),
                Verdict::Role(LineRole::Dish),
                "'{}' should be a dish",
                line
            );
        }
    }

    #[test]
    fn test_descriptions() {
        for line in [
            "Fresh romaine lettuce with parmesan",
            "Creamy tomato basil soup",
            "Atlantic salmon with herbs",
            "Prime cut with garlic butter",
            "Breaded chicken with marinara",
            "Rich chocolate layer cake",
            "Traditional apple pie with cinnamon",
            "Freshly brewed house blend",
            "MOZZARELLA, PEPPERONI",
            "MOZZARELLA, OLIVA BEEF OR CHICKEN DELI, BEEF SAUSAGE, BELL PEPPER",
            "LETTUCE, TOMATO, PICKLES, CHIPS, CILANTRO",
            "GRILLED CHICKEN, TOMATO, PICKELS, SPINACH, CHEESE",
        ] {
            assert_eq!(
                classify_line(line),
                Verdict::Role(LineRole::Description),
                "'{}' should be a description",
                line
            );
        }
    }

    #[test]
    fn test_description_above_a_bare_price_stays_a_description() {
        // Single-column menus put the description directly above the
        // price; the trailing price must not promote it to a dish
        assert_eq!(
            classify_with_next("Fresh romaine lettuce with parmesan", Some("$12.95")),
            Verdict::Role(LineRole::Description)
        );
        assert_eq!(
            classify_with_next("MOZZARELLA, PEPPERONI", Some("$14.99")),
            Verdict::Role(LineRole::Description)
        );
    }

    #[test]
    fn test_short_descriptive_fragment_falls_to_other() {
        // Too short for the description rule; the assembler can still
        // pick it up from the lookahead window
        assert_eq!(
            classify_line("Freshly squeezed"),
            Verdict::Role(LineRole::Other)
        );
    }

    #[test]
    fn test_rule_table_order() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "skip-boilerplate",
                "category-header",
                "contact-info",
                "bare-price",
                "dish-name",
                "description"
            ],
            "precedence order is part of the contract"
        );
    }
}
