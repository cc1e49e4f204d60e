//! Pass 2: stitch classified lines into complete dish blocks.
//!
//! The walk is strictly sequential; category propagation and the bounded
//! lookahead both depend on line order.

use crate::models::config::ClassifierConfig;
use crate::models::parsed_line::{LineRole, ParsedLine};
use tracing::debug;

use super::keywords;
use super::price;

/// Category assigned to dishes seen before any header
pub const DEFAULT_CATEGORY: &str = "Other";

/// An assembled dish block, not yet translated
#[derive(Debug, Clone, PartialEq)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: Option<String>,
    pub category: String,
}

/// Lookahead progress for a single dish block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookaheadState {
    /// Still collecting description fragments and watching for a price
    Seeking,
    /// A price was found embedded in surrounding text; descriptions may
    /// still follow
    SeenPrice,
    /// A dish, category, contact line or bare price closed the block
    Terminated,
}

/// Walk the classified lines in order and emit one draft per dish line.
pub fn assemble_dishes(lines: &[ParsedLine], config: &ClassifierConfig) -> Vec<DishDraft> {
    let mut drafts = Vec::new();
    let mut current_category = DEFAULT_CATEGORY.to_string();

    for (i, line) in lines.iter().enumerate() {
        match line.role {
            LineRole::Category => current_category = line.text.clone(),
            LineRole::Dish => drafts.push(assemble_block(lines, i, &current_category, config)),
            _ => {}
        }
    }

    debug!(dishes = drafts.len(), "assembled dish blocks");
    drafts
}

fn assemble_block(
    lines: &[ParsedLine],
    index: usize,
    current_category: &str,
    config: &ClassifierConfig,
) -> DishDraft {
    let dish_line = &lines[index];

    // The nearest preceding header inside the backtrack window wins over
    // the running category; this guards dishes that appear right after a
    // just-seen header
    let category = lines[..index]
        .iter()
        .rev()
        .take(config.category_backtrack)
        .find(|l| l.role == LineRole::Category)
        .map(|l| l.text.clone())
        .unwrap_or_else(|| current_category.to_string());

    let mut fragments: Vec<String> = Vec::new();
    let mut price = dish_line.price.clone();
    let mut state = if price.is_some() {
        LookaheadState::SeenPrice
    } else {
        LookaheadState::Seeking
    };

    for line in lines.iter().skip(index + 1).take(config.lookahead_window) {
        if state == LookaheadState::Terminated {
            break;
        }
        match line.role {
            // The next block has begun
            LineRole::Dish | LineRole::Category | LineRole::Contact => {
                state = LookaheadState::Terminated;
            }
            LineRole::Description => fragments.push(line.text.clone()),
            // A bare price closes the dish block
            LineRole::Price => {
                if price.is_none() {
                    price = line.price.clone();
                }
                state = LookaheadState::Terminated;
            }
            LineRole::Other => {
                if let Some(embedded) = &line.price {
                    if price.is_none() {
                        price = Some(embedded.clone());
                        state = LookaheadState::SeenPrice;
                    }
                } else if contributes_description(&line.text) {
                    fragments.push(line.text.clone());
                }
            }
        }
    }

    let name = price::strip_prices(&dish_line.text);
    let description = price::collapse_commas(&fragments.join(", "));
    let price = price.and_then(|p| price::normalize_price(&p, config));

    DishDraft {
        name,
        description,
        price,
        category,
    }
}

/// Whether an unclassified line is worth keeping as description text:
/// a short run of food vocabulary ("Freshly squeezed"), or longer
/// comma-bearing ingredient text.
fn contributes_description(text: &str) -> bool {
    (price::word_count(text) <= 3 && keywords::all_words_descriptive(text))
        || (price::comma_count(text) >= 1 && text.chars().count() >= 20)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::menu::classifier::{classify_lines, split_lines};

    fn assemble(text: &str) -> Vec<DishDraft> {
        let config = ClassifierConfig::default();
        let lines = split_lines(text);
        let parsed = classify_lines(&lines, &config);
        assemble_dishes(&parsed, &config)
    }

    #[test]
    fn test_single_block_with_description_and_price() {
        let drafts = assemble("APPETIZERS\nCaesar Salad\nFresh romaine lettuce with parmesan\n$12.95");

        assert_eq!(drafts.len(), 1, "exactly one dish expected");
        let draft = &drafts[0];
        assert_eq!(draft.name, "Caesar Salad");
        assert_eq!(draft.category, "APPETIZERS");
        assert!(
            draft.description.contains("Fresh romaine lettuce with parmesan"),
            "description should carry the romaine line, got '{}'",
            draft.description
        );
        assert_eq!(draft.price.as_deref(), Some("$12.95"));
    }

    #[test]
    fn test_category_propagates_across_blocks() {
        let drafts = assemble(
            "APPETIZERS\nCaesar Salad\nFresh romaine lettuce with parmesan\n$12.95\n\
             Tomato Soup\nCreamy tomato basil soup\n$8.95",
        );

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].category, "APPETIZERS");
        assert_eq!(
            drafts[1].category, "APPETIZERS",
            "no intervening header, category must propagate"
        );
    }

    #[test]
    fn test_dishes_before_any_header_use_default_category() {
        let drafts = assemble("Caesar Salad\n$12.95");

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_bare_price_terminates_the_block() {
        // The second description belongs to nothing once the price closed
        // the block
        let drafts = assemble("Caesar Salad\nFresh romaine lettuce with parmesan\n$12.95\nFreshly squeezed");

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].description, "Fresh romaine lettuce with parmesan");
    }

    #[test]
    fn test_next_dish_terminates_the_block() {
        let drafts = assemble("CHEESE\n$13.99\nBUILD YOUR OWN\n$24.99");

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].name, "CHEESE");
        assert_eq!(drafts[0].price.as_deref(), Some("$13.99"));
        assert!(drafts[0].description.is_empty());
        assert_eq!(drafts[1].name, "BUILD YOUR OWN");
        assert_eq!(drafts[1].price.as_deref(), Some("$24.99"));
    }

    #[test]
    fn test_embedded_price_on_dish_line_wins() {
        let drafts = assemble("PEPPERONI (Halal) $14.99\nMOZZARELLA, PEPPERONI");

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name, "PEPPERONI (Halal)");
        assert_eq!(drafts[0].price.as_deref(), Some("$14.99"));
        assert_eq!(drafts[0].description, "MOZZARELLA, PEPPERONI");
    }

    #[test]
    fn test_other_line_contributes_short_food_fragment() {
        let drafts = assemble("BEVERAGES\nOrange Juice\nFreshly squeezed\n$4.95");

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].description, "Freshly squeezed");
        assert_eq!(drafts[0].price.as_deref(), Some("$4.95"));
    }

    #[test]
    fn test_description_fragments_join_with_comma() {
        let drafts = assemble(
            "SANDWICH\nCHICKEN SANDWICH (Halal) $17.99\nCRISPY OR GRILLED CHICKEN\n\
             CHEESE, LETTUCE, TOMATO, PICKLES, CHIPS,CILANTRO, OLIVA SPECIAL SAUCE",
        );

        assert_eq!(drafts.len(), 1);
        let draft = &drafts[0];
        assert_eq!(draft.name, "CHICKEN SANDWICH (Halal)");
        assert_eq!(draft.category, "SANDWICH");
        assert_eq!(
            draft.description,
            "CRISPY OR GRILLED CHICKEN, CHEESE, LETTUCE, TOMATO, PICKLES, CHIPS, CILANTRO, OLIVA SPECIAL SAUCE"
        );
    }

    #[test]
    fn test_lookahead_window_is_bounded() {
        // Six descriptions fill the window; the price one line past it is
        // out of reach
        let drafts = assemble(
            "Caesar Salad\n\
             Fresh romaine lettuce with parmesan\n\
             Creamy tomato basil soup\n\
             Atlantic salmon with herbs\n\
             Prime cut with garlic butter\n\
             Rich chocolate layer cake\n\
             Traditional apple pie with cinnamon\n\
             $12.95",
        );

        assert_eq!(drafts.len(), 1);
        assert_eq!(
            drafts[0].price, None,
            "price beyond the lookahead window must not attach"
        );
    }

    #[test]
    fn test_contact_line_terminates_the_block() {
        let drafts = assemble("Caesar Salad\n123 Main Street\n$12.95");

        assert_eq!(drafts.len(), 1);
        assert_eq!(
            drafts[0].price, None,
            "the block closed at the contact line"
        );
    }
}
