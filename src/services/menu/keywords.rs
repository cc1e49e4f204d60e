//! Keyword vocabularies driving the line classifier.
//!
//! Three distinct sets: dish keywords identify menu items, ingredient
//! nouns identify ingredient lists, and descriptor adjectives identify
//! descriptive sentences ("Fresh...", "Creamy..."). A word may appear in
//! only one set; which set it lands in decides how lines opening on it
//! classify.

/// Words that strongly indicate a dish name
pub const DISH_KEYWORDS: &[&str] = &[
    "pizza",
    "sandwich",
    "burger",
    "salad",
    "wrap",
    "soup",
    "pasta",
    "spaghetti",
    "lasagna",
    "steak",
    "ribeye",
    "chicken",
    "salmon",
    "fish",
    "shrimp",
    "taco",
    "burrito",
    "wings",
    "fries",
    "cake",
    "pie",
    "sundae",
    "coffee",
    "tea",
    "juice",
    "soda",
    "smoothie",
    "latte",
    "halal",
    "grilled",
    "platter",
    "combo",
    "deluxe",
];

/// Ingredient nouns, as they appear in comma-separated ingredient lists
pub const INGREDIENT_WORDS: &[&str] = &[
    "mozzarella",
    "cheese",
    "parmesan",
    "feta",
    "cheddar",
    "lettuce",
    "romaine",
    "tomato",
    "onion",
    "garlic",
    "mushroom",
    "olive",
    "oregano",
    "basil",
    "cilantro",
    "spinach",
    "cabbage",
    "pickles",
    "pickels",
    "cucumber",
    "pepperoni",
    "sausage",
    "bacon",
    "ham",
    "beef",
    "croutons",
    "chips",
    "nuts",
    "herbs",
    "sauce",
    "marinara",
    "ranch",
    "butter",
    "cinnamon",
    "tortilla",
    "rice",
    "beans",
    "avocado",
];

/// Adjectives and participles that open descriptive sentences
pub const DESCRIPTOR_WORDS: &[&str] = &[
    "fresh",
    "freshly",
    "creamy",
    "crispy",
    "breaded",
    "seasoned",
    "roasted",
    "baked",
    "fried",
    "smoked",
    "sauteed",
    "steamed",
    "squeezed",
    "brewed",
    "blend",
    "rich",
    "traditional",
    "classic",
    "homemade",
    "organic",
    "prime",
    "atlantic",
    "pacific",
    "wild",
    "tender",
    "juicy",
    "spicy",
    "sweet",
    "savory",
    "topped",
    "served",
    "stuffed",
    "marinated",
    "seasonal",
];

fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Whether a single word is a known ingredient noun
pub fn is_ingredient_word(word: &str) -> bool {
    INGREDIENT_WORDS.contains(&normalize(word).as_str())
}

/// Whether a single word is a known descriptor adjective
pub fn is_descriptor_word(word: &str) -> bool {
    DESCRIPTOR_WORDS.contains(&normalize(word).as_str())
}

/// Whether the line's first word is an ingredient noun
pub fn starts_with_ingredient(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .is_some_and(is_ingredient_word)
}

/// Whether the line's first word is a descriptor adjective
pub fn starts_with_descriptor(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .is_some_and(is_descriptor_word)
}

/// Whether the line contains any dish keyword
pub fn contains_dish_keyword(text: &str) -> bool {
    text.split_whitespace()
        .any(|w| DISH_KEYWORDS.contains(&normalize(w).as_str()))
}

/// Count of ingredient nouns and descriptor adjectives in the line
pub fn descriptive_word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| is_ingredient_word(w) || is_descriptor_word(w))
        .count()
}

/// Whether the entire trimmed line is one known ingredient noun
pub fn is_single_ingredient_word(text: &str) -> bool {
    let mut words = text.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => is_ingredient_word(word),
        _ => false,
    }
}

/// Whether every word in the line belongs to the food vocabulary
pub fn all_words_descriptive(text: &str) -> bool {
    let mut words = text.split_whitespace().peekable();
    if words.peek().is_none() {
        return false;
    }
    words.all(|w| is_ingredient_word(w) || is_descriptor_word(w))
}
