use serde::{Deserialize, Serialize};

/// Layout reconstruction thresholds, in image pixel units.
///
/// All values are empirically tuned for phone photographs of printed
/// menus; adjust per deployment rather than treating them as fixed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Tokens whose Y is within this band of a line's running average
    /// join that line
    pub line_y_tolerance: f64,
    /// Horizontal gaps below this are sub-word kerning (no space inserted)
    pub kern_gap: f64,
    /// Horizontal gaps above this signal a distinct field (triple space)
    pub field_gap: f64,
    /// Gaps above this are candidate column separators
    pub minor_column_gap: f64,
    /// Gaps above this count as true column boundaries
    pub major_column_gap: f64,
    /// Boundaries closer than this are merged into one
    pub boundary_merge_distance: f64,
    /// Upper bound on detected columns, guards noisy input
    pub max_columns: usize,
    /// Pages with fewer usable tokens are always single-column
    pub min_tokens_for_columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_y_tolerance: 12.0,
            kern_gap: 10.0,
            field_gap: 35.0,
            minor_column_gap: 100.0,
            major_column_gap: 150.0,
            boundary_merge_distance: 50.0,
            max_columns: 4,
            min_tokens_for_columns: 10,
        }
    }
}

/// Menu classification thresholds and bounds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierConfig {
    /// Prices outside [min_price, max_price] are rejected (years, page
    /// numbers, phone fragments)
    pub min_price: f64,
    pub max_price: f64,
    /// Category header length band, in characters
    pub category_min_len: usize,
    pub category_max_len: usize,
    /// Category headers have at most this many words
    pub category_max_words: usize,
    /// Dish name length band, in characters
    pub dish_min_len: usize,
    pub dish_max_len: usize,
    /// Dish names have at most this many words (absent price evidence)
    pub dish_max_words: usize,
    /// How far back a dish looks for its category header
    pub category_backtrack: usize,
    /// How far forward a dish looks for description and price lines
    pub lookahead_window: usize,
    /// Canonical marker prefixed to normalized prices
    pub currency_symbol: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_price: 1.0,
            max_price: 200.0,
            category_min_len: 3,
            category_max_len: 25,
            category_max_words: 2,
            dish_min_len: 4,
            dish_max_len: 60,
            dish_max_words: 6,
            category_backtrack: 5,
            lookahead_window: 6,
            currency_symbol: "$".to_string(),
        }
    }
}

/// Complete scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            classifier: ClassifierConfig::default(),
            target_language: default_target_language(),
            source_language: default_source_language(),
        }
    }
}

fn default_target_language() -> String {
    "zh".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_config_default() {
        let config = LayoutConfig::default();

        assert_eq!(config.line_y_tolerance, 12.0);
        assert_eq!(config.minor_column_gap, 100.0);
        assert_eq!(config.major_column_gap, 150.0);
        assert_eq!(config.boundary_merge_distance, 50.0);
        assert_eq!(config.max_columns, 4);
        assert_eq!(config.min_tokens_for_columns, 10);
        assert!(
            config.kern_gap < config.field_gap,
            "kerning threshold must sit below the field threshold"
        );
    }

    #[test]
    fn test_classifier_config_default() {
        let config = ClassifierConfig::default();

        assert_eq!(config.min_price, 1.0);
        assert_eq!(config.max_price, 200.0);
        assert_eq!(config.category_backtrack, 5);
        assert_eq!(config.lookahead_window, 6);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_menu_config_serialization() {
        let config = MenuConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();

        let deserialized: MenuConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_menu_config_partial_file_loads_defaults() {
        // Older config files may omit sections entirely
        let loaded: MenuConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(loaded, MenuConfig::default());
        assert_eq!(loaded.target_language, "zh");
        assert_eq!(loaded.source_language, "en");
    }
}
