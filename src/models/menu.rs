use crate::models::dish::DishRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// All dishes sharing one category header, in discovery order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryGroup {
    pub name: String,
    pub items: Vec<DishRecord>,
}

/// A fully processed menu scan, ready for display.
///
/// Categories appear in the order their first dish was discovered; items
/// within a category keep discovery order. Grouping is a stable partition
/// of the ordered record list, never a re-sort.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessedMenu {
    pub extracted_text: String,
    pub total_items: usize,
    pub scanned_at: DateTime<Utc>,
    pub categories: Vec<CategoryGroup>,
}

/// Partition records by category, preserving discovery order.
pub fn group_by_category(records: Vec<DishRecord>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for record in records {
        match groups.iter().position(|g| g.name == record.category) {
            Some(i) => groups[i].items.push(record),
            None => groups.push(CategoryGroup {
                name: record.category.clone(),
                items: vec![record],
            }),
        }
    }

    groups
}
