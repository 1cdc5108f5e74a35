use serde::{Deserialize, Serialize};
use std::fmt;

/// Product categories of the store catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Mobiles,
    Fashion,
    #[serde(rename = "Home & Furniture")]
    HomeFurniture,
    Appliances,
    Books,
    Sports,
    Beauty,
}

impl Category {
    /// Display name, also used as the filter value
    pub fn name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Mobiles => "Mobiles",
            Category::Fashion => "Fashion",
            Category::HomeFurniture => "Home & Furniture",
            Category::Appliances => "Appliances",
            Category::Books => "Books",
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
        }
    }

    /// All categories in catalog order
    pub fn all() -> Vec<Category> {
        vec![
            Category::Electronics,
            Category::Mobiles,
            Category::Fashion,
            Category::HomeFurniture,
            Category::Appliances,
            Category::Books,
            Category::Sports,
            Category::Beauty,
        ]
    }

    /// Exact, case-sensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        Category::all().into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category selector of the dashboard.
///
/// Parsed from the raw string the UI sends: `"all"` disables the filter,
/// a known category name keeps only that category, anything else matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
    Unknown(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            return CategoryFilter::All;
        }
        match Category::from_name(value) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::Unknown(value.to_string()),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
            CategoryFilter::Unknown(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Category::from_name("books"), None);
        assert_eq!(Category::from_name("Home & Furniture"), Some(Category::HomeFurniture));
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::HomeFurniture).unwrap();
        assert_eq!(json, "\"Home & Furniture\"");
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("Books"), CategoryFilter::Only(Category::Books));
        assert_eq!(
            CategoryFilter::parse("Groceries"),
            CategoryFilter::Unknown("Groceries".to_string())
        );
        assert!(!CategoryFilter::parse("ALL").matches(Category::Books));
    }
}
