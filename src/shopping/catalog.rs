use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref LEADING_QUANTITY: Regex =
        Regex::new(r"(?i)^(\d+(?:\.\d+)?\s*(?:cup|cups|tbsp|tsp|oz|lb|lbs|g|kg|ml|l)?)\s+").unwrap();
}

pub const DEFAULT_QUANTITY: &str = "1 unit";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Dairy,
    Protein,
    Vegetables,
    Fruits,
    Grains,
    Spices,
    Herbs,
    Essentials,
    Other,
}

/// Checked top to bottom; the first category with a matching keyword wins.
/// "pepper" sits in both Vegetables and Spices and resolves to Vegetables.
static CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Dairy, &["milk", "butter", "cheese", "yogurt", "cream"]),
    (Category::Protein, &["chicken", "beef", "fish", "egg", "tofu", "meat"]),
    (
        Category::Vegetables,
        &["onion", "tomato", "carrot", "potato", "pepper", "spinach", "lettuce", "broccoli"],
    ),
    (Category::Fruits, &["apple", "banana", "orange", "lemon", "lime", "berry"]),
    (Category::Grains, &["flour", "rice", "bread", "pasta", "oats", "quinoa"]),
    (
        Category::Spices,
        &["salt", "pepper", "cumin", "paprika", "cinnamon", "garlic powder"],
    ),
    (Category::Herbs, &["basil", "cilantro", "parsley", "mint", "thyme", "rosemary"]),
    (Category::Essentials, &["oil", "vinegar", "sugar", "honey"]),
];

/// Whole-dollar price rules, most expensive first.
static PRICE_RULES: &[(&[&str], u32)] = &[
    (&["saffron", "truffle"], 25),
    (&["beef", "lamb"], 12),
    (&["chicken", "fish"], 8),
    (&["cheese", "butter"], 6),
    (&["milk", "yogurt"], 4),
    (&["vegetables", "fruits"], 3),
    (&["spices", "herbs"], 2),
];

pub const FALLBACK_PRICE_MIN: u32 = 2;
pub const FALLBACK_PRICE_MAX: u32 = 7;

pub fn categorize(ingredient: &str) -> Category {
    let lower = ingredient.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

/// Price from the keyword rules, `None` when no rule applies.
pub fn keyword_price(ingredient: &str) -> Option<u32> {
    let lower = ingredient.to_lowercase();
    PRICE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, price)| *price)
}

pub fn estimate_price<R: Rng + ?Sized>(ingredient: &str, rng: &mut R) -> u32 {
    keyword_price(ingredient)
        .unwrap_or_else(|| rng.gen_range(FALLBACK_PRICE_MIN..=FALLBACK_PRICE_MAX))
}

/// Leading amount such as "2 lb" or "1.5 cups"; "1 unit" when there is none.
pub fn extract_quantity(ingredient: &str) -> String {
    LEADING_QUANTITY
        .captures(ingredient)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_QUANTITY.to_string())
}
