use anyhow::Context;
use serde::Deserialize;

/// Query parameters carrying a shopping list between pages:
/// `ingredients` is a JSON array of strings, `recipe` the recipe name and
/// `checked` an optional comma-separated list of ticked item indices.
#[derive(Debug, Clone, Deserialize)]
pub struct ShoppingLinkQuery {
    pub ingredients: String,
    pub recipe: String,
    pub checked: Option<String>,
}

pub fn encode_query<S: AsRef<str>>(ingredients: &[S], recipe_name: &str) -> anyhow::Result<String> {
    let names: Vec<&str> = ingredients.iter().map(|i| i.as_ref()).collect();
    let json = serde_json::to_string(&names).context("encode ingredients")?;
    Ok(format!(
        "ingredients={}&recipe={}",
        urlencoding::encode(&json),
        urlencoding::encode(recipe_name)
    ))
}

impl ShoppingLinkQuery {
    /// Values arrive percent-decoded from the query extractor.
    pub fn ingredient_list(&self) -> anyhow::Result<Vec<String>> {
        serde_json::from_str(&self.ingredients).context("ingredients must be a JSON array of strings")
    }

    /// Sorted, deduplicated. Entries that are not numbers are skipped.
    pub fn checked_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .checked
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(|i| i.trim().parse().ok())
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}
