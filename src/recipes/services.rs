use serde::Deserialize;

use crate::recipes::repo_types::{NewRecipe, PersistedRecipe};

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
}

/// Case-insensitive match on the title or any ingredient. Blank matches all.
pub fn matches_search(recipe: &PersistedRecipe, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    recipe.title.to_lowercase().contains(&needle)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(&needle))
}

pub fn filter_and_sort(
    recipes: Vec<PersistedRecipe>,
    search: Option<&str>,
    sort: SortOrder,
) -> Vec<PersistedRecipe> {
    let mut out: Vec<PersistedRecipe> = recipes
        .into_iter()
        .filter(|r| matches_search(r, search.unwrap_or("")))
        .collect();
    match sort {
        SortOrder::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => out.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Alphabetical => {
            out.sort_by_cached_key(|r| r.title.to_lowercase());
        }
    }
    out
}

/// Trims the payload and rejects a blank title.
pub fn validate_new_recipe(mut new: NewRecipe) -> Result<NewRecipe, &'static str> {
    new.title = new.title.trim().to_string();
    if new.title.is_empty() {
        return Err("Recipe title is required");
    }
    new.ingredients.retain(|i| !i.trim().is_empty());
    new.steps.retain(|s| !s.trim().is_empty());
    new.translated_urdu = new.translated_urdu.filter(|t| !t.trim().is_empty());
    Ok(new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use uuid::Uuid;

    fn recipe(title: &str, ingredients: &[&str], created_at: time::OffsetDateTime) -> PersistedRecipe {
        PersistedRecipe {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            title: title.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: vec![],
            translated_urdu: None,
            created_at,
        }
    }

    fn sample() -> Vec<PersistedRecipe> {
        vec![
            recipe("chana masala", &["chickpeas", "onion"], datetime!(2025-01-02 10:00 UTC)),
            recipe("Biryani", &["rice", "chicken"], datetime!(2025-01-03 10:00 UTC)),
            recipe("Aloo Gobi", &["potato", "cauliflower"], datetime!(2025-01-01 10:00 UTC)),
        ]
    }

    fn titles(rs: &[PersistedRecipe]) -> Vec<&str> {
        rs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn sorts_by_each_order() {
        assert_eq!(
            titles(&filter_and_sort(sample(), None, SortOrder::Newest)),
            vec!["Biryani", "chana masala", "Aloo Gobi"]
        );
        assert_eq!(
            titles(&filter_and_sort(sample(), None, SortOrder::Oldest)),
            vec!["Aloo Gobi", "chana masala", "Biryani"]
        );
        assert_eq!(
            titles(&filter_and_sort(sample(), None, SortOrder::Alphabetical)),
            vec!["Aloo Gobi", "Biryani", "chana masala"]
        );
    }

    #[test]
    fn search_hits_title_or_ingredient() {
        let by_title = filter_and_sort(sample(), Some("BIRY"), SortOrder::Newest);
        assert_eq!(titles(&by_title), vec!["Biryani"]);
        let by_ingredient = filter_and_sort(sample(), Some("onion"), SortOrder::Newest);
        assert_eq!(titles(&by_ingredient), vec!["chana masala"]);
        assert_eq!(filter_and_sort(sample(), Some("  "), SortOrder::Newest).len(), 3);
    }

    #[test]
    fn sort_order_parses_lowercase() {
        let s: SortOrder = serde_json::from_str("\"alphabetical\"").unwrap();
        assert_eq!(s, SortOrder::Alphabetical);
        assert_eq!(SortOrder::default(), SortOrder::Newest);
    }

    #[test]
    fn validation_trims_and_rejects_blank_title() {
        let ok = validate_new_recipe(NewRecipe {
            title: "  Daal ".into(),
            ingredients: vec!["lentils".into(), " ".into()],
            steps: vec!["1. Boil.".into()],
            translated_urdu: Some("".into()),
        })
        .unwrap();
        assert_eq!(ok.title, "Daal");
        assert_eq!(ok.ingredients, vec!["lentils"]);
        assert_eq!(ok.translated_urdu, None);

        let err = validate_new_recipe(NewRecipe {
            title: "   ".into(),
            ingredients: vec![],
            steps: vec![],
            translated_urdu: None,
        })
        .unwrap_err();
        assert_eq!(err, "Recipe title is required");
    }
}
