use serde::{Deserialize, Serialize};

use super::{
    catalog::Category,
    list::{ShoppingItem, ShoppingList},
    pantry::Pantry,
};

#[derive(Debug, Deserialize)]
pub struct DeriveRequest {
    pub recipe_text: String,
    #[serde(default)]
    pub pantry: Pantry,
    pub recipe_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GroupView {
    pub category: Category,
    pub items: Vec<ShoppingItem>,
}

#[derive(Debug, Serialize)]
pub struct ShoppingListView {
    pub recipe_name: String,
    pub items: Vec<ShoppingItem>,
    pub groups: Vec<GroupView>,
    pub total_estimated_cost: u32,
    pub checked_count: usize,
    pub completion_percentage: u32,
}

impl From<&ShoppingList> for ShoppingListView {
    fn from(list: &ShoppingList) -> Self {
        Self {
            recipe_name: list.recipe_name.clone(),
            items: list.items.clone(),
            groups: list
                .grouped()
                .into_iter()
                .map(|g| GroupView {
                    category: g.category,
                    items: g.items.into_iter().cloned().collect(),
                })
                .collect(),
            total_estimated_cost: list.total_estimated_cost(),
            checked_count: list.checked_count(),
            completion_percentage: list.completion_percentage(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeriveResponse {
    pub missing: Vec<String>,
    /// Relative URL that reproduces this list.
    pub link: String,
    pub list: ShoppingListView,
}
