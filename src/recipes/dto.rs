use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::recipes::{parser::ParsedRecipe, repo_types::PersistedRecipe, services::SortOrder};

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub recipe: String,
    #[serde(default)]
    pub include_nutrition: bool,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub recipes: Vec<ParsedRecipe>,
}

#[derive(Debug, Serialize)]
pub struct SavedRecipeResponse {
    pub success: bool,
    pub recipe: PersistedRecipe,
}

#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<PersistedRecipe>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
