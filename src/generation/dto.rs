use serde::{Deserialize, Serialize};

use crate::recipes::parser::ParsedRecipe;

/// Either a ready-made prompt in `input`, or a pantry plus cuisine choices.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub input: Option<String>,
    #[serde(default)]
    pub pantry: Vec<String>,
    pub cuisine: Option<String>,
    pub fusion_cuisine: Option<String>,
    #[serde(default)]
    pub include_nutrition: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub recipe: String,
    pub recipes: Vec<ParsedRecipe>,
}

#[derive(Debug, Deserialize)]
pub struct CuisineQuery {
    pub preferred: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CuisinesResponse {
    pub cuisines: &'static [&'static str],
    /// Cuisines that may be fused with `preferred`; all of them when unset.
    pub fusion_options: Vec<&'static str>,
}
