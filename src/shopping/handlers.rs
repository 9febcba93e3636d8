use axum::{
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    deriver::derive_shopping_list,
    dto::{DeriveRequest, DeriveResponse, ShoppingListView},
    link::{encode_query, ShoppingLinkQuery},
    list::{build_shopping_items, ShoppingList},
};
use crate::{
    error::ApiError,
    extract::{ApiJson, ApiQuery},
    recipes::parser,
    state::AppState,
};

pub const SHOPPING_LIST_PATH: &str = "/api/v1/shopping-list";

pub fn shopping_routes() -> Router<AppState> {
    Router::new()
        .route("/shopping-list", get(shopping_list_from_link))
        .route("/shopping-list/derive", post(derive))
}

#[instrument(skip_all)]
pub async fn derive(
    ApiJson(payload): ApiJson<DeriveRequest>,
) -> Result<Json<DeriveResponse>, ApiError> {
    let recipe_name = payload
        .recipe_name
        .filter(|n| !n.trim().is_empty())
        .or_else(|| {
            parser::parse(&payload.recipe_text, false)
                .into_iter()
                .next()
                .map(|r| r.title)
        })
        .unwrap_or_default();

    let missing = derive_shopping_list(&payload.recipe_text, payload.pantry.items());
    let query = encode_query(&missing, &recipe_name)?;
    let list = ShoppingList::new(recipe_name, build_shopping_items(&missing));

    info!(
        missing = missing.len(),
        pantry = payload.pantry.len(),
        "shopping list derived"
    );
    Ok(Json(DeriveResponse {
        link: format!("{}?{}", SHOPPING_LIST_PATH, query),
        list: ShoppingListView::from(&list),
        missing,
    }))
}

#[instrument(skip_all)]
pub async fn shopping_list_from_link(
    ApiQuery(query): ApiQuery<ShoppingLinkQuery>,
) -> Result<Json<ShoppingListView>, ApiError> {
    let ingredients = query.ingredient_list().map_err(|e| {
        warn!(error = %e, "bad shopping link");
        ApiError::BadRequest("ingredients must be a JSON array of strings".into())
    })?;
    let checked = query.checked_indices();
    let mut list = ShoppingList::new(query.recipe, build_shopping_items(&ingredients));
    for index in checked {
        if list.toggle(index).is_none() {
            warn!(index, "checked index out of range");
        }
    }
    Ok(Json(ShoppingListView::from(&list)))
}
