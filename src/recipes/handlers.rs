use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::services::AuthUser,
    error::ApiError,
    extract::{ApiJson, ApiQuery},
    recipes::{
        dto::{
            DeleteQuery, ListQuery, MessageResponse, ParseRequest, ParseResponse,
            RecipeListResponse, SavedRecipeResponse,
        },
        parser,
        repo_types::{NewRecipe, PersistedRecipe},
        services::{filter_and_sort, validate_new_recipe},
    },
    state::AppState,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes/parse", post(parse_recipe))
        .route(
            "/recipes",
            get(list_recipes).post(save_recipe).delete(delete_recipe),
        )
}

/// Structure raw or translated generator text.
#[instrument(skip_all)]
pub async fn parse_recipe(ApiJson(payload): ApiJson<ParseRequest>) -> Json<ParseResponse> {
    let recipes = parser::parse(&payload.recipe, payload.include_nutrition);
    Json(ParseResponse { recipes })
}

#[instrument(skip(state, payload))]
pub async fn save_recipe(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(payload): ApiJson<NewRecipe>,
) -> Result<(StatusCode, Json<SavedRecipeResponse>), ApiError> {
    let new = validate_new_recipe(payload).map_err(|msg| {
        warn!(%user_id, msg, "invalid recipe payload");
        ApiError::BadRequest(msg.into())
    })?;

    let recipe = PersistedRecipe::insert(&state.db, user_id, &new)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "save recipe failed");
            ApiError::Persistence("Failed to save recipe".into())
        })?;

    info!(%user_id, recipe_id = %recipe.id, "recipe saved");
    Ok((
        StatusCode::CREATED,
        Json(SavedRecipeResponse {
            success: true,
            recipe,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiQuery(q): ApiQuery<ListQuery>,
) -> Result<Json<RecipeListResponse>, ApiError> {
    let rows = PersistedRecipe::list_by_user(&state.db, user_id)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "list recipes failed");
            ApiError::Persistence("Failed to fetch recipes".into())
        })?;
    let recipes = filter_and_sort(rows, q.search.as_deref(), q.sort);
    Ok(Json(RecipeListResponse { recipes }))
}

#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiQuery(q): ApiQuery<DeleteQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = q
        .id
        .ok_or_else(|| ApiError::BadRequest("Recipe ID is required".into()))?;

    let deleted = PersistedRecipe::delete_for_user(&state.db, user_id, id)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, %id, "delete recipe failed");
            ApiError::Persistence("Failed to delete recipe".into())
        })?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Recipe not found".into()));
    }

    info!(%user_id, %id, "recipe deleted");
    Ok(Json(MessageResponse {
        message: "Recipe deleted successfully".into(),
    }))
}
