use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use super::{
    dto::{CuisineQuery, CuisinesResponse, GenerateRequest, GenerateResponse},
    prompt::{build_prompt, fusion_options, Preferences, CUISINES},
};
use crate::{
    error::ApiError,
    extract::{ApiJson, ApiQuery},
    recipes::parser,
    state::AppState,
};

pub fn generation_routes() -> Router<AppState> {
    Router::new()
        .route("/generate-recipe", post(generate_recipe))
        .route("/cuisines", get(list_cuisines))
}

pub async fn list_cuisines(ApiQuery(query): ApiQuery<CuisineQuery>) -> Json<CuisinesResponse> {
    Json(CuisinesResponse {
        cuisines: CUISINES,
        fusion_options: fusion_options(query.preferred.as_deref().unwrap_or_default()),
    })
}

fn prompt_for(req: &GenerateRequest) -> Option<String> {
    if let Some(input) = req.input.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        return Some(input.to_string());
    }
    if req.pantry.iter().all(|p| p.trim().is_empty()) {
        return None;
    }
    let prefs = Preferences {
        cuisine: req.cuisine.clone(),
        fusion_cuisine: req.fusion_cuisine.clone(),
    };
    Some(build_prompt(&req.pantry, &prefs))
}

#[instrument(skip_all)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let prompt = prompt_for(&payload).ok_or_else(|| {
        warn!("generate called without input or pantry");
        ApiError::BadRequest("Add ingredients or a prompt first".into())
    })?;

    let recipe = state.generator.generate(&prompt).await.map_err(|e| {
        error!(error = %e, "recipe generation failed");
        ApiError::Upstream("Failed to generate recipe".into())
    })?;

    let recipes = parser::parse(&recipe, payload.include_nutrition);
    info!(blocks = recipes.len(), chars = recipe.len(), "recipe generated");
    Ok(Json(GenerateResponse { recipe, recipes }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        app::build_app,
        generation::client::{GenerateError, RecipeGenerator},
    };

    struct DownGenerator;

    #[async_trait]
    impl RecipeGenerator for DownGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Err(GenerateError::Http { status: 503 })
        }
    }

    fn request(body: serde_json::Value) -> Request<Body> {
        Request::post("/api/v1/generate-recipe")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn explicit_input_wins_over_pantry() {
        let req = GenerateRequest {
            input: Some("  quick dal  ".into()),
            pantry: vec!["rice".into()],
            cuisine: None,
            fusion_cuisine: None,
            include_nutrition: false,
        };
        assert_eq!(prompt_for(&req).as_deref(), Some("quick dal"));
    }

    #[test]
    fn blank_request_has_no_prompt() {
        let req = GenerateRequest {
            input: Some("   ".into()),
            pantry: vec![" ".into()],
            cuisine: Some("Desi".into()),
            fusion_cuisine: None,
            include_nutrition: false,
        };
        assert_eq!(prompt_for(&req), None);
    }

    #[tokio::test]
    async fn generates_and_parses() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(request(serde_json::json!({
                "pantry": ["Chicken", "Rice"],
                "cuisine": "Desi"
            })))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert!(json["recipe"]
            .as_str()
            .unwrap()
            .contains("Preference of cuisine: Desi"));
        assert_eq!(json["recipes"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cuisines_exclude_preferred_from_fusion() {
        let res = build_app(AppState::fake())
            .oneshot(
                Request::get("/api/v1/cuisines?preferred=Italian")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(res).await;
        assert_eq!(json["cuisines"].as_array().unwrap().len(), 6);
        let fusion = json["fusion_options"].as_array().unwrap();
        assert_eq!(fusion.len(), 5);
        assert!(!fusion.contains(&serde_json::json!("Italian")));
    }

    #[tokio::test]
    async fn empty_request_is_bad_request() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(request(serde_json::json!({ "pantry": [] })))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn upstream_failure_is_bad_gateway() {
        let mut state = AppState::fake();
        state.generator = Arc::new(DownGenerator);
        let res = build_app(state)
            .oneshot(request(serde_json::json!({ "input": "anything" })))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(res).await;
        assert_eq!(json["success"], false);
    }
}
