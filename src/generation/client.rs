use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NO_RECIPE_RETURNED: &str = "No recipe returned.";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook returned {status}")]
    Http { status: u16 },
}

/// Anything that turns a prompt into free-text recipes.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

#[derive(Debug, Serialize)]
struct WebhookRequest<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct WebhookResponse {
    recipe: Option<String>,
}

/// Posts prompts to an automation webhook that answers `{ "recipe": "..." }`.
#[derive(Debug, Clone)]
pub struct WebhookGenerator {
    client: reqwest::Client,
    url: String,
}

impl WebhookGenerator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RecipeGenerator for WebhookGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let res = self
            .client
            .post(&self.url)
            .json(&WebhookRequest {
                title: "Recipe Request",
                content: prompt,
            })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(GenerateError::Http {
                status: status.as_u16(),
            });
        }

        let body: WebhookResponse = res.json().await?;
        Ok(body
            .recipe
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| NO_RECIPE_RETURNED.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_request_shape() {
        let json = serde_json::to_value(WebhookRequest {
            title: "Recipe Request",
            content: "Ingredients: rice.",
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Recipe Request", "content": "Ingredients: rice."})
        );
    }

    #[test]
    fn missing_recipe_field_deserializes() {
        let body: WebhookResponse = serde_json::from_str("{}").unwrap();
        assert!(body.recipe.is_none());
    }

    #[tokio::test]
    async fn unreachable_webhook_is_transport_error() {
        // grab a free port, then release it so nothing is listening there
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = format!("http://127.0.0.1:{port}/webhook");
        let gen = WebhookGenerator::new(url, Duration::from_secs(2)).unwrap();
        let err = gen.generate("Ingredients: rice.").await.unwrap_err();
        assert!(matches!(err, GenerateError::Transport(_)));
    }
}
