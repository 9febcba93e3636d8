use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("translation service returned {status}")]
    Http { status: u16 },
    #[error("translation rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, TranslateError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_status: Value,
    response_data: Option<MyMemoryData>,
    response_details: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: String,
}

impl MyMemoryResponse {
    // the API reports status either as a number or as a string
    fn is_ok(&self) -> bool {
        match &self.response_status {
            Value::Number(n) => n.as_u64() == Some(200),
            Value::String(s) => s == "200",
            _ => false,
        }
    }

    fn into_text(self) -> Result<String, TranslateError> {
        if !self.is_ok() {
            let details = self
                .response_details
                .map(|d| match d {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .unwrap_or_default();
            return Err(TranslateError::Rejected(details));
        }
        self.response_data
            .map(|d| d.translated_text)
            .ok_or_else(|| TranslateError::Rejected("missing responseData".into()))
    }
}

/// Client for MyMemory-compatible `GET ?q=&langpair=src|dst` endpoints.
#[derive(Debug, Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl MyMemoryTranslator {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let langpair = format!("{source}|{target}");
        let res = self
            .client
            .get(&self.api_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(TranslateError::Http {
                status: status.as_u16(),
            });
        }
        res.json::<MyMemoryResponse>().await?.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<String, TranslateError> {
        serde_json::from_str::<MyMemoryResponse>(json)
            .unwrap()
            .into_text()
    }

    #[test]
    fn numeric_status_is_success() {
        let text = parse(r#"{"responseStatus":200,"responseData":{"translatedText":"نمک"}}"#);
        assert_eq!(text.unwrap(), "نمک");
    }

    #[test]
    fn string_status_is_success() {
        let text = parse(r#"{"responseStatus":"200","responseData":{"translatedText":"ok"}}"#);
        assert_eq!(text.unwrap(), "ok");
    }

    #[test]
    fn other_status_is_rejected_with_details() {
        let err = parse(
            r#"{"responseStatus":403,"responseData":{"translatedText":""},"responseDetails":"INVALID LANGUAGE PAIR"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("INVALID LANGUAGE PAIR"));
    }
}
