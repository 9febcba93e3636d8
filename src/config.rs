use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

/// Where generation requests are forwarded.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub webhook_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    pub api_url: String,
    pub source_lang: String,
    pub default_target: String,
    pub chunk_size: usize,
    pub chunk_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub generator: GeneratorConfig,
    pub translation: TranslationConfig,
    pub http_timeout_secs: u64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: env_or("JWT_ISSUER", "chefgpt"),
            audience: env_or("JWT_AUDIENCE", "chefgpt-users"),
            ttl_minutes: env_parse("JWT_TTL_MINUTES", 60),
            refresh_ttl_minutes: env_parse("JWT_REFRESH_TTL_MINUTES", 60 * 24 * 14),
        };
        let generator = GeneratorConfig {
            webhook_url: env_or(
                "RECIPE_WEBHOOK_URL",
                "http://localhost:5678/webhook/recipe-generator",
            ),
        };
        let translation = TranslationConfig {
            api_url: env_or("TRANSLATE_API_URL", "https://api.mymemory.translated.net/get"),
            source_lang: env_or("TRANSLATE_SOURCE_LANG", "en"),
            default_target: env_or("TRANSLATE_DEFAULT_TARGET", "ur"),
            chunk_size: env_parse("TRANSLATE_CHUNK_SIZE", 400),
            chunk_delay_ms: env_parse("TRANSLATE_CHUNK_DELAY_MS", 100),
        };
        Ok(Self {
            database_url,
            jwt,
            generator,
            translation,
            http_timeout_secs: env_parse("HTTP_TIMEOUT_SECS", 30),
        })
    }
}
