use secrecy::Secret;
use service_core::config::{self as core_config, get_env, parse_list};
use service_core::error::AppError;

use crate::services::providers::groq::DEFAULT_GROQ_API_URL;

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub groq: GroqConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// Bearer credential for the upstream API. Empty when unset; the upstream
    /// rejects the request at call time.
    pub api_key: Secret<String>,
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(GatewayConfig {
            common,
            service_name: get_env("SERVICE_NAME", Some("chat-gateway"))?,
            log_level: get_env("LOG_LEVEL", Some("info"))?,
            otlp_endpoint: std::env::var("OTLP_ENDPOINT")
                .ok()
                .filter(|s| !s.is_empty()),
            groq: GroqConfig {
                api_key: Secret::new(get_env("GROQ_API_KEY", Some(""))?),
                api_url: get_env("GROQ_API_URL", Some(DEFAULT_GROQ_API_URL))?,
            },
            cors: CorsConfig {
                allowed_origins: parse_list(&get_env(
                    "CORS_ALLOWED_ORIGINS",
                    Some(DEFAULT_ALLOWED_ORIGIN),
                )?),
            },
        })
    }
}
