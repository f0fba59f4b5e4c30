// src/config/mod.rs

use std::str::FromStr;

/// Runtime configuration, resolved once in main() and injected through
/// AppState. Absence of GROQ_API_KEY disables remote generation without
/// failing startup.
#[derive(Debug, Clone)]
pub struct AffirmConfig {
    // ── Groq Configuration
    pub groq_api_key: Option<String>,
    pub groq_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub http_timeout: u64,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Logging Configuration
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            // Trim whitespace and strip trailing comments before parsing
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl AffirmConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        let _ = dotenvy::dotenv();

        Self {
            groq_api_key: std::env::var("GROQ_API_KEY")
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            groq_base_url: env_var_or(
                "GROQ_BASE_URL",
                "https://api.groq.com/openai/v1".to_string(),
            ),
            model: env_var_or("AFFIRM_MODEL", "llama-3.3-70b-versatile".to_string()),
            temperature: env_var_or("AFFIRM_TEMPERATURE", 0.8),
            max_tokens: env_var_or("AFFIRM_MAX_TOKENS", 150),
            http_timeout: env_var_or("AFFIRM_HTTP_TIMEOUT", 30),
            host: env_var_or("AFFIRM_HOST", "0.0.0.0".to_string()),
            port: env_var_or("AFFIRM_PORT", 5000),
            log_level: env_var_or("AFFIRM_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Whether remote generation is available.
    pub fn ai_enabled(&self) -> bool {
        self.groq_api_key.is_some()
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full URL for a Groq API endpoint
    pub fn groq_api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.groq_base_url.trim_end_matches('/'), endpoint)
    }
}
