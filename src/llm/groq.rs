// src/llm/groq.rs

//! Groq chat-completions client for remote affirmation generation.
//! No wrappers; just reqwest and Rust.
//!
//! Remote failures are never surfaced to callers: `generate` falls back to
//! the local composer, so a Groq outage degrades to canned phrases.

use anyhow::Result;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::AffirmConfig;
use crate::phrases;

#[derive(Debug, thiserror::Error)]
pub enum GroqError {
    #[error("request to Groq failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Groq API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("no message content in Groq response")]
    MalformedResponse,
}

#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqClient {
    /// Build a client from configuration. Callers should only construct one
    /// when a credential is present.
    pub fn new(api_key: String, config: &AffirmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()?;

        Ok(Self {
            client,
            api_key,
            api_url: config.groq_api_url("chat/completions"),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Generate a personalized affirmation, falling back to the local
    /// composer on any failure. Callers never observe a remote error.
    pub async fn generate(&self, mood: &str, situation: &str) -> String {
        match self.request_completion(mood, situation).await {
            Ok(affirmation) => {
                info!("AI generated affirmation for mood '{}'", mood);
                affirmation
            }
            Err(e) => {
                warn!("AI generation failed, using local composer: {}", e);
                phrases::compose(mood, situation)
            }
        }
    }

    /// One chat-completions call. No retries; a failed attempt falls
    /// straight to the local composer in `generate`.
    async fn request_completion(&self, mood: &str, situation: &str) -> Result<String, GroqError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are a compassionate mental wellness coach. Provide only the affirmation, no explanations."
                },
                {
                    "role": "user",
                    "content": build_prompt(mood, situation)
                }
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens
        });

        let resp = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GroqError::Api {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let resp_json: serde_json::Value = resp.json().await?;
        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(GroqError::MalformedResponse)?;

        Ok(content.trim().to_string())
    }
}

/// The user prompt sent to the model. The situation line is omitted
/// entirely when no situation was given.
fn build_prompt(mood: &str, situation: &str) -> String {
    let situation_line = if situation.is_empty() {
        String::new()
    } else {
        format!("Their situation: {situation}\n")
    };

    format!(
        "You are a compassionate mental wellness coach creating personalized affirmations.\n\n\
         A person is currently feeling: {mood}\n\
         {situation_line}\n\
         Create a powerful, personalized affirmation for them. The affirmation should:\n\
         - Be 2-3 sentences maximum\n\
         - Use \"I\" statements (first person)\n\
         - Be positive and empowering\n\
         - Acknowledge their current feeling while offering hope and strength\n\
         - Be specific to their situation if provided\n\
         - Sound natural and genuine, not generic\n\n\
         Just provide the affirmation itself, nothing else."
    )
}
