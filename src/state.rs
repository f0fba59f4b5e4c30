// src/state.rs

use std::sync::Arc;

use anyhow::Result;

use crate::config::AffirmConfig;
use crate::llm::GroqClient;
use crate::store::AffirmationStore;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: AffirmConfig,
    pub store: Arc<AffirmationStore>,
    /// Present only when a Groq credential was configured.
    pub llm_client: Option<Arc<GroqClient>>,
}

impl AppState {
    /// Assemble state from resolved configuration. A missing credential
    /// disables remote generation without failing startup.
    pub fn new(config: AffirmConfig) -> Result<Self> {
        let llm_client = match &config.groq_api_key {
            Some(key) => Some(Arc::new(GroqClient::new(key.clone(), &config)?)),
            None => None,
        };

        Ok(Self {
            config,
            store: Arc::new(AffirmationStore::new()),
            llm_client,
        })
    }

    pub fn ai_enabled(&self) -> bool {
        self.llm_client.is_some()
    }
}
