//! Shared test utilities for integration tests
//!
//! Provides a scripted model provider that counts calls, so tests can assert
//! exactly how often the network would have been hit.

use async_trait::async_trait;
use pippin::error::ApiError;
use pippin::generation::{GenerationClient, RetryPolicy};
use pippin::provider::{
    ChatMessage, CompletionOptions, CompletionResponse, MessageRole, ModelProviderClient,
    TokenUsage,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fails the first `failures` calls, then answers every prompt with an SVG.
pub struct ScriptedProvider {
    failures: u32,
    calls: AtomicU32,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn succeeding() -> Arc<Self> {
        Self::failing_first(0)
    }

    pub fn failing_first(failures: u32) -> Arc<Self> {
        Arc::new(Self {
            failures,
            calls: AtomicU32::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn always_failing() -> Arc<Self> {
        Self::failing_first(u32::MAX)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// User prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

/// SVG the scripted provider returns for `prompt`, after fence stripping.
pub fn svg_for(prompt: &str) -> String {
    format!("<svg xmlns=\"http://www.w3.org/2000/svg\"><title>{}</title></svg>", prompt)
}

#[async_trait]
impl ModelProviderClient for ScriptedProvider {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        _options: CompletionOptions,
    ) -> Result<CompletionResponse, ApiError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt = messages
            .iter()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt.clone());

        if call < self.failures {
            return Err(ApiError::ProviderRateLimit(format!("call {} throttled", call)));
        }

        Ok(CompletionResponse {
            content: format!("```svg\n{}\n```", svg_for(&prompt)),
            model: "scripted".to_string(),
            usage: TokenUsage::default(),
            finish_reason: Some("stop".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// Generation client over `provider` with the given retry policy.
pub fn generation_client(
    provider: Arc<ScriptedProvider>,
    max_attempts: u32,
    base_delay: Duration,
) -> GenerationClient {
    GenerationClient::new(
        provider,
        CompletionOptions::default(),
        RetryPolicy::new(max_attempts, base_delay),
    )
}
