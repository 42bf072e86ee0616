//! Generation client
//!
//! Requests one asset's markup from the model provider, retrying failed attempts
//! with exponential backoff. The client never touches the filesystem.

use crate::config::{GenerationSettings, ProviderSettings};
use crate::error::ApiError;
use crate::prompt::build_messages;
use crate::provider::{CompletionOptions, ModelProviderClient};
use crate::sanitize::strip_code_fences;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Bounded exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Never below 1.
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn from_settings(settings: &GenerationSettings) -> Self {
        Self::new(
            settings.max_attempts,
            Duration::from_millis(settings.base_delay_ms),
        )
    }

    /// Delay after failed attempt `attempt` (1-based): `base_delay * 2^(attempt-1)`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.base_delay.saturating_mul(1u32 << exponent)
    }

    /// Total pause accumulated across the first `failures` failed attempts.
    pub fn total_delay(&self, failures: u32) -> Duration {
        (1..=failures).fold(Duration::ZERO, |acc, attempt| {
            acc.saturating_add(self.delay_after(attempt))
        })
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_settings(&GenerationSettings::default())
    }
}

/// Result of generating one asset
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    /// Sanitized, non-empty markup
    Success(String),
    /// Every attempt failed
    Exhausted { attempts: u32, last_error: ApiError },
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success(_))
    }
}

/// Wraps a provider client with the system instruction and the retry policy.
pub struct GenerationClient {
    provider: Arc<dyn ModelProviderClient>,
    options: CompletionOptions,
    policy: RetryPolicy,
}

impl GenerationClient {
    pub fn new(
        provider: Arc<dyn ModelProviderClient>,
        options: CompletionOptions,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            provider,
            options,
            policy,
        }
    }

    pub fn from_settings(
        provider: Arc<dyn ModelProviderClient>,
        provider_settings: &ProviderSettings,
        generation: &GenerationSettings,
    ) -> Self {
        let options = CompletionOptions {
            temperature: Some(provider_settings.temperature),
            max_tokens: Some(provider_settings.max_tokens),
        };
        Self::new(provider, options, RetryPolicy::from_settings(generation))
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Generate markup for `prompt`.
    pub async fn generate(&self, prompt: &str) -> GenerationOutcome {
        let mut attempt = 1;
        loop {
            let started = Instant::now();
            match self.attempt(prompt).await {
                Ok(content) => {
                    debug!(
                        prompt,
                        attempt,
                        provider = self.provider.provider_name(),
                        duration_ms = started.elapsed().as_millis() as u64,
                        "Generation succeeded"
                    );
                    return GenerationOutcome::Success(content);
                }
                Err(err) if attempt >= self.policy.max_attempts => {
                    warn!(prompt, attempt, error = %err, "Generation attempt failed; no attempts left");
                    return GenerationOutcome::Exhausted {
                        attempts: attempt,
                        last_error: err,
                    };
                }
                Err(err) => {
                    let delay = self.policy.delay_after(attempt);
                    warn!(
                        prompt,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Generation attempt failed; retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn attempt(&self, prompt: &str) -> Result<String, ApiError> {
        let response = self
            .provider
            .complete(build_messages(prompt), self.options.clone())
            .await?;
        let content = strip_code_fences(response.content.trim());
        if content.trim().is_empty() {
            return Err(ApiError::EmptyResponse);
        }
        Ok(content)
    }
}
