//! Batch orchestrator
//!
//! Walks the prompt catalog in order, one prompt at a time. A prompt whose asset
//! already exists is skipped without contacting the provider, so a batch that
//! was interrupted can simply be run again.

use crate::catalog::PROMPT_CATALOG;
use crate::config::RuntimeConfig;
use crate::error::ApiError;
use crate::filename::derive_filename;
use crate::generation::{GenerationClient, GenerationOutcome};
use crate::provider::OpenAIClient;
use crate::store::AssetStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Per-run tallies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Assets written this run
    pub generated: usize,
    /// Prompts whose asset already existed
    pub skipped: usize,
    /// Prompts whose generation exhausted every attempt
    pub failed: usize,
    /// Generated content that could not be persisted
    pub write_errors: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.generated + self.skipped + self.failed + self.write_errors
    }
}

/// What happened to a single prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResult {
    Generated,
    Skipped,
    Failed,
    WriteError,
}

pub struct BatchOrchestrator<'a> {
    client: &'a GenerationClient,
    store: &'a AssetStore,
}

impl<'a> BatchOrchestrator<'a> {
    pub fn new(client: &'a GenerationClient, store: &'a AssetStore) -> Self {
        Self { client, store }
    }

    /// Process every prompt in `catalog`, sequentially and in order.
    pub async fn run<S: AsRef<str>>(&self, catalog: &[S]) -> BatchReport {
        info!(prompts = catalog.len(), dir = %self.store.root().display(), "Batch started");

        let mut report = BatchReport::default();
        for prompt in catalog {
            match self.process(prompt.as_ref()).await {
                PromptResult::Generated => report.generated += 1,
                PromptResult::Skipped => report.skipped += 1,
                PromptResult::Failed => report.failed += 1,
                PromptResult::WriteError => report.write_errors += 1,
            }
        }

        info!(
            generated = report.generated,
            skipped = report.skipped,
            failed = report.failed,
            write_errors = report.write_errors,
            "Batch finished"
        );
        report
    }

    /// Process one prompt.
    pub async fn process(&self, prompt: &str) -> PromptResult {
        let filename = derive_filename(prompt);

        match self.store.exists(&filename) {
            Ok(true) => {
                info!(%filename, "Asset already exists; skipping generation");
                return PromptResult::Skipped;
            }
            Ok(false) => {}
            Err(e) => {
                // Existence unknown; counted with write failures.
                error!(%filename, error = %e, "Failed to check for existing asset");
                return PromptResult::WriteError;
            }
        }

        match self.client.generate(prompt).await {
            GenerationOutcome::Success(content) => match self.store.write(&filename, &content) {
                Ok(path) => {
                    info!(%filename, path = %path.display(), "Generated asset");
                    PromptResult::Generated
                }
                Err(e) => {
                    error!(%filename, error = %e, "Failed to write asset");
                    PromptResult::WriteError
                }
            },
            GenerationOutcome::Exhausted {
                attempts,
                last_error,
            } => {
                warn!(prompt, attempts, error = %last_error, "Failed to generate asset");
                PromptResult::Failed
            }
        }
    }
}

/// Run the full prompt catalog against the configured provider.
pub async fn run_catalog(runtime: &RuntimeConfig, store: &AssetStore) -> Result<BatchReport, ApiError> {
    let settings = &runtime.settings;
    let provider = OpenAIClient::from_settings(&settings.provider, runtime.api_key())?;
    info!(
        provider = "openai",
        model = %settings.provider.model,
        base_url = %provider.base_url(),
        "Provider client ready"
    );
    let client = GenerationClient::from_settings(
        Arc::new(provider),
        &settings.provider,
        &settings.generation,
    );
    Ok(BatchOrchestrator::new(&client, store).run(PROMPT_CATALOG).await)
}
