//! CLI route: run context and the command table.

use crate::batch::run_catalog;
use crate::catalog::PROMPT_CATALOG;
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_batch_report, format_prompt_status, PromptStatusRow};
use crate::config::{resolve_output_dir, ConfigLoader, PippinConfig, RuntimeConfig};
use crate::error::ApiError;
use crate::filename::derive_filename;
use crate::server;
use crate::store::AssetStore;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Runtime context for CLI execution: workspace and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    settings: PippinConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let settings = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::with_settings(workspace_root, settings.validated()?))
    }

    pub fn with_settings(workspace_root: PathBuf, settings: PippinConfig) -> Self {
        Self {
            workspace_root,
            settings,
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn settings(&self) -> &PippinConfig {
        &self.settings
    }

    /// Resolve the credential; commands that reach the provider need it.
    fn runtime(&self) -> Result<RuntimeConfig, ApiError> {
        RuntimeConfig::from_env(self.settings.clone(), &self.workspace_root)
    }

    /// Execute a command and return its printable output.
    pub async fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Serve {
                bind,
                skip_generation,
            } => self.handle_serve(bind.as_deref(), *skip_generation).await,
            Commands::Generate => self.handle_generate().await,
            Commands::Prompts { format } => self.handle_prompts(format),
        }
    }

    async fn handle_serve(&self, bind: Option<&str>, skip_generation: bool) -> Result<String, ApiError> {
        let mut server_settings = self.settings.server.clone();
        if let Some(bind) = bind {
            server_settings.bind = bind.to_string();
        }
        let addr = server_settings.socket_addr()?;

        let (store, output_dir) = if skip_generation {
            let output_dir = resolve_output_dir(&self.settings.storage, &self.workspace_root);
            (AssetStore::open(&output_dir)?, output_dir)
        } else {
            let runtime = self.runtime()?;
            let store = AssetStore::open(&runtime.output_dir)?;
            let report = run_catalog(&runtime, &store).await?;
            if report.failed > 0 || report.write_errors > 0 {
                warn!(
                    failed = report.failed,
                    write_errors = report.write_errors,
                    "Some assets are missing; serving what exists"
                );
            }
            (store, runtime.output_dir.clone())
        };

        info!(dir = %output_dir.display(), "Starting asset server");
        server::serve(store, addr).await?;
        Ok(format!("Server on {} stopped", addr))
    }

    async fn handle_generate(&self) -> Result<String, ApiError> {
        let runtime = self.runtime()?;
        let store = AssetStore::open(&runtime.output_dir)?;
        let report = run_catalog(&runtime, &store).await?;
        Ok(format_batch_report(&report))
    }

    fn handle_prompts(&self, format: &str) -> Result<String, ApiError> {
        let store = AssetStore::at(resolve_output_dir(
            &self.settings.storage,
            &self.workspace_root,
        ));
        let rows: Vec<PromptStatusRow> = PROMPT_CATALOG
            .iter()
            .map(|prompt| {
                let filename = derive_filename(prompt);
                let generated = store.exists(&filename).unwrap_or(false);
                PromptStatusRow {
                    prompt: prompt.to_string(),
                    filename,
                    generated,
                }
            })
            .collect();
        format_prompt_status(&rows, format)
    }
}
