//! Configuration System
//!
//! Layered configuration for the generator and the asset server. Sources, lowest
//! precedence first: built-in defaults, the global config file, the workspace
//! config files, then `PIPPIN__SECTION__KEY` environment variables.
//!
//! The loaded [`PippinConfig`] is combined with the resolved provider credential
//! into a [`RuntimeConfig`] once at startup; components receive it by reference.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

mod sources;

pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PippinConfig {
    /// Generative model provider
    pub provider: ProviderSettings,

    /// Retry policy for generation requests
    pub generation: GenerationSettings,

    /// Output directory settings
    pub storage: StorageSettings,

    /// Asset server settings
    pub server: ServerSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Model identifier sent with each request
    pub model: String,

    /// Custom OpenAI-compatible endpoint (defaults to the public API)
    pub base_url: Option<String>,

    /// Environment variable holding the API key
    pub api_key_env: String,

    pub temperature: f32,

    pub max_tokens: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            base_url: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.7,
            max_tokens: 1500,
        }
    }
}

/// Generation retry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Total attempts per prompt, including the first one
    pub max_attempts: u32,

    /// Delay before the first retry; doubles for each later retry (milliseconds)
    pub base_delay_ms: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay_ms: 2000,
        }
    }
}

/// Output directory settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Asset directory; relative paths resolve against the workspace root
    pub output_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("static").join("svgs"),
        }
    }
}

/// Asset server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Listen address
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ApiError> {
        self.bind
            .parse()
            .map_err(|e| ApiError::ConfigError(format!("Invalid bind address {:?}: {}", self.bind, e)))
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Provider(String),
    Generation(String),
    Storage(String),
    Server(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Provider(msg) => write!(f, "Provider: {}", msg),
            ValidationError::Generation(msg) => write!(f, "Generation: {}", msg),
            ValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
            ValidationError::Server(msg) => write!(f, "Server: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PippinConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.provider.model.trim().is_empty() {
            errors.push(ValidationError::Provider("model cannot be empty".to_string()));
        }
        if self.provider.api_key_env.trim().is_empty() {
            errors.push(ValidationError::Provider(
                "api_key_env cannot be empty".to_string(),
            ));
        }
        if let Some(ref url) = self.provider.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push(ValidationError::Provider(format!(
                    "base_url must be an http(s) URL, got {:?}",
                    url
                )));
            }
        }
        if !(0.0..=2.0).contains(&self.provider.temperature) {
            errors.push(ValidationError::Provider(format!(
                "temperature must be within 0.0-2.0, got {}",
                self.provider.temperature
            )));
        }

        if self.generation.max_attempts == 0 {
            errors.push(ValidationError::Generation(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        if self.storage.output_dir.as_os_str().is_empty() {
            errors.push(ValidationError::Storage(
                "output_dir cannot be empty".to_string(),
            ));
        }

        if let Err(e) = self.server.socket_addr() {
            errors.push(ValidationError::Server(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all violations into one error.
    pub fn validated(self) -> Result<Self, ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}

/// Loads [`PippinConfig`] from files and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load layered configuration for a workspace.
    pub fn load(workspace_root: &Path) -> Result<PippinConfig, ApiError> {
        let builder = Config::builder();
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let config = builder.add_source(env_source()).build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from one explicit file (plus environment overrides).
    pub fn load_from_file(path: &Path) -> Result<PippinConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let config = Config::builder()
            .add_source(config::File::from(path))
            .add_source(env_source())
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("PIPPIN")
        .separator("__")
        .try_parsing(true)
}

/// Startup configuration handed to every component.
#[derive(Clone)]
pub struct RuntimeConfig {
    pub settings: PippinConfig,
    pub workspace_root: PathBuf,
    pub output_dir: PathBuf,
    api_key: String,
}

impl RuntimeConfig {
    /// Resolve the credential from the environment variable named in the settings.
    ///
    /// Fails when the variable is unset or empty.
    pub fn from_env(settings: PippinConfig, workspace_root: &Path) -> Result<Self, ApiError> {
        let var = settings.provider.api_key_env.clone();
        let api_key = std::env::var(&var).unwrap_or_default();
        Self::with_api_key(settings, workspace_root, api_key).map_err(|e| match e {
            ApiError::MissingCredential(_) => ApiError::MissingCredential(var),
            other => other,
        })
    }

    pub fn with_api_key(
        settings: PippinConfig,
        workspace_root: &Path,
        api_key: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingCredential(
                settings.provider.api_key_env.clone(),
            ));
        }
        let settings = settings.validated()?;
        let output_dir = resolve_output_dir(&settings.storage, workspace_root);
        Ok(Self {
            settings,
            workspace_root: workspace_root.to_path_buf(),
            output_dir,
            api_key,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("settings", &self.settings)
            .field("workspace_root", &self.workspace_root)
            .field("output_dir", &self.output_dir)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Asset directory, with relative paths resolved against `workspace_root`.
pub fn resolve_output_dir(storage: &StorageSettings, workspace_root: &Path) -> PathBuf {
    if storage.output_dir.is_absolute() {
        storage.output_dir.clone()
    } else {
        workspace_root.join(&storage.output_dir)
    }
}
