//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::MissingCredential(var) => format!(
            "{} is not set. Export your provider API key, e.g. `export {}=sk-...`.",
            var, var
        ),
        other => other.to_string(),
    }
}
