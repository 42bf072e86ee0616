//! CLI presentation: text and json formatters.

use crate::batch::BatchReport;
use crate::error::ApiError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;

/// One catalog entry as shown by `pippin prompts`
#[derive(Debug, Clone, Serialize)]
pub struct PromptStatusRow {
    pub prompt: String,
    pub filename: String,
    pub generated: bool,
}

pub fn format_prompt_status(rows: &[PromptStatusRow], format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return serde_json::to_string_pretty(rows)
            .map_err(|e| ApiError::ConfigError(format!("Failed to encode JSON: {}", e)));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Filename", "Status", "Prompt"]);
    for (i, row) in rows.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            row.filename.clone(),
            if row.generated { "generated" } else { "missing" }.to_string(),
            row.prompt.clone(),
        ]);
    }

    let generated = rows.iter().filter(|r| r.generated).count();
    Ok(format!("{}\n{} of {} generated", table, generated, rows.len()))
}

pub fn format_batch_report(report: &BatchReport) -> String {
    format!(
        "Batch complete: {} generated, {} skipped, {} failed, {} write errors",
        report.generated, report.skipped, report.failed, report.write_errors
    )
}
