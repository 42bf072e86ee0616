//! CLI domain: parse, route, output, and presentation only.
//! Route table dispatches to the batch orchestrator and the asset server.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_batch_report, format_prompt_status, PromptStatusRow};
pub use route::RunContext;
