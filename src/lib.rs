//! Pippin: generated SVG gallery
//!
//! Batch-generates a fixed library of animated SVGs of Pippin the unicorn by
//! prompting a chat-completion model, caching each result as a file whose name
//! is derived from its prompt, then serves the directory over HTTP.

pub mod batch;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filename;
pub mod generation;
pub mod logging;
pub mod prompt;
pub mod provider;
pub mod sanitize;
pub mod server;
pub mod store;
