//! Integration tests for the batch orchestrator's skip-if-present behavior

use super::test_utils::{generation_client, svg_for, ScriptedProvider};
use pippin::batch::{BatchOrchestrator, BatchReport, PromptResult};
use pippin::catalog::PROMPT_CATALOG;
use pippin::filename::derive_filename;
use pippin::store::AssetStore;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_second_run_makes_no_provider_calls() {
    let temp = TempDir::new().unwrap();
    let store = AssetStore::open(temp.path()).unwrap();
    let provider = ScriptedProvider::succeeding();
    let client = generation_client(provider.clone(), 1, Duration::ZERO);
    let orchestrator = BatchOrchestrator::new(&client, &store);

    let first = orchestrator.run(PROMPT_CATALOG).await;
    assert_eq!(first.generated, PROMPT_CATALOG.len());
    assert_eq!(first.skipped, 0);
    assert_eq!(provider.calls() as usize, PROMPT_CATALOG.len());

    let second = orchestrator.run(PROMPT_CATALOG).await;
    assert_eq!(
        second,
        BatchReport {
            generated: 0,
            skipped: PROMPT_CATALOG.len(),
            failed: 0,
            write_errors: 0,
        }
    );
    assert_eq!(provider.calls() as usize, PROMPT_CATALOG.len());
}

#[tokio::test]
async fn test_prompts_processed_in_catalog_order() {
    let temp = TempDir::new().unwrap();
    let store = AssetStore::open(temp.path()).unwrap();
    let provider = ScriptedProvider::succeeding();
    let client = generation_client(provider.clone(), 1, Duration::ZERO);

    let catalog = &PROMPT_CATALOG[..5];
    BatchOrchestrator::new(&client, &store).run(catalog).await;

    assert_eq!(provider.prompts(), catalog.to_vec());
}

#[tokio::test]
async fn test_persisted_content_is_sanitized_output() {
    let temp = TempDir::new().unwrap();
    let store = AssetStore::open(temp.path()).unwrap();
    let client = generation_client(ScriptedProvider::succeeding(), 1, Duration::ZERO);
    let prompt = "Create an SVG of Pippin playing chess.";

    let result = BatchOrchestrator::new(&client, &store).process(prompt).await;
    assert_eq!(result, PromptResult::Generated);

    let stored = std::fs::read_to_string(temp.path().join("pippin_playing_chess.svg")).unwrap();
    assert_eq!(stored, svg_for(prompt));
}

#[tokio::test]
async fn test_existing_asset_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let store = AssetStore::open(temp.path()).unwrap();
    let provider = ScriptedProvider::succeeding();
    let client = generation_client(provider.clone(), 1, Duration::ZERO);
    let prompt = PROMPT_CATALOG[0];
    store.write(&derive_filename(prompt), "<svg>hand made</svg>").unwrap();

    let result = BatchOrchestrator::new(&client, &store).process(prompt).await;

    assert_eq!(result, PromptResult::Skipped);
    assert_eq!(provider.calls(), 0);
    assert_eq!(
        store.read(&derive_filename(prompt)).unwrap().unwrap(),
        b"<svg>hand made</svg>"
    );
}

#[tokio::test]
async fn test_exhausted_prompts_write_nothing_and_are_retried_next_run() {
    let temp = TempDir::new().unwrap();
    let store = AssetStore::open(temp.path()).unwrap();
    let catalog = &PROMPT_CATALOG[..3];

    let failing = generation_client(ScriptedProvider::always_failing(), 2, Duration::ZERO);
    let report = BatchOrchestrator::new(&failing, &store).run(catalog).await;
    assert_eq!(report.failed, 3);
    assert_eq!(report.total(), 3);
    assert!(store.list().unwrap().is_empty());

    let provider = ScriptedProvider::succeeding();
    let working = generation_client(provider.clone(), 2, Duration::ZERO);
    let report = BatchOrchestrator::new(&working, &store).run(catalog).await;
    assert_eq!(report.generated, 3);
    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn test_write_failure_does_not_abort_batch() {
    let temp = TempDir::new().unwrap();
    let store = AssetStore::open(temp.path()).unwrap();
    let catalog = &PROMPT_CATALOG[..3];

    // A directory squatting on the temp path makes the first write fail.
    let blocked = derive_filename(catalog[0]);
    std::fs::create_dir(temp.path().join(format!("{}.tmp", blocked))).unwrap();

    let client = generation_client(ScriptedProvider::succeeding(), 1, Duration::ZERO);
    let report = BatchOrchestrator::new(&client, &store).run(catalog).await;

    assert_eq!(report.write_errors, 1);
    assert_eq!(report.generated, 2);
    assert!(!store.exists(&blocked).unwrap());
    assert_eq!(store.list().unwrap().len(), 2);
}
