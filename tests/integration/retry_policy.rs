//! Integration tests for generation retry and backoff timing
//!
//! Runs on tokio's paused clock so backoff sleeps complete instantly while
//! still advancing `Instant::now()` by their full duration.

use super::test_utils::{generation_client, svg_for, ScriptedProvider};
use pippin::error::ApiError;
use pippin::generation::{GenerationOutcome, RetryPolicy};
use std::time::Duration;
use tokio::time::Instant;

const BASE_DELAY: Duration = Duration::from_secs(2);
const SLACK: Duration = Duration::from_millis(50);

fn assert_elapsed(elapsed: Duration, expected: Duration) {
    assert!(
        elapsed >= expected && elapsed < expected + SLACK,
        "elapsed {:?}, expected {:?}",
        elapsed,
        expected
    );
}

#[tokio::test(start_paused = true)]
async fn test_recovers_after_transient_failures() {
    let provider = ScriptedProvider::failing_first(2);
    let client = generation_client(provider.clone(), 4, BASE_DELAY);
    let prompt = "Create an SVG of Pippin surfing the waves.";

    let started = Instant::now();
    let outcome = client.generate(prompt).await;

    match outcome {
        GenerationOutcome::Success(content) => assert_eq!(content, svg_for(prompt)),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(provider.calls(), 3);
    // 2s after the first failure, 4s after the second
    assert_elapsed(started.elapsed(), Duration::from_secs(6));
    assert_eq!(client.policy().total_delay(2), Duration::from_secs(6));
}

#[tokio::test(start_paused = true)]
async fn test_exhausts_after_exactly_max_attempts() {
    let provider = ScriptedProvider::always_failing();
    let client = generation_client(provider.clone(), 4, BASE_DELAY);

    let started = Instant::now();
    let outcome = client.generate("Create an SVG of Pippin playing chess.").await;

    match outcome {
        GenerationOutcome::Exhausted {
            attempts,
            last_error,
        } => {
            assert_eq!(attempts, 4);
            assert!(matches!(last_error, ApiError::ProviderRateLimit(_)));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(provider.calls(), 4);
    // No pause after the final attempt: 2 + 4 + 8
    assert_elapsed(started.elapsed(), Duration::from_secs(14));
}

#[tokio::test(start_paused = true)]
async fn test_single_attempt_never_sleeps() {
    let provider = ScriptedProvider::always_failing();
    let client = generation_client(provider.clone(), 1, BASE_DELAY);

    let started = Instant::now();
    let outcome = client.generate("p").await;

    assert!(!outcome.is_success());
    assert_eq!(provider.calls(), 1);
    assert_elapsed(started.elapsed(), Duration::ZERO);
}

#[test]
fn test_default_policy_matches_configured_defaults() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.max_attempts, 4);
    assert_eq!(policy.base_delay, BASE_DELAY);
}
