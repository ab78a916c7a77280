//! Retry with exponential back-off and jitter for places API calls.
//!
//! Transport failures, HTTP 429/5xx and the provider's `OVER_QUERY_LIMIT`
//! and `UNKNOWN_ERROR` statuses are retried. Everything else (denied keys,
//! invalid requests, parse failures) is returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::PlacesError;

const MAX_DELAY_MS: u64 = 30_000;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
pub(crate) fn is_retriable(err: &PlacesError) -> bool {
    match err {
        PlacesError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        PlacesError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        PlacesError::Status { status, .. } => {
            matches!(status.as_str(), "OVER_QUERY_LIMIT" | "UNKNOWN_ERROR")
        }
        PlacesError::Deserialize { .. } | PlacesError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// The wait before the n-th retry is `backoff_base_ms * 2^(n-1)` scaled by a
/// random factor in `[0.75, 1.25)`, capped at 30 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, PlacesError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, PlacesError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient places API error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn api_status(status: &str) -> PlacesError {
        PlacesError::Status {
            status: status.to_owned(),
            message: None,
        }
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, PlacesError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_over_query_limit_then_succeeds() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                let n = cc.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(api_status("OVER_QUERY_LIMIT"))
                } else {
                    Ok::<u32, PlacesError>(7)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn propagates_last_error_after_exhausting_retries() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(2, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, PlacesError>(PlacesError::UnexpectedStatus {
                    status: 503,
                    endpoint: "/maps/api/place/details/json".to_owned(),
                })
            }
        })
        .await;
        // max_retries=2 → 3 total attempts
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
        assert!(matches!(
            result,
            Err(PlacesError::UnexpectedStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn does_not_retry_request_denied() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, PlacesError>(api_status("REQUEST_DENIED"))
            }
        })
        .await;
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        assert_eq!(result.unwrap_err().api_status(), Some("REQUEST_DENIED"));
    }

    #[test]
    fn client_errors_other_than_429_are_not_retriable() {
        let not_found = PlacesError::UnexpectedStatus {
            status: 404,
            endpoint: "/x".to_owned(),
        };
        let too_many = PlacesError::UnexpectedStatus {
            status: 429,
            endpoint: "/x".to_owned(),
        };
        assert!(!is_retriable(&not_found));
        assert!(is_retriable(&too_many));
    }

    #[test]
    fn deserialize_errors_are_not_retriable() {
        let e = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(!is_retriable(&PlacesError::Deserialize {
            context: "test".to_owned(),
            source: e,
        }));
    }
}
