use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// A persistence lookup that did not answer within its time budget.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{operation} did not complete within {limit:?}")]
pub struct LookupTimeout {
    pub operation: &'static str,
    pub limit: Duration,
}

/// Await a repository call, giving up after `limit`.
///
/// Dropping the inner future on timeout abandons the lookup; lookups are
/// reads, so nothing is left half-applied.
pub async fn bounded<F, T, E>(operation: &'static str, limit: Duration, lookup: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<LookupTimeout>,
{
    match tokio::time::timeout(limit, lookup).await {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(operation, limit_ms = limit.as_millis() as u64, "Lookup timed out");
            Err(LookupTimeout { operation, limit }.into())
        }
    }
}
