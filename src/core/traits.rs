//! Core traits for the resync poller.
//!
//! The poller never looks inside a snapshot. All it needs from the state
//! source is a way to fetch the current value and from the value itself a
//! structural equality.

use std::future::Future;
use std::sync::Arc;

/// Source of remote state snapshots.
///
/// # Requirements
///
/// - `fetch` MUST be safe to call repeatedly and rapidly
/// - transient failures MUST NOT corrupt the fetcher's own state
/// - `Snapshot` equality MUST be structural (field by field), not identity
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct AppConfig { resources: Vec<String> }
///
/// struct ApiClient { /* ... */ }
///
/// impl StateFetcher for ApiClient {
///     type Snapshot = AppConfig;
///     type Error = std::io::Error;
///
///     async fn fetch(&self, key: &str) -> Result<AppConfig, std::io::Error> {
///         self.get_integration(key).await
///     }
/// }
/// ```
pub trait StateFetcher: Send + Sync {
    /// Observed state. Compared with `==` against the previous observation.
    type Snapshot: PartialEq + Send;

    /// Fetch failure. Always treated as transient by the poller.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the current snapshot for `key`.
    fn fetch(&self, key: &str) -> impl Future<Output = Result<Self::Snapshot, Self::Error>> + Send;
}

impl<F: StateFetcher> StateFetcher for Arc<F> {
    type Snapshot = F::Snapshot;
    type Error = F::Error;

    fn fetch(&self, key: &str) -> impl Future<Output = Result<Self::Snapshot, Self::Error>> + Send {
        (**self).fetch(key)
    }
}

impl<F: StateFetcher> StateFetcher for &F {
    type Snapshot = F::Snapshot;
    type Error = F::Error;

    fn fetch(&self, key: &str) -> impl Future<Output = Result<Self::Snapshot, Self::Error>> + Send {
        (**self).fetch(key)
    }
}
