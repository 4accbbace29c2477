//! Closure-backed fetcher.

use std::future::Future;

use crate::core::StateFetcher;

/// Adapts an async closure into a [`StateFetcher`].
///
/// The closure receives an owned copy of the state key, so the returned
/// future does not borrow from the poller.
///
/// ```ignore
/// let fetcher = FnFetcher::new(|key: String| async move { client.get_integration(&key).await });
/// ```
#[derive(Debug, Clone)]
pub struct FnFetcher<C> {
    f: C,
}

impl<C> FnFetcher<C> {
    /// Wrap a closure.
    pub fn new(f: C) -> Self {
        Self { f }
    }
}

impl<C, Fut, S, E> StateFetcher for FnFetcher<C>
where
    C: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<S, E>> + Send,
    S: PartialEq + Send,
    E: std::error::Error + Send + Sync + 'static,
{
    type Snapshot = S;
    type Error = E;

    fn fetch(&self, key: &str) -> impl Future<Output = Result<S, E>> + Send {
        (self.f)(key.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_closure_fetch() {
        let fetcher = FnFetcher::new(|key: String| async move {
            Ok::<_, io::Error>(format!("state of {key}"))
        });

        let snapshot = fetcher.fetch("exporter").await.unwrap();
        assert_eq!(snapshot, "state of exporter");
    }

    #[tokio::test]
    async fn test_closure_error() {
        let calls = AtomicU32::new(0);
        let fetcher = FnFetcher::new(|_key: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err::<u32, _>(io::Error::new(io::ErrorKind::TimedOut, "timed out")) }
        });

        let err = fetcher.fetch("exporter").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
        // Repeated calls are fine
        assert!(fetcher.fetch("exporter").await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
