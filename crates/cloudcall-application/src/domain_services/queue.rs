//! Bounded request queue
//!
//! Limits how many provider calls execute at once. A submitted request holds
//! one permit for its whole lifetime, retries and backoff sleeps included, so
//! a request stuck in backoff keeps its slot.
//!
//! Tasks start running as soon as they are submitted: the caller may drop or
//! poll the returned future later without affecting the request. Waiting
//! requests are admitted in the order they asked for a permit.

use std::future::Future;
use std::sync::Arc;

use cloudcall_domain::error::{Error, Result};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::constants::DEFAULT_CONCURRENCY;

/// Fixed-width queue of in-flight provider calls
#[derive(Debug, Clone)]
pub struct RequestQueue {
    permits: Arc<Semaphore>,
    width: usize,
}

impl Default for RequestQueue {
    fn default() -> Self {
        Self::new(DEFAULT_CONCURRENCY)
    }
}

impl RequestQueue {
    /// Create a queue admitting `width` concurrent tasks (at least one)
    pub fn new(width: usize) -> Self {
        let width = width.max(1);
        Self {
            permits: Arc::new(Semaphore::new(width)),
            width,
        }
    }

    /// Maximum number of concurrently executing tasks
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of tasks currently holding a permit
    pub fn in_flight(&self) -> usize {
        self.width - self.permits.available_permits()
    }

    /// Submit a task and return a handle to its result
    ///
    /// The task is spawned immediately and waits for a permit before it
    /// runs. Must be called from within a Tokio runtime.
    pub fn submit<T, Fut>(&self, task: Fut) -> impl Future<Output = Result<T>> + Send + 'static
    where
        T: Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let permits = Arc::clone(&self.permits);
        let handle = tokio::spawn(async move {
            let _permit = permits
                .acquire_owned()
                .await
                .map_err(|e| Error::internal(format!("request queue closed: {e}")))?;
            debug!("request admitted");
            task.await
        });

        async move {
            handle
                .await
                .map_err(|e| Error::internal(format!("request task failed: {e}")))?
        }
    }
}
