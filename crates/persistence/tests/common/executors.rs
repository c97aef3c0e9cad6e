//! Instrumented executors.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use variant_persistence::core::{BackendKind, QueryExecutor};
use variant_persistence::error::{BackendError, StorageResult};
use variant_persistence::query::VariantQuery;
use variant_persistence::types::VariantRecord;

/// Wraps an executor and records every query it receives.
pub struct RecordingExecutor<E> {
    inner: Arc<E>,
    calls: AtomicUsize,
    queries: Mutex<Vec<VariantQuery>>,
}

impl<E: QueryExecutor> RecordingExecutor<E> {
    /// Wraps `inner`.
    pub fn new(inner: Arc<E>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Number of `execute` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent query received.
    pub fn last_query(&self) -> Option<VariantQuery> {
        self.queries.lock().last().cloned()
    }
}

#[async_trait]
impl<E: QueryExecutor> QueryExecutor for RecordingExecutor<E> {
    fn backend_kind(&self) -> BackendKind {
        BackendKind::Custom("recording")
    }

    async fn execute(&self, query: &VariantQuery) -> StorageResult<Vec<VariantRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().push(query.clone());
        self.inner.execute(query).await
    }
}

/// An executor whose store is always unreachable.
#[derive(Debug, Default)]
pub struct FailingExecutor;

#[async_trait]
impl QueryExecutor for FailingExecutor {
    fn backend_kind(&self) -> BackendKind {
        BackendKind::Custom("failing")
    }

    async fn execute(&self, _query: &VariantQuery) -> StorageResult<Vec<VariantRecord>> {
        Err(BackendError::ConnectionFailed {
            backend_name: "failing".to_string(),
            message: "store unreachable".to_string(),
        }
        .into())
    }
}
