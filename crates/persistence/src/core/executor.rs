//! The storage executor seam.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::query::VariantQuery;
use crate::types::VariantRecord;

use super::backend::BackendKind;

/// Runs assembled variant queries against a backing store.
///
/// Implementations apply the query's filter, its sort order and its page, and
/// return the matching documents in sort order. The executor owns its
/// connection resources; callers only borrow it.
///
/// # Example
///
/// ```ignore
/// use variant_persistence::core::QueryExecutor;
///
/// async fn count_page<E: QueryExecutor>(executor: &E, query: &VariantQuery) -> usize {
///     executor.execute(query).await.map(|page| page.len()).unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Returns the kind of store this executor talks to.
    fn backend_kind(&self) -> BackendKind;

    /// Executes one query and returns one ordered page of documents.
    async fn execute(&self, query: &VariantQuery) -> StorageResult<Vec<VariantRecord>>;
}
