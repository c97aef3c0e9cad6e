//! In-memory executor.
//!
//! Holds variant documents in a `Vec` and evaluates queries directly against
//! them. Field paths, array matching and sort order follow document-store
//! semantics, so results agree with the MongoDB executor for the same data.
//! Useful for tests, fixtures and small static datasets.

use std::cmp::Ordering;
use std::fmt::Debug;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use crate::core::{BackendKind, QueryExecutor};
use crate::error::{BackendError, StorageResult};
use crate::query::predicate::resolve_path;
use crate::query::{SortDirection, SortField, VariantQuery};
use crate::types::VariantRecord;

/// Executor over an in-process list of variant documents.
#[derive(Default)]
pub struct MemoryExecutor {
    documents: RwLock<Vec<VariantRecord>>,
}

impl Debug for MemoryExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryExecutor")
            .field("documents", &self.documents.read().len())
            .finish()
    }
}

impl MemoryExecutor {
    /// Creates an empty executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an executor holding the given documents.
    pub fn with_documents<I>(documents: I) -> StorageResult<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let executor = Self::new();
        for document in documents {
            executor.insert(document)?;
        }
        Ok(executor)
    }

    /// Creates an executor from a JSON array of documents.
    pub fn from_json_array(value: Value) -> StorageResult<Self> {
        match value {
            Value::Array(documents) => Self::with_documents(documents),
            _ => Err(BackendError::SerializationError {
                message: "expected a JSON array of variant documents".to_string(),
            }
            .into()),
        }
    }

    /// Adds a document. Documents must be JSON objects.
    pub fn insert(&self, document: Value) -> StorageResult<()> {
        if !document.is_object() {
            return Err(BackendError::SerializationError {
                message: "variant document must be a JSON object".to_string(),
            }
            .into());
        }
        self.documents.write().push(VariantRecord::new(document));
        Ok(())
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Returns true if no documents are stored.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

#[async_trait]
impl QueryExecutor for MemoryExecutor {
    fn backend_kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    async fn execute(&self, query: &VariantQuery) -> StorageResult<Vec<VariantRecord>> {
        let mut matched: Vec<VariantRecord> = self
            .documents
            .read()
            .iter()
            .filter(|record| query.matches(record.document()))
            .cloned()
            .collect();

        // Stable sort: ties keep insertion order.
        matched.sort_by(|a, b| compare_documents(a.document(), b.document(), query.sort()));

        let pagination = query.pagination();
        let skip = usize::try_from(pagination.skip()).unwrap_or(usize::MAX);
        let limit = pagination.limit() as usize;

        tracing::debug!(
            matched = matched.len(),
            skip = pagination.skip(),
            limit,
            "Executed in-memory variant query"
        );

        Ok(matched.into_iter().skip(skip).take(limit).collect())
    }
}

fn compare_documents(a: &Value, b: &Value, sort: &[SortField]) -> Ordering {
    for key in sort {
        let ordering = compare_sort_values(
            resolve_path(a, key.field).first().copied(),
            resolve_path(b, key.field).first().copied(),
        );
        let ordering = match key.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Orders sort values as a document store does: missing, then numbers, then
/// strings, then everything else.
fn compare_sort_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None | Some(Value::Null) => 0,
            Some(Value::Number(_)) => 1,
            Some(Value::String(_)) => 2,
            Some(_) => 3,
        }
    }

    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => x
                .as_f64()
                .unwrap_or(f64::NAN)
                .total_cmp(&y.as_f64().unwrap_or(f64::NAN)),
        },
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}
