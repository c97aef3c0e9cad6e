//! The variant search service.
//!
//! [`VariantSearchService`] is the caller-facing entry point: it assembles a
//! query from a filter specification and hands it to its executor exactly once.
//! A specification that fails to assemble never reaches the executor.

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::error::{QueryError, StorageResult};
use crate::query::{VariantQuery, VariantQueryBuilder};
use crate::types::{FilterSpecification, Pagination, Region, SearchTarget, VariantFilters, VariantRecord};

use super::executor::QueryExecutor;

/// Searches stored variants by identifier or by region.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use variant_persistence::StorageResult;
/// use variant_persistence::backends::memory::MemoryExecutor;
/// use variant_persistence::core::VariantSearchService;
/// use variant_persistence::types::{Region, VariantFilters};
/// use serde_json::json;
///
/// async fn example() -> StorageResult<()> {
///     let executor = Arc::new(MemoryExecutor::new());
///     executor.insert(json!({ "chr": "1", "start": 1500, "end": 1500, "ids": ["rs1"] }))?;
///
///     let service = VariantSearchService::new(executor);
///     let page = service
///         .search_by_regions(vec![Region::new("1", 1000, 2000)?], VariantFilters::new(), None)
///         .await?;
///     assert_eq!(page.len(), 1);
///     Ok(())
/// }
/// ```
pub struct VariantSearchService<E: QueryExecutor + ?Sized> {
    executor: Arc<E>,
    builder: VariantQueryBuilder,
    config: SearchConfig,
}

impl<E: QueryExecutor + ?Sized> VariantSearchService<E> {
    /// Creates a service with the default configuration.
    pub fn new(executor: Arc<E>) -> Self {
        Self::from_parts(executor, SearchConfig::default())
    }

    /// Creates a service with the given configuration.
    ///
    /// Fails with `InvalidArgument` when the configuration does not validate.
    pub fn with_config(executor: Arc<E>, config: SearchConfig) -> StorageResult<Self> {
        config.validate().map_err(|errors| {
            tracing::warn!(errors = ?errors, "Rejected search configuration");
            QueryError::invalid_argument(errors.join("; "))
        })?;
        Ok(Self::from_parts(executor, config))
    }

    fn from_parts(executor: Arc<E>, config: SearchConfig) -> Self {
        let builder = VariantQueryBuilder::new().with_default_page_size(config.default_page_size);
        Self {
            executor,
            builder,
            config,
        }
    }

    /// Returns the executor.
    pub fn executor(&self) -> &Arc<E> {
        &self.executor
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Assembles the query for `spec` without executing it.
    pub fn build_query(&self, spec: &FilterSpecification) -> StorageResult<VariantQuery> {
        self.builder.build(spec).map_err(|err| {
            tracing::warn!(error = %err, "Rejected variant search");
            err.into()
        })
    }

    /// Runs one search and returns one page of variants in coordinate order.
    pub async fn search(&self, spec: &FilterSpecification) -> StorageResult<Vec<VariantRecord>> {
        let query = self.build_query(spec)?;

        if self.config.log_query_documents {
            tracing::debug!(filter = %query.to_document(), "Variant query filter");
        }

        let variants = self.executor.execute(&query).await?;

        tracing::debug!(
            backend = %self.executor.backend_kind(),
            target = target_kind(&spec.target),
            returned = variants.len(),
            "Variant search complete"
        );

        Ok(variants)
    }

    /// Searches variants carrying the identifier `id`.
    pub async fn search_by_id(
        &self,
        id: impl Into<String>,
        filters: VariantFilters,
        pagination: Option<Pagination>,
    ) -> StorageResult<Vec<VariantRecord>> {
        let spec = FilterSpecification {
            target: SearchTarget::ById(id.into()),
            filters,
            pagination,
        };
        self.search(&spec).await
    }

    /// Searches variants overlapping any of `regions`.
    ///
    /// Fails with `InvalidArgument` when `regions` is empty.
    pub async fn search_by_regions(
        &self,
        regions: Vec<Region>,
        filters: VariantFilters,
        pagination: Option<Pagination>,
    ) -> StorageResult<Vec<VariantRecord>> {
        let spec = FilterSpecification {
            target: SearchTarget::ByRegions(regions),
            filters,
            pagination,
        };
        self.search(&spec).await
    }
}

fn target_kind(target: &SearchTarget) -> &'static str {
    match target {
        SearchTarget::ById(_) => "id",
        SearchTarget::ByRegions(_) => "regions",
    }
}
