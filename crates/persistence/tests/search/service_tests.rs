//! Tests for the service/executor contract.

use std::sync::Arc;

use serde_json::json;

use variant_persistence::core::QueryExecutor;
use variant_persistence::types::{FilterSpecification, Pagination, Region, VariantFilters};
use variant_persistence::{BackendError, StorageError, VariantSearchService};

use crate::common::{FailingExecutor, RecordingExecutor, VariantFixture, executor_with};

#[tokio::test]
async fn test_executor_called_once_per_search() {
    let executor = Arc::new(RecordingExecutor::new(executor_with(&[
        VariantFixture::new("1", 100).with_ids(&["rs1"]),
    ])));
    let service = VariantSearchService::new(Arc::clone(&executor));

    service
        .search_by_id("rs1", VariantFilters::new(), None)
        .await
        .unwrap();
    assert_eq!(executor.calls(), 1);
}

#[tokio::test]
async fn test_executor_receives_assembled_query() {
    let executor = Arc::new(RecordingExecutor::new(executor_with(&[])));
    let service = VariantSearchService::new(Arc::clone(&executor));

    let spec = FilterSpecification::by_regions(vec![Region::new("1", 1_000_000, 2_000_000).unwrap()])
        .with_filters(VariantFilters::new().with_studies(["PRJEB1"]));
    service.search(&spec).await.unwrap();

    let query = executor.last_query().unwrap();
    assert_eq!(query, service.build_query(&spec).unwrap());
    assert_eq!(
        query.to_document(),
        json!({
            "$and": [
                {
                    "$or": [{
                        "$and": [
                            { "chr": "1" },
                            { "start": { "$lte": 2_000_000 } },
                            { "start": { "$gt": 0 } },
                            { "end": { "$gte": 1_000_000 } },
                            { "end": { "$lt": 3_000_000 } }
                        ]
                    }]
                },
                { "files.sid": { "$in": ["PRJEB1"] } }
            ]
        })
    );
    assert_eq!(query.sort_document(), json!({ "chr": 1, "start": 1 }));
    assert_eq!(query.pagination(), Pagination::new(0, 10));
}

#[tokio::test]
async fn test_backend_error_passes_through() {
    let service = VariantSearchService::new(Arc::new(FailingExecutor));

    let err = service
        .search_by_id("rs1", VariantFilters::new(), None)
        .await
        .unwrap_err();

    assert!(!err.is_construction_error());
    match err {
        StorageError::Backend(BackendError::ConnectionFailed { message, .. }) => {
            assert_eq!(message, "store unreachable")
        }
        other => panic!("Expected ConnectionFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_zero_page_size_rejected_before_execution() {
    let executor = Arc::new(RecordingExecutor::new(executor_with(&[])));
    let service = VariantSearchService::new(Arc::clone(&executor));

    let err = service
        .search_by_id("rs1", VariantFilters::new(), Some(Pagination::new(0, 0)))
        .await
        .unwrap_err();
    assert!(err.is_construction_error());
    assert_eq!(executor.calls(), 0);
}

#[tokio::test]
async fn test_service_over_trait_object() {
    let executor: Arc<dyn QueryExecutor> = executor_with(&[VariantFixture::new("1", 100)]);
    let service = VariantSearchService::new(executor);

    let page = service
        .search_by_regions(vec!["1".parse().unwrap()], VariantFilters::new(), None)
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
}
