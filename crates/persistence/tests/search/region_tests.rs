//! Tests for region searches.

use std::sync::Arc;

use variant_persistence::types::{Region, VariantFilters, parse_regions};
use variant_persistence::{QueryError, StorageError, VariantSearchService};

use crate::common::{RecordingExecutor, VariantFixture, executor_with};

fn positions(variants: &[variant_persistence::VariantRecord]) -> Vec<(String, i64)> {
    variants
        .iter()
        .map(|v| {
            (
                v.chromosome().unwrap_or_default().to_string(),
                v.start().unwrap_or_default(),
            )
        })
        .collect()
}

// ============================================================================
// Overlap Tests
// ============================================================================

#[tokio::test]
async fn test_region_search_end_to_end() {
    let executor = executor_with(&[
        VariantFixture::new("1", 1_500_000),
        VariantFixture::spanning("1", 500_000, 1_200_000),
        VariantFixture::new("1", 999_999),
        VariantFixture::new("1", 2_000_001),
        VariantFixture::new("2", 1_500_000),
        VariantFixture::new("1", 1_000_000),
    ]);
    let service = VariantSearchService::new(executor);

    let page = service
        .search_by_regions(
            vec![Region::new("1", 1_000_000, 2_000_000).unwrap()],
            VariantFilters::new(),
            None,
        )
        .await
        .unwrap();

    assert_eq!(
        positions(&page),
        vec![
            ("1".to_string(), 500_000),
            ("1".to_string(), 1_000_000),
            ("1".to_string(), 1_500_000),
        ]
    );
}

#[tokio::test]
async fn test_variant_starting_beyond_margin_is_missed() {
    // Starts more than one margin before the window, so the widened bounds
    // exclude it even though it overlaps.
    let executor = executor_with(&[VariantFixture::spanning("1", 500_000, 2_000_050)]);
    let service = VariantSearchService::new(executor);

    let page = service
        .search_by_regions(
            vec![Region::new("1", 2_000_000, 2_000_100).unwrap()],
            VariantFilters::new(),
            None,
        )
        .await
        .unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_multiple_regions_sorted_by_chromosome_then_start() {
    let executor = executor_with(&[
        VariantFixture::new("X", 300),
        VariantFixture::new("2", 150),
        VariantFixture::new("10", 120),
        VariantFixture::new("2", 110),
        VariantFixture::new("3", 150),
    ]);
    let service = VariantSearchService::new(executor);

    let regions = parse_regions("X:100-400, 2:100-200,10:100-200").unwrap();
    let page = service
        .search_by_regions(regions, VariantFilters::new(), None)
        .await
        .unwrap();

    assert_eq!(
        positions(&page),
        vec![
            ("10".to_string(), 120),
            ("2".to_string(), 110),
            ("2".to_string(), 150),
            ("X".to_string(), 300),
        ]
    );
}

#[tokio::test]
async fn test_whole_chromosome_region() {
    let executor = executor_with(&[
        VariantFixture::new("7", 1),
        VariantFixture::new("7", 159_000_000),
        VariantFixture::new("8", 10),
    ]);
    let service = VariantSearchService::new(executor);

    let page = service
        .search_by_regions(vec!["7".parse().unwrap()], VariantFilters::new(), None)
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
}

// ============================================================================
// Rejection Tests
// ============================================================================

#[tokio::test]
async fn test_empty_region_list_is_rejected_before_execution() {
    let executor = Arc::new(RecordingExecutor::new(executor_with(&[
        VariantFixture::new("1", 100),
    ])));
    let service = VariantSearchService::new(Arc::clone(&executor));

    let err = service
        .search_by_regions(vec![], VariantFilters::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StorageError::Query(QueryError::InvalidArgument { .. })
    ));
    assert_eq!(executor.calls(), 0);
}
