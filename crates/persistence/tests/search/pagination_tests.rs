//! Tests for page-number pagination and result ordering.

use std::sync::Arc;

use variant_persistence::types::{Pagination, Region, VariantFilters, VariantRecord};
use variant_persistence::{SearchConfig, VariantSearchService};

use crate::common::{RecordingExecutor, VariantFixture, consecutive_variants, executor_with};

fn starts(variants: &[VariantRecord]) -> Vec<i64> {
    variants.iter().filter_map(VariantRecord::start).collect()
}

fn chr1() -> Vec<Region> {
    vec![Region::whole_chromosome("1").unwrap()]
}

// ============================================================================
// Page Size Tests
// ============================================================================

#[tokio::test]
async fn test_default_page_is_first_ten() {
    let executor = executor_with(&consecutive_variants(15, 1000));
    let service = VariantSearchService::new(executor);

    let page = service
        .search_by_regions(chr1(), VariantFilters::new(), None)
        .await
        .unwrap();
    assert_eq!(starts(&page), (1000..1010).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_configured_default_page_size() {
    let executor = executor_with(&consecutive_variants(15, 1000));
    let config = SearchConfig {
        default_page_size: 4,
        ..Default::default()
    };
    let service = VariantSearchService::with_config(executor, config).unwrap();

    let page = service
        .search_by_regions(chr1(), VariantFilters::new(), None)
        .await
        .unwrap();
    assert_eq!(page.len(), 4);
}

#[tokio::test]
async fn test_zero_default_page_size_rejected_at_construction() {
    let config = SearchConfig {
        default_page_size: 0,
        ..Default::default()
    };
    let result = VariantSearchService::with_config(executor_with(&[]), config);
    assert!(matches!(result, Err(ref err) if err.is_construction_error()));
}

#[tokio::test]
async fn test_third_page_returns_positions_twenty_to_twenty_nine() {
    let executor = executor_with(&consecutive_variants(35, 1000));
    let service = VariantSearchService::new(executor);

    let page = service
        .search_by_regions(chr1(), VariantFilters::new(), Some(Pagination::new(2, 10)))
        .await
        .unwrap();
    assert_eq!(starts(&page), (1020..1030).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_page_past_end_is_empty() {
    let executor = executor_with(&consecutive_variants(5, 1000));
    let service = VariantSearchService::new(executor);

    let page = service
        .search_by_regions(chr1(), VariantFilters::new(), Some(Pagination::new(1, 10)))
        .await
        .unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_pages_do_not_overlap() {
    let executor = executor_with(&consecutive_variants(12, 1000));
    let service = VariantSearchService::new(executor);

    let first = Pagination::new(0, 5);
    let mut seen = Vec::new();
    let mut pagination = first;
    loop {
        let page = service
            .search_by_regions(chr1(), VariantFilters::new(), Some(pagination))
            .await
            .unwrap();
        if page.is_empty() {
            break;
        }
        seen.extend(starts(&page));
        pagination = pagination.next();
    }
    assert_eq!(seen, (1000..1012).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_page_token_round_trip() {
    let executor = executor_with(&consecutive_variants(8, 1000));
    let service = VariantSearchService::new(executor);

    let first = Pagination::from_page_token(None, 5);
    let token = first.next_page_token(8).expect("Expected a second page");
    let second = Pagination::from_page_token(Some(&token), 5);
    assert_eq!(second.next_page_token(8), None);

    let page = service
        .search_by_regions(chr1(), VariantFilters::new(), Some(second))
        .await
        .unwrap();
    assert_eq!(starts(&page), (1005..1008).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_requested_page_is_passed_verbatim() {
    let executor = Arc::new(RecordingExecutor::new(executor_with(&[])));
    let service = VariantSearchService::new(Arc::clone(&executor));

    service
        .search_by_id("rs1", VariantFilters::new(), Some(Pagination::new(7, 3)))
        .await
        .unwrap();

    let query = executor.last_query().unwrap();
    assert_eq!(query.pagination(), Pagination::new(7, 3));
    assert_eq!(query.pagination().skip(), 21);
    assert_eq!(query.pagination().limit(), 3);
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[tokio::test]
async fn test_order_is_independent_of_insertion_order() {
    let ordered = vec![
        VariantFixture::new("1", 10),
        VariantFixture::new("1", 20),
        VariantFixture::new("1", 30),
        VariantFixture::new("2", 5),
    ];
    let mut reversed = ordered.clone();
    reversed.reverse();

    let first = VariantSearchService::new(executor_with(&ordered))
        .search_by_regions(
            vec![Region::whole_chromosome("1").unwrap(), Region::whole_chromosome("2").unwrap()],
            VariantFilters::new(),
            None,
        )
        .await
        .unwrap();
    let second = VariantSearchService::new(executor_with(&reversed))
        .search_by_regions(
            vec![Region::whole_chromosome("2").unwrap(), Region::whole_chromosome("1").unwrap()],
            VariantFilters::new(),
            None,
        )
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(starts(&first), vec![10, 20, 30, 5]);
}

#[tokio::test]
async fn test_repeated_search_is_identical() {
    let executor = executor_with(&consecutive_variants(30, 1000));
    let service = VariantSearchService::new(executor);
    let pagination = Some(Pagination::new(1, 7));

    let a = service
        .search_by_regions(chr1(), VariantFilters::new(), pagination)
        .await
        .unwrap();
    let b = service
        .search_by_regions(chr1(), VariantFilters::new(), pagination)
        .await
        .unwrap();
    assert_eq!(a, b);
}
