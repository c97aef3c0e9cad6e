//! Region overlap predicates.
//!
//! A stored variant overlaps a query window `[start, end]` when it lies on the
//! same chromosome and its own `[start, end]` interval intersects the window.
//! The predicate bounds each stored coordinate from both sides so the store can
//! use a compound (chr, start, end) index; the outer bounds are loosened by
//! [`REGION_MARGIN`] so long variants whose stored boundaries sit outside the
//! window are still found.

use crate::error::{QueryError, QueryResult};
use crate::types::{Region, fields};

use super::predicate::Predicate;

/// Distance, in bases, by which the outer overlap bounds are widened.
pub const REGION_MARGIN: i64 = 1_000_000;

/// Builds the OR of the overlap predicates of every region.
///
/// Fails with `InvalidArgument` when `regions` is empty.
pub fn build_overlap_predicate(regions: &[Region]) -> QueryResult<Predicate> {
    if regions.is_empty() {
        return Err(QueryError::invalid_argument(
            "region search requires at least one region",
        ));
    }
    Ok(Predicate::Or(regions.iter().map(region_overlap).collect()))
}

/// Builds the widened overlap predicate of one region.
///
/// ```text
/// chr == r.chr
///   AND r.start - M <  start <= r.end
///   AND r.start     <= end   <  r.end + M
/// ```
pub fn region_overlap(region: &Region) -> Predicate {
    Predicate::And(vec![
        Predicate::eq(fields::CHROMOSOME, region.chromosome()),
        Predicate::lte(fields::START, region.end()),
        Predicate::gt(
            fields::START,
            region.start().saturating_sub(REGION_MARGIN),
        ),
        Predicate::gte(fields::END, region.start()),
        Predicate::lt(fields::END, region.end().saturating_add(REGION_MARGIN)),
    ])
}
