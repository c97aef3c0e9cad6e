//! Filter-to-query translation.
//!
//! This module turns a [`FilterSpecification`](crate::types::FilterSpecification)
//! into one immutable [`VariantQuery`]:
//!
//! - [`region`] - Widened region-overlap predicates
//! - [`relational`] - Score threshold predicates
//! - [`builder`] - The assembly pipeline
//! - [`predicate`] - The backend-neutral predicate tree
//!
//! # Example
//!
//! ```
//! use variant_persistence::query::VariantQueryBuilder;
//! use variant_persistence::types::{FilterSpecification, Region};
//! use serde_json::json;
//!
//! let spec = FilterSpecification::by_regions(vec![Region::new("1", 1_000_000, 2_000_000)?]);
//! let query = VariantQueryBuilder::new().build(&spec)?;
//!
//! assert_eq!(query.pagination().skip(), 0);
//! assert_eq!(query.pagination().limit(), 10);
//! assert_eq!(query.sort_document(), json!({ "chr": 1, "start": 1 }));
//! # Ok::<(), variant_persistence::error::QueryError>(())
//! ```

pub mod builder;
pub mod predicate;
pub mod region;
pub mod relational;

use serde_json::{Map, Value, json};

use crate::types::{Pagination, fields};

pub use builder::{VariantQueryBuilder, decode_consequence_type};
pub use predicate::{Comparison, Operand, Predicate};
pub use region::{REGION_MARGIN, build_overlap_predicate};
pub use relational::build_relational_predicate;

/// Direction of a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending (smallest first).
    Ascending,
    /// Descending (largest first).
    Descending,
}

/// One key of a sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortField {
    /// Stored document field.
    pub field: &'static str,
    /// Sort direction.
    pub direction: SortDirection,
}

/// The sort order of every variant query: chromosome, then start coordinate.
///
/// Fixed so that repeated identical searches paginate identically even when
/// the store has no intrinsic order.
pub const COORDINATE_SORT: [SortField; 2] = [
    SortField {
        field: fields::CHROMOSOME,
        direction: SortDirection::Ascending,
    },
    SortField {
        field: fields::START,
        direction: SortDirection::Ascending,
    },
];

/// An assembled variant query.
///
/// Holds the AND-combined clauses, the fixed sort order and the page to
/// return. Built by [`VariantQueryBuilder`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantQuery {
    clauses: Vec<Predicate>,
    pagination: Pagination,
}

impl VariantQuery {
    pub(crate) fn new(clauses: Vec<Predicate>, pagination: Pagination) -> Self {
        Self {
            clauses,
            pagination,
        }
    }

    /// Returns the AND-combined clauses. The base clause comes first.
    pub fn clauses(&self) -> &[Predicate] {
        &self.clauses
    }

    /// Returns the query as a single predicate.
    pub fn predicate(&self) -> Predicate {
        match self.clauses.as_slice() {
            [single] => single.clone(),
            clauses => Predicate::And(clauses.to_vec()),
        }
    }

    /// Returns the sort order.
    pub fn sort(&self) -> &'static [SortField] {
        &COORDINATE_SORT
    }

    /// Returns the page to fetch.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Returns true if a stored document satisfies every clause.
    pub fn matches(&self, document: &Value) -> bool {
        self.clauses.iter().all(|clause| clause.matches(document))
    }

    /// Renders the filter as a MongoDB filter document.
    pub fn to_document(&self) -> Value {
        self.predicate().to_document()
    }

    /// Renders the sort order as a MongoDB sort document.
    pub fn sort_document(&self) -> Value {
        let mut sort = Map::new();
        for key in self.sort() {
            let direction = match key.direction {
                SortDirection::Ascending => 1,
                SortDirection::Descending => -1,
            };
            sort.insert(key.field.to_string(), json!(direction));
        }
        Value::Object(sort)
    }
}
