//! Core types for the persistence layer.
//!
//! - [`Region`] - A genomic search window
//! - [`FilterSpecification`], [`VariantFilters`], [`ScoreFilter`] - Search input
//! - [`Pagination`] - Page-number pagination
//! - [`VariantRecord`] - A stored variant document
//!
//! # Building a Filter Specification
//!
//! ```
//! use variant_persistence::types::{
//!     FilterSpecification, Pagination, Region, RelationalOperator, ScoreFilter, VariantFilters,
//! };
//!
//! let spec = FilterSpecification::by_regions(vec![Region::new("1", 1_000_000, 2_000_000)?])
//!     .with_filters(
//!         VariantFilters::new()
//!             .with_studies(["PRJEB4019"])
//!             .with_consequence_types(["SO:0001583"])
//!             .with_maf(ScoreFilter::new(RelationalOperator::Lt, 0.01)),
//!     )
//!     .with_pagination(Pagination::new(0, 25));
//! # Ok::<(), variant_persistence::error::QueryError>(())
//! ```

mod filter;
mod pagination;
mod region;
mod variant;

pub use filter::{
    FilterSpecification, RelationalOperator, ScoreField, ScoreFilter, SearchTarget, VariantFilters,
};
pub use pagination::{DEFAULT_PAGE_SIZE, Pagination};
pub use region::{Region, parse_regions};
pub use variant::{VariantRecord, fields};
