//! Variant Search Persistence Layer
//!
//! This crate translates variant search filters into storage queries and runs
//! them against a document store of genetic variants. A search targets either
//! one variant identifier or a set of genomic regions, may be narrowed by
//! study, consequence type and score thresholds, and always returns one page
//! of results ordered by chromosome and start coordinate.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! variant-persistence = { version = "0.1", features = ["mongodb"] }
//! ```
//!
//! Available features:
//! - `mongodb` - MongoDB query executor
//! - `cli` - The `variant-search` command line tool
//!
//! # Architecture
//!
//! - [`types`] - Regions, filters, pagination and stored variant documents
//! - [`query`] - Filter-to-query translation
//! - [`core`] - The executor seam and the search service
//! - [`backends`] - Executor implementations
//! - [`config`] - Search configuration
//! - [`error`] - Error types for all operations
//!
//! # Quick Start
//!
//! ```
//! use variant_persistence::query::VariantQueryBuilder;
//! use variant_persistence::types::{
//!     FilterSpecification, Pagination, Region, RelationalOperator, ScoreFilter, VariantFilters,
//! };
//! use serde_json::json;
//!
//! let spec = FilterSpecification::by_regions(vec!["1:1000000-2000000".parse::<Region>()?])
//!     .with_filters(
//!         VariantFilters::new().with_sift_score(ScoreFilter::new(RelationalOperator::Lte, 0.05)),
//!     )
//!     .with_pagination(Pagination::new(2, 10));
//!
//! let query = VariantQueryBuilder::new().build(&spec)?;
//! assert_eq!(query.clauses().len(), 2);
//! assert_eq!(query.pagination().skip(), 20);
//! assert_eq!(query.sort_document(), json!({ "chr": 1, "start": 1 }));
//! # Ok::<(), variant_persistence::QueryError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod config;
pub mod core;
pub mod error;
pub mod query;
pub mod types;

// Re-export commonly used types at crate root
pub use config::SearchConfig;
pub use error::{BackendError, QueryError, QueryResult, StorageError, StorageResult};
pub use query::{VariantQuery, VariantQueryBuilder};
pub use types::{
    FilterSpecification, Pagination, Region, RelationalOperator, ScoreFilter, SearchTarget,
    VariantFilters, VariantRecord,
};

// Re-export core traits
pub use core::{BackendKind, QueryExecutor, VariantSearchService};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
