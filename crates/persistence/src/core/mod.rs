//! Core search abstractions.
//!
//! - [`QueryExecutor`] - The storage executor seam
//! - [`VariantSearchService`] - Assembles queries and runs them on an executor
//! - [`BackendKind`] - Identifies executor backends
//!
//! ```text
//! FilterSpecification
//!     └── VariantQueryBuilder::build ──> VariantQuery
//!             └── QueryExecutor::execute ──> Vec<VariantRecord>
//! ```

pub mod backend;
pub mod executor;
pub mod service;

pub use backend::BackendKind;
pub use executor::QueryExecutor;
pub use service::VariantSearchService;
