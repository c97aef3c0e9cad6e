//! MongoDB backend implementation.
//!
//! Runs assembled variant queries as a single `find` against one variants
//! collection. The filter document comes from
//! [`VariantQuery::to_document`](crate::query::VariantQuery::to_document); the
//! sort, skip and limit come from the query's fixed sort and pagination.
//!
//! A compound index on `(chr, start, end)` lets the region-overlap clauses
//! and the coordinate sort use the same index.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use variant_persistence::backends::mongodb::{MongoConfig, MongoExecutor};
//! use variant_persistence::core::VariantSearchService;
//!
//! let config = MongoConfig {
//!     uri: "mongodb://localhost:27017".to_string(),
//!     database: "eva_hsapiens_grch37".to_string(),
//!     ..Default::default()
//! };
//! let executor = MongoExecutor::connect(config).await?;
//! let service = VariantSearchService::new(Arc::new(executor));
//! ```

mod backend;

pub use backend::{MongoConfig, MongoExecutor};
