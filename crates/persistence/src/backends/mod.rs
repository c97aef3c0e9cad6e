//! Query executor implementations.
//!
//! Each executor runs an assembled [`VariantQuery`](crate::query::VariantQuery)
//! against one store. Store-backed executors are gated behind feature flags.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | (always) | In-process documents, for tests and small static datasets |
//! | MongoDB | `mongodb` | Variants collection in a MongoDB database |
//!
//! # Example
//!
//! ```
//! use variant_persistence::backends::memory::MemoryExecutor;
//! use serde_json::json;
//!
//! let executor = MemoryExecutor::from_json_array(json!([
//!     { "chr": "1", "start": 1500, "end": 1500, "ids": ["rs1"] }
//! ]))?;
//! assert_eq!(executor.len(), 1);
//! # Ok::<(), variant_persistence::StorageError>(())
//! ```

pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongodb;
