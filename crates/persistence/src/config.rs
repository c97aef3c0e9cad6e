//! Configuration for the variant search service.
//!
//! [`SearchConfig`] is plain serde data so it can be embedded in a larger
//! application config file. Missing fields fall back to their defaults.
//!
//! ```
//! use variant_persistence::config::SearchConfig;
//!
//! let config: SearchConfig = serde_json::from_str(r#"{ "default_page_size": 25 }"#).unwrap();
//! assert_eq!(config.default_page_size, 25);
//! assert!(!config.log_query_documents);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_PAGE_SIZE;

/// Configuration for [`VariantSearchService`](crate::core::VariantSearchService).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Page size used when a search requests no page (default: 10).
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Log the rendered filter document of every query at debug level
    /// (default: false).
    #[serde(default)]
    pub log_query_documents: bool,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            log_query_documents: false,
        }
    }
}

impl SearchConfig {
    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
