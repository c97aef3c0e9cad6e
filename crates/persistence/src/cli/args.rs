//! Command line configuration for `variant-search`.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VARIANT_SEARCH_DATA_FILE` | - | JSON array of variant documents |
//! | `VARIANT_SEARCH_MONGODB_URI` | - | MongoDB connection string (`mongodb` feature) |
//! | `VARIANT_SEARCH_MONGODB_DATABASE` | variants | MongoDB database |
//! | `VARIANT_SEARCH_MONGODB_COLLECTION` | variants | MongoDB collection |
//! | `VARIANT_SEARCH_PAGE_SIZE` | 10 | Page size |
//! | `VARIANT_SEARCH_LOG_LEVEL` | warn | Log level |

use std::path::PathBuf;

use clap::Parser;
use variant_persistence::types::{
    DEFAULT_PAGE_SIZE, FilterSpecification, Pagination, RelationalOperator, ScoreFilter,
    SearchTarget, VariantFilters, parse_regions,
};
use variant_persistence::{QueryResult, SearchConfig};

/// Searches stored variants by identifier or by genomic region.
#[derive(Debug, Clone, Parser)]
#[command(name = "variant-search")]
#[command(about = "Search genetic variants by identifier or region")]
pub struct CliConfig {
    /// JSON file holding an array of variant documents.
    #[arg(long, env = "VARIANT_SEARCH_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// MongoDB connection string.
    #[cfg(feature = "mongodb")]
    #[arg(long, env = "VARIANT_SEARCH_MONGODB_URI")]
    pub mongodb_uri: Option<String>,

    /// MongoDB database holding the variants collection.
    #[cfg(feature = "mongodb")]
    #[arg(long, env = "VARIANT_SEARCH_MONGODB_DATABASE", default_value = "variants")]
    pub mongodb_database: String,

    /// MongoDB variants collection.
    #[cfg(feature = "mongodb")]
    #[arg(long, env = "VARIANT_SEARCH_MONGODB_COLLECTION", default_value = "variants")]
    pub mongodb_collection: String,

    /// Variant identifier to search for.
    #[arg(long)]
    pub id: Option<String>,

    /// Regions to search (comma-separated, e.g. `1:1000-2000,X`).
    #[arg(long)]
    pub regions: Option<String>,

    /// Study identifiers (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub studies: Vec<String>,

    /// Consequence-type labels (comma-separated, e.g. `SO:0001583`).
    #[arg(long, value_delimiter = ',')]
    pub consequence_types: Vec<String>,

    /// Operator for the minor allele frequency filter.
    #[arg(long)]
    pub maf_operator: Option<RelationalOperator>,

    /// Minor allele frequency threshold.
    #[arg(long, allow_negative_numbers = true)]
    pub maf: Option<f64>,

    /// Operator for the PolyPhen score filter.
    #[arg(long)]
    pub polyphen_operator: Option<RelationalOperator>,

    /// PolyPhen score threshold.
    #[arg(long, allow_negative_numbers = true)]
    pub polyphen: Option<f64>,

    /// Operator for the SIFT score filter.
    #[arg(long)]
    pub sift_operator: Option<RelationalOperator>,

    /// SIFT score threshold.
    #[arg(long, allow_negative_numbers = true)]
    pub sift: Option<f64>,

    /// Zero-based page number.
    #[arg(long)]
    pub page: Option<u32>,

    /// Page token returned by a previous search.
    #[arg(long)]
    pub page_token: Option<String>,

    /// Number of variants per page.
    #[arg(long, env = "VARIANT_SEARCH_PAGE_SIZE", default_value = "10")]
    pub page_size: u32,

    /// Log the filter document of each query at debug level.
    #[arg(long)]
    pub log_query: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "VARIANT_SEARCH_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl CliConfig {
    /// Checks option combinations clap cannot express.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match (&self.id, &self.regions) {
            (None, None) => errors.push("One of --id or --regions is required".to_string()),
            (Some(_), Some(_)) => {
                errors.push("--id and --regions cannot be used together".to_string())
            }
            _ => {}
        }

        if self.page.is_some() && self.page_token.is_some() {
            errors.push("--page and --page-token cannot be used together".to_string());
        }

        if self.page_size == 0 {
            errors.push("Page size cannot be 0".to_string());
        }

        if !self.has_data_source() {
            errors.push("No variant source configured".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    #[cfg(feature = "mongodb")]
    fn has_data_source(&self) -> bool {
        self.data_file.is_some() || self.mongodb_uri.is_some()
    }

    #[cfg(not(feature = "mongodb"))]
    fn has_data_source(&self) -> bool {
        self.data_file.is_some()
    }

    /// Builds the filter specification described by the arguments.
    pub fn filter_specification(&self) -> QueryResult<FilterSpecification> {
        let target = match (&self.id, &self.regions) {
            (Some(id), _) => SearchTarget::ById(id.clone()),
            (None, Some(regions)) => SearchTarget::ByRegions(parse_regions(regions)?),
            (None, None) => SearchTarget::ByRegions(Vec::new()),
        };

        let filters = VariantFilters::new()
            .with_studies(self.studies.iter().cloned())
            .with_consequence_types(self.consequence_types.iter().cloned())
            .with_maf(score_filter(self.maf_operator, self.maf))
            .with_polyphen_score(score_filter(self.polyphen_operator, self.polyphen))
            .with_sift_score(score_filter(self.sift_operator, self.sift));

        let pagination = match (self.page, self.page_token.as_deref()) {
            (Some(page), _) => Pagination::new(page, self.page_size),
            (None, token) => Pagination::from_page_token(token, self.page_size),
        };

        Ok(FilterSpecification::new(target)
            .with_filters(filters)
            .with_pagination(pagination))
    }

    /// Returns the search service configuration.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            default_page_size: DEFAULT_PAGE_SIZE,
            log_query_documents: self.log_query,
        }
    }
}

fn score_filter(operator: Option<RelationalOperator>, value: Option<f64>) -> ScoreFilter {
    ScoreFilter {
        operator: operator.unwrap_or_default(),
        value,
    }
}
