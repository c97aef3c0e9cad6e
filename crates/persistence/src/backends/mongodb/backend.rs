//! MongoDB executor implementation.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::core::{BackendKind, QueryExecutor};
use crate::error::{BackendError, StorageResult};
use crate::query::{SortDirection, VariantQuery};
use crate::types::VariantRecord;

/// Configuration for the MongoDB executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConfig {
    /// Connection string (default: `"mongodb://localhost:27017"`).
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Database holding the variants collection.
    pub database: String,

    /// Variants collection name (default: `"variants"`).
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Application name reported to the server (default: `"variant-search"`).
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Server selection timeout in milliseconds (default: 30000).
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_collection() -> String {
    "variants".to_string()
}

fn default_app_name() -> String {
    "variant-search".to_string()
}

fn default_server_selection_timeout_ms() -> u64 {
    30000
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            database: "variants".to_string(),
            collection: default_collection(),
            app_name: default_app_name(),
            server_selection_timeout_ms: default_server_selection_timeout_ms(),
        }
    }
}

/// Executor running variant queries against a MongoDB collection.
///
/// The client is cheap to clone and pools its own connections; the executor
/// never closes it.
pub struct MongoExecutor {
    collection: Collection<Document>,
    config: MongoConfig,
}

impl Debug for MongoExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoExecutor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MongoExecutor {
    /// Connects a new client with the given configuration.
    pub async fn connect(config: MongoConfig) -> StorageResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            BackendError::ConnectionFailed {
                backend_name: "mongodb".to_string(),
                message: e.to_string(),
            }
        })?;
        options.app_name = Some(config.app_name.clone());
        options.server_selection_timeout =
            Some(Duration::from_millis(config.server_selection_timeout_ms));

        let client = Client::with_options(options)?;
        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Initialized MongoDB variant executor"
        );
        Ok(Self::with_client(&client, config))
    }

    /// Creates an executor on an existing client.
    pub fn with_client(client: &Client, config: MongoConfig) -> Self {
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);
        Self { collection, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MongoConfig {
        &self.config
    }
}

/// Converts the rendered filter of a query into a BSON document.
fn filter_document(query: &VariantQuery) -> StorageResult<Document> {
    Ok(mongodb::bson::to_document(&query.to_document())?)
}

/// Builds the sort document, preserving key order.
fn sort_document(query: &VariantQuery) -> Document {
    let mut sort = Document::new();
    for key in query.sort() {
        let direction = match key.direction {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        };
        sort.insert(key.field, direction);
    }
    sort
}

#[async_trait]
impl QueryExecutor for MongoExecutor {
    fn backend_kind(&self) -> BackendKind {
        BackendKind::MongoDB
    }

    async fn execute(&self, query: &VariantQuery) -> StorageResult<Vec<VariantRecord>> {
        let filter = filter_document(query)?;
        let pagination = query.pagination();

        tracing::debug!(
            collection = %self.config.collection,
            skip = pagination.skip(),
            limit = pagination.limit(),
            "Executing MongoDB variant query"
        );

        let mut cursor = self
            .collection
            .find(filter)
            .sort(sort_document(query))
            .skip(pagination.skip())
            .limit(i64::from(pagination.limit()))
            .await?;

        let mut variants = Vec::with_capacity(pagination.limit() as usize);
        while cursor.advance().await? {
            let document: Document = cursor.deserialize_current()?;
            variants.push(VariantRecord::new(
                Bson::Document(document).into_relaxed_extjson(),
            ));
        }

        Ok(variants)
    }
}
