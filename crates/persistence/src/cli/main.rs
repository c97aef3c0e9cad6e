//! `variant-search`: run one variant search and print the page as JSON.

mod args;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use tracing::info;
use variant_persistence::backends::memory::MemoryExecutor;
use variant_persistence::{
    FilterSpecification, SearchConfig, VariantRecord, VariantSearchService,
};

use args::CliConfig;

/// Initializes the tracing subscriber. `RUST_LOG` overrides `level`.
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "variant_persistence={},variant_search={}",
            level, level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Searches documents loaded from a JSON file.
async fn search_file(
    path: &Path,
    config: SearchConfig,
    spec: &FilterSpecification,
) -> anyhow::Result<Vec<VariantRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let documents: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let executor = MemoryExecutor::from_json_array(documents)?;
    info!(path = %path.display(), documents = executor.len(), "Loaded variant documents");

    let service = VariantSearchService::with_config(Arc::new(executor), config)?;
    Ok(service.search(spec).await?)
}

/// Searches a MongoDB variants collection.
#[cfg(feature = "mongodb")]
async fn search_mongodb(
    cli: &CliConfig,
    uri: &str,
    config: SearchConfig,
    spec: &FilterSpecification,
) -> anyhow::Result<Vec<VariantRecord>> {
    use variant_persistence::backends::mongodb::{MongoConfig, MongoExecutor};

    let executor = MongoExecutor::connect(MongoConfig {
        uri: uri.to_string(),
        database: cli.mongodb_database.clone(),
        collection: cli.mongodb_collection.clone(),
        ..Default::default()
    })
    .await?;

    let service = VariantSearchService::with_config(Arc::new(executor), config)?;
    Ok(service.search(spec).await?)
}

#[cfg(feature = "mongodb")]
async fn run(cli: &CliConfig, spec: &FilterSpecification) -> anyhow::Result<Vec<VariantRecord>> {
    if let Some(uri) = &cli.mongodb_uri {
        return search_mongodb(cli, uri, cli.search_config(), spec).await;
    }
    run_file(cli, spec).await
}

#[cfg(not(feature = "mongodb"))]
async fn run(cli: &CliConfig, spec: &FilterSpecification) -> anyhow::Result<Vec<VariantRecord>> {
    run_file(cli, spec).await
}

async fn run_file(
    cli: &CliConfig,
    spec: &FilterSpecification,
) -> anyhow::Result<Vec<VariantRecord>> {
    let path = cli
        .data_file
        .as_deref()
        .context("No variant source configured")?;
    search_file(path, cli.search_config(), spec).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    init_logging(&cli.log_level);

    if let Err(errors) = cli.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(2);
    }

    let spec = cli.filter_specification()?;
    let variants = run(&cli, &spec).await?;
    info!(returned = variants.len(), "Search complete");

    let documents: Vec<Value> = variants
        .into_iter()
        .map(VariantRecord::into_document)
        .collect();
    let output = if cli.pretty {
        serde_json::to_string_pretty(&documents)?
    } else {
        serde_json::to_string(&documents)?
    };
    println!("{}", output);

    Ok(())
}
