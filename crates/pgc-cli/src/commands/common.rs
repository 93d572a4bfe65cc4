//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use pgc_core::config::{Config, ConfigOverrides};
use pgc_core::{CoreError, TableName};
use pgc_db::{Database, PostgresBackend};
use std::path::Path;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Resolve the layered configuration from the global CLI arguments.
///
/// Flag and environment values arrive pre-merged by clap; this adds the
/// config file and built-in default layers underneath them.
pub(crate) fn resolve_config(global: &GlobalArgs) -> Result<Config> {
    let overrides = ConfigOverrides {
        database_url: global.database_url.clone(),
        source_url: global.source_url.clone(),
    };
    Config::resolve(
        Path::new(&global.project_dir),
        global.config.as_deref().map(Path::new),
        &overrides,
    )
    .context("Failed to resolve configuration")
}

/// Connect to the destination database (catalog, triggers, copy target).
pub(crate) async fn connect_dest(config: &Config) -> Result<Arc<dyn Database>> {
    let backend = PostgresBackend::connect(&config.database_url)
        .await
        .context("Failed to connect to destination database")?;
    log::debug!("connected to {} destination database", backend.db_type());
    Ok(Arc::new(backend))
}

/// Connect to the source database for the copy phase.
pub(crate) async fn connect_source(config: &Config) -> Result<Arc<dyn Database>> {
    let backend = PostgresBackend::connect(&config.source_url)
        .await
        .context("Failed to connect to source database")?;
    log::debug!("connected to {} source database", backend.db_type());
    Ok(Arc::new(backend))
}

/// Parse a table name argument, rejecting the empty string.
pub(crate) fn parse_table_name(raw: &str) -> Result<TableName> {
    TableName::try_new(raw).ok_or_else(|| {
        CoreError::EmptyName {
            context: "table argument".to_string(),
        }
        .into()
    })
}
