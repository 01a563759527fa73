//! Shared command wiring.

use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{CatalogCache, CatalogClient};
use crate::config::LadleConfig;
use crate::error::Result;
use crate::notebook::NotebookStore;
use crate::storage::FsStorage;

use super::args::Cli;

/// Everything a command needs: resolved config, data directory, and
/// constructors for the stores and the catalog client.
///
/// Precedence for each setting is CLI flag (or its environment
/// variable, via clap), then config file, then built-in default.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: LadleConfig,
    data_dir: PathBuf,
    catalog_url: String,
    offline: bool,
}

impl AppContext {
    /// Resolve the context from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => LadleConfig::load_from(path)?,
            None => LadleConfig::load_default()?,
        };

        let data_dir = cli
            .data_dir
            .clone()
            .unwrap_or_else(|| config.resolved_data_dir());

        let catalog_url = cli
            .catalog_url
            .clone()
            .unwrap_or_else(|| config.catalog.base_url.clone());

        let offline = cli.offline || config.catalog.offline;

        Ok(Self {
            config,
            data_dir,
            catalog_url,
            offline,
        })
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn offline(&self) -> bool {
        self.offline
    }

    /// The notebook store over the data directory.
    pub fn notebook(&self) -> NotebookStore<FsStorage> {
        NotebookStore::new(FsStorage::new(self.data_dir.join("data")))
    }

    /// A catalog client with the response cache attached.
    pub fn catalog(&self) -> CatalogClient {
        CatalogClient::with_timeout(
            self.catalog_url.as_str(),
            Duration::from_secs(self.config.catalog.timeout_secs),
        )
        .with_cache(
            CatalogCache::new(self.data_dir.join("cache")),
            self.config.catalog.cache_ttl_secs,
        )
        .offline(self.offline)
    }
}
