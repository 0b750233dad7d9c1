//! Shared application state.

use std::sync::Arc;

use laudo_core::{Error, LaudoConfig, Result};
use laudo_extract::{ExcerptExtractor, KeywordTables};
use parking_lot::RwLock;
use tracing::info;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: LaudoConfig,
    /// Swapped wholesale on reload; handlers clone the `Arc` and drop the lock
    /// before doing any work.
    extractor: RwLock<Arc<ExcerptExtractor>>,
}

impl AppState {
    /// Build state, loading the configured keyword file if there is one.
    pub fn new(config: LaudoConfig) -> Result<Self> {
        let tables = match &config.keywords_file {
            Some(path) => KeywordTables::load(path)?,
            None => {
                info!("Using built-in keyword tables");
                KeywordTables::default()
            }
        };
        Ok(Self::with_tables(config, tables))
    }

    pub fn with_tables(config: LaudoConfig, tables: KeywordTables) -> Self {
        Self {
            config,
            extractor: RwLock::new(Arc::new(ExcerptExtractor::new(tables))),
        }
    }

    /// Current extractor snapshot.
    pub fn extractor(&self) -> Arc<ExcerptExtractor> {
        self.extractor.read().clone()
    }

    /// Re-read the configured keyword file. On failure the old tables stay active.
    pub fn reload_tables(&self) -> Result<()> {
        let path = self
            .config
            .keywords_file
            .as_ref()
            .ok_or_else(|| Error::Config("no keywords file configured".into()))?;
        let tables = KeywordTables::load(path)?;
        *self.extractor.write() = Arc::new(ExcerptExtractor::new(tables));
        info!("Keyword tables reloaded from {}", path.display());
        Ok(())
    }
}
