//! Service configuration read from the environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3004;
/// Default upload ceiling in megabytes.
pub const DEFAULT_MAX_UPLOAD_MB: usize = 20;

/// Top-level laudo service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaudoConfig {
    /// HTTP server port.
    pub port: u16,
    /// Optional JSON file overriding the built-in keyword tables.
    pub keywords_file: Option<PathBuf>,
    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for LaudoConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            keywords_file: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl LaudoConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// `LAUDO_PORT` wins over `PORT`; unparsable numbers fall back to the
    /// defaults. A keywords file that is named but missing is an error, so a
    /// typo never silently reverts to the built-in tables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("LAUDO_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let keywords_file = match lookup("LAUDO_KEYWORDS_FILE") {
            Some(raw) if !raw.trim().is_empty() => {
                let path = PathBuf::from(raw.trim());
                if !path.is_file() {
                    return Err(Error::Config(format!(
                        "keywords file not found: {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            _ => None,
        };

        let max_upload_mb = lookup("LAUDO_MAX_UPLOAD_MB")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|mb| *mb > 0)
            .unwrap_or(DEFAULT_MAX_UPLOAD_MB);

        Ok(Self {
            port,
            keywords_file,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
        })
    }
}
