use std::fs;
use std::path::{Path, PathBuf};

use scene::CountryStore;
use serde_json::Value;

use crate::store_build::{CountryDataError, StoreBuildConfig, build_store};

/// The whole document was unusable. Unlike [`CountryDataError`] this aborts
/// the load; the caller is expected to keep rendering without labels.
#[derive(Debug)]
pub enum CountryLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    NotAnArray {
        path: PathBuf,
    },
}

impl std::fmt::Display for CountryLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountryLoadError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            CountryLoadError::Json { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            CountryLoadError::NotAnArray { path } => {
                write!(f, "{}: expected a JSON array of country entries", path.display())
            }
        }
    }
}

impl std::error::Error for CountryLoadError {}

/// Reads a country-info document from disk and builds the store in one
/// batch. Per-entry problems are returned as diagnostics, not errors.
pub fn load_country_file(
    path: impl AsRef<Path>,
    config: &StoreBuildConfig,
) -> Result<(CountryStore, Vec<CountryDataError>), CountryLoadError> {
    let path = path.as_ref();
    let payload = fs::read_to_string(path).map_err(|source| CountryLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value =
        serde_json::from_str(&payload).map_err(|source| CountryLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = document.as_array().ok_or(CountryLoadError::NotAnArray {
        path: path.to_path_buf(),
    })?;

    Ok(build_store(entries, config))
}
