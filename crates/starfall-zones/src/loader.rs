use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use starfall_core::error::ZoneConfigError;
use starfall_core::types::ZoneConfig;

#[derive(Debug, Error)]
pub enum ZoneLoadError {
    #[error("failed to read zone file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse zone definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid zone '{name}': {source}")]
    Invalid {
        name: String,
        #[source]
        source: ZoneConfigError,
    },
}

/// Parse and validate a zone definition from JSON text.
pub fn parse_zone(json: &str) -> Result<ZoneConfig, ZoneLoadError> {
    let zone: ZoneConfig = serde_json::from_str(json)?;
    zone.validate().map_err(|source| ZoneLoadError::Invalid {
        name: zone.name.clone(),
        source,
    })?;
    Ok(zone)
}

/// Read, parse and validate a zone definition file.
pub fn load_zone(path: &Path) -> Result<ZoneConfig, ZoneLoadError> {
    let json = fs::read_to_string(path).map_err(|source| ZoneLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let zone = parse_zone(&json)?;
    debug!("Loaded zone '{}' from {}", zone.name, path.display());
    Ok(zone)
}
