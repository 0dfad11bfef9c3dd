use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pawfect_core::{
    AnimalId, AnimalRecord, CatalogProvider, FetchedCatalog, InvalidReason, InvalidRecord,
    ProviderError,
};
use pawfect_logging::{pawfect_debug, pawfect_info, pawfect_warn};
use serde::Deserialize;
use serde_json::Value;

use crate::CatalogEntry;

/// Reads the catalog from a JSON array of [`CatalogEntry`] on every fetch.
///
/// Entries that cannot be mapped are rejected one by one; only an unreadable
/// file or a document that is not a JSON array fails the fetch.
#[derive(Debug, Clone)]
pub struct JsonCatalogProvider {
    path: PathBuf,
}

impl JsonCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonCatalogProvider {
    fn fetch_animals(&self) -> Result<Vec<AnimalRecord>, ProviderError> {
        let fetched = self.fetch_catalog()?;
        for invalid in &fetched.rejected {
            pawfect_warn!("{}", invalid);
        }
        Ok(fetched.records)
    }

    fn fetch_catalog(&self) -> Result<FetchedCatalog, ProviderError> {
        pawfect_debug!("Reading catalog from {:?}", self.path);
        let content = fs::read_to_string(&self.path).map_err(|err| map_io_error(&self.path, err))?;

        let entries: Vec<Value> = serde_json::from_str(&content).map_err(|err| {
            ProviderError::permanent(format!("malformed catalog {:?}: {err}", self.path))
        })?;

        let mut fetched = FetchedCatalog::default();
        for value in entries {
            match read_entry(&value) {
                Ok(record) => fetched.records.push(record),
                Err(invalid) => fetched.rejected.push(invalid),
            }
        }
        pawfect_info!(
            "Read {} catalog entries from {:?}, {} rejected",
            fetched.records.len(),
            self.path,
            fetched.rejected.len()
        );
        Ok(fetched)
    }
}

fn read_entry(value: &Value) -> Result<AnimalRecord, InvalidRecord> {
    match CatalogEntry::deserialize(value) {
        Ok(entry) => entry.into_record(),
        Err(err) => Err(InvalidRecord {
            id: value
                .get("id")
                .and_then(Value::as_str)
                .and_then(|raw| raw.parse::<AnimalId>().ok())
                .unwrap_or_default(),
            name: value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            reason: InvalidReason::Malformed(err.to_string()),
        }),
    }
}

fn map_io_error(path: &Path, err: io::Error) -> ProviderError {
    let message = format!("cannot read catalog {:?}: {err}", path);
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied | io::ErrorKind::InvalidData => {
            ProviderError::permanent(message)
        }
        _ => ProviderError::transient(message),
    }
}
