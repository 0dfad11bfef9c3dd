use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pawfect_core::AnimalRecord;
use pawfect_logging::pawfect_info;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::CatalogEntry;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ExportError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes catalog snapshots that [`JsonCatalogProvider`](crate::JsonCatalogProvider) can read back.
///
/// Writes go to a temp file in the same directory which then replaces the
/// target, so readers never see a half-written catalog.
pub struct CatalogWriter {
    dir: PathBuf,
}

impl CatalogWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write<'a>(
        &self,
        filename: &str,
        records: impl IntoIterator<Item = &'a AnimalRecord>,
    ) -> Result<PathBuf, ExportError> {
        ensure_output_dir(&self.dir)?;

        let entries: Vec<CatalogEntry> = records.into_iter().map(CatalogEntry::from_record).collect();
        let content = serde_json::to_string_pretty(&entries)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| ExportError::Io(e.error))?;
        pawfect_info!("Wrote {} catalog entries to {:?}", entries.len(), target);
        Ok(target)
    }
}
