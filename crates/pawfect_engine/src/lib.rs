//! Pawfect engine: catalog providers and catalog file IO.
mod demo;
mod entry;
mod export;
mod json;

pub use demo::{Clock, DemoCatalogProvider, BUDDY_ID, PEANUT_ID};
pub use entry::CatalogEntry;
pub use export::{ensure_output_dir, CatalogWriter, ExportError};
pub use json::JsonCatalogProvider;
