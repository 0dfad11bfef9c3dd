use thiserror::Error;

use crate::AnimalId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Worth retrying later (unreachable source, interrupted read).
    Transient,
    /// Retrying will not help (missing source, malformed data).
    Permanent,
}

/// Failure reported by a catalog provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?} provider error: {message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Transient, message)
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Permanent, message)
    }

    pub fn is_transient(&self) -> bool {
        self.kind == ProviderErrorKind::Transient
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no animal with id {0} in the catalog")]
    UnknownRecord(AnimalId),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// The provider could not turn the entry into a record.
    #[error("malformed entry: {0}")]
    Malformed(String),
    #[error("negative age {0}")]
    NegativeAge(i32),
    #[error("non-finite coordinates")]
    NonFiniteCoordinates,
    #[error("duplicate id")]
    DuplicateId,
}

/// A record excluded from the catalog during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("skipped animal {id} ({name}): {reason}")]
pub struct InvalidRecord {
    pub id: AnimalId,
    pub name: String,
    pub reason: InvalidReason,
}
