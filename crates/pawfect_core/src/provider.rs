use crate::{AnimalRecord, InvalidRecord, ProviderError};

/// What one fetch produced: usable records plus entries the provider could
/// not turn into records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchedCatalog {
    pub records: Vec<AnimalRecord>,
    pub rejected: Vec<InvalidRecord>,
}

impl From<Vec<AnimalRecord>> for FetchedCatalog {
    fn from(records: Vec<AnimalRecord>) -> Self {
        Self {
            records,
            rejected: Vec::new(),
        }
    }
}

/// Source of animal records consumed by the catalog store.
///
/// Implementations decide where records come from and whether to retry; the
/// store calls `fetch_catalog` once per load and keeps the returned order.
/// A `ProviderError` means the whole source is unusable; a single bad entry
/// belongs in [`FetchedCatalog::rejected`] instead.
pub trait CatalogProvider {
    fn fetch_animals(&self) -> Result<Vec<AnimalRecord>, ProviderError>;

    fn fetch_catalog(&self) -> Result<FetchedCatalog, ProviderError> {
        self.fetch_animals().map(FetchedCatalog::from)
    }
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for Box<P> {
    fn fetch_animals(&self) -> Result<Vec<AnimalRecord>, ProviderError> {
        (**self).fetch_animals()
    }

    fn fetch_catalog(&self) -> Result<FetchedCatalog, ProviderError> {
        (**self).fetch_catalog()
    }
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for &P {
    fn fetch_animals(&self) -> Result<Vec<AnimalRecord>, ProviderError> {
        (**self).fetch_animals()
    }

    fn fetch_catalog(&self) -> Result<FetchedCatalog, ProviderError> {
        (**self).fetch_catalog()
    }
}
