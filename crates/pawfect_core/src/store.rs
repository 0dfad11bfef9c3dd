use std::collections::HashMap;

use chrono::{DateTime, TimeZone};
use pawfect_logging::{pawfect_debug, pawfect_info, pawfect_warn};

use crate::observer::Observers;
use crate::view_model::{AnimalCardView, CatalogViewModel};
use crate::{
    AnimalId, AnimalRecord, CatalogError, CatalogProvider, FavoritesTracker, FetchedCatalog,
    InvalidReason, InvalidRecord, ProviderError, StoreEvent, SubscriptionId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessStory {
    pub title: String,
    pub text: String,
}

impl SuccessStory {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Home-screen content that does not come from the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub lives_saved: u32,
    pub success_stories: Vec<SuccessStory>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            lives_saved: 1287,
            success_stories: vec![
                SuccessStory::new(
                    "Daisy's New Family",
                    "Daisy found her forever home and now spends her days playing in the park!",
                ),
                SuccessStory::new(
                    "Max's Second Chance",
                    "Max was adopted just in time and is now a loyal companion to his new owner.",
                ),
            ],
        }
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<InvalidRecord>,
}

/// Owns the ingested catalog, favorites and the visible subset.
///
/// Not meant for shared mutation; wrap it in a single mutex when several
/// threads need it.
pub struct CatalogStore<P> {
    provider: P,
    settings: StoreSettings,
    all_records: Vec<AnimalRecord>,
    index: HashMap<AnimalId, usize>,
    // Positions into `all_records`, ascending.
    visible: Vec<usize>,
    favorites: FavoritesTracker,
    observers: Observers,
    dirty: bool,
}

impl<P: CatalogProvider> CatalogStore<P> {
    pub fn new(provider: P) -> Self {
        Self::with_settings(provider, StoreSettings::default())
    }

    pub fn with_settings(provider: P, settings: StoreSettings) -> Self {
        Self {
            provider,
            settings,
            all_records: Vec::new(),
            index: HashMap::new(),
            visible: Vec::new(),
            favorites: FavoritesTracker::new(),
            observers: Observers::default(),
            dirty: false,
        }
    }

    /// Replaces the catalog with what the provider returns.
    ///
    /// Entries the provider rejected, invalid records and duplicates are
    /// skipped and reported together. On provider
    /// failure nothing changes and no observer is notified. Any active filter
    /// is reset; favorites are kept.
    pub fn load(&mut self) -> Result<LoadReport, ProviderError> {
        let fetched = match self.provider.fetch_catalog() {
            Ok(fetched) => fetched,
            Err(err) => {
                pawfect_warn!("Catalog load failed: {}", err);
                return Err(err);
            }
        };

        let (records, index, skipped) = ingest(fetched);
        for invalid in &skipped {
            pawfect_warn!("{}", invalid);
        }

        self.visible = (0..records.len()).collect();
        self.all_records = records;
        self.index = index;
        self.dirty = true;

        let loaded = self.all_records.len();
        pawfect_info!(
            "Catalog loaded: {} animals, {} skipped, {} favorites kept",
            loaded,
            skipped.len(),
            self.favorites.len()
        );
        self.observers.notify(&StoreEvent::CatalogLoaded {
            loaded,
            skipped: skipped.len(),
        });
        Ok(LoadReport { loaded, skipped })
    }
}

impl<P> CatalogStore<P> {
    pub fn all_records(&self) -> &[AnimalRecord] {
        &self.all_records
    }

    pub fn visible_records(&self) -> Vec<&AnimalRecord> {
        self.visible
            .iter()
            .map(|&position| &self.all_records[position])
            .collect()
    }

    /// Featured "animal of the day": the first record of the last load.
    pub fn highlighted(&self) -> Option<&AnimalRecord> {
        self.all_records.first()
    }

    pub fn record(&self, id: &AnimalId) -> Result<&AnimalRecord, CatalogError> {
        self.index
            .get(id)
            .map(|&position| &self.all_records[position])
            .ok_or(CatalogError::UnknownRecord(*id))
    }

    pub fn is_favorite(&self, id: &AnimalId) -> bool {
        self.favorites.contains(id)
    }

    /// Flips favorite membership and returns the new state.
    ///
    /// Ids missing from the catalog are accepted; they only surface once a
    /// load brings in a matching record.
    pub fn toggle_favorite(&mut self, id: AnimalId) -> bool {
        if !self.index.contains_key(&id) {
            pawfect_warn!("{}; toggling anyway", CatalogError::UnknownRecord(id));
        }
        let favorite = self.favorites.toggle(id);
        self.dirty = true;
        pawfect_debug!("Favorite {} -> {}", id, favorite);
        self.observers
            .notify(&StoreEvent::FavoriteToggled { id, favorite });
        favorite
    }

    /// Favorited records in catalog order.
    pub fn favorite_records(&self) -> Vec<&AnimalRecord> {
        self.all_records
            .iter()
            .filter(|record| self.favorites.contains(&record.id))
            .collect()
    }

    pub fn favorite_count(&self) -> usize {
        self.all_records
            .iter()
            .filter(|record| self.favorites.contains(&record.id))
            .count()
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        self.dirty = true;
        self.observers.notify(&StoreEvent::FavoritesCleared);
    }

    /// Shows only records matching `predicate`, in catalog order.
    pub fn apply_filter<F>(&mut self, predicate: F)
    where
        F: Fn(&AnimalRecord) -> bool,
    {
        self.visible = self
            .all_records
            .iter()
            .enumerate()
            .filter(|(_, record)| predicate(*record))
            .map(|(position, _)| position)
            .collect();
        self.filter_changed();
    }

    /// Shows the full catalog again.
    pub fn clear_filter(&mut self) {
        self.visible = (0..self.all_records.len()).collect();
        self.filter_changed();
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Returns whether state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> CatalogViewModel {
        let card = |record: &AnimalRecord| {
            AnimalCardView::from_record(record, self.favorites.contains(&record.id), now)
        };
        CatalogViewModel {
            cards: self.visible_records().into_iter().map(card).collect(),
            favorites: self.favorite_records().into_iter().map(card).collect(),
            highlighted: self.highlighted().map(card),
            total_count: self.all_records.len(),
            visible_count: self.visible.len(),
            lives_saved: self.settings.lives_saved,
            success_stories: self.settings.success_stories.clone(),
        }
    }

    fn filter_changed(&mut self) {
        self.dirty = true;
        let visible = self.visible.len();
        pawfect_debug!("Filter applied: {} of {} visible", visible, self.all_records.len());
        self.observers.notify(&StoreEvent::FilterChanged { visible });
    }
}

fn ingest(
    fetched: FetchedCatalog,
) -> (Vec<AnimalRecord>, HashMap<AnimalId, usize>, Vec<InvalidRecord>) {
    let FetchedCatalog {
        records: fetched,
        rejected,
    } = fetched;
    let mut records = Vec::with_capacity(fetched.len());
    let mut index = HashMap::with_capacity(fetched.len());
    let mut skipped = rejected;

    for record in fetched {
        let verdict = if index.contains_key(&record.id) {
            Err(InvalidReason::DuplicateId)
        } else {
            record.validate()
        };
        match verdict {
            Ok(()) => {
                index.insert(record.id, records.len());
                records.push(record);
            }
            Err(reason) => skipped.push(InvalidRecord {
                id: record.id,
                name: record.name,
                reason,
            }),
        }
    }

    (records, index, skipped)
}
