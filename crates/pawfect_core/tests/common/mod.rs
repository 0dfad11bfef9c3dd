#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use pawfect_core::{AnimalId, AnimalRecord, CatalogProvider, ProviderError, UrgencyLevel};
use uuid::Uuid;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pawfect_logging::initialize_for_tests);
}

/// Fixed reference instant used as "now" across tests.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap()
}

pub fn id(n: u128) -> AnimalId {
    AnimalId::from_uuid(Uuid::from_u128(n))
}

pub fn animal(n: u128, name: &str, breed: &str) -> AnimalRecord {
    AnimalRecord {
        id: id(n),
        name: name.to_string(),
        age: 3,
        breed: breed.to_string(),
        shelter_name: "Happy Tails Shelter".to_string(),
        location: "San Francisco, CA".to_string(),
        description: format!("{name} is friendly. Loves walks."),
        urgency_level: UrgencyLevel::Medium,
        euthanasia_date: now() + Duration::days(10),
        contact_info: "adopt@happytails.org".to_string(),
        latitude: 37.7749,
        longitude: -122.4194,
        ..AnimalRecord::default()
    }
}

pub fn buddy() -> AnimalRecord {
    AnimalRecord {
        urgency_level: UrgencyLevel::Critical,
        euthanasia_date: now() + Duration::days(1),
        ..animal(1, "Buddy", "Labrador Retriever")
    }
}

pub fn peanut() -> AnimalRecord {
    AnimalRecord {
        age: 9,
        location: "Oakland, CA".to_string(),
        urgency_level: UrgencyLevel::High,
        euthanasia_date: now() + Duration::days(2),
        shelter_name: "Safe Haven".to_string(),
        ..animal(2, "Peanut", "Yorkshire Terrier")
    }
}

/// Provider returning queued responses in order, then empty catalogs.
#[derive(Default)]
pub struct ScriptedProvider {
    responses: RefCell<VecDeque<Result<Vec<AnimalRecord>, ProviderError>>>,
    calls: Cell<usize>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(records: Vec<AnimalRecord>) -> Self {
        let provider = Self::new();
        provider.push_ok(records);
        provider
    }

    pub fn push_ok(&self, records: Vec<AnimalRecord>) {
        self.responses.borrow_mut().push_back(Ok(records));
    }

    pub fn push_err(&self, err: ProviderError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl CatalogProvider for ScriptedProvider {
    fn fetch_animals(&self) -> Result<Vec<AnimalRecord>, ProviderError> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn names<'a>(records: impl IntoIterator<Item = &'a AnimalRecord>) -> Vec<&'a str> {
    records.into_iter().map(|record| record.name.as_str()).collect()
}
