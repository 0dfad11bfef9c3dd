use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use pawfect_core::{AnimalId, AnimalRecord, CatalogProvider, PhotoRef, ProviderError, UrgencyLevel};
use url::Url;
use uuid::Uuid;

/// Source of the current instant, injected so deadlines are reproducible.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub const BUDDY_ID: AnimalId =
    AnimalId::from_uuid(Uuid::from_u128(0x6f1c_2b7e_0d3a_4c55_9a10_8e4f_b1d2_0001));
pub const PEANUT_ID: AnimalId =
    AnimalId::from_uuid(Uuid::from_u128(0x6f1c_2b7e_0d3a_4c55_9a10_8e4f_b1d2_0002));

const BUDDY_PHOTO: &str = "https://images.unsplash.com/photo-1558788353-f76d92427f16";

/// Two sample animals whose deadlines are one and two days after the clock reading.
#[derive(Clone)]
pub struct DemoCatalogProvider {
    clock: Clock,
}

impl DemoCatalogProvider {
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(Utc::now))
    }
}

impl CatalogProvider for DemoCatalogProvider {
    fn fetch_animals(&self) -> Result<Vec<AnimalRecord>, ProviderError> {
        let now = (self.clock)();
        let buddy_photo = Url::parse(BUDDY_PHOTO)
            .map_err(|err| ProviderError::permanent(format!("demo photo url: {err}")))?;

        Ok(vec![
            AnimalRecord {
                id: BUDDY_ID,
                name: "Buddy".to_string(),
                age: 3,
                breed: "Labrador Retriever".to_string(),
                shelter_name: "Happy Tails Shelter".to_string(),
                location: "San Francisco, CA".to_string(),
                photo_refs: vec![PhotoRef::Remote(buddy_photo)],
                description: "Friendly, energetic, loves people and other dogs.".to_string(),
                urgency_level: UrgencyLevel::Critical,
                euthanasia_date: now + Duration::days(1),
                contact_info: "adopt@happytails.org".to_string(),
                latitude: 37.7749,
                longitude: -122.4194,
            },
            AnimalRecord {
                id: PEANUT_ID,
                name: "Peanut".to_string(),
                age: 9,
                breed: "Yorkshire Terrier".to_string(),
                shelter_name: "Safe Haven".to_string(),
                location: "Oakland, CA".to_string(),
                photo_refs: vec![PhotoRef::Local("Peanut".to_string())],
                description: "Shy, gentle, needs a loving home soon.".to_string(),
                urgency_level: UrgencyLevel::High,
                euthanasia_date: now + Duration::days(2),
                contact_info: "contact@safehaven.org".to_string(),
                latitude: 37.8044,
                longitude: -122.2712,
            },
        ])
    }
}
