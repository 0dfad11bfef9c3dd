use chrono::{DateTime, Utc};
use pawfect_core::{AnimalId, AnimalRecord, InvalidReason, InvalidRecord, PhotoRef, UrgencyLevel};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// One animal as stored in a JSON catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub shelter_name: String,
    pub location: String,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub photo_image_local: String,
    #[serde(default)]
    pub description: String,
    pub urgency_level: String,
    /// RFC 3339 timestamp.
    pub euthanasia_date: DateTime<Utc>,
    #[serde(default)]
    pub contact_info: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CatalogEntry {
    /// Converts to a core record. Remote photos come first, then the local
    /// asset when one is named.
    pub fn into_record(self) -> Result<AnimalRecord, InvalidRecord> {
        let urgency_level: UrgencyLevel = match self.urgency_level.parse() {
            Ok(level) => level,
            Err(err) => return Err(self.reject(err.to_string())),
        };

        let mut photo_refs = Vec::with_capacity(self.photo_urls.len() + 1);
        for raw in &self.photo_urls {
            match Url::parse(raw) {
                Ok(url) => photo_refs.push(PhotoRef::Remote(url)),
                Err(err) => return Err(self.reject(format!("bad photo url {raw:?}: {err}"))),
            }
        }
        if !self.photo_image_local.trim().is_empty() {
            photo_refs.push(PhotoRef::Local(self.photo_image_local));
        }

        Ok(AnimalRecord {
            id: AnimalId::from_uuid(self.id),
            name: self.name,
            age: self.age,
            breed: self.breed,
            shelter_name: self.shelter_name,
            location: self.location,
            photo_refs,
            description: self.description,
            urgency_level,
            euthanasia_date: self.euthanasia_date,
            contact_info: self.contact_info,
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }

    fn reject(&self, detail: String) -> InvalidRecord {
        InvalidRecord {
            id: AnimalId::from_uuid(self.id),
            name: self.name.clone(),
            reason: InvalidReason::Malformed(detail),
        }
    }

    pub fn from_record(record: &AnimalRecord) -> Self {
        let mut photo_urls = Vec::new();
        let mut photo_image_local = String::new();
        for photo in &record.photo_refs {
            match photo {
                PhotoRef::Remote(url) => photo_urls.push(url.to_string()),
                PhotoRef::Local(name) if photo_image_local.is_empty() => {
                    photo_image_local = name.clone();
                }
                PhotoRef::Local(_) => {}
            }
        }

        Self {
            id: *record.id.as_uuid(),
            name: record.name.clone(),
            age: record.age,
            breed: record.breed.clone(),
            shelter_name: record.shelter_name.clone(),
            location: record.location.clone(),
            photo_urls,
            photo_image_local,
            description: record.description.clone(),
            urgency_level: record.urgency_level.to_string(),
            euthanasia_date: record.euthanasia_date,
            contact_info: record.contact_info.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}
