use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::InvalidReason;

/// Stable identifier of one animal; favorites are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AnimalId(Uuid);

impl AnimalId {
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for AnimalId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for AnimalId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Input classification of how urgently an animal needs placement.
///
/// Independent of the computed countdown: a `Low` animal can still be one
/// day from its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum UrgencyLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    /// All levels in ascending severity.
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Low,
        UrgencyLevel::Medium,
        UrgencyLevel::High,
        UrgencyLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        }
    }

    /// Capitalized display name.
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "Low",
            UrgencyLevel::Medium => "Medium",
            UrgencyLevel::High => "High",
            UrgencyLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown urgency level {0:?}")]
pub struct ParseUrgencyError(pub String);

impl FromStr for UrgencyLevel {
    type Err = ParseUrgencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        UrgencyLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseUrgencyError(trimmed.to_string()))
    }
}

/// Reference to one photo of an animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoRef {
    /// Remote image location.
    Remote(Url),
    /// Name of an image bundled with the presentation layer.
    Local(String),
}

/// Which image a card should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    Remote(Url),
    Local(String),
    Placeholder,
}

/// Immutable description of one adoptable animal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimalRecord {
    pub id: AnimalId,
    pub name: String,
    /// Age in years. Negative values are rejected at ingestion.
    pub age: i32,
    pub breed: String,
    pub shelter_name: String,
    pub location: String,
    pub photo_refs: Vec<PhotoRef>,
    pub description: String,
    pub urgency_level: UrgencyLevel,
    /// Deadline by which the animal must be placed.
    pub euthanasia_date: DateTime<Utc>,
    pub contact_info: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl AnimalRecord {
    /// First remote photo, else the first local asset, else a placeholder.
    pub fn primary_photo(&self) -> PhotoSource {
        let remote = self.photo_refs.iter().find_map(|photo| match photo {
            PhotoRef::Remote(url) => Some(PhotoSource::Remote(url.clone())),
            PhotoRef::Local(_) => None,
        });
        let local = || {
            self.photo_refs.iter().find_map(|photo| match photo {
                PhotoRef::Local(name) if !name.trim().is_empty() => {
                    Some(PhotoSource::Local(name.clone()))
                }
                _ => None,
            })
        };
        remote.or_else(local).unwrap_or(PhotoSource::Placeholder)
    }

    /// First non-blank sentence of the description, trimmed.
    pub fn summary(&self) -> &str {
        self.description
            .split('.')
            .map(str::trim)
            .find(|sentence| !sentence.is_empty())
            .unwrap_or_default()
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidReason> {
        if self.age < 0 {
            return Err(InvalidReason::NegativeAge(self.age));
        }
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(InvalidReason::NonFiniteCoordinates);
        }
        Ok(())
    }
}
