use pawfect_logging::pawfect_debug;

use crate::{AnimalRecord, UrgencyLevel};

/// What the user typed into the search form. Blank text means "any".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    pub breed: Option<String>,
    /// Accepted but not matched: records carry no size yet.
    pub size: Option<String>,
    pub location: Option<String>,
    pub urgency: Option<UrgencyLevel>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_urgency(mut self, urgency: UrgencyLevel) -> Self {
        self.urgency = Some(urgency);
        self
    }

    pub fn build(&self) -> SearchFilter {
        if let Some(size) = normalize(self.size.as_deref()) {
            pawfect_debug!("Size criterion {:?} always passes; records have no size", size);
        }
        SearchFilter {
            breed: normalize(self.breed.as_deref()),
            location: normalize(self.location.as_deref()),
            urgency: self.urgency,
        }
    }
}

/// Predicate over records built from [`SearchCriteria`]; every set criterion must match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilter {
    breed: Option<String>,
    location: Option<String>,
    urgency: Option<UrgencyLevel>,
}

impl SearchFilter {
    pub fn matches(&self, record: &AnimalRecord) -> bool {
        contains_folded(&record.breed, self.breed.as_deref())
            && contains_folded(&record.location, self.location.as_deref())
            && self
                .urgency
                .map_or(true, |urgency| record.urgency_level == urgency)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.breed.is_none() && self.location.is_none() && self.urgency.is_none()
    }

    pub fn into_predicate(self) -> impl Fn(&AnimalRecord) -> bool {
        move |record: &AnimalRecord| self.matches(record)
    }
}

fn normalize(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}

fn contains_folded(haystack: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |needle| haystack.to_lowercase().contains(needle))
}
