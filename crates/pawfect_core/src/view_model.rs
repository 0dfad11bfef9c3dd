use chrono::{DateTime, TimeZone};

use crate::{
    countdown_label, days_remaining, is_near_deadline, urgency_color_tag, AnimalId, AnimalRecord,
    PhotoSource, SuccessStory, UrgencyColor, UrgencyLevel,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogViewModel {
    pub cards: Vec<AnimalCardView>,
    pub favorites: Vec<AnimalCardView>,
    pub highlighted: Option<AnimalCardView>,
    pub total_count: usize,
    pub visible_count: usize,
    pub lives_saved: u32,
    pub success_stories: Vec<SuccessStory>,
}

/// One record as the presentation layer draws it, evaluated at a fixed "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalCardView {
    pub id: AnimalId,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub location: String,
    pub summary: String,
    pub photo: PhotoSource,
    pub urgency_level: UrgencyLevel,
    pub urgency_color: UrgencyColor,
    pub days_remaining: i64,
    pub countdown: String,
    pub near_deadline: bool,
    pub favorite: bool,
}

impl AnimalCardView {
    pub fn from_record<Tz: TimeZone>(
        record: &AnimalRecord,
        favorite: bool,
        now: &DateTime<Tz>,
    ) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            breed: record.breed.clone(),
            age: record.age,
            location: record.location.clone(),
            summary: record.summary().to_string(),
            photo: record.primary_photo(),
            urgency_level: record.urgency_level,
            urgency_color: urgency_color_tag(record.urgency_level),
            days_remaining: days_remaining(record, now),
            countdown: countdown_label(record, now),
            near_deadline: is_near_deadline(record, now),
            favorite,
        }
    }
}
