//! Countdown and urgency signals derived from a record and an explicit "now".
use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

use crate::{AnimalRecord, UrgencyLevel};

/// Records with this many days left or fewer are near their deadline.
pub const NEAR_DEADLINE_DAYS: i64 = 3;

/// Whole calendar days from `now` to `deadline`, in `now`'s time zone.
///
/// Time of day is ignored on both sides, so every instant of one calendar day
/// yields the same value. Negative once the deadline day has passed.
pub fn days_until<Tz: TimeZone>(deadline: &DateTime<Utc>, now: &DateTime<Tz>) -> i64 {
    let deadline_day = deadline.with_timezone(&now.timezone()).date_naive();
    deadline_day
        .signed_duration_since(now.date_naive())
        .num_days()
}

pub fn days_remaining<Tz: TimeZone>(record: &AnimalRecord, now: &DateTime<Tz>) -> i64 {
    days_until(&record.euthanasia_date, now)
}

/// True for three days left or fewer, including the last day and any day after.
pub fn is_near_deadline<Tz: TimeZone>(record: &AnimalRecord, now: &DateTime<Tz>) -> bool {
    days_remaining(record, now) <= NEAR_DEADLINE_DAYS
}

pub fn countdown_label<Tz: TimeZone>(record: &AnimalRecord, now: &DateTime<Tz>) -> String {
    let days = days_remaining(record, now);
    if days > 0 {
        format!("{days}d left")
    } else {
        "Last day!".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl UrgencyColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyColor::Green => "green",
            UrgencyColor::Yellow => "yellow",
            UrgencyColor::Orange => "orange",
            UrgencyColor::Red => "red",
        }
    }
}

impl fmt::Display for UrgencyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn urgency_color_tag(level: UrgencyLevel) -> UrgencyColor {
    match level {
        UrgencyLevel::Low => UrgencyColor::Green,
        UrgencyLevel::Medium => UrgencyColor::Yellow,
        UrgencyLevel::High => UrgencyColor::Orange,
        UrgencyLevel::Critical => UrgencyColor::Red,
    }
}
