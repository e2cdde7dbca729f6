//! Date reference parsing for menu lookups

use crate::error::{MensaError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A human-friendly date reference that resolves against a base date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRef {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Previous occurrence, strictly before the base date
    LastWeekday(Weekday),
    /// Next occurrence, strictly after the base date
    NextWeekday(Weekday),
    Date(NaiveDate),
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

impl DateRef {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Some(day) = weekday_from_name(&normalized) {
            return Ok(DateRef::Weekday(day));
        }
        if let Some(rest) = normalized.strip_prefix("last ") {
            return weekday_from_name(rest.trim())
                .map(DateRef::LastWeekday)
                .ok_or_else(|| MensaError::InvalidDateRef(input.to_string()));
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            return weekday_from_name(rest.trim())
                .map(DateRef::NextWeekday)
                .ok_or_else(|| MensaError::InvalidDateRef(input.to_string()));
        }

        match normalized.as_str() {
            "today" | "now" => Ok(DateRef::Today),
            "yesterday" => Ok(DateRef::Yesterday),
            "tomorrow" => Ok(DateRef::Tomorrow),
            _ => NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
                .map(DateRef::Date)
                .map_err(|_| MensaError::InvalidDateRef(input.to_string())),
        }
    }

    /// Resolve this reference to a concrete date
    pub fn resolve(&self, base: NaiveDate) -> NaiveDate {
        match *self {
            DateRef::Today => base,
            DateRef::Yesterday => base - Duration::days(1),
            DateRef::Tomorrow => base + Duration::days(1),
            DateRef::Weekday(target) => {
                let back = base.weekday().days_since(target);
                base - Duration::days(back as i64)
            }
            DateRef::LastWeekday(target) => {
                let back = match base.weekday().days_since(target) {
                    0 => 7,
                    n => n,
                };
                base - Duration::days(back as i64)
            }
            DateRef::NextWeekday(target) => {
                let forward = match target.days_since(base.weekday()) {
                    0 => 7,
                    n => n,
                };
                base + Duration::days(forward as i64)
            }
            DateRef::Date(date) => date,
        }
    }
}
