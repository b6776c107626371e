use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use crate::sys::locale::Locale;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Event {
    #[serde(rename = "Title", alias = "title")]
    pub title: String,
    #[serde(rename = "StartTime", alias = "start_time", with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(rename = "EndTime", alias = "end_time", with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    // the server sends null for an event nobody was invited to
    #[serde(
        rename = "Attendees",
        alias = "attendees",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub attendees: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventList {
    // required, but an empty calendar comes back as null
    #[serde(deserialize_with = "null_as_empty")]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    pub attendees: Vec<String>,
}

/// One rendered line of the event list.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub title: String,
    pub start: String,
    pub end: String,
    pub attendees: String,
}

impl EventRow {
    pub fn from_event(event: &Event, locale: &impl Locale) -> Self {
        Self {
            title: event.title.clone(),
            start: locale.display(event.start_time),
            end: locale.display(event.end_time),
            attendees: event.attendees.join(", "),
        }
    }
}

impl fmt::Display for EventRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} to {} - Attendees: {}",
            self.title, self.start, self.end, self.attendees
        )
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
