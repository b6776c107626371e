use serde::Deserialize;

pub mod event;
pub mod form;

/// Body the server sends back with a non-success status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CreatedEvent {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub event_id: String,
}
