use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;

use crate::{
    error::{FetchError, SubmitError},
    model::{
        event::{Event, EventDraft, EventList},
        CreatedEvent, ErrorBody,
    },
};

const CSRF_HEADER: &str = "X-CSRF-Token";

#[async_trait(?Send)]
pub trait EventApi {
    async fn list_events(&self) -> Result<Vec<Event>, FetchError>;

    /// `None` when the server accepted the event but sent no readable receipt.
    async fn create_event(
        &self,
        draft: &EventDraft,
        csrf_token: &str,
    ) -> Result<Option<CreatedEvent>, SubmitError>;
}

pub struct HttpEventApi {
    events_path: String,
}

impl HttpEventApi {
    pub fn new(events_path: impl Into<String>) -> Self {
        Self {
            events_path: events_path.into(),
        }
    }
}

#[async_trait(?Send)]
impl EventApi for HttpEventApi {
    async fn list_events(&self) -> Result<Vec<Event>, FetchError> {
        let response = Request::get(&self.events_path).send().await?;
        let body = response.text().await?;
        decode_list_response(response.status(), &response.status_text(), &body)
    }

    async fn create_event(
        &self,
        draft: &EventDraft,
        csrf_token: &str,
    ) -> Result<Option<CreatedEvent>, SubmitError> {
        debug!("create event: {draft:?}");

        let response = Request::post(&self.events_path)
            .header(CSRF_HEADER, csrf_token)
            .json(draft)?
            .send()
            .await?;
        let body = response.text().await?;
        decode_create_response(response.status(), &response.status_text(), &body)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

pub fn decode_list_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<Vec<Event>, FetchError> {
    if !is_success(status) {
        return Err(FetchError::Status {
            status,
            status_text: status_text.to_string(),
        });
    }

    let list: EventList = serde_json::from_str(body).map_err(FetchError::Decode)?;
    Ok(list.events)
}

pub fn decode_create_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<Option<CreatedEvent>, SubmitError> {
    if is_success(status) {
        return Ok(serde_json::from_str(body).ok());
    }

    let error: ErrorBody =
        serde_json::from_str(body).map_err(|source| SubmitError::ErrorBody { status, source })?;
    Err(SubmitError::Rejected {
        status,
        status_text: status_text.to_string(),
        message: error.message,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_ok() {
        let body = json!({
            "events": [
                {"Title": "a", "StartTime": "2024-05-01T09:00:00Z", "EndTime": "2024-05-01T10:00:00Z", "Attendees": []},
                {"Title": "b", "StartTime": "2024-05-02T09:00:00Z", "EndTime": "2024-05-02T10:00:00Z", "Attendees": ["x@y.z"]},
            ]
        })
        .to_string();

        let events = decode_list_response(200, "OK", &body).unwrap();
        assert_eq!(
            events.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_list_status() {
        let err = decode_list_response(503, "Service Unavailable", "oops").unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
        assert_eq!(err.to_string(), "503 Service Unavailable");
    }

    #[test]
    fn test_list_without_events() {
        let err = decode_list_response(200, "OK", r#"{"message":"hi"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_create_accepted() {
        let receipt = decode_create_response(
            201,
            "Created",
            r#"{"message":"Event created successfully","event_id":"abc123"}"#,
        )
        .unwrap();
        assert_eq!(
            receipt,
            Some(CreatedEvent {
                message: "Event created successfully".to_string(),
                event_id: "abc123".to_string(),
            })
        );

        assert_eq!(decode_create_response(204, "No Content", "").unwrap(), None);
    }

    #[test]
    fn test_create_rejected() {
        let err = decode_create_response(400, "Bad Request", r#"{"message":"title required"}"#)
            .unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { status: 400, .. }));
        assert_eq!(err.to_string(), "400 Bad Request - title required");
    }

    #[test]
    fn test_create_rejected_unreadable_body() {
        let err = decode_create_response(
            500,
            "Internal Server Error",
            "Failed to create event\n",
        )
        .unwrap_err();
        assert!(matches!(err, SubmitError::ErrorBody { status: 500, .. }));
    }
}
