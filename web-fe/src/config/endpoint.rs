use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EVENTS_PATH: &str = "/api/events";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub events_path: Option<String>,
}

const LOCAL_STORAGE_KEY: &str = "endpoint";

impl EndpointConfig {
    pub fn load_from_localstorage() -> Self {
        LocalStorage::get::<Self>(LOCAL_STORAGE_KEY).unwrap_or_default()
    }

    pub fn events_path(&self) -> &str {
        self.events_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_EVENTS_PATH)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_events_path() {
        assert_eq!(EndpointConfig::default().events_path(), "/api/events");

        let blank = EndpointConfig {
            events_path: Some(" ".to_string()),
        };
        assert_eq!(blank.events_path(), "/api/events");

        let custom: EndpointConfig =
            serde_json::from_str(r#"{"events_path":"/v2/events"}"#).unwrap();
        assert_eq!(custom.events_path(), "/v2/events");
    }
}
