use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(#[from] gloo_net::Error),
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid {field}: {value:?}")]
    InvalidTime { field: &'static str, value: String },
    #[error("{0}")]
    Transport(#[from] gloo_net::Error),
    #[error("{status} {status_text} - {message}")]
    Rejected {
        status: u16,
        status_text: String,
        message: String,
    },
    /// The failure response itself could not be read.
    #[error("{status} response with unreadable body: {source}")]
    ErrorBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
