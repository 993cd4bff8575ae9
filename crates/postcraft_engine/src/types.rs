use serde::Serialize;
use thiserror::Error;

pub type RequestId = u64;
pub type TimerToken = u64;

/// JSON body sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub tone: String,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, tone: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            tone: tone.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPost {
    pub post: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {status}")]
    HttpStatus { status: u16 },
    #[error("server error: {message}")]
    Server { message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
    #[error("clipboard command failed: {0}")]
    Command(String),
    #[error("{primary}; fallback: {fallback}")]
    Exhausted {
        primary: Box<ClipboardError>,
        fallback: Box<ClipboardError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GenerationCompleted {
        request_id: RequestId,
        result: Result<GeneratedPost, GenerationError>,
    },
    CopyCompleted {
        result: Result<(), ClipboardError>,
    },
    TimerElapsed {
        token: TimerToken,
    },
}
