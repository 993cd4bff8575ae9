use std::fmt;

/// Input problems caught before any side effect runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    TopicRequired,
    TopicTooShort,
    NothingToCopy,
}

impl ValidationError {
    pub fn title(self) -> &'static str {
        match self {
            ValidationError::TopicRequired => "Topic Required",
            ValidationError::TopicTooShort => "Topic Too Short",
            ValidationError::NothingToCopy => "Nothing to Copy",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ValidationError::TopicRequired => "Please enter a topic for your LinkedIn post.",
            ValidationError::TopicTooShort => {
                "Please enter a more descriptive topic (at least 3 characters)."
            }
            ValidationError::NothingToCopy => "Generate a post first before copying.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Classified failure of a generation round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    Timeout,
    Network,
    Http { status: u16 },
    Server { message: String },
    MalformedResponse,
}

impl GenerationFailure {
    /// Human-readable text for the failure notification.
    pub fn user_message(&self) -> String {
        match self {
            GenerationFailure::Timeout => {
                "Request timed out. Please check your connection and try again.".to_string()
            }
            GenerationFailure::Network => {
                "Network error. Please check your internet connection.".to_string()
            }
            GenerationFailure::Http { status } => format!("HTTP error! status: {status}"),
            GenerationFailure::Server { message } if message.trim().is_empty() => {
                "Failed to generate post. Please try again.".to_string()
            }
            GenerationFailure::Server { message } => message.clone(),
            GenerationFailure::MalformedResponse => {
                "No post content received from server".to_string()
            }
        }
    }
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

/// Clipboard write failed on both the native and the legacy path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    pub reason: String,
}

impl fmt::Display for CopyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "copy failed: {}", self.reason)
    }
}

/// Last user-visible error, kept in state until the next successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    Validation(ValidationError),
    Generation(GenerationFailure),
    Copy(CopyFailure),
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserError::Validation(err) => err.fmt(f),
            UserError::Generation(err) => err.fmt(f),
            UserError::Copy(err) => err.fmt(f),
        }
    }
}
