use crate::{Tone, ValidationError};

/// Shortest accepted topic, counted in characters after trimming.
pub const MIN_TOPIC_CHARS: usize = 3;

/// A validated generate action. Built fresh for every dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    tone: Tone,
}

impl GenerationRequest {
    /// Trims `topic` and checks it against the length rules.
    pub fn new(topic: &str, tone: Tone) -> Result<Self, ValidationError> {
        let topic = topic.trim();
        match topic.chars().count() {
            0 => Err(ValidationError::TopicRequired),
            n if n < MIN_TOPIC_CHARS => Err(ValidationError::TopicTooShort),
            _ => Ok(Self {
                topic: topic.to_string(),
                tone,
            }),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }
}

/// True when the topic has content but not enough of it.
pub(crate) fn is_topic_too_short(topic: &str) -> bool {
    let len = topic.trim().chars().count();
    len > 0 && len < MIN_TOPIC_CHARS
}
