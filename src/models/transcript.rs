use serde::{Deserialize, Serialize};

/// A single message segmented out of the export's line stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The raw timestamp fragment as it appeared in the source text
    /// (date portion, optionally followed by the localized AM/PM time).
    /// Kept verbatim, never normalized to a calendar type.
    pub timestamp: String,
    /// Present only when the header line carried a sender; system notices
    /// (joins, leaves, room-title changes) have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    /// Message body. Multi-line bodies are joined with `\n` in source order;
    /// media messages carry the sentinel line itself.
    pub content: String,
    /// True exactly when the message was produced by a photo/video sentinel
    /// line. A text message that merely names an image file stays false.
    pub is_image: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// First non-empty line of the export, verbatim.
    pub title: String,
    /// Second non-empty line, with the export tool's saved-date prefix
    /// stripped when present.
    pub date: String,
    /// Messages in the order their headers appeared in the source.
    pub messages: Vec<Message>,
}

impl Transcript {
    /// Count of media (photo/video sentinel) messages.
    pub fn media_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_image).count()
    }

    /// Count of messages without a sender (system notices).
    pub fn system_count(&self) -> usize {
        self.messages.iter().filter(|m| m.sender.is_none()).count()
    }
}
