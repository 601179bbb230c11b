use std::sync::LazyLock;

use regex::Regex;

// Absolute URLs, excluding trailing punctuation that usually belongs to the
// surrounding sentence rather than the link.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<]+[^<.,:;"')\]\s]"#).expect("url pattern is valid")
});

static IMAGE_EXT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpg|jpeg|png|gif|bmp|webp)$").expect("extension pattern is valid")
});

/// One run of message content: either plain text or a clickable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan<'a> {
    Text(&'a str),
    Link(&'a str),
}

/// Split message content into plain-text and link spans, in order.
pub fn scan_links(text: &str) -> Vec<InlineSpan<'_>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for m in URL_PATTERN.find_iter(text) {
        if m.start() > cursor {
            spans.push(InlineSpan::Text(&text[cursor..m.start()]));
        }
        spans.push(InlineSpan::Link(m.as_str()));
        cursor = m.end();
    }
    if cursor < text.len() {
        spans.push(InlineSpan::Text(&text[cursor..]));
    }

    spans
}

/// Whitespace-separated tokens that look like image filenames.
///
/// This is a display heuristic and deliberately independent of the parser's
/// media-sentinel flag; a text message naming a file is still a text message.
pub fn find_image_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().filter(|token| IMAGE_EXT_PATTERN.is_match(token)).collect()
}

/// Message content with its image-filename tokens removed and the remaining
/// whitespace collapsed, for rendering next to the resolved images.
pub fn strip_image_tokens(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !IMAGE_EXT_PATTERN.is_match(token))
        .collect::<Vec<_>>()
        .join(" ")
}
