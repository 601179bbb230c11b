//! Display-side scanning of message bodies.
//!
//! The viewer re-scans message content for embedded hyperlinks and
//! image-like filename tokens. Both detections are presentation concerns:
//! they run independently of the parser's media-sentinel flag and the two
//! may disagree on purpose.

pub mod inline;

pub use inline::{InlineSpan, find_image_tokens, scan_links, strip_image_tokens};
