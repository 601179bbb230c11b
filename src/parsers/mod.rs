//! Line scanner for KakaoTalk chat exports
//!
//! # Error Handling Strategy
//!
//! The export format carries no message delimiters, so the scanner's policy
//! inside a transcript is **best-effort recovery**, never propagation:
//!
//! - **Orphan lines**: continuation or media-sentinel lines with no open
//!   message cannot be attributed to anything and are dropped.
//!
//! - **Empty headers**: a header that never accumulated content before the
//!   next header (or end-of-input) is discarded, never emitted.
//!
//! Both drop decisions are counted in [`ParseStats`] so callers and tests
//! can observe them without the output contract changing.
//!
//! - **Structural absence**: fewer than two non-empty lines means there is
//!   no title/saved-date header to parse at all. That is a real error
//!   (`anyhow::bail!`), not something to recover from.

pub mod grammar;
pub mod transcript;

pub use grammar::ExportGrammar;
pub use transcript::{
    ParseStats, parse_transcript, parse_transcript_file, parse_transcript_with_stats,
};
