//! KakaoTalk Chat Viewer - Parse and browse exported chat transcripts
//!
//! This library turns the text file KakaoTalk writes when a chat room is
//! exported into structured data and presents it in a terminal viewer. It
//! supports:
//!
//! - Parsing the line-oriented export format (timestamped headers, multi-line
//!   bodies, photo/video sentinel lines) into [`models::Transcript`]
//! - Scanning message content for links and image filename tokens at display
//!   time
//! - Resolving media filenames against the export folder, including the
//!   alias (symlink) an external web root can serve them from
//!
//! # Example
//!
//! ```
//! use kakao_chat_viewer::parse_transcript;
//!
//! let text = "My Chat Room\n\
//!             저장한 날짜 : 2024-01-01 00:00\n\
//!             2024년 1월 1일 오전 9:00, Alice : Hi there\n";
//! let transcript = parse_transcript(text)?;
//! assert_eq!(transcript.messages.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod content;
pub mod media;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use models::{Message, Transcript};
pub use parsers::{ParseStats, parse_transcript, parse_transcript_file, parse_transcript_with_stats};
