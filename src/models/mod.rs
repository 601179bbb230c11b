//! Data models for parsed KakaoTalk chat exports.
//!
//! - [`Transcript`] - One parsed export: header metadata plus ordered messages
//! - [`Message`] - A single chat message with its raw timestamp fragment
//!
//! These are value objects created fresh per parse and never mutated
//! afterwards. They derive serde traits so the `dump` command can emit them
//! as JSON.

pub mod transcript;

pub use transcript::{Message, Transcript};
