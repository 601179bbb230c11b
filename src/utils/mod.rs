pub mod files;
pub mod terminal;

pub use files::read_transcript_text;
pub use terminal::sanitize_for_display;
