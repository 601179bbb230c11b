use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Characters that must not appear raw in a served media name.
const ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b':')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

/// Turn a filename token from message content into a servable name:
/// quotes stripped, whitespace replaced with underscores, then
/// percent-encoded.
///
/// # Examples
///
/// ```
/// use kakao_chat_viewer::media::servable_name;
///
/// assert_eq!(servable_name("\"my photo.jpg\""), "my_photo.jpg");
/// assert_eq!(servable_name("img#1.png"), "img%231.png");
/// ```
pub fn servable_name(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    utf8_percent_encode(&cleaned, ENCODE_SET).to_string()
}

/// Resolve a filename token against the media root that mirrors the
/// export's own folder.
pub fn resolve_media_path(media_root: &Path, filename: &str) -> PathBuf {
    media_root.join(servable_name(filename))
}
