//! Token table for the KakaoTalk export dialect.
//!
//! The export format is undocumented and locale-specific: message headers,
//! the saved-date prefix, and the media sentinels are all literal Korean
//! tokens. They live here as one versioned table instead of being scattered
//! through the scanner, so a second locale or export variant is a table
//! swap rather than a parser rewrite.

use std::sync::LazyLock;

use regex::Regex;

/// The fixed grammar of one export dialect.
pub struct ExportGrammar {
    /// Prefix the export tool puts in front of the saved-date header line.
    pub saved_date_prefix: &'static str,
    /// Separator between the header's timestamp+sender part and the body.
    pub sender_separator: &'static str,
    /// Anchored pattern for a message header: date, optional AM/PM time.
    header: Regex,
    /// Anchored pattern for the date-only portion of a timestamp.
    date: Regex,
    /// Line prefixes marking a photo/video attachment message.
    media_sentinels: &'static [&'static str],
}

static KAKAO_KR: LazyLock<ExportGrammar> = LazyLock::new(|| ExportGrammar {
    saved_date_prefix: "저장한 날짜 : ",
    sender_separator: " : ",
    header: Regex::new(r"^\d{4}년 \d{1,2}월 \d{1,2}일( 오[전후] \d{1,2}:\d{2})?")
        .expect("header pattern is valid"),
    date: Regex::new(r"^\d{4}년 \d{1,2}월 \d{1,2}일").expect("date pattern is valid"),
    media_sentinels: &["<사진", "<동영상"],
});

impl ExportGrammar {
    /// The Korean KakaoTalk dialect, the only one currently shipped.
    pub fn kakao_kr() -> &'static ExportGrammar {
        &KAKAO_KR
    }

    /// Does this line open a new message (timestamp anchored at the start)?
    pub fn is_header(&self, line: &str) -> bool {
        self.header.is_match(line)
    }

    /// Does this line carry a photo/video sentinel?
    pub fn is_media_sentinel(&self, line: &str) -> bool {
        self.media_sentinels.iter().any(|s| line.starts_with(s))
    }

    /// The date-only portion of a raw timestamp fragment, if it has one.
    /// Used by the viewer to group messages under date headers.
    pub fn date_portion<'a>(&self, timestamp: &'a str) -> Option<&'a str> {
        self.date.find(timestamp).map(|m| m.as_str())
    }

    /// The saved-date header line with the export tool's prefix removed.
    /// Lines without the prefix pass through unchanged.
    pub fn strip_saved_date_prefix<'a>(&self, line: &'a str) -> &'a str {
        line.strip_prefix(self.saved_date_prefix).unwrap_or(line)
    }
}
