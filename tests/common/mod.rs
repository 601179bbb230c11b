//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder assembling raw export text line by line.
pub struct TranscriptBuilder {
    title: String,
    date_line: String,
    lines: Vec<String>,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Room".to_string(),
            date_line: "저장한 날짜 : 2024-01-01 00:00".to_string(),
            lines: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn saved_date_line(mut self, line: &str) -> Self {
        self.date_line = line.to_string();
        self
    }

    /// Add a normal message header with a sender and initial content.
    pub fn message(mut self, timestamp: &str, sender: &str, content: &str) -> Self {
        self.lines.push(format!("{}, {} : {}", timestamp, sender, content));
        self
    }

    /// Add a media message: a header followed by a sentinel line.
    pub fn media(mut self, timestamp: &str, sender: &str, sentinel: &str) -> Self {
        self.lines.push(format!("{}, {} : ", timestamp, sender));
        self.lines.push(sentinel.to_string());
        self
    }

    /// Add any raw line (system notices, continuations, garbage).
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut text = format!("{}\n{}\n", self.title, self.date_line);
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

impl Default for TranscriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for on-disk export directories (transcript plus media files).
pub struct ExportDirBuilder {
    temp_dir: TempDir,
}

impl ExportDirBuilder {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the transcript under the export tool's default filename.
    pub fn with_transcript(self, content: &str) -> Self {
        self.with_transcript_named("KakaoTalkChats.txt", content)
    }

    pub fn with_transcript_named(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write transcript");
        self
    }

    /// Create empty media files next to the transcript.
    pub fn with_media(self, names: &[&str]) -> Self {
        for name in names {
            fs::write(self.temp_dir.path().join(name), b"media").expect("Failed to write media");
        }
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}
