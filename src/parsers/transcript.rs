use std::path::Path;

use anyhow::{Result, bail};

use crate::models::{Message, Transcript};
use crate::parsers::grammar::ExportGrammar;
use crate::utils::read_transcript_text;

/// Counters for lines the scanner dropped while recovering.
///
/// The export format has no message terminator, so the scanner's policy is
/// best-effort recovery rather than failure. These counters make each drop
/// decision observable without changing the output contract.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Continuation or sentinel lines that arrived with no open message
    /// and could not be attributed to anything.
    pub orphan_lines: usize,
    /// Header lines that never accumulated content before being superseded
    /// by the next header (or end-of-input).
    pub empty_headers: usize,
}

/// An in-progress message: a header has been seen but the message has not
/// been emitted yet.
#[derive(Debug)]
struct OpenMessage {
    timestamp: String,
    sender: Option<String>,
    content: String,
}

impl OpenMessage {
    fn from_header(line: &str, grammar: &ExportGrammar) -> Self {
        // " : " separates timestamp+sender from the body. System notices
        // (joins, leaves, room-title changes) carry no separator and keep
        // the whole line as the timestamp.
        match line.split_once(grammar.sender_separator) {
            Some((left, body)) => match left.rfind(',') {
                Some(comma) => Self {
                    timestamp: left[..comma].to_string(),
                    sender: Some(left[comma + 1..].trim().to_string()),
                    content: body.to_string(),
                },
                None => Self {
                    timestamp: left.to_string(),
                    sender: None,
                    content: body.to_string(),
                },
            },
            None => Self { timestamp: line.to_string(), sender: None, content: String::new() },
        }
    }

    fn into_message(self, is_image: bool) -> Message {
        Message { timestamp: self.timestamp, sender: self.sender, content: self.content, is_image }
    }
}

/// Single-pass scanner over the message portion of an export.
///
/// Each line is classified as a header, a media sentinel, or a continuation,
/// in that priority order. A message's end is only inferable from the start
/// of the next header, a sentinel, or end-of-input, so the scanner always
/// closes out the open message before opening a new one.
struct LineScanner<'g> {
    grammar: &'g ExportGrammar,
    messages: Vec<Message>,
    open: Option<OpenMessage>,
    stats: ParseStats,
}

impl<'g> LineScanner<'g> {
    fn new(grammar: &'g ExportGrammar) -> Self {
        Self { grammar, messages: Vec::new(), open: None, stats: ParseStats::default() }
    }

    fn step(&mut self, line: &str) {
        if self.grammar.is_header(line) {
            self.flush_open();
            self.open = Some(OpenMessage::from_header(line, self.grammar));
        } else if self.grammar.is_media_sentinel(line) {
            // Sentinel messages are emitted immediately and close the open
            // message, so a following text line cannot attach to them.
            match self.open.take() {
                Some(mut open) => {
                    open.content = line.to_string();
                    self.messages.push(open.into_message(true));
                }
                None => self.stats.orphan_lines += 1,
            }
        } else {
            match self.open.as_mut() {
                Some(open) => {
                    if !open.content.is_empty() {
                        open.content.push('\n');
                    }
                    open.content.push_str(line);
                }
                None => self.stats.orphan_lines += 1,
            }
        }
    }

    /// Emit the open message if it accumulated content, discard it otherwise.
    fn flush_open(&mut self) {
        if let Some(open) = self.open.take() {
            if open.content.is_empty() {
                self.stats.empty_headers += 1;
            } else {
                self.messages.push(open.into_message(false));
            }
        }
    }

    fn finish(mut self) -> (Vec<Message>, ParseStats) {
        self.flush_open();
        (self.messages, self.stats)
    }
}

/// Parse a full export text into a [`Transcript`], returning the drop
/// counters alongside.
///
/// The first two non-empty lines are the title and saved-date header;
/// message scanning starts at the third. Malformed message lines are
/// recovered from (see [`ParseStats`]); only a structurally absent input
/// (fewer than two non-empty lines) is an error.
pub fn parse_transcript_with_stats(text: &str) -> Result<(Transcript, ParseStats)> {
    let grammar = ExportGrammar::kakao_kr();
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let Some(title) = lines.next() else {
        bail!("malformed transcript: missing title line");
    };
    let Some(date_line) = lines.next() else {
        bail!("malformed transcript: missing saved-date line");
    };
    let date = grammar.strip_saved_date_prefix(date_line);

    let mut scanner = LineScanner::new(grammar);
    for line in lines {
        scanner.step(line);
    }
    let (messages, stats) = scanner.finish();

    Ok((Transcript { title: title.to_string(), date: date.to_string(), messages }, stats))
}

/// Parse a full export text into a [`Transcript`].
pub fn parse_transcript(text: &str) -> Result<Transcript> {
    parse_transcript_with_stats(text).map(|(transcript, _)| transcript)
}

/// Read and parse an export file.
///
/// Fails loudly on I/O problems or oversized files; unattributable lines
/// inside the transcript itself are summarized to stderr instead.
pub fn parse_transcript_file(path: &Path) -> Result<Transcript> {
    let text = read_transcript_text(path)?;
    let (transcript, stats) = parse_transcript_with_stats(&text)?;

    if stats.orphan_lines > 0 || stats.empty_headers > 0 {
        eprintln!(
            "Parsed {}: {} messages ({} orphan lines, {} empty headers dropped)",
            path.display(),
            transcript.messages.len(),
            stats.orphan_lines,
            stats.empty_headers
        );
    }

    Ok(transcript)
}
