use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::ViewerLayout;
use crate::content::{InlineSpan, find_image_tokens, scan_links, strip_image_tokens};
use crate::media::{resolve_media_path, servable_name};
use crate::models::{Message, Transcript};
use crate::parsers::ExportGrammar;
use crate::utils::sanitize_for_display;

const FG_BRIGHT: Color = Color::Rgb(250, 250, 250);
const FG_MUTED: Color = Color::Rgb(113, 113, 122);
const BG_DARK: Color = Color::Rgb(24, 24, 27);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const LINK: Color = Color::Rgb(22, 163, 74);
const MEDIA: Color = Color::Rgb(245, 158, 11);
const ERROR: Color = Color::Rgb(239, 68, 68);

/// Everything the renderer needs for one frame.
pub struct RenderState<'a> {
    pub transcript: &'a Transcript,
    pub media_root: Option<&'a Path>,
    pub window_start: usize,
    pub window_len: usize,
    pub selected_idx: usize,
    pub two_columns: bool,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = ViewerLayout::new(frame.area(), state.two_columns);

    render_header(frame, layout.header_area, state);

    let end = state.window_start + state.window_len;
    let visible: Vec<(usize, &Message)> =
        (state.window_start..end).map(|i| (i, &state.transcript.messages[i])).collect();

    if layout.columns.len() == 2 {
        // Left column takes the first half of the window, right the rest.
        let mid = visible.len().div_ceil(2);
        render_message_column(frame, layout.columns[0], &visible[..mid], state);
        render_message_column(frame, layout.columns[1], &visible[mid..], state);
    } else {
        render_message_column(frame, layout.columns[0], &visible, state);
    }

    render_status_bar(frame, layout.status_area, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &RenderState) {
    let total = state.transcript.messages.len();
    let window_line = if total == 0 {
        "No messages".to_string()
    } else {
        format!(
            "Showing messages {}-{} of {}",
            state.window_start + 1,
            state.window_start + state.window_len,
            total
        )
    };

    let text = Text::from(vec![
        Line::from(Span::styled(
            state.transcript.title.clone(),
            Style::default().fg(FG_BRIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(state.transcript.date.clone(), Style::default().fg(FG_MUTED))),
        Line::from(Span::styled(window_line, Style::default().fg(FG_MUTED))),
    ]);

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_message_column(
    frame: &mut Frame,
    area: Rect,
    messages: &[(usize, &Message)],
    state: &RenderState,
) {
    let grammar = ExportGrammar::kakao_kr();
    let mut lines: Vec<Line> = Vec::new();
    let mut current_date: Option<String> = None;

    for (idx, message) in messages {
        // Date group header whenever the day changes within this column.
        if let Some(day) = grammar.date_portion(&message.timestamp)
            && current_date.as_deref() != Some(day)
        {
            lines.push(Line::from(Span::styled(
                format!("── {} ──", day),
                Style::default().fg(FG_MUTED).add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(""));
            current_date = Some(day.to_string());
        }

        lines.extend(message_card_lines(message, *idx == state.selected_idx, state.media_root));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FG_MUTED))
                .title(" Messages "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn message_card_lines(
    message: &Message,
    selected: bool,
    media_root: Option<&Path>,
) -> Vec<Line<'static>> {
    let grammar = ExportGrammar::kakao_kr();
    let mut lines = Vec::new();

    // Header: time-of-day portion plus sender.
    let time = match grammar.date_portion(&message.timestamp) {
        Some(date) => message.timestamp[date.len()..].trim().to_string(),
        None => message.timestamp.clone(),
    };
    let header_style = if selected {
        Style::default().fg(FG_BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(FG_MUTED)
    };
    let mut header_spans = vec![
        Span::styled(if selected { "▶ " } else { "  " }.to_string(), header_style),
        Span::styled(time, header_style),
    ];
    if let Some(sender) = &message.sender {
        header_spans.push(Span::styled(" ".to_string(), header_style));
        header_spans.push(Span::styled(
            sanitize_for_display(sender),
            header_style.add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(header_spans));

    let content = sanitize_for_display(&message.content);

    if message.is_image {
        // Media sentinel: the content is the marker itself.
        lines.push(Line::from(Span::styled(
            format!("  {}", content),
            Style::default().fg(MEDIA).add_modifier(Modifier::ITALIC),
        )));
        return lines;
    }

    let image_tokens = find_image_tokens(&content);
    let body = if image_tokens.is_empty() { content.clone() } else { strip_image_tokens(&content) };

    for content_line in body.lines() {
        lines.push(content_line_spans(content_line));
    }

    // Filename tokens resolve against the media root that mirrors the
    // export folder; without one, show the servable name alone.
    for token in image_tokens {
        let resolved = match media_root {
            Some(root) => resolve_media_path(root, token).display().to_string(),
            None => servable_name(token),
        };
        lines.push(Line::from(Span::styled(
            format!("  ▣ {}", resolved),
            Style::default().fg(MEDIA),
        )));
    }

    lines
}

fn content_line_spans(line: &str) -> Line<'static> {
    let mut spans = vec![Span::styled("  ".to_string(), Style::default())];
    for span in scan_links(line) {
        match span {
            InlineSpan::Text(text) => {
                spans.push(Span::styled(text.to_string(), Style::default().fg(FG_BRIGHT)));
            }
            InlineSpan::Link(url) => {
                spans.push(Span::styled(
                    url.to_string(),
                    Style::default().fg(LINK).add_modifier(Modifier::UNDERLINED),
                ));
            }
        }
    }
    Line::from(spans)
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(msg) = state.status_message {
        let fg = match msg.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", msg.text), Style::default().fg(fg).bg(BG_DARK))
    } else {
        let total = state.transcript.messages.len();
        let mut parts = Vec::new();
        if total == 0 {
            parts.push("No messages".to_string());
        } else {
            parts.push(format!("{} messages", total));
            parts.push(format!("message {}/{}", state.selected_idx + 1, total));
        }
        parts.push((if state.two_columns { "t: one column" } else { "t: two columns" }).to_string());
        parts.push("y: copy".to_string());
        parts.push("q: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(FG_BRIGHT).bg(BG_DARK))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn message(timestamp: &str, sender: Option<&str>, content: &str, is_image: bool) -> Message {
        Message {
            timestamp: timestamp.to_string(),
            sender: sender.map(str::to_string),
            content: content.to_string(),
            is_image,
        }
    }

    fn transcript() -> Transcript {
        Transcript {
            title: "My Chat Room".to_string(),
            date: "2024-01-01 00:00".to_string(),
            messages: vec![
                message("2024년 1월 1일 오전 9:00", Some("Alice"), "Hi there", false),
                message("2024년 1월 1일 오전 9:01", Some("Bob"), "<사진 1장>", true),
                message("2024년 1월 2일 오전 8:00", None, "Carol joined.", false),
                message(
                    "2024년 1월 2일 오전 8:05",
                    Some("Alice"),
                    "see https://example.com/x and IMG_001.jpg",
                    false,
                ),
            ],
        }
    }

    fn state(transcript: &Transcript) -> RenderState<'_> {
        RenderState {
            transcript,
            media_root: None,
            window_start: 0,
            window_len: transcript.messages.len().min(10),
            selected_idx: 0,
            two_columns: true,
            status_message: None,
        }
    }

    #[test]
    fn test_render_ui_two_columns() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let transcript = transcript();

        terminal.draw(|f| render_ui(f, &state(&transcript))).unwrap();
    }

    #[test]
    fn test_render_ui_narrow_terminal() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let transcript = transcript();

        terminal.draw(|f| render_ui(f, &state(&transcript))).unwrap();
    }

    #[test]
    fn test_render_ui_empty_transcript() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let transcript = Transcript {
            title: "Empty".to_string(),
            date: "2024-01-01".to_string(),
            messages: vec![],
        };

        terminal.draw(|f| render_ui(f, &state(&transcript))).unwrap();
    }

    #[test]
    fn test_render_ui_with_media_root() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let transcript = transcript();
        let mut state = state(&transcript);
        state.media_root = Some(Path::new("/srv/chat-media"));

        terminal.draw(|f| render_ui(f, &state)).unwrap();
    }

    #[test]
    fn test_render_ui_with_status_message() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let transcript = transcript();
        let status = StatusMessage {
            text: "✓ Copied message to clipboard".to_string(),
            message_type: MessageType::Success,
            expires_at: std::time::Instant::now(),
        };
        let mut state = state(&transcript);
        state.status_message = Some(&status);

        terminal.draw(|f| render_ui(f, &state)).unwrap();
    }

    #[test]
    fn test_message_card_media_sentinel() {
        let msg = message("2024년 1월 1일 오전 9:01", Some("Bob"), "<사진 1장>", true);
        let lines = message_card_lines(&msg, false, None);

        // Header plus the sentinel body, nothing else.
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_message_card_resolves_image_tokens() {
        let msg = message("2024년 1월 1일", Some("Alice"), "photo IMG_001.jpg", false);
        let lines = message_card_lines(&msg, false, Some(Path::new("/media")));

        let flat: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone()))
            .collect::<Vec<_>>()
            .join("");
        assert!(flat.contains("/media/IMG_001.jpg"));
        assert!(flat.contains("photo"));
        assert!(!flat.contains("photo IMG_001.jpg"));
    }

    #[test]
    fn test_message_card_strips_ansi_from_content() {
        let msg = message("2024년 1월 1일", Some("Mallory"), "\x1b[2Jboo", false);
        let lines = message_card_lines(&msg, false, None);

        let flat: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone()))
            .collect::<Vec<_>>()
            .join("");
        assert!(flat.contains("boo"));
        assert!(!flat.contains('\x1b'));
    }

    #[test]
    fn test_content_line_highlights_links() {
        let line = content_line_spans("see https://example.com/page now");
        let link_spans: Vec<_> =
            line.spans.iter().filter(|s| s.style.fg == Some(LINK)).collect();
        assert_eq!(link_spans.len(), 1);
        assert_eq!(link_spans[0].content, "https://example.com/page");
    }
}
