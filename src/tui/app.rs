//! Viewer application state and event handling.
//!
//! The `App` owns the parsed transcript and a sliding window over its
//! messages: the window start is what the slider controlled in the original
//! viewer, moved here with the keyboard. Selection stays inside the window,
//! the window follows the selection, and rendering only happens when state
//! actually changed (dirty tracking) or on a periodic resize-friendly tick.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::models::Transcript;

/// Messages visible at once; the page the original viewer showed per
/// slider position.
pub const PAGE_SIZE: usize = 10;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    transcript: Transcript,
    media_root: Option<PathBuf>,
    selected_idx: usize,
    window_start: usize,
    two_columns: bool,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(transcript: Transcript, media_root: Option<PathBuf>) -> Self {
        Self {
            transcript,
            media_root,
            selected_idx: 0,
            window_start: 0,
            two_columns: true,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            let had_status = self.status_message.is_some();
            self.check_and_clear_expired_status();
            if had_status && self.status_message.is_none() {
                self.needs_redraw = true;
            }

            // Redraw when dirty, or after 100ms so terminal resizes settle.
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                terminal.draw(|f| {
                    let state = RenderState {
                        transcript: &self.transcript,
                        media_root: self.media_root.as_deref(),
                        window_start: self.window_start,
                        window_len: self.window_len(),
                        selected_idx: self.selected_idx,
                        two_columns: self.two_columns,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Number of messages currently inside the window.
    fn window_len(&self) -> usize {
        self.transcript.messages.len().saturating_sub(self.window_start).min(PAGE_SIZE)
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-(PAGE_SIZE as isize)),
            Action::PageDown => self.move_selection(PAGE_SIZE as isize),
            Action::Home => self.jump_to(0),
            Action::End => self.jump_to(self.transcript.messages.len().saturating_sub(1)),
            Action::ToggleColumns => {
                self.two_columns = !self.two_columns;
                self.needs_redraw = true;
            }
            Action::CopyToClipboard => self.copy_selected(),
            Action::None => {}
        }
    }

    fn copy_selected(&mut self) {
        match self.transcript.messages.get(self.selected_idx) {
            None => {
                self.set_status("✗ No message selected", MessageType::Error, STATUS_ERROR_DURATION_MS);
            }
            Some(message) => match copy_to_clipboard(&message.content) {
                Ok(()) => self.set_status(
                    "✓ Copied message to clipboard",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                ),
                Err(e) => self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                ),
            },
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.transcript.messages.len();
        if total == 0 {
            return;
        }
        let new_idx = (self.selected_idx as isize + delta).clamp(0, total as isize - 1) as usize;
        self.jump_to(new_idx);
    }

    fn jump_to(&mut self, idx: usize) {
        let total = self.transcript.messages.len();
        if total == 0 {
            return;
        }
        let idx = idx.min(total - 1);
        if idx != self.selected_idx {
            self.selected_idx = idx;
            self.needs_redraw = true;
        }
        self.scroll_window_to_selection();
    }

    /// Keep the selection inside the visible window.
    fn scroll_window_to_selection(&mut self) {
        let old_start = self.window_start;
        if self.selected_idx < self.window_start {
            self.window_start = self.selected_idx;
        } else if self.selected_idx >= self.window_start + PAGE_SIZE {
            self.window_start = self.selected_idx + 1 - PAGE_SIZE;
        }
        if self.window_start != old_start {
            self.needs_redraw = true;
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
        }
    }
}
