// Interactive transcript viewer
mod app;
mod events;
mod layout;
mod rendering;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
pub use app::App;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::models::Transcript;

/// Owns raw mode and the alternate screen for the lifetime of the viewer.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

// Restore the terminal on every exit path, including panics.
impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive viewer over a parsed transcript.
///
/// `media_root` is the directory holding the export's attachments; filename
/// tokens in message bodies resolve against it when present.
pub fn run_viewer(transcript: Transcript, media_root: Option<PathBuf>) -> Result<()> {
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(transcript, media_root);
    app.run(&mut guard.terminal)
}
