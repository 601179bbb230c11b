use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::media::{replace_media_alias, scan_media_files};
use crate::parsers::parse_transcript_file;
use crate::tui::run_viewer;

/// Filename the export tool gives the transcript inside an export folder.
const DEFAULT_TRANSCRIPT_NAME: &str = "KakaoTalkChats.txt";

#[derive(Parser)]
#[command(name = "kakao-chat-viewer")]
#[command(version = "0.1.0")]
#[command(about = "Browse exported KakaoTalk chat transcripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Export directory or transcript file to open in the viewer
    pub path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive viewer
    View {
        /// Export directory or transcript file
        path: PathBuf,
    },
    /// Show statistics about a transcript
    Stats {
        /// Export directory or transcript file
        path: PathBuf,
    },
    /// Print the parsed transcript as JSON
    Dump {
        /// Export directory or transcript file
        path: PathBuf,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Create or replace the media alias symlink for an export directory
    LinkMedia {
        /// Export directory holding the attachments
        chat_dir: PathBuf,
        /// Path the alias should live at
        alias: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::View { path }) => view(&path),
        Some(Commands::Stats { path }) => show_stats(&path),
        Some(Commands::Dump { path, pretty }) => dump(&path, pretty),
        Some(Commands::LinkMedia { chat_dir, alias }) => link_media(&chat_dir, &alias),
        None => match cli.path {
            Some(path) => view(&path),
            None => {
                println!("Use --help for usage information");
                Ok(())
            }
        },
    }
}

/// Find the transcript text inside an export path.
///
/// Accepts either the transcript file itself or the export directory; inside
/// a directory the export tool's default filename wins, with any other
/// `.txt` file as a fallback.
fn locate_transcript(path: &Path) -> Result<(PathBuf, Option<PathBuf>)> {
    if path.is_file() {
        return Ok((path.to_path_buf(), path.parent().map(Path::to_path_buf)));
    }

    if path.is_dir() {
        let default = path.join(DEFAULT_TRANSCRIPT_NAME);
        if default.is_file() {
            return Ok((default, Some(path.to_path_buf())));
        }

        let mut candidates: Vec<PathBuf> = fs::read_dir(path)
            .with_context(|| format!("Failed to read export directory: {}", path.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| {
                p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("txt")
            })
            .collect();
        candidates.sort();

        return match candidates.into_iter().next() {
            Some(txt) => Ok((txt, Some(path.to_path_buf()))),
            None => bail!("No transcript (.txt) found in export directory: {}", path.display()),
        };
    }

    bail!("Transcript path does not exist: {}", path.display())
}

fn view(path: &Path) -> Result<()> {
    let (transcript_path, chat_dir) = locate_transcript(path)?;
    let transcript = parse_transcript_file(&transcript_path)?;
    run_viewer(transcript, chat_dir)
}

fn show_stats(path: &Path) -> Result<()> {
    let (transcript_path, chat_dir) = locate_transcript(path)?;
    let transcript = parse_transcript_file(&transcript_path)?;

    let senders: HashSet<&str> =
        transcript.messages.iter().filter_map(|m| m.sender.as_deref()).collect();

    println!("Transcript statistics");
    println!("=====================");
    println!("Title: {}", transcript.title);
    println!("Saved: {}", transcript.date);
    println!("Total messages: {}", transcript.messages.len());
    println!("  Media messages: {}", transcript.media_count());
    println!("  System notices: {}", transcript.system_count());
    println!("Distinct senders: {}", senders.len());

    if let Some(first) = transcript.messages.first() {
        println!("First message: {}", first.timestamp);
    }
    if let Some(last) = transcript.messages.last() {
        println!("Last message: {}", last.timestamp);
    }

    if let Some(chat_dir) = chat_dir {
        match scan_media_files(&chat_dir) {
            Ok(files) => println!("Media files on disk: {}", files.len()),
            Err(e) => eprintln!("Warning: Failed to scan media files: {}", e),
        }
    }

    Ok(())
}

fn dump(path: &Path, pretty: bool) -> Result<()> {
    let (transcript_path, _) = locate_transcript(path)?;
    let transcript = parse_transcript_file(&transcript_path)?;

    let json = if pretty {
        serde_json::to_string_pretty(&transcript)?
    } else {
        serde_json::to_string(&transcript)?
    };
    println!("{}", json);

    Ok(())
}

fn link_media(chat_dir: &Path, alias: &Path) -> Result<()> {
    replace_media_alias(chat_dir, alias)?;
    println!("Media alias ready: {} -> {}", alias.display(), chat_dir.display());
    Ok(())
}
