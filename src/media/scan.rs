use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

// Attachment types the export tool writes next to the transcript.
const MEDIA_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "bmp", "webp", "mp4", "mov", "avi", "webm"];

fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MEDIA_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
}

/// Enumerate the media files shipped alongside a transcript.
///
/// The export directory is usually flat, but nested folders are walked too.
/// Returns paths sorted for stable output; a missing directory is an error,
/// an empty one is not.
pub fn scan_media_files(chat_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(chat_dir) {
        let entry = entry
            .with_context(|| format!("Failed to scan media directory: {}", chat_dir.display()))?;
        if entry.file_type().is_file() && is_media_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_scan_finds_media_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "KakaoTalkChats.txt");
        touch(dir.path(), "photo1.jpg");
        touch(dir.path(), "clip.MP4");
        touch(dir.path(), "notes.pdf");

        let files = scan_media_files(dir.path()).unwrap();
        let names: Vec<_> =
            files.iter().map(|p| p.file_name().unwrap().to_string_lossy().to_string()).collect();
        assert_eq!(names, ["clip.MP4", "photo1.jpg"]);
    }

    #[test]
    fn test_scan_walks_nested_folders() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("2024-01");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "inner.png");

        let files = scan_media_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("2024-01/inner.png"));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(scan_media_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_directory_is_error() {
        let result = scan_media_files(Path::new("/nonexistent/export"));
        assert!(result.is_err());
    }
}
