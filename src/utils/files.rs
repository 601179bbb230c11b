use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Exports are plain text; anything past this is not a chat transcript.
const MAX_TRANSCRIPT_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Read a transcript file to a string, capping its size first.
///
/// The size check runs on the already-open handle so the file cannot be
/// swapped between the check and the read.
pub fn read_transcript_text(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open transcript file: {}", path.display()))?;

    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    if metadata.len() > MAX_TRANSCRIPT_SIZE_BYTES {
        bail!(
            "Transcript file too large: {} ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_TRANSCRIPT_SIZE_BYTES
        );
    }

    let mut text = String::with_capacity(metadata.len() as usize);
    file.read_to_string(&mut text)
        .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;
    Ok(text)
}
