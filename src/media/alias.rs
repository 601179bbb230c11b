use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Point `alias` at `chat_dir`, replacing a previous alias atomically.
///
/// The new link is created under a temporary name next to the target and
/// renamed into place, so readers never observe a missing alias. An existing
/// path that is not a symlink is refused rather than clobbered; the
/// temporary link is cleaned up on every failure path.
pub fn replace_media_alias(chat_dir: &Path, alias: &Path) -> Result<()> {
    let chat_dir = chat_dir
        .canonicalize()
        .with_context(|| format!("Media directory not found: {}", chat_dir.display()))?;
    if !chat_dir.is_dir() {
        bail!("Media source is not a directory: {}", chat_dir.display());
    }

    // symlink_metadata: stat the alias itself, not what it points at.
    if let Ok(meta) = fs::symlink_metadata(alias)
        && !meta.file_type().is_symlink()
    {
        bail!("Refusing to replace non-symlink path: {}", alias.display());
    }

    if let Some(parent) = alias.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create alias parent: {}", parent.display()))?;
    }

    let staging = staging_path(alias)?;
    // A stale staging link from an interrupted earlier run is safe to drop.
    let _ = fs::remove_file(&staging);

    make_symlink(&chat_dir, &staging)
        .with_context(|| format!("Failed to create media alias at {}", staging.display()))?;

    if let Err(e) = fs::rename(&staging, alias) {
        let _ = fs::remove_file(&staging);
        return Err(e)
            .with_context(|| format!("Failed to move media alias into {}", alias.display()));
    }

    Ok(())
}

fn staging_path(alias: &Path) -> Result<std::path::PathBuf> {
    let Some(name) = alias.file_name() else {
        bail!("Invalid alias path: {}", alias.display());
    };
    let mut staged = name.to_os_string();
    staged.push(".staging");
    Ok(alias.with_file_name(staged))
}

#[cfg(unix)]
fn make_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn make_symlink(_target: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::other("media aliases require a unix filesystem"))
}
