//! Media resolution for export directories.
//!
//! A KakaoTalk export is a folder holding the transcript text plus the
//! attached photos and videos. This module derives servable names for
//! filename tokens found in message content, inventories the media files on
//! disk, and maintains the alias (symlink) an external web root uses to
//! mirror the export folder.

pub mod alias;
pub mod paths;
pub mod scan;

pub use alias::replace_media_alias;
pub use paths::{resolve_media_path, servable_name};
pub use scan::scan_media_files;
