// file_info.rs — Raw per-entry status snapshot
//
// Thin wrapper over std::fs::Metadata that keeps only the fields the long
// listing needs: type+mode bits, link count, owner/group ids, size, mtime.

use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use chrono::{DateTime, Local};

// ── File type constants (st_mode & S_IFMT) ───────────────────────────────────

pub const S_IFMT:   u32 = 0o170000;
pub const S_IFLNK:  u32 = 0o120000;

// ── Raw status ────────────────────────────────────────────────────────────────

/// One status snapshot as returned by the OS, before any decoding.
#[derive(Debug, Clone)]
pub struct RawStatus {
    pub mode:  u32,
    pub nlink: u64,
    pub uid:   u32,
    pub gid:   u32,
    pub size:  u64,
    pub mtime: DateTime<Local>,
}

impl RawStatus {
    pub fn from_metadata(md: &fs::Metadata) -> io::Result<Self> {
        let modified = md.modified()?;

        Ok(RawStatus {
            mode:  md.mode(),
            nlink: md.nlink(),
            uid:   md.uid(),
            gid:   md.gid(),
            size:  md.size(),
            mtime: DateTime::<Local>::from(modified),
        })
    }

    pub fn is_symlink(&self) -> bool {
        (self.mode & S_IFMT) == S_IFLNK
    }
}

/// Read the status of `path`.  With `follow_symlinks == false` a link
/// reports itself rather than its target.
pub fn read_status(path: &Path, follow_symlinks: bool) -> io::Result<RawStatus> {
    let md = if follow_symlinks {
        fs::metadata(path)?
    } else {
        fs::symlink_metadata(path)?
    };

    RawStatus::from_metadata(&md)
}

/// Target of a symbolic link, as stored in the link (not canonicalized).
pub fn read_link_target(path: &Path) -> io::Result<String> {
    let target = fs::read_link(path)?;
    Ok(target.to_string_lossy().into_owned())
}
