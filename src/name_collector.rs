// name_collector.rs — Directory enumeration and name ordering
//
// Reads one directory, drops hidden entries unless asked not to, and sorts
// the survivors case-insensitively.  With hidden entries shown, the "." and
// ".." self/parent entries are listed too.
//
// Each name keeps its raw OS form for later status calls; the lossy UTF-8
// form is only for display and width measurement.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use crate::console::Console;
use crate::ehm::AppError;

/// Names starting with this are hidden unless `show_hidden` is set.
pub const HIDDEN_ENTRY_MARKER: char = '.';

/// One directory entry name, raw and as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryName {
    pub raw:     OsString,
    pub display: String,
}

impl EntryName {
    pub fn new(raw: OsString) -> Self {
        let display = raw.to_string_lossy().into_owned();
        EntryName { raw, display }
    }
}

impl From<&str> for EntryName {
    fn from(name: &str) -> Self {
        EntryName::new(OsString::from(name))
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  collect_names
//
//  Enumerate `dir` and return the visible names in display order.
//  Fails with DirectoryAccess if the directory itself cannot be read.
//  An entry that fails mid-enumeration is reported on `console` and
//  counted; the rest are still listed.
//
////////////////////////////////////////////////////////////////////////////////

pub fn collect_names(
    dir: &Path,
    show_hidden: bool,
    console: &mut Console,
) -> Result<Vec<EntryName>, AppError> {
    let read_dir = fs::read_dir(dir).map_err(|source| AppError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let entries = read_dir.map(|entry| entry.map(|e| e.file_name()));
    Ok(collect_from_entries(dir, entries, show_hidden, console))
}





////////////////////////////////////////////////////////////////////////////////
//
//  collect_from_entries
//
//  Filter and sort an enumeration of raw names.  Failed items become
//  DirectoryAccess diagnostics against `dir`.
//
////////////////////////////////////////////////////////////////////////////////

pub fn collect_from_entries<I>(
    dir: &Path,
    entries: I,
    show_hidden: bool,
    console: &mut Console,
) -> Vec<EntryName>
where
    I: IntoIterator<Item = io::Result<OsString>>,
{
    let mut names: Vec<EntryName> = if show_hidden {
        vec![EntryName::from("."), EntryName::from("..")]
    } else {
        Vec::new()
    };

    for entry in entries {
        match entry {
            Ok(raw) => {
                let name = EntryName::new(raw);
                if is_visible(&name.display, show_hidden) {
                    names.push(name);
                }
            }
            Err(source) => console.report_error(&AppError::DirectoryAccess {
                path: dir.to_path_buf(),
                source,
            }),
        }
    }

    sort_names(&mut names);
    names
}





////////////////////////////////////////////////////////////////////////////////
//
//  is_visible
//
//  Hidden-entry filter.
//
////////////////////////////////////////////////////////////////////////////////

pub fn is_visible(name: &str, show_hidden: bool) -> bool {
    show_hidden || !name.starts_with(HIDDEN_ENTRY_MARKER)
}





////////////////////////////////////////////////////////////////////////////////
//
//  sort_names
//
//  Case-insensitive order; names equal ignoring case fall back to raw
//  order so the result is deterministic.
//
////////////////////////////////////////////////////////////////////////////////

pub fn sort_names(names: &mut [EntryName]) {
    names.sort_by_cached_key(|n| (n.display.to_lowercase(), n.raw.clone()));
}
