// long.rs — Long-format displayer: type, permissions, links, owner, group,
//           size, mtime, name
//
// Two passes: decode every entry, then format against widths taken from
// the whole decoded set.  An entry that fails to stat or decode is
// reported and left out of both passes.

use std::path::Path;

use crate::console::Console;
use crate::detailed_formatter;
use crate::ehm::AppError;
use crate::file_info;
use crate::metadata_decoder::{self, DecodedMetadata};
use crate::name_collector::EntryName;
use crate::owner::IdentityResolver;

use super::ResultsDisplayer;





////////////////////////////////////////////////////////////////////////////////

/// One aligned line per entry.
pub struct LongDisplayer {
    console:  Console,
    resolver: Box<dyn IdentityResolver>,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl LongDisplayer
//
//  Long displayer construction and console access.
//
////////////////////////////////////////////////////////////////////////////////

impl LongDisplayer {
    pub fn new(console: Console, resolver: Box<dyn IdentityResolver>) -> Self {
        LongDisplayer { console, resolver }
    }

    pub fn into_console(self) -> Console {
        self.console
    }

    #[cfg(test)]
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for LongDisplayer
//
//  Decode all, then print all.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for LongDisplayer {
    fn display_results(&mut self, dir: &Path, names: &[EntryName]) {
        let mut decoded: Vec<DecodedMetadata> = Vec::with_capacity(names.len());

        for name in names {
            match decode_entry(dir, name, self.resolver.as_ref()) {
                Ok(md) => decoded.push(md),
                Err(e) => self.console.report_error(&e),
            }
        }

        for line in detailed_formatter::format_entries(&decoded) {
            self.console.puts(&line);
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  decode_entry
//
//  Stat `dir/name` without following links, read the link target when it
//  is one, and decode.  The raw name locates the entry; the display name
//  is what gets printed.  Status failures map to DirectoryAccess, decode
//  failures to Decode, both naming the entry's path.
//
////////////////////////////////////////////////////////////////////////////////

pub fn decode_entry(
    dir: &Path,
    name: &EntryName,
    resolver: &dyn IdentityResolver,
) -> Result<DecodedMetadata, AppError> {
    let path = dir.join(&name.raw);

    let raw = file_info::read_status(&path, false).map_err(|source| AppError::DirectoryAccess {
        path: path.clone(),
        source,
    })?;

    let is_symlink = raw.is_symlink();
    let target = if is_symlink {
        let t = file_info::read_link_target(&path).map_err(|source| AppError::DirectoryAccess {
            path: path.clone(),
            source,
        })?;
        Some(t)
    } else {
        None
    };

    metadata_decoder::decode(&raw, is_symlink, target.as_deref(), &name.display, resolver)
        .map_err(|source| AppError::Decode { path, source })
}
