// metadata_decoder.rs — Raw status → DecodedMetadata
//
// The mode word is rendered as six octal digits: two for the file type,
// one for setuid/setgid/sticky (ignored), three for owner/group/other.
// Unknown type codes decode to '?' so odd entries (fifos, sockets,
// devices) never abort a listing.

use chrono::{DateTime, Datelike, Local, Timelike};

use crate::ehm::DecodeError;
use crate::file_info::RawStatus;
use crate::owner::IdentityResolver;

/// Type character used for any type code not in FILE_TYPE_MAP.
pub const UNKNOWN_TYPE_CHAR: char = '?';

/// Two-digit octal type code → type character.
pub const FILE_TYPE_MAP: [(&str, char); 3] = [
    ("04", 'd'),
    ("10", '-'),
    ("12", 'l'),
];

/// Octal permission digit → rwx triple, indexed by digit.
pub const PERMISSION_TRIPLES: [&str; 8] = [
    "---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx",
];

/// Fully decoded view of one entry, ready for the long formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMetadata {
    pub type_char:     char,
    pub permissions:   String,
    pub link_count:    u64,
    pub owner_name:    String,
    pub group_name:    String,
    pub size_bytes:    u64,
    pub mtime_display: String,
    pub display_name:  String,
}





////////////////////////////////////////////////////////////////////////////////
//
//  decode
//
//  Decode one raw status snapshot.  `raw` must come from a non-following
//  status call so symlinks report type 'l'.  Fails on a malformed mode
//  word or an owner/group id with no registered name.
//
////////////////////////////////////////////////////////////////////////////////

pub fn decode(
    raw: &RawStatus,
    is_symlink: bool,
    symlink_target: Option<&str>,
    display_name: &str,
    resolver: &dyn IdentityResolver,
) -> Result<DecodedMetadata, DecodeError> {
    let (type_char, permissions) = decode_mode(raw.mode)?;

    let owner_name = resolver
        .resolve_owner_name(raw.uid)
        .ok_or(DecodeError::UnknownOwner(raw.uid))?;

    let group_name = resolver
        .resolve_group_name(raw.gid)
        .ok_or(DecodeError::UnknownGroup(raw.gid))?;

    let display_name = match (is_symlink, symlink_target) {
        (true, Some(target)) => format!("{} -> {}", display_name, target),
        _ => display_name.to_string(),
    };

    Ok(DecodedMetadata {
        type_char,
        permissions,
        link_count: raw.nlink,
        owner_name,
        group_name,
        size_bytes: raw.size,
        mtime_display: format_mtime(&raw.mtime),
        display_name,
    })
}





////////////////////////////////////////////////////////////////////////////////
//
//  decode_mode
//
//  Mode word → (type char, nine-char permission string).
//
////////////////////////////////////////////////////////////////////////////////

pub fn decode_mode(mode: u32) -> Result<(char, String), DecodeError> {
    let octal = format!("{:06o}", mode);
    if octal.len() != 6 {
        return Err(DecodeError::MalformedMode(mode));
    }

    let type_char = decode_type_char(&octal[..2]);

    // octal[2] is setuid/setgid/sticky: not shown
    let mut permissions = String::with_capacity(9);
    for digit in octal[3..].bytes() {
        permissions.push_str(PERMISSION_TRIPLES[(digit - b'0') as usize]);
    }

    Ok((type_char, permissions))
}





////////////////////////////////////////////////////////////////////////////////
//
//  decode_type_char
//
//  Two-digit octal type code → type char, '?' when unrecognized.
//
////////////////////////////////////////////////////////////////////////////////

pub fn decode_type_char(code: &str) -> char {
    FILE_TYPE_MAP
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, ch)| ch)
        .unwrap_or(UNKNOWN_TYPE_CHAR)
}





////////////////////////////////////////////////////////////////////////////////
//
//  format_mtime
//
//  "<month:2> <day:2> HH:MM": month and day space-padded, time
//  zero-padded.
//
////////////////////////////////////////////////////////////////////////////////

pub fn format_mtime(mtime: &DateTime<Local>) -> String {
    format!(
        "{:>2} {:>2} {:02}:{:02}",
        mtime.month(),
        mtime.day(),
        mtime.hour(),
        mtime.minute(),
    )
}
