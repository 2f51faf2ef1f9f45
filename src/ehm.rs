// ehm.rs — Error handling module
//
// One error type for the whole listing, propagated with Result<T, AppError>
// and the ? operator.  Per-entry decode failures carry their own DecodeError
// so the displayer can report them and keep going.

use std::fmt;
use std::path::PathBuf;





/// Reasons a raw status record could not be turned into DecodedMetadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Mode bits do not fit the six-octal-digit type+permission shape
    MalformedMode(u32),

    /// No user name registered for this uid
    UnknownOwner(u32),

    /// No group name registered for this gid
    UnknownGroup(u32),
}





/// Unified error type for rls.
#[derive(Debug)]
pub enum AppError {
    /// Standard I/O error
    Io(std::io::Error),

    /// Invalid command-line argument (triggers usage display + exit 1)
    InvalidArg(String),

    /// Directory or entry could not be read
    DirectoryAccess {
        path:   PathBuf,
        source: std::io::Error,
    },

    /// Entry status could not be decoded
    Decode {
        path:   PathBuf,
        source: DecodeError,
    },

    /// Listing finished, but this many entries were skipped
    PartialListing(usize),
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl fmt::Display for DecodeError
//
//  Formats DecodeError variants for diagnostics.
//
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MalformedMode(mode) => write!(f, "unexpected mode bits {:o}", mode),
            DecodeError::UnknownOwner(uid)   => write!(f, "no user name for uid {}", uid),
            DecodeError::UnknownGroup(gid)   => write!(f, "no group name for gid {}", gid),
        }
    }
}





impl std::error::Error for DecodeError {}





////////////////////////////////////////////////////////////////////////////////
//
//  impl fmt::Display for AppError
//
//  Formats AppError variants for display output.
//
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "{}", e),
            AppError::InvalidArg(msg) => write!(f, "{}", msg),
            AppError::DirectoryAccess { path, source } => {
                write!(f, "cannot access '{}': {}", path.display(), source)
            }
            AppError::Decode { path, source } => {
                write!(f, "cannot decode '{}': {}", path.display(), source)
            }
            AppError::PartialListing(count) => {
                let noun = if *count == 1 { "entry" } else { "entries" };
                write!(f, "{} {} could not be listed", count, noun)
            }
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl std::error::Error for AppError
//
//  Returns the underlying error source, if any.
//
////////////////////////////////////////////////////////////////////////////////

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::DirectoryAccess { source, .. } => Some(source),
            AppError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl From<std::io::Error> for AppError
//
//  Converts a standard I/O error into AppError::Io.
//
////////////////////////////////////////////////////////////////////////////////

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}





#[cfg(test)]
mod tests {
    use super::*;

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_invalid_arg
    //
    //  Verifies display output for InvalidArg error.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_invalid_arg() {
        let e = AppError::InvalidArg("bad switch".into());
        assert_eq!(format!("{}", e), "bad switch");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_directory_access
    //
    //  Verifies the path and the OS reason both appear.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_directory_access() {
        let e = AppError::DirectoryAccess {
            path:   PathBuf::from("/no/such/dir"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(format!("{}", e), "cannot access '/no/such/dir': not found");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_decode_unknown_owner
    //
    //  Verifies decode errors name the offending uid.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_decode_unknown_owner() {
        let e = AppError::Decode {
            path:   PathBuf::from("ghost.txt"),
            source: DecodeError::UnknownOwner(4242),
        };
        assert_eq!(format!("{}", e), "cannot decode 'ghost.txt': no user name for uid 4242");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_partial_listing
    //
    //  Verifies singular and plural wording.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_partial_listing() {
        assert_eq!(format!("{}", AppError::PartialListing(1)), "1 entry could not be listed");
        assert_eq!(format!("{}", AppError::PartialListing(3)), "3 entries could not be listed");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_io_error
    //
    //  Verifies conversion from std::io::Error to AppError::Io.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  source_of_decode_error
    //
    //  Verifies the DecodeError is exposed as the error source.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn source_of_decode_error() {
        use std::error::Error;

        let e = AppError::Decode {
            path:   PathBuf::from("x"),
            source: DecodeError::MalformedMode(0o1_000_000),
        };
        assert!(e.source().is_some());
        assert!(AppError::InvalidArg(String::new()).source().is_none());
    }
}
