// ehm.rs — Error handling module
//
// Unified Result<T, AppError> + ? operator + From trait conversions for
// every fallible operation in the crate.  Diagnostics are rendered through
// Display and written to stderr, never mixed into the listing on stdout.

use std::fmt;
use std::path::PathBuf;





/// Unified error type for xls.
#[derive(Debug)]
pub enum AppError {
    /// Standard I/O error
    Io(std::io::Error),

    /// Invalid command-line argument (triggers usage hint + exit 2)
    InvalidArg(String),

    /// A directory could not be opened for reading
    OpenDir { path: PathBuf, source: std::io::Error },

    /// An entry inside an otherwise-open directory could not be stat'd
    ChildStat { path: PathBuf, source: std::io::Error },
}





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
            AppError::OpenDir { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            AppError::ChildStat { path, source } => {
                write!(f, "failed to stat '{}': {}", path.display(), source)
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
            AppError::OpenDir { source, .. } => Some(source),
            AppError::ChildStat { source, .. } => Some(source),
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





////////////////////////////////////////////////////////////////////////////////
//
//  report
//
//  Write a diagnostic for the given error to stderr, prefixed with the
//  program name.  The listing output on stdout is never touched.
//
////////////////////////////////////////////////////////////////////////////////

pub fn report(err: &AppError) {
    eprintln!("xls: {}", err);
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
    //  display_open_dir
    //
    //  Verifies display output for OpenDir error.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_open_dir() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = AppError::OpenDir {
            path:   PathBuf::from("/no/such/dir"),
            source: io_err,
        };
        assert!(format!("{}", e).starts_with("Failed to read '/no/such/dir'"));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_child_stat
    //
    //  Verifies display output for ChildStat error.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_child_stat() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e = AppError::ChildStat {
            path:   PathBuf::from("sub/file"),
            source: io_err,
        };
        assert!(format!("{}", e).starts_with("failed to stat 'sub/file'"));
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
}
