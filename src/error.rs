//! Error types surfaced by the filter

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Insufficient parameters")]
    InsufficientParameters,

    #[error("Unable to read input file: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading stopped before end of input; blocks seen so far are still valid.
    #[error("unexpected read failure after line {line}")]
    UnexpectedRead {
        line: usize,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::FilterError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn messages_match_cli_wording() {
        assert_eq!(FilterError::InsufficientParameters.to_string(), "Insufficient parameters");

        let err = FilterError::FileOpen {
            path: PathBuf::from("missing.js"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Unable to read input file: missing.js");
    }
}
