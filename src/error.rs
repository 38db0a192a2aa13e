use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading or writing a note.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ColorNoteError {
    #[error("cannot open {} for reading", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot open {} for writing", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}
