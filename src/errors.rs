use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Every candidate base directory used up its attempt budget.
    #[error("no free temporary name could be created in {candidates} candidate directories")]
    NameSpaceExhausted { candidates: usize },

    /// Every generated name exceeded the platform path or file name limits.
    #[error("every generated temporary path exceeded the platform length limits")]
    PathTooLong,

    /// The handle already owns a filesystem entry.
    #[error("handle already owns {0}")]
    AlreadyValid(PathBuf),

    /// The handle owns nothing, or the owned entry is already gone.
    #[error("there is nothing to remove")]
    NothingToRemove,

    /// The owned entry exists but could not be deleted.
    #[error("failed to remove {path}")]
    Removal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The handle has not created a file yet.
    #[error("the temporary file has not been created")]
    NotCreated,

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
