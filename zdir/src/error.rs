use crate::Layout;

#[derive(thiserror::Error)]
pub enum Error {
    // std errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // crate errors
    #[error("directory size {len} is not a multiple of {record_size} bytes")]
    InvalidFormat { len: u64, record_size: u64 },

    #[error("directory size {0} matches no known record layout")]
    InvalidLayoutSize(u64),

    #[error("archive ended at offset {offset:#x} after {copied} of {expected} bytes")]
    Truncated {
        offset: u64,
        expected: u64,
        copied: u64,
    },

    #[error("extraction of {0} records is not supported")]
    UnsupportedLayout(Layout),

    #[error("Attempted to write to \"{0}\" which outside of output directory")]
    WriteOutsideOutput(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<Error>,
    },
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl Error {
    /// Innermost error, skipping any context wrappers
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            err => err,
        }
    }
}
