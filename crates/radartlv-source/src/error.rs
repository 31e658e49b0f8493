/// Errors that can occur while pulling bytes from a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No byte became available within the allowed wait.
    #[error("no byte available within {0:?}")]
    Timeout(std::time::Duration),

    /// The source will never produce another byte.
    #[error("byte source closed")]
    Closed,

    /// An I/O error occurred on the underlying link.
    #[error("source I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SourceError>;
