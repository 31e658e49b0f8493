/// Errors that can surface from the frame decoder.
///
/// A mid-frame timeout is handled internally (the frame is discarded and the
/// machine returns to searching); what callers see here is either a quiet
/// link or a link that is gone.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The byte source stopped delivering while a field was being assembled.
    #[error("timed out reading {field}")]
    Timeout { field: &'static str },

    /// The byte source is permanently closed.
    #[error("byte source closed")]
    SourceClosed,

    /// An I/O error occurred on the underlying source.
    #[error("source I/O error: {0}")]
    Source(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
