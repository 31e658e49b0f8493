use crate::frame::Frame;

/// Errors a sink may report back to the decoder.
///
/// The decoder logs a failed publish and moves on — delivery guarantees are
/// the collaborator's concern, never the framing layer's.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// An I/O error occurred while handing off the frame.
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The frame could not be encoded for the sink's transport.
    #[error("sink encoding error: {0}")]
    Encode(String),

    /// The sink will not accept any further frames.
    #[error("sink closed")]
    Closed,
}

/// Consumer of completed frames.
///
/// `publish` takes ownership: once a frame is handed over the decoder
/// retains no reference to it.
pub trait FrameSink {
    fn publish(&mut self, frame: Frame) -> Result<(), SinkError>;
}
