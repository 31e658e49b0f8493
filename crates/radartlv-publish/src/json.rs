use std::io::Write;

use radartlv_frame::{Frame, FrameSink, SinkError};
use tracing::debug;

/// Publishes each frame as one JSON object per line.
///
/// This is the wire document the upstream firmware sent to its broker: one
/// self-contained object per frame, flushed immediately so a tailing
/// consumer never waits on a partial line.
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn publish(&mut self, frame: Frame) -> Result<(), SinkError> {
        let line =
            serde_json::to_string(&frame).map_err(|err| SinkError::Encode(err.to_string()))?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        debug!(sequence = frame.sequence, points = frame.point_count(), "frame published");
        Ok(())
    }
}
