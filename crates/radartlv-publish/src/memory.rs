use radartlv_frame::{Frame, FrameSink, SinkError};

/// Collects published frames in memory.
///
/// Used by tests and examples that need to look at what the decoder
/// produced rather than forward it anywhere.
#[derive(Debug, Default)]
pub struct MemorySink {
    frames: Vec<Frame>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames published so far, in publish order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Drain and return the collected frames.
    pub fn take(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.frames)
    }

    /// Number of frames collected.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if nothing has been published.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameSink for MemorySink {
    fn publish(&mut self, frame: Frame) -> Result<(), SinkError> {
        self.frames.push(frame);
        Ok(())
    }
}
