use std::collections::VecDeque;
use std::time::Duration;

use crate::error::{Result, SourceError};
use crate::traits::ByteSource;

/// Replays a captured byte buffer.
///
/// Once drained the source reports `Timeout`, modelling a link that went
/// quiet rather than one that closed. Use [`MemorySource::close_when_empty`]
/// to model a disconnect instead.
#[derive(Debug, Default)]
pub struct MemorySource {
    bytes: VecDeque<u8>,
    close_when_empty: bool,
}

impl MemorySource {
    /// Create a source that replays `bytes` and then times out.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: VecDeque::from(bytes.into()),
            close_when_empty: false,
        }
    }

    /// Report `Closed` instead of `Timeout` once the buffer is drained.
    pub fn close_when_empty(mut self) -> Self {
        self.close_when_empty = true;
        self
    }

    /// Append more bytes to the replay buffer.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.bytes.extend(bytes.iter().copied());
    }

    /// Bytes still waiting to be read.
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl ByteSource for MemorySource {
    fn read_byte(&mut self, timeout: Duration) -> Result<u8> {
        match self.bytes.pop_front() {
            Some(byte) => Ok(byte),
            None if self.close_when_empty => Err(SourceError::Closed),
            None => Err(SourceError::Timeout(timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_bytes_in_order() {
        let mut source = MemorySource::new(vec![1, 2, 3]);
        assert_eq!(source.read_byte(Duration::ZERO).unwrap(), 1);
        assert_eq!(source.read_byte(Duration::ZERO).unwrap(), 2);
        assert_eq!(source.read_byte(Duration::ZERO).unwrap(), 3);
    }

    #[test]
    fn drained_source_times_out() {
        let mut source = MemorySource::new(vec![7]);
        source.read_byte(Duration::ZERO).unwrap();
        assert!(matches!(
            source.read_byte(Duration::from_millis(5)),
            Err(SourceError::Timeout(_))
        ));
    }

    #[test]
    fn drained_source_can_close_instead() {
        let mut source = MemorySource::new(Vec::new()).close_when_empty();
        assert!(matches!(
            source.read_byte(Duration::ZERO),
            Err(SourceError::Closed)
        ));
    }

    #[test]
    fn feed_appends_after_drain() {
        let mut source = MemorySource::new(vec![1]);
        source.read_byte(Duration::ZERO).unwrap();
        source.feed(&[2]);
        assert_eq!(source.read_byte(Duration::ZERO).unwrap(), 2);
        assert_eq!(source.remaining(), 0);
    }
}
