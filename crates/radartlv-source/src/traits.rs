use std::time::Duration;

use crate::error::Result;

/// A one-directional stream of bytes from a radar link.
///
/// The decoder pulls exactly one byte at a time and never rewinds; a source
/// only has to hand out bytes in arrival order. Reads block until a byte is
/// available or `timeout` elapses. A zero `timeout` means "only what is
/// already buffered" and must not block.
pub trait ByteSource {
    /// Pull the next byte, waiting at most `timeout`.
    ///
    /// Returns `SourceError::Timeout` if nothing arrived in time and
    /// `SourceError::Closed` once the link is permanently gone.
    fn read_byte(&mut self, timeout: Duration) -> Result<u8>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self, timeout: Duration) -> Result<u8> {
        (**self).read_byte(timeout)
    }
}
