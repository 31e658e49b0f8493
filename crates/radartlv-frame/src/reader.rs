use std::time::{Duration, Instant};

use radartlv_source::{ByteSource, SourceError};

use crate::error::{DecodeError, Result};

/// Deadline-bounded multi-byte field reads over a [`ByteSource`].
///
/// The deadline is computed once per field group and re-checked before every
/// byte, so a stalled link cannot extend a field read past the configured
/// timeout no matter how slowly bytes trickle in.
pub(crate) struct FieldReader<'s, S> {
    source: &'s mut S,
    timeout: Duration,
}

impl<'s, S: ByteSource> FieldReader<'s, S> {
    pub fn new(source: &'s mut S, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Start a new field group: the instant by which all of its bytes must
    /// have arrived.
    pub fn deadline(&self) -> Instant {
        Instant::now() + self.timeout
    }

    /// Read one byte, waiting no later than `deadline`.
    pub fn read_byte_until(&mut self, deadline: Instant, field: &'static str) -> Result<u8> {
        let remaining = deadline.saturating_duration_since(Instant::now());
        self.source.read_byte(remaining).map_err(|err| match err {
            SourceError::Timeout(_) => DecodeError::Timeout { field },
            SourceError::Closed => DecodeError::SourceClosed,
            SourceError::Io(io) => DecodeError::Source(io),
        })
    }

    /// Read `N` bytes as one field group under a single deadline.
    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let deadline = self.deadline();
        let mut buf = [0u8; N];
        for slot in &mut buf {
            *slot = self.read_byte_until(deadline, field)?;
        }
        Ok(buf)
    }

    /// Read a u32 transmitted LSB-first.
    pub fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array(field)?))
    }

    /// Read a u16 transmitted LSB-first.
    pub fn read_u16(&mut self, field: &'static str) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array(field)?))
    }

    /// Read an f32: reassemble the LSB-first u32, then reinterpret its bit
    /// pattern. No arithmetic conversion takes place.
    pub fn read_f32(&mut self, field: &'static str) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32(field)?))
    }
}
