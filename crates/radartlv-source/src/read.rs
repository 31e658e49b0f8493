use std::collections::VecDeque;
use std::io::{ErrorKind, Read};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Result, SourceError};
use crate::traits::ByteSource;

const READ_CHUNK_SIZE: usize = 256;

/// How long to back off between polls of a stream that reported
/// `WouldBlock`/`TimedOut`.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Adapts any `std::io::Read` into a deadline-bounded byte source.
///
/// Fits a tty device file opened for the sensor link as well as an offline
/// capture file. Reads are buffered in chunks so the per-byte contract does
/// not turn into a syscall per byte; `WouldBlock` and `TimedOut` from the
/// inner stream are retried until the caller's deadline expires, and EOF is
/// reported as `Closed`.
pub struct ReadSource<T> {
    inner: T,
    buf: VecDeque<u8>,
}

impl<T: Read> ReadSource<T> {
    /// Wrap a readable stream.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: VecDeque::with_capacity(READ_CHUNK_SIZE),
        }
    }

    /// Consume the source and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    fn fill(&mut self) -> Result<usize> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            match self.inner.read(&mut chunk) {
                Ok(0) => {
                    debug!("read source reached end of stream");
                    return Err(SourceError::Closed);
                }
                Ok(n) => {
                    self.buf.extend(chunk[..n].iter().copied());
                    return Ok(n);
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err)
                    if err.kind() == ErrorKind::WouldBlock
                        || err.kind() == ErrorKind::TimedOut =>
                {
                    return Ok(0)
                }
                Err(err) => return Err(SourceError::Io(err)),
            }
        }
    }
}

impl<T: Read> ByteSource for ReadSource<T> {
    fn read_byte(&mut self, timeout: Duration) -> Result<u8> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(byte) = self.buf.pop_front() {
                return Ok(byte);
            }
            if self.fill()? > 0 {
                continue;
            }
            if Instant::now() >= deadline {
                return Err(SourceError::Timeout(timeout));
            }
            std::thread::sleep(POLL_INTERVAL.min(deadline.saturating_duration_since(Instant::now())));
        }
    }
}
