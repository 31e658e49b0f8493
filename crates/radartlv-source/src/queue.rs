use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use tracing::debug;

use crate::error::{Result, SourceError};
use crate::traits::ByteSource;

/// Byte source backed by an in-process channel.
///
/// The usual arrangement is one thread owning the serial file descriptor and
/// pushing everything it reads through a [`ByteFeeder`], while the decoder
/// thread pulls from the paired `QueueSource`. The channel gives the decoder
/// real timeout semantics without touching the device driver.
pub struct QueueSource {
    rx: Receiver<u8>,
}

/// Sending half of a [`QueueSource`] pair.
#[derive(Clone)]
pub struct ByteFeeder {
    tx: Sender<u8>,
}

/// Create a connected feeder/source pair.
pub fn pair() -> (ByteFeeder, QueueSource) {
    let (tx, rx) = mpsc::channel();
    (ByteFeeder { tx }, QueueSource { rx })
}

impl ByteFeeder {
    /// Push a chunk of raw link bytes toward the decoder.
    ///
    /// Returns `false` once the decoder side has been dropped.
    pub fn feed(&self, bytes: &[u8]) -> bool {
        for &byte in bytes {
            if self.tx.send(byte).is_err() {
                debug!("queue source dropped; feeder disconnecting");
                return false;
            }
        }
        true
    }
}

impl ByteSource for QueueSource {
    fn read_byte(&mut self, timeout: Duration) -> Result<u8> {
        if timeout.is_zero() {
            return match self.rx.try_recv() {
                Ok(byte) => Ok(byte),
                Err(TryRecvError::Empty) => Err(SourceError::Timeout(timeout)),
                Err(TryRecvError::Disconnected) => Err(SourceError::Closed),
            };
        }
        match self.rx.recv_timeout(timeout) {
            Ok(byte) => Ok(byte),
            Err(RecvTimeoutError::Timeout) => Err(SourceError::Timeout(timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(SourceError::Closed),
        }
    }
}
