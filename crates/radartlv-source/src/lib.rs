//! Timeout-bounded byte sources for radar serial links.
//!
//! The decoder upstream of this crate consumes one byte at a time from a
//! receive-only link. This crate owns that seam: the [`ByteSource`] trait
//! plus the concrete sources used in production and in tests — a channel
//! pair for a dedicated reader thread, an adapter over any `std::io::Read`,
//! and an in-memory replay source.

pub mod error;
pub mod memory;
pub mod queue;
pub mod read;
pub mod traits;

pub use error::{Result, SourceError};
pub use memory::MemorySource;
pub use queue::{pair, ByteFeeder, QueueSource};
pub use read::ReadSource;
pub use traits::ByteSource;
