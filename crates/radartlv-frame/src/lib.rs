//! Stream synchronization and TLV point-cloud frame decoding.
//!
//! This is the core of radartlv. The sensor emits an unframed byte stream;
//! this crate recovers alignment on a multi-word magic pattern, decodes the
//! fixed-shape header (unit scalars, point counts) and a bounded run of
//! point records, and hands each completed [`Frame`] to a [`FrameSink`].
//!
//! Recovery is built in, not bolted on: a quiet link, a truncated frame, or
//! a corrupted count field all route back to the magic search. No partial
//! frame ever leaves the decoder.

pub mod assembler;
pub mod error;
pub mod frame;
pub mod header;
pub mod matcher;
mod points;
mod reader;
pub mod schema;
pub mod sink;
pub mod wire;

pub use assembler::{
    DecodeStats, DecoderConfig, DecoderState, FrameAssembler, DEFAULT_READ_TIMEOUT,
};
pub use error::{DecodeError, Result};
pub use frame::{Frame, PointBuffer, PointRecord};
pub use header::{FrameHeader, UnitScalars};
pub use matcher::SlidingMatcher;
pub use schema::{tlv_name, FrameSchema, MAX_UNIT_SCALARS, POINT_CLOUD};
pub use sink::{FrameSink, SinkError};
pub use wire::{RawPoint, HEADER_SIZE, MAGIC_BYTES, MAGIC_SIZE, MAGIC_WORDS, MAX_POINTS, POINT_SIZE};
