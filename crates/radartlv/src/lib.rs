//! Radar point-cloud TLV stream decoding.
//!
//! radartlv turns the continuous, unframed byte stream of a radar sensor's
//! serial link into discrete point-cloud frames and hands them to a publish
//! sink.
//!
//! # Crate Structure
//!
//! - [`source`] — timeout-bounded byte sources (serial reader thread,
//!   capture files, in-memory replay)
//! - [`frame`] — stream synchronization and TLV frame decoding
//! - [`publish`] — sinks and analytics on the far side of the decode seam

/// Re-export byte source types.
pub mod source {
    pub use radartlv_source::*;
}

/// Re-export frame decoding types.
pub mod frame {
    pub use radartlv_frame::*;
}

/// Re-export publish sinks and analytics.
pub mod publish {
    pub use radartlv_publish::*;
}
