//! Publish sinks and analytics for decoded radar frames.
//!
//! The decoder hands completed frames across the [`FrameSink`] seam; this
//! crate supplies the collaborators on the other side — JSON-lines
//! publishing, an in-memory collector, and per-frame spatial summaries.
//!
//! [`FrameSink`]: radartlv_frame::FrameSink

pub mod analytics;
pub mod json;
pub mod memory;

pub use analytics::{summarize, FrameSummary};
pub use json::JsonLinesSink;
pub use memory::MemorySink;
