//! TLV message catalogue and the frame-schema descriptor.
//!
//! The sensor's serial protocol carries several TLV message types; ids
//! 301–309 form the catalogue this decoder family recognizes. Only the
//! compressed point cloud (301) is decoded today — the descriptor exists so
//! a second type means a second schema value, not a second state machine.

use crate::wire::{MAX_POINTS, POINT_SIZE};

/// Compressed point cloud — the only TLV type with a full decoder.
pub const POINT_CLOUD: u16 = 301;

/// First and last id of the sensor's TLV catalogue. Ids 302–309 are
/// recognized but not decoded.
pub const TLV_FIRST: u16 = 301;
pub const TLV_LAST: u16 = 309;

/// Upper bound on unit scalars any schema may declare.
pub const MAX_UNIT_SCALARS: usize = 4;

/// Returns a human-readable name for a TLV message id.
pub fn tlv_name(id: u16) -> &'static str {
    match id {
        POINT_CLOUD => "POINT_CLOUD",
        TLV_FIRST..=TLV_LAST => "RESERVED",
        _ => "UNKNOWN",
    }
}

/// Shape of one TLV frame type: how many unit scalars follow the length
/// field, how wide a point record is on the wire, and how many records a
/// frame stores before discarding.
///
/// `point_size` may exceed the 12 decoded bytes; trailing record bytes are
/// consumed and ignored. It must not be smaller than 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSchema {
    pub tlv_type: u16,
    pub unit_scalars: usize,
    pub point_size: usize,
    pub max_points: usize,
}

impl FrameSchema {
    /// Schema of the compressed point cloud (TLV 301).
    pub const fn point_cloud() -> Self {
        Self {
            tlv_type: POINT_CLOUD,
            unit_scalars: MAX_UNIT_SCALARS,
            point_size: POINT_SIZE,
            max_points: MAX_POINTS,
        }
    }

    /// Records actually stored per frame; never exceeds the arena capacity.
    pub fn storage_cap(&self) -> usize {
        self.max_points.min(MAX_POINTS)
    }
}

impl Default for FrameSchema {
    fn default() -> Self {
        Self::point_cloud()
    }
}
