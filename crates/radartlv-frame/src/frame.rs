use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Serialize, Serializer};

use crate::wire::MAX_POINTS;

/// One decoded point in physical units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PointRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub doppler: f32,
    pub snr: f32,
    pub noise: f32,
}

/// Fixed arena of [`MAX_POINTS`] point slots with an explicit length.
///
/// Insertion order is wire order and is never changed. Overflow is an
/// explicit branch: [`push`](Self::push) reports whether the record was
/// stored, and the caller decides what to do with the refusal.
#[derive(Debug, Clone, Copy)]
pub struct PointBuffer {
    slots: [PointRecord; MAX_POINTS],
    len: usize,
}

impl PointBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            slots: [PointRecord::default(); MAX_POINTS],
            len: 0,
        }
    }

    /// Append a record in wire order. Returns `false`, storing nothing,
    /// once the arena is full.
    pub fn push(&mut self, point: PointRecord) -> bool {
        if self.len == MAX_POINTS {
            return false;
        }
        self.slots[self.len] = point;
        self.len += 1;
        true
    }

    /// Stored records, in wire order.
    pub fn as_slice(&self) -> &[PointRecord] {
        &self.slots[..self.len]
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no record has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len == MAX_POINTS
    }

    /// Iterate over stored records.
    pub fn iter(&self) -> std::slice::Iter<'_, PointRecord> {
        self.as_slice().iter()
    }
}

impl Default for PointBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PointBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Serialize for PointBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'a> IntoIterator for &'a PointBuffer {
    type Item = &'a PointRecord;
    type IntoIter = std::slice::Iter<'a, PointRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One fully decoded point-cloud capture.
///
/// A frame exists only in two forms: fully decoded and handed to the sink,
/// or discarded. No partial frame ever leaves the decoder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Monotonic counter, incremented once per completed frame.
    pub sequence: u64,
    /// Capture instant, assigned when the frame's header decoded.
    #[serde(serialize_with = "serialize_unix_millis")]
    pub timestamp: SystemTime,
    /// Decoded points in wire order.
    pub points: PointBuffer,
}

impl Frame {
    /// Number of points stored in this frame.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

fn serialize_unix_millis<S: Serializer>(
    timestamp: &SystemTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let millis = timestamp
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    serializer.serialize_u64(millis)
}
