use radartlv_source::ByteSource;

use crate::error::Result;
use crate::frame::{PointBuffer, PointRecord};
use crate::header::FrameHeader;
use crate::matcher::SlidingMatcher;
use crate::reader::FieldReader;
use crate::schema::FrameSchema;
use crate::wire::{RawPoint, POINT_SIZE};

/// How a point-decode pass ended.
#[derive(Debug)]
pub(crate) enum PointOutcome {
    /// All records consumed; `discarded` counts records read past capacity.
    Complete { points: PointBuffer, discarded: u32 },
    /// The magic pattern appeared inside the point data. The current frame
    /// is abandoned and a new header starts at the very next byte.
    Resync,
}

/// Read `total_count` records, scaling each into physical units.
///
/// Every consumed byte also runs through the sliding matcher: a corrupted
/// count field would otherwise leave the decoder eating the next frame as
/// point data. Records past the storage cap are consumed byte-for-byte to
/// keep the stream aligned, then dropped.
pub(crate) fn decode_points<S: ByteSource>(
    reader: &mut FieldReader<'_, S>,
    matcher: &mut SlidingMatcher,
    header: &FrameHeader,
    schema: &FrameSchema,
) -> Result<PointOutcome> {
    let mut points = PointBuffer::new();
    let mut discarded = 0u32;
    let cap = schema.storage_cap();

    for _ in 0..header.total_count() {
        let deadline = reader.deadline();
        let mut record = [0u8; POINT_SIZE];

        for offset in 0..schema.point_size {
            let byte = reader.read_byte_until(deadline, "point")?;
            if matcher.push(byte) {
                return Ok(PointOutcome::Resync);
            }
            // Record bytes past the decoded prefix are consumed and ignored.
            if offset < POINT_SIZE {
                record[offset] = byte;
            }
        }

        if points.len() < cap {
            points.push(scale(&RawPoint::from_wire(&record), header));
        } else {
            discarded += 1;
        }
    }

    Ok(PointOutcome::Complete { points, discarded })
}

fn scale(raw: &RawPoint, header: &FrameHeader) -> PointRecord {
    let units = &header.units;
    PointRecord {
        x: raw.x as f32 * units.xyz,
        y: raw.y as f32 * units.xyz,
        z: raw.z as f32 * units.xyz,
        doppler: raw.doppler as f32 * units.doppler,
        snr: raw.snr as f32 * units.snr,
        noise: raw.noise as f32 * units.noise,
    }
}
