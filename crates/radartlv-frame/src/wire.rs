use bytes::{BufMut, BytesMut};

use crate::header::UnitScalars;

/// Magic pattern as the sensor documents it: four 16-bit words.
pub const MAGIC_WORDS: [u16; 4] = [0x0102, 0x0304, 0x0506, 0x0708];

/// Magic pattern as it appears on the wire — each word LSB-first.
pub const MAGIC_BYTES: [u8; 8] = [0x02, 0x01, 0x04, 0x03, 0x06, 0x05, 0x08, 0x07];

/// Wire size of the magic pattern.
pub const MAGIC_SIZE: usize = 8;

/// The value an 8-byte shift register holds right after the full magic
/// pattern has been pushed through it.
pub const MAGIC_WINDOW: u64 = u64::from_be_bytes(MAGIC_BYTES);

/// Wire size of the frame header following the magic: length (4) +
/// four unit scalars (16) + two point counts (4).
pub const HEADER_SIZE: usize = 24;

/// Wire size of one point record: x, y, z, doppler (2 each) + snr, noise (1 each).
pub const POINT_SIZE: usize = 12;

/// Storage capacity of a frame. Records past this are consumed from the
/// wire to keep the next frame aligned, but not stored.
pub const MAX_POINTS: usize = 30;

/// One point record in raw wire units, before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawPoint {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub doppler: i16,
    pub snr: u8,
    pub noise: u8,
}

impl RawPoint {
    /// Decode a record from its 12 wire bytes (each i16 LSB-first).
    pub fn from_wire(bytes: &[u8; POINT_SIZE]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
            doppler: i16::from_le_bytes([bytes[6], bytes[7]]),
            snr: bytes[8],
            noise: bytes[9],
        }
    }

    /// Append this record's wire bytes to `dst`.
    ///
    /// Bytes 10 and 11 are reserved on the wire; the sensor zero-fills them.
    pub fn write_to(&self, dst: &mut BytesMut) {
        dst.put_i16_le(self.x);
        dst.put_i16_le(self.y);
        dst.put_i16_le(self.z);
        dst.put_i16_le(self.doppler);
        dst.put_u8(self.snr);
        dst.put_u8(self.noise);
        dst.put_bytes(0, 2);
    }
}

/// Encode magic + header for a frame carrying `major` + `minor` records.
///
/// The length field is the full frame size in bytes, as the sensor reports it.
pub fn encode_header(units: &UnitScalars, major: u16, minor: u16, dst: &mut BytesMut) {
    let total = major as u32 + minor as u32;
    let length = (MAGIC_SIZE + HEADER_SIZE) as u32 + total * POINT_SIZE as u32;

    dst.reserve(MAGIC_SIZE + HEADER_SIZE);
    dst.put_slice(&MAGIC_BYTES);
    dst.put_u32_le(length);
    dst.put_u32_le(units.xyz.to_bits());
    dst.put_u32_le(units.doppler.to_bits());
    dst.put_u32_le(units.snr.to_bits());
    dst.put_u32_le(units.noise.to_bits());
    dst.put_u16_le(major);
    dst.put_u16_le(minor);
}

/// Encode a complete frame: magic, header, and one record per point.
///
/// `points.len()` must equal `major + minor`. Backs the test fixtures and
/// the `simulate` command; the sensor is the only producer in production.
pub fn encode_frame(
    units: &UnitScalars,
    major: u16,
    minor: u16,
    points: &[RawPoint],
    dst: &mut BytesMut,
) {
    debug_assert_eq!(points.len() as u32, major as u32 + minor as u32);
    encode_header(units, major, minor, dst);
    dst.reserve(points.len() * POINT_SIZE);
    for point in points {
        point.write_to(dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_window_matches_wire_order() {
        let mut window = 0u64;
        for byte in MAGIC_BYTES {
            window = (window << 8) | byte as u64;
        }
        assert_eq!(window, MAGIC_WINDOW);
    }

    #[test]
    fn magic_bytes_are_word_swapped() {
        for (word, pair) in MAGIC_WORDS.iter().zip(MAGIC_BYTES.chunks(2)) {
            assert_eq!(u16::from_le_bytes([pair[0], pair[1]]), *word);
        }
    }

    #[test]
    fn header_layout_is_byte_exact() {
        let units = UnitScalars {
            xyz: 0.25,
            doppler: 0.5,
            snr: 1.0,
            noise: 2.0,
        };
        let mut buf = BytesMut::new();
        encode_header(&units, 1, 0, &mut buf);

        assert_eq!(buf.len(), MAGIC_SIZE + HEADER_SIZE);
        assert_eq!(&buf[..MAGIC_SIZE], &MAGIC_BYTES);

        let length = u32::from_le_bytes(buf[8..12].try_into().unwrap());
        assert_eq!(length, (MAGIC_SIZE + HEADER_SIZE + POINT_SIZE) as u32);

        let xyz = f32::from_bits(u32::from_le_bytes(buf[12..16].try_into().unwrap()));
        assert_eq!(xyz, 0.25);

        let major = u16::from_le_bytes(buf[28..30].try_into().unwrap());
        let minor = u16::from_le_bytes(buf[30..32].try_into().unwrap());
        assert_eq!((major, minor), (1, 0));
    }

    #[test]
    fn point_record_roundtrips() {
        let raw = RawPoint {
            x: -1234,
            y: 567,
            z: -32768,
            doppler: 32767,
            snr: 200,
            noise: 3,
        };
        let mut buf = BytesMut::new();
        raw.write_to(&mut buf);

        assert_eq!(buf.len(), POINT_SIZE);
        let decoded = RawPoint::from_wire(buf.as_ref().try_into().unwrap());
        assert_eq!(decoded, raw);
    }

    #[test]
    fn negative_coordinates_are_twos_complement() {
        let mut bytes = [0u8; POINT_SIZE];
        bytes[0] = 0xFF;
        bytes[1] = 0xFF;
        let raw = RawPoint::from_wire(&bytes);
        assert_eq!(raw.x, -1);
    }

    #[test]
    fn frame_wire_size_accounts_for_every_record() {
        let units = UnitScalars::default();
        let points = vec![RawPoint::default(); 3];
        let mut buf = BytesMut::new();
        encode_frame(&units, 2, 1, &points, &mut buf);
        assert_eq!(buf.len(), MAGIC_SIZE + HEADER_SIZE + 3 * POINT_SIZE);
    }
}
