use radartlv_source::ByteSource;

use crate::error::Result;
use crate::reader::FieldReader;
use crate::schema::{FrameSchema, MAX_UNIT_SCALARS};

/// Multipliers converting raw integer readings into physical units.
///
/// Immutable once read for a given frame. A scalar the schema does not
/// carry defaults to 1.0 (raw values pass through unscaled).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScalars {
    pub xyz: f32,
    pub doppler: f32,
    pub snr: f32,
    pub noise: f32,
}

impl Default for UnitScalars {
    fn default() -> Self {
        Self {
            xyz: 1.0,
            doppler: 1.0,
            snr: 1.0,
            noise: 1.0,
        }
    }
}

/// Decoded frame header: everything between the magic pattern and the
/// first point record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameHeader {
    /// Full frame size in bytes as the sensor reports it. Informational —
    /// alignment recovery relies on the magic pattern, not on this field.
    pub length: u32,
    pub units: UnitScalars,
    pub major_count: u16,
    pub minor_count: u16,
}

/// Field names in wire order, used for timeout attribution.
const UNIT_FIELDS: [&str; MAX_UNIT_SCALARS] = ["xyz_unit", "doppler_unit", "snr_unit", "noise_unit"];

impl FrameHeader {
    /// Total records on the wire for this frame. u32: the sum of two u16
    /// counts can overflow u16.
    pub fn total_count(&self) -> u32 {
        self.major_count as u32 + self.minor_count as u32
    }

    /// Decode the header fields that follow a magic match, in wire order.
    ///
    /// Each field is read under its own deadline; a timeout propagates and
    /// the caller discards the frame.
    pub(crate) fn decode<S: ByteSource>(
        reader: &mut FieldReader<'_, S>,
        schema: &FrameSchema,
    ) -> Result<Self> {
        let length = reader.read_u32("length")?;

        let mut scalars = [1.0f32; MAX_UNIT_SCALARS];
        for (slot, field) in scalars
            .iter_mut()
            .zip(UNIT_FIELDS)
            .take(schema.unit_scalars)
        {
            *slot = reader.read_f32(field)?;
        }

        let major_count = reader.read_u16("major_count")?;
        let minor_count = reader.read_u16("minor_count")?;

        Ok(Self {
            length,
            units: UnitScalars {
                xyz: scalars[0],
                doppler: scalars[1],
                snr: scalars[2],
                noise: scalars[3],
            },
            major_count,
            minor_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bytes::BytesMut;
    use radartlv_source::MemorySource;

    use super::*;
    use crate::error::DecodeError;
    use crate::wire::{self, MAGIC_SIZE};

    fn header_bytes(units: &UnitScalars, major: u16, minor: u16) -> Vec<u8> {
        let mut buf = BytesMut::new();
        wire::encode_header(units, major, minor, &mut buf);
        buf[MAGIC_SIZE..].to_vec() // header decode starts after the magic
    }

    fn decode(bytes: Vec<u8>) -> Result<FrameHeader> {
        let mut source = MemorySource::new(bytes);
        let mut reader = FieldReader::new(&mut source, Duration::from_millis(10));
        FrameHeader::decode(&mut reader, &FrameSchema::point_cloud())
    }

    #[test]
    fn decodes_fields_in_wire_order() {
        let units = UnitScalars {
            xyz: 0.01,
            doppler: 0.1,
            snr: 1.0,
            noise: 1.0,
        };
        let header = decode(header_bytes(&units, 2, 1)).unwrap();

        assert_eq!(header.units, units);
        assert_eq!(header.major_count, 2);
        assert_eq!(header.minor_count, 1);
        assert_eq!(header.total_count(), 3);
    }

    #[test]
    fn unit_scalars_are_bit_patterns_not_conversions() {
        // A bit pattern that is a denormal float; an arithmetic conversion
        // of the integer would produce something entirely different.
        let raw_bits: u32 = 0x0000_0001;
        let mut bytes = header_bytes(&UnitScalars::default(), 0, 0);
        bytes[4..8].copy_from_slice(&raw_bits.to_le_bytes());

        let header = decode(bytes).unwrap();
        assert_eq!(header.units.xyz.to_bits(), raw_bits);
    }

    #[test]
    fn total_count_does_not_wrap() {
        let header = decode(header_bytes(&UnitScalars::default(), u16::MAX, u16::MAX)).unwrap();
        assert_eq!(header.total_count(), 2 * u16::MAX as u32);
    }

    #[test]
    fn truncated_unit_scalar_names_the_field() {
        let mut bytes = header_bytes(&UnitScalars::default(), 0, 0);
        bytes.truncate(6); // length + 2 of xyz_unit's 4 bytes

        let err = decode(bytes).unwrap_err();
        assert!(matches!(err, DecodeError::Timeout { field: "xyz_unit" }));
    }
}
