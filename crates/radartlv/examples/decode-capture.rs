//! Decode a synthetic capture entirely in memory.
//!
//! Run with:
//!   cargo run --example decode-capture

use bytes::BytesMut;
use radartlv::frame::{wire, DecoderConfig, FrameAssembler, RawPoint, UnitScalars};
use radartlv::publish::{summarize, MemorySink};
use radartlv::source::MemorySource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let units = UnitScalars {
        xyz: 0.01,
        doppler: 0.1,
        snr: 1.0,
        noise: 1.0,
    };

    // Two frames with a little line noise in front, like a sensor that was
    // already transmitting when we attached.
    let mut capture = BytesMut::new();
    capture.extend_from_slice(b"\x00\x00boot\x00");
    for frame_index in 0..2i16 {
        let points: Vec<RawPoint> = (0..4i16)
            .map(|i| RawPoint {
                x: 100 * frame_index + i,
                y: 50 + i,
                z: 120,
                doppler: i - 2,
                snr: 25,
                noise: 2,
            })
            .collect();
        wire::encode_frame(&units, 4, 0, &points, &mut capture);
    }

    let source = MemorySource::new(capture.to_vec()).close_when_empty();
    let mut assembler = FrameAssembler::with_config(
        source,
        DecoderConfig {
            read_timeout: std::time::Duration::from_millis(50),
            ..DecoderConfig::default()
        },
    );

    let mut sink = MemorySink::new();
    assembler.run(&mut sink)?;

    for frame in sink.frames() {
        match summarize(frame) {
            Some(summary) => println!(
                "frame {} — {} points, centroid ({:.2}, {:.2}, {:.2}) m",
                frame.sequence, summary.count, summary.centroid[0], summary.centroid[1], summary.centroid[2]
            ),
            None => println!("frame {} — empty", frame.sequence),
        }
    }

    Ok(())
}
