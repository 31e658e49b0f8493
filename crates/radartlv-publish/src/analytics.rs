//! Aggregate features over a frame's point cloud.
//!
//! Downstream models consume per-frame aggregates rather than raw points;
//! this module derives the spatial ones. Purely a consumer of decoded
//! frames — nothing here affects framing correctness.

use radartlv_frame::Frame;
use serde::Serialize;

/// Spatial summary of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSummary {
    /// Points contributing to the summary.
    pub count: usize,
    /// Mean of x, y, z.
    pub centroid: [f32; 3],
    /// Population standard deviation of x, y, z.
    pub spread: [f32; 3],
}

/// Summarize a frame's points. Returns `None` for an empty frame — an
/// empty capture has no meaningful centroid.
pub fn summarize(frame: &Frame) -> Option<FrameSummary> {
    let points = frame.points.as_slice();
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f32;

    let mut centroid = [0.0f32; 3];
    for p in points {
        centroid[0] += p.x;
        centroid[1] += p.y;
        centroid[2] += p.z;
    }
    for axis in &mut centroid {
        *axis /= n;
    }

    let mut spread = [0.0f32; 3];
    for p in points {
        spread[0] += (p.x - centroid[0]).powi(2);
        spread[1] += (p.y - centroid[1]).powi(2);
        spread[2] += (p.z - centroid[2]).powi(2);
    }
    for axis in &mut spread {
        *axis = (*axis / n).sqrt();
    }

    Some(FrameSummary {
        count: points.len(),
        centroid,
        spread,
    })
}
