//! Path length measurement.
//!
//! The sampler only needs two questions answered by a geometry engine: how long is the path, and
//! where is the point at a given length. [`PathMeasure`] is that seam; [`BezPathMeasure`] answers
//! it for SVG path data using kurbo's arc-length machinery.

use kurbo::{ParamCurve, ParamCurveArclen, PathEl, PathSeg};

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{SketchError, SketchResult};

/// Arc-length accuracy used for per-segment measurement, in local units.
pub const ARCLEN_ACCURACY: f64 = 1e-4;

/// Length and point-at-length queries over one path.
pub trait PathMeasure {
    /// Total arc length in local units. May be non-finite for broken geometry.
    fn total_length(&self) -> f64;

    /// Local point at arc length `s`, clamped to the path.
    fn point_at_length(&self, s: f64) -> Point;

    /// First point of the path, used when the path has no measurable length.
    fn start_point(&self) -> Point;
}

/// Cached per-segment arc-length table for a [`BezPath`].
#[derive(Clone, Debug)]
pub struct BezPathMeasure {
    segments: Vec<PathSeg>,
    // Cumulative arc length at the end of each segment.
    ends: Vec<f64>,
    start: Point,
    accuracy: f64,
}

impl BezPathMeasure {
    /// Measure an already parsed path.
    pub fn new(path: &BezPath, accuracy: f64) -> Self {
        let accuracy = if accuracy.is_finite() && accuracy > 0.0 {
            accuracy
        } else {
            ARCLEN_ACCURACY
        };
        let segments: Vec<PathSeg> = path.segments().collect();
        let mut ends = Vec::with_capacity(segments.len());
        let mut acc = 0.0;
        for seg in &segments {
            acc += seg.arclen(accuracy);
            ends.push(acc);
        }

        let start = path
            .elements()
            .iter()
            .find_map(|el| match el {
                PathEl::MoveTo(p) => Some(*p),
                _ => None,
            })
            .or_else(|| segments.first().map(|s| s.start()))
            .unwrap_or(Point::ZERO);

        Self {
            segments,
            ends,
            start,
            accuracy,
        }
    }

    /// Parse SVG path data (`M`, `L`, `H`, `V`, `C`, `S`, `Q`, `T`, `A`, `Z`) and measure it.
    pub fn parse(d: &str) -> SketchResult<Self> {
        let path = BezPath::from_svg(d.trim())
            .map_err(|e| SketchError::geometry(format!("invalid path data: {e}")))?;
        Ok(Self::new(&path, ARCLEN_ACCURACY))
    }

    /// Number of drawable segments (move-to gaps excluded).
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl PathMeasure for BezPathMeasure {
    fn total_length(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    fn point_at_length(&self, s: f64) -> Point {
        let Some(last) = self.segments.last() else {
            return self.start;
        };
        let total = self.total_length();
        if s.is_nan() || s <= 0.0 {
            return self.segments[0].start();
        }
        if s >= total {
            return last.end();
        }

        let idx = self
            .ends
            .partition_point(|&end| end < s)
            .min(self.segments.len() - 1);
        let seg = self.segments[idx];
        let seg_start = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        let seg_len = self.ends[idx] - seg_start;
        if seg_len <= 0.0 {
            return seg.start();
        }

        let t = seg.inv_arclen(s - seg_start, self.accuracy);
        seg.eval(t.clamp(0.0, 1.0))
    }

    fn start_point(&self) -> Point {
        self.start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/measure.rs"]
mod tests;
