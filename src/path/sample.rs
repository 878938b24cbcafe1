//! Arc-length sampling of path geometry in local space.

use crate::foundation::core::{BezPath, Point};
use crate::foundation::math::positive_or;
use crate::path::measure::{ARCLEN_ACCURACY, BezPathMeasure, PathMeasure};

/// Default spacing between samples, in local units.
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 1.0;

/// Minimum number of steps taken along a measurable path.
pub const MIN_SAMPLE_STEPS: usize = 500;

/// Maximum number of steps taken along any path, whatever the requested interval.
pub const MAX_SAMPLE_STEPS: usize = 100_000;

/// Smallest interval accepted from configuration, in local units.
pub const MIN_SAMPLE_INTERVAL: f64 = 1e-3;

/// A local-space point tagged with its cumulative arc length from the path start.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sample {
    /// Local x.
    pub x: f64,
    /// Local y.
    pub y: f64,
    /// Arc length from the path start.
    pub s: f64,
}

impl Sample {
    /// Build a sample at `p` with arc length `s`.
    pub fn new(p: Point, s: f64) -> Self {
        Self { x: p.x, y: p.y, s }
    }

    /// Position part of the sample.
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Sampling parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SampleOptions {
    /// Upper bound on the spacing between consecutive samples, in local units.
    pub interval: f64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }
}

/// Immutable arc-length sampling of one path.
///
/// Always holds at least two samples; `s` is non-decreasing, the first sample has `s = 0` and the
/// last has `s = total`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SampledPath {
    samples: Vec<Sample>,
    total: f64,
    measured: bool,
}

impl SampledPath {
    /// Zero-length sampling collapsed onto `at`.
    pub fn degenerate(at: Point, measured: bool) -> Self {
        Self {
            samples: vec![Sample::new(at, 0.0), Sample::new(at, 0.0)],
            total: 0.0,
            measured,
        }
    }

    /// Samples in path order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Total arc length in local units.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// `false` when the geometry could not be measured and this is a placeholder.
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// `true` for paths without any length to reveal or follow.
    pub fn is_zero_length(&self) -> bool {
        self.total <= 0.0
    }
}

/// Sample SVG path data.
///
/// Unparseable path data is not an error: it degrades to a zero-length sampling at the origin so
/// playback can continue with a static visual.
pub fn sample_path(d: &str, opts: SampleOptions) -> SampledPath {
    parse_and_sample(d, opts).1
}

/// Like [`sample_path`], also returning the parsed geometry (`None` when `d` does not parse).
pub fn parse_and_sample(d: &str, opts: SampleOptions) -> (Option<BezPath>, SampledPath) {
    match BezPath::from_svg(d.trim()) {
        Ok(path) => {
            let sampled = sample_measure(&BezPathMeasure::new(&path, ARCLEN_ACCURACY), opts);
            (Some(path), sampled)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "path data could not be parsed; using zero-length samples"
            );
            (None, SampledPath::degenerate(Point::ZERO, false))
        }
    }
}

/// Sample any measurable path.
///
/// Spacing is `min(interval, total / MIN_SAMPLE_STEPS)`, widened so there are never more than
/// [`MAX_SAMPLE_STEPS`] steps. The last sample always lands exactly on the measured total.
pub fn sample_measure<M: PathMeasure + ?Sized>(measure: &M, opts: SampleOptions) -> SampledPath {
    let total = measure.total_length();
    if !total.is_finite() {
        tracing::warn!(total, "path length is not finite; using zero-length samples");
        return SampledPath::degenerate(measure.start_point(), false);
    }
    if total <= 0.0 {
        return SampledPath::degenerate(measure.start_point(), true);
    }

    let interval = positive_or(opts.interval, DEFAULT_SAMPLE_INTERVAL);
    let spacing = interval
        .min(total / MIN_SAMPLE_STEPS as f64)
        .max(total / MAX_SAMPLE_STEPS as f64);
    let steps = ((total / spacing).ceil() as usize).min(MAX_SAMPLE_STEPS);

    let mut samples = Vec::with_capacity(steps + 1);
    for i in 0..steps {
        let s = i as f64 * spacing;
        if s >= total {
            break;
        }
        samples.push(Sample::new(measure.point_at_length(s), s));
    }
    samples.push(Sample::new(measure.point_at_length(total), total));

    tracing::debug!(samples = samples.len(), total, spacing, "sampled path");
    SampledPath {
        samples,
        total,
        measured: true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/sample.rs"]
mod tests;
