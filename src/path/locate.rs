//! Arc-length queries over sampled geometry.
//!
//! Interpolation happens in local space, before the world transform is applied. Transforming the
//! bracketing samples first and interpolating in device space would be wrong under rotation or
//! non-uniform scale.

use crate::foundation::core::{Affine, Point, Pose};
use crate::foundation::math::positive_or;
use crate::path::sample::Sample;
use crate::transform::linear::lerp_point;

/// Half-width of the window used to estimate the tangent, in local units.
pub const DEFAULT_POSE_EPSILON: f64 = 0.75;

/// Local point at arc length `s`, or `None` for an empty sequence.
///
/// `s` is clamped into `[0, total]`; a NaN query maps to the first sample.
pub fn point_at_s(samples: &[Sample], s: f64) -> Option<Point> {
    let first = samples.first()?;
    let last = samples.last()?;
    if s.is_nan() || s <= first.s {
        return Some(first.point());
    }
    if s >= last.s {
        return Some(last.point());
    }

    // First sample with `s >= query`; index 0 is excluded by the checks above.
    let idx = samples.partition_point(|p| p.s < s);
    let b = samples[idx];
    let a = samples[idx - 1];
    let span = b.s - a.s;
    if span <= 0.0 {
        return Some(b.point());
    }
    Some(lerp_point(a.point(), b.point(), (s - a.s) / span))
}

/// Device-space pose at arc length `s`.
///
/// The heading is the direction between the transformed points at `s - epsilon` and
/// `s + epsilon`. When those coincide on screen the heading is 0.
pub fn world_pose_at_s(samples: &[Sample], world: Affine, s: f64, epsilon: f64) -> Option<Pose> {
    let total = samples.last()?.s;
    let eps = positive_or(epsilon, DEFAULT_POSE_EPSILON);
    let s = if s.is_nan() { 0.0 } else { s.clamp(0.0, total) };

    let behind = point_at_s(samples, (s - eps).max(0.0))?;
    let here = point_at_s(samples, s)?;
    let ahead = point_at_s(samples, (s + eps).min(total))?;

    let delta = (world * ahead) - (world * behind);
    let angle = if delta.hypot2() > 0.0 {
        delta.atan2()
    } else {
        0.0
    };
    Some(Pose::new(world * here, angle))
}

#[cfg(test)]
#[path = "../../tests/unit/path/locate.rs"]
mod tests;
