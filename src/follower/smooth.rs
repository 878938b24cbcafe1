//! Damped position and rotation smoothing for follower cursors.
//!
//! Everything here is a pure function of explicit [`SmoothingState`] plus inputs. Each follower
//! owns its own state; nothing is shared between followers.

use crate::foundation::core::{Point, Pose, Vec2};
use crate::foundation::math::{normalize_angle, shortest_angle_delta};

/// One display frame at 60 Hz, in milliseconds. Deltas are capped to this.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Upper bound of the strength produced by [`adaptive_smoothing`].
pub const MAX_ADAPTIVE_STRENGTH: f64 = 0.8;

/// Target distance (device pixels) at which adaptive smoothing keeps the base strength.
pub const ADAPTIVE_REFERENCE_DISTANCE: f64 = 10.0;

// Strength 1.0 would freeze the follower forever.
const MAX_STRENGTH: f64 = 0.999;

/// Tuning for a follower.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// When `false` the follower reports the raw target pose.
    pub enabled: bool,
    /// Fraction of the remaining distance kept per frame, in `[0, 1)`.
    pub strength: f64,
    /// Same as `strength`, for the heading.
    pub rotation_strength: f64,
    /// Scale position strength inversely with target distance.
    pub adaptive: bool,
    /// Cap for adaptive strength.
    pub max_adaptive_strength: f64,
    /// Jitter amplitude in device pixels; 0 disables jitter.
    pub jitter_intensity: f64,
    /// Speed multiplier of the jitter waves.
    pub jitter_time_scale: f64,
    /// Number of track poses to look ahead when turning; 0 disables anticipation.
    pub look_ahead: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 0.6,
            rotation_strength: 0.7,
            adaptive: false,
            max_adaptive_strength: MAX_ADAPTIVE_STRENGTH,
            jitter_intensity: 0.0,
            jitter_time_scale: 1.0,
            look_ahead: 0,
        }
    }
}

impl SmoothingConfig {
    /// Pass-through configuration.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Frame-to-frame state of one follower.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SmoothingState {
    pub last_position: Point,
    pub last_angle: f64,
    /// Device pixels per millisecond.
    pub velocity: Vec2,
    /// Radians per millisecond.
    pub angular_velocity: f64,
    pub last_update_ms: Option<f64>,
    /// Delta used by the latest position step; rotation reuses it.
    pub last_delta_ms: f64,
}

impl SmoothingState {
    pub fn new(initial: Pose) -> Self {
        Self {
            last_position: initial.point(),
            last_angle: normalize_angle(initial.angle),
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            last_update_ms: None,
            last_delta_ms: FRAME_MS,
        }
    }

    /// Elapsed time since the last update, capped at one frame. The first update counts as a
    /// full frame.
    pub fn frame_delta(&self, now_ms: f64) -> f64 {
        match self.last_update_ms {
            Some(last) => {
                let dt = now_ms - last;
                if dt.is_nan() { FRAME_MS } else { dt.clamp(0.0, FRAME_MS) }
            }
            None => FRAME_MS,
        }
    }
}

/// `1 - strength^(dt / FRAME_MS)`: the fraction of the gap closed over `dt_ms`.
pub fn damping_factor(strength: f64, dt_ms: f64) -> f64 {
    let strength = if strength.is_nan() {
        0.0
    } else {
        strength.clamp(0.0, MAX_STRENGTH)
    };
    1.0 - strength.powf(dt_ms.max(0.0) / FRAME_MS)
}

/// Move `current` toward `target` with frame-rate independent exponential damping.
pub fn smooth_position(
    current: Point,
    target: Point,
    state: &mut SmoothingState,
    config: &SmoothingConfig,
    now_ms: f64,
) -> Point {
    let dt = state.frame_delta(now_ms);
    state.last_update_ms = Some(now_ms);
    state.last_delta_ms = dt;

    if !config.enabled {
        state.last_position = target;
        return target;
    }

    let next = current.lerp(target, damping_factor(config.strength, dt));
    state.velocity = if dt > 0.0 {
        (next - current) / dt
    } else {
        Vec2::ZERO
    };
    state.last_position = next;
    next
}

/// Rotate `current` toward `target` along the shortest arc.
///
/// Uses the frame delta recorded by the latest [`smooth_position`] call on `state`.
pub fn smooth_rotation(
    current: f64,
    target: f64,
    state: &mut SmoothingState,
    strength: f64,
) -> f64 {
    let dt = state.last_delta_ms;
    let current = normalize_angle(current);
    let step = shortest_angle_delta(current, target) * damping_factor(strength, dt);
    state.angular_velocity = if dt > 0.0 { step / dt } else { 0.0 };

    let out = normalize_angle(current + step);
    state.last_angle = out;
    out
}

/// Strength that shrinks as the target moves further per frame, so fast motion lags less.
pub fn adaptive_smoothing(base_strength: f64, distance: f64, max_strength: f64) -> f64 {
    let cap = if max_strength.is_nan() {
        MAX_ADAPTIVE_STRENGTH
    } else {
        max_strength.clamp(0.0, MAX_STRENGTH)
    };
    let base = if base_strength.is_nan() {
        0.0
    } else {
        base_strength.max(0.0)
    };
    if !distance.is_finite() {
        return base.min(cap);
    }
    let d = distance.abs();
    if d <= f64::EPSILON {
        return cap;
    }
    (base * ADAPTIVE_REFERENCE_DISTANCE / d).min(cap)
}

/// Bearing from `poses[index]` to `poses[index + look_ahead]` (clamped to the last pose).
///
/// Falls back to the pose's own heading when there is nothing ahead of it.
pub fn predict_direction(poses: &[Pose], index: usize, look_ahead: usize) -> Option<f64> {
    let current = poses.get(index)?;
    let ahead_idx = index.saturating_add(look_ahead).min(poses.len() - 1);
    let delta = poses[ahead_idx].point() - current.point();
    if ahead_idx == index || delta.hypot2() == 0.0 {
        return Some(current.angle);
    }
    Some(delta.atan2())
}

#[cfg(test)]
#[path = "../../tests/unit/follower/smooth.rs"]
mod tests;
