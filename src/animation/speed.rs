use crate::foundation::math::positive_or;

/// Fallback duration (seconds) when no usable speed is configured.
pub const DEFAULT_DURATION_SECS: f64 = 3.0;

/// Shortest duration derived from a points-per-second rate.
pub const MIN_RATE_DURATION_SECS: f64 = 0.1;

/// How fast an item is drawn.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Speed {
    /// Fixed duration in seconds; `None` means "use the fallback".
    Duration(Option<f64>),
    /// Drawing rate in local units per second.
    PointsPerSecond(f64),
}

impl Default for Speed {
    fn default() -> Self {
        Self::Duration(None)
    }
}

/// Resolve `speed` into a duration that is always > 0.
///
/// `fallback` replaces missing or unusable values and is itself replaced by
/// [`DEFAULT_DURATION_SECS`] when not positive.
pub fn effective_duration(speed: Speed, total_length: f64, fallback: f64) -> f64 {
    let fallback = positive_or(fallback, DEFAULT_DURATION_SECS);
    match speed {
        Speed::PointsPerSecond(pps) => {
            if !(pps.is_finite() && pps > 0.0) || !total_length.is_finite() {
                return fallback;
            }
            (total_length.max(0.0) / pps).max(MIN_RATE_DURATION_SECS)
        }
        Speed::Duration(Some(d)) => positive_or(d, fallback),
        Speed::Duration(None) => fallback,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/speed.rs"]
mod tests;
