//! How much of a path or text is visible for a given progress value.

use unicode_segmentation::UnicodeSegmentation;

use crate::transform::linear::clamp01;

/// Bias added before flooring so exact boundaries (e.g. `0.3 * 10`) are not truncated early.
pub const REVEAL_EPSILON: f64 = 1e-6;

/// Policy governing how much content is shown as a function of progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RevealStrategy {
    /// Nothing until progress reaches 1, then everything.
    AtEnd,
    /// Continuous reveal, one whole unit at a time.
    #[default]
    PerUnit,
    /// Reveal in `batches` equal steps.
    Batched {
        /// Number of steps; 0 is treated as 1.
        batches: u32,
    },
}

/// Revealed amount out of `total` continuous units.
pub fn revealed_length(progress: f64, total: f64, strategy: RevealStrategy) -> f64 {
    if !(total.is_finite() && total > 0.0) {
        return 0.0;
    }
    let p = clamp01(progress);
    if p >= 1.0 {
        return total;
    }
    match strategy {
        RevealStrategy::AtEnd => 0.0,
        RevealStrategy::PerUnit => (p * total + REVEAL_EPSILON).floor().min(total),
        RevealStrategy::Batched { batches } => {
            let n = f64::from(batches.max(1));
            let step = (p * n + REVEAL_EPSILON).floor().min(n);
            step / n * total
        }
    }
}

/// Revealed number of indivisible units out of `units`.
///
/// Batches are mapped to counts in integer arithmetic, so a batch boundary never loses a unit
/// to rounding.
pub fn revealed_count(progress: f64, units: usize, strategy: RevealStrategy) -> usize {
    if units == 0 {
        return 0;
    }
    let p = clamp01(progress);
    if p >= 1.0 {
        return units;
    }
    match strategy {
        RevealStrategy::AtEnd => 0,
        RevealStrategy::PerUnit => {
            let n = (p * units as f64 + REVEAL_EPSILON).floor() as usize;
            n.min(units)
        }
        RevealStrategy::Batched { batches } => {
            let n = u128::from(batches.max(1));
            let step = ((p * n as f64 + REVEAL_EPSILON).floor() as u128).min(n);
            (units as u128 * step / n) as usize
        }
    }
}

/// Visible prefix of `text`, advancing by whole extended grapheme clusters.
pub fn reveal_text(text: &str, progress: f64, strategy: RevealStrategy) -> &str {
    let count = text.graphemes(true).count();
    let n = revealed_count(progress, count, strategy);
    if n >= count {
        return text;
    }
    let end = text
        .grapheme_indices(true)
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[..end]
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
