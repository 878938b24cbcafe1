//! Per-frame evaluation of a prepared scene.
//!
//! Preparation does all geometry work up front: every path is sampled once (identical path data
//! is shared through a [`SampleCache`]) and its world transform is composed once. A frame is then
//! a handful of lookups plus one follower step per path.

use unicode_segmentation::UnicodeSegmentation;

use crate::animation::progress::Timing;
use crate::animation::reveal::{RevealStrategy, reveal_text, revealed_length};
use crate::animation::speed::{DEFAULT_DURATION_SECS, effective_duration};
use crate::follower::hand::HandFollower;
use crate::follower::smooth::predict_direction;
use crate::foundation::core::{Pose, ViewBox};
use crate::foundation::error::SketchResult;
use crate::path::cache::{CacheStats, SampleCache};
use crate::path::locate::DEFAULT_POSE_EPSILON;
use crate::path::runtime::PathRuntime;
use crate::scene::model::{ItemKindDef, PathItemDef, SceneDef, TextItemDef};
use crate::transform::affine::{TransformInputs, from_coeffs};

/// State of the whole scene at one point in time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    pub time_s: f64,
    pub items: Vec<ItemFrame>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ItemFrame {
    pub id: String,
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
    #[serde(flatten)]
    pub state: ItemState,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemState {
    Path {
        revealed_length: f64,
        total_length: f64,
        /// Device-space reveal head; `None` for zero-length paths.
        pose: Option<Pose>,
        /// Smoothed follower pose, when the item has a follower.
        hand: Option<Pose>,
    },
    Text {
        revealed: String,
        shown: usize,
        total: usize,
    },
    Shape {
        complete: bool,
    },
}

#[derive(Debug)]
struct PreparedPath {
    runtime: PathRuntime,
    timing: Timing,
    reveal: RevealStrategy,
    follower: Option<HandFollower>,
    // Device-space pose at every sample; only built when the follower looks ahead.
    track: Vec<Pose>,
}

#[derive(Debug)]
struct PreparedText {
    text: String,
    graphemes: usize,
    timing: Timing,
    reveal: RevealStrategy,
}

#[derive(Debug)]
enum PreparedKind {
    Path(Box<PreparedPath>),
    Text(PreparedText),
    Shape(Timing),
}

#[derive(Debug)]
struct PreparedItem {
    id: String,
    kind: PreparedKind,
}

/// A validated scene ready for frame evaluation.
#[derive(Debug)]
pub struct Scene {
    items: Vec<PreparedItem>,
    cache_stats: CacheStats,
}

impl Scene {
    /// Validate `def` and do all sampling work.
    pub fn prepare(def: &SceneDef) -> SketchResult<Self> {
        def.validate()?;

        let mut cache = SampleCache::default();
        let items = def
            .items
            .iter()
            .map(|item| PreparedItem {
                id: item.id.clone(),
                kind: match &item.kind {
                    ItemKindDef::Path(p) => {
                        PreparedKind::Path(Box::new(prepare_path(def, p, &mut cache)))
                    }
                    ItemKindDef::Text(t) => PreparedKind::Text(prepare_text(t)),
                    ItemKindDef::Shape(timing) => PreparedKind::Shape(*timing),
                },
            })
            .collect();

        let cache_stats = cache.stats();
        tracing::debug!(
            hits = cache_stats.hits,
            misses = cache_stats.misses,
            "prepared scene"
        );
        Ok(Self { items, cache_stats })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sampling cache counters from preparation.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache_stats
    }

    /// Time at which the last item completes, in seconds.
    pub fn duration(&self) -> f64 {
        self.items
            .iter()
            .map(|item| match &item.kind {
                PreparedKind::Path(p) => p.timing.end(),
                PreparedKind::Text(t) => t.timing.end(),
                PreparedKind::Shape(timing) => timing.end(),
            })
            .fold(0.0, f64::max)
    }

    /// Runtime of the path item `id`.
    pub fn path_runtime(&self, id: &str) -> Option<&PathRuntime> {
        self.items.iter().find(|i| i.id == id).and_then(|i| match &i.kind {
            PreparedKind::Path(p) => Some(&p.runtime),
            PreparedKind::Text(_) | PreparedKind::Shape(_) => None,
        })
    }

    /// Put every follower back at the start of its path, e.g. after seeking.
    pub fn reset_followers(&mut self) {
        for item in &mut self.items {
            if let PreparedKind::Path(p) = &mut item.kind
                && let Some(f) = &mut p.follower
            {
                f.reset(start_pose(&p.runtime));
            }
        }
    }

    /// Evaluate every item at `time_s`.
    ///
    /// Followers advance by one step per call, so frames should be evaluated in time order.
    #[tracing::instrument(skip(self))]
    pub fn eval_frame(&mut self, time_s: f64) -> FrameState {
        let items = self
            .items
            .iter_mut()
            .map(|item| eval_item(item, time_s))
            .collect();
        FrameState { time_s, items }
    }
}

fn prepare_path(def: &SceneDef, p: &PathItemDef, cache: &mut SampleCache) -> PreparedPath {
    let (sampled, geometry) = cache.get_or_prepare(&p.d, def.sampling);
    let inputs = TransformInputs {
        local: p.local_transform.map(from_coeffs),
        view_box: p.view_box.unwrap_or_else(|| ViewBox::from_canvas(def.canvas)),
        canvas: def.canvas,
        device_pixel_ratio: def.device_pixel_ratio,
        object: p.pose,
    };
    let runtime = PathRuntime::from_sampled(sampled, geometry, inputs);

    let duration = effective_duration(p.speed, runtime.total_length(), DEFAULT_DURATION_SECS);
    let timing = Timing::new(p.start, duration, p.ease);

    let follower = p
        .follower
        .map(|cfg| HandFollower::new(cfg, start_pose(&runtime)));
    let track = match &follower {
        Some(f) if f.config().look_ahead > 0 && !runtime.is_zero_length() => runtime
            .sampled()
            .samples()
            .iter()
            .filter_map(|s| runtime.world_pose_at_s(s.s, DEFAULT_POSE_EPSILON))
            .collect(),
        _ => Vec::new(),
    };

    PreparedPath {
        runtime,
        timing,
        reveal: p.reveal,
        follower,
        track,
    }
}

fn prepare_text(t: &TextItemDef) -> PreparedText {
    let graphemes = t.text.graphemes(true).count();
    let duration = effective_duration(t.speed, graphemes as f64, DEFAULT_DURATION_SECS);
    PreparedText {
        text: t.text.clone(),
        graphemes,
        timing: Timing::new(t.start, duration, t.ease),
        reveal: t.reveal,
    }
}

fn start_pose(runtime: &PathRuntime) -> Pose {
    runtime
        .world_pose_at_s(0.0, DEFAULT_POSE_EPSILON)
        .unwrap_or_else(|| {
            let p = runtime.world_transform() * runtime.point_at_s(0.0);
            Pose::new(p, 0.0)
        })
}

fn eval_item(item: &mut PreparedItem, time_s: f64) -> ItemFrame {
    let (progress, state) = match &mut item.kind {
        PreparedKind::Path(p) => eval_path(p, time_s),
        PreparedKind::Text(t) => {
            let progress = t.timing.progress(time_s);
            let revealed = reveal_text(&t.text, progress, t.reveal);
            let shown = revealed.graphemes(true).count();
            let state = ItemState::Text {
                revealed: revealed.to_owned(),
                shown,
                total: t.graphemes,
            };
            (progress, state)
        }
        PreparedKind::Shape(timing) => (
            timing.progress(time_s),
            ItemState::Shape {
                complete: timing.is_complete(time_s),
            },
        ),
    };
    ItemFrame {
        id: item.id.clone(),
        progress,
        state,
    }
}

fn eval_path(p: &mut PreparedPath, time_s: f64) -> (f64, ItemState) {
    let progress = p.timing.progress(time_s);
    let total = p.runtime.total_length();
    let length = revealed_length(progress, total, p.reveal);
    let pose = p.runtime.world_pose_at_s(length, DEFAULT_POSE_EPSILON);

    let hand = match (&mut p.follower, pose) {
        (Some(follower), Some(target)) => {
            let look_ahead = follower.config().look_ahead;
            let target = if look_ahead > 0 {
                let samples = p.runtime.sampled().samples();
                let index = samples.partition_point(|s| s.s < length);
                match predict_direction(&p.track, index, look_ahead) {
                    Some(angle) => Pose { angle, ..target },
                    None => target,
                }
            } else {
                target
            };
            Some(follower.step(target, time_s * 1000.0))
        }
        _ => None,
    };

    let state = ItemState::Path {
        revealed_length: length,
        total_length: total,
        pose,
        hand,
    };
    (progress, state)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/evaluator.rs"]
mod tests;
