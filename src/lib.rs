//! Arc-length path sampling, reveal progress and hand-follower motion for whiteboard-style
//! vector animation.
//!
//! Paths are sampled once in their own coordinate space ([`sample_path`]) and located per frame
//! through a composed local-to-device matrix ([`PathRuntime`]). [`Scene`] ties paths, text and
//! plain timed items together and evaluates them frame by frame.

#![forbid(unsafe_code)]

pub mod animation;
pub mod follower;
pub mod foundation;
pub mod path;
pub mod scene;
pub mod transform;

pub use animation::ease::Ease;
pub use animation::progress::{Timing, progress};
pub use animation::reveal::{RevealStrategy, reveal_text, revealed_length};
pub use animation::speed::{Speed, effective_duration};
pub use follower::hand::HandFollower;
pub use follower::smooth::{SmoothingConfig, SmoothingState};
pub use foundation::core::{Affine, BezPath, Canvas, Point, Pose, Vec2, ViewBox};
pub use foundation::error::{SketchError, SketchResult};
pub use path::cache::SampleCache;
pub use path::runtime::PathRuntime;
pub use path::sample::{Sample, SampleOptions, SampledPath, sample_path};
pub use path::worker::{SampleOutcome, SampleTicket, SamplerPool};
pub use scene::evaluator::{FrameState, ItemFrame, ItemState, Scene};
pub use scene::model::{ItemDef, ItemKindDef, SceneDef};
pub use transform::affine::{ObjectPose, TransformInputs};
