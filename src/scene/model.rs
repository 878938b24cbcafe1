use std::collections::HashSet;

use crate::animation::ease::Ease;
use crate::animation::progress::Timing;
use crate::animation::reveal::RevealStrategy;
use crate::animation::speed::Speed;
use crate::follower::smooth::SmoothingConfig;
use crate::foundation::core::{Canvas, ViewBox};
use crate::foundation::error::{SketchError, SketchResult};
use crate::path::sample::{MIN_SAMPLE_INTERVAL, SampleOptions};
use crate::transform::affine::ObjectPose;

/// A scene: a canvas plus the items animated on it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneDef {
    pub canvas: Canvas,
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
    #[serde(default)]
    pub sampling: SampleOptions,
    pub items: Vec<ItemDef>,
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ItemDef {
    pub id: String,
    #[serde(flatten)]
    pub kind: ItemKindDef,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemKindDef {
    Path(PathItemDef),
    Text(TextItemDef),
    /// Anything drawn by an outer renderer that only needs a progress value.
    Shape(Timing),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PathItemDef {
    /// SVG path data.
    pub d: String,
    /// Defaults to a 1:1 mapping onto the canvas.
    #[serde(default)]
    pub view_box: Option<ViewBox>,
    /// `[a, b, c, d, e, f]` matrix coefficients.
    #[serde(default)]
    pub local_transform: Option<[f64; 6]>,
    #[serde(default)]
    pub pose: ObjectPose,
    #[serde(default)]
    pub speed: Speed,
    #[serde(default)]
    pub reveal: RevealStrategy,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub start: f64,
    /// No hand is tracked when absent.
    #[serde(default)]
    pub follower: Option<SmoothingConfig>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TextItemDef {
    pub text: String,
    /// `pointsPerSecond` counts grapheme clusters per second.
    #[serde(default)]
    pub speed: Speed,
    #[serde(default)]
    pub reveal: RevealStrategy,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub start: f64,
}

impl SceneDef {
    pub fn validate(&self) -> SketchResult<()> {
        self.canvas.validate()?;
        if !(self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0) {
            return Err(SketchError::validation("device_pixel_ratio must be finite and > 0"));
        }
        let interval = self.sampling.interval;
        if !(interval.is_finite() && interval >= MIN_SAMPLE_INTERVAL) {
            return Err(SketchError::validation(format!(
                "sampling interval must be finite and >= {MIN_SAMPLE_INTERVAL}"
            )));
        }

        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.id.trim().is_empty() {
                return Err(SketchError::validation("item id must be non-empty"));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(SketchError::validation(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
            item.kind.validate().map_err(|e| {
                SketchError::validation(format!("item '{}': {}", item.id, message(e)))
            })?;
        }
        Ok(())
    }
}

fn message(e: SketchError) -> String {
    match e {
        SketchError::Validation(m) => m,
        other => other.to_string(),
    }
}

impl ItemKindDef {
    fn validate(&self) -> SketchResult<()> {
        match self {
            ItemKindDef::Path(p) => p.validate(),
            ItemKindDef::Text(t) => {
                require_finite("start", t.start)?;
                validate_speed(t.speed)
            }
            ItemKindDef::Shape(timing) => {
                require_finite("start", timing.start)?;
                require_finite("duration", timing.duration)
            }
        }
    }
}

impl PathItemDef {
    fn validate(&self) -> SketchResult<()> {
        if self.d.trim().is_empty() {
            return Err(SketchError::validation("path data must be non-empty"));
        }
        require_finite("start", self.start)?;
        validate_speed(self.speed)?;

        if let Some(vb) = self.view_box {
            for (name, v) in [
                ("view_box.x", vb.x),
                ("view_box.y", vb.y),
                ("view_box.width", vb.width),
                ("view_box.height", vb.height),
            ] {
                require_finite(name, v)?;
            }
        }
        if let Some(m) = self.local_transform
            && m.iter().any(|c| !c.is_finite())
        {
            return Err(SketchError::validation("local_transform must be finite"));
        }
        for (name, v) in [
            ("pose.x", self.pose.x),
            ("pose.y", self.pose.y),
            ("pose.rotation_deg", self.pose.rotation_deg),
            ("pose.scale_x", self.pose.scale_x),
            ("pose.scale_y", self.pose.scale_y),
        ] {
            require_finite(name, v)?;
        }
        if let Some(f) = &self.follower {
            for (name, v) in [
                ("follower.strength", f.strength),
                ("follower.rotation_strength", f.rotation_strength),
                ("follower.max_adaptive_strength", f.max_adaptive_strength),
                ("follower.jitter_intensity", f.jitter_intensity),
                ("follower.jitter_time_scale", f.jitter_time_scale),
            ] {
                require_finite(name, v)?;
            }
        }
        Ok(())
    }
}

fn validate_speed(speed: Speed) -> SketchResult<()> {
    match speed {
        Speed::Duration(Some(d)) => require_finite("speed.duration", d),
        Speed::Duration(None) => Ok(()),
        Speed::PointsPerSecond(pps) => require_finite("speed.pointsPerSecond", pps),
    }
}

fn require_finite(name: &str, v: f64) -> SketchResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SketchError::validation(format!("{name} must be finite")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
