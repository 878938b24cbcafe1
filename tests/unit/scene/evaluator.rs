use super::*;
use crate::animation::ease::Ease;
use crate::animation::speed::Speed;
use crate::follower::smooth::SmoothingConfig;
use crate::foundation::core::Canvas;
use crate::path::sample::SampleOptions;
use crate::scene::model::ItemDef;
use crate::transform::affine::ObjectPose;

fn path_item(id: &str, d: &str, follower: Option<SmoothingConfig>) -> ItemDef {
    ItemDef {
        id: id.to_string(),
        kind: ItemKindDef::Path(PathItemDef {
            d: d.to_string(),
            view_box: None,
            local_transform: None,
            pose: ObjectPose::default(),
            speed: Speed::Duration(Some(1.0)),
            reveal: RevealStrategy::PerUnit,
            ease: Ease::Linear,
            start: 0.0,
            follower,
        }),
    }
}

fn scene(items: Vec<ItemDef>) -> SceneDef {
    SceneDef {
        canvas: Canvas {
            width: 100.0,
            height: 100.0,
        },
        device_pixel_ratio: 1.0,
        sampling: SampleOptions::default(),
        items,
    }
}

fn path_state(frame: &FrameState, idx: usize) -> (f64, Option<Pose>, Option<Pose>) {
    match &frame.items[idx].state {
        ItemState::Path {
            revealed_length,
            pose,
            hand,
            ..
        } => (*revealed_length, *pose, *hand),
        other => panic!("expected path state, got {other:?}"),
    }
}

#[test]
fn straight_line_reveals_linearly() {
    let def = scene(vec![path_item("a", "M0 0 L100 0", None)]);
    let mut sc = Scene::prepare(&def).unwrap();
    assert_eq!(sc.duration(), 1.0);

    let f = sc.eval_frame(0.5);
    let (len, pose, hand) = path_state(&f, 0);
    assert_eq!(f.items[0].progress, 0.5);
    assert_eq!(len, 50.0);
    let pose = pose.unwrap();
    assert!((pose.x - 50.0).abs() < 1e-9);
    assert!(pose.angle.abs() < 1e-9);
    assert!(hand.is_none());

    let f = sc.eval_frame(2.0);
    assert_eq!(path_state(&f, 0).0, 100.0);
}

#[test]
fn identical_paths_are_sampled_once() {
    let def = scene(vec![
        path_item("a", "M0 0 L100 0", None),
        path_item("b", "M0 0 L100 0", None),
    ]);
    let sc = Scene::prepare(&def).unwrap();
    assert_eq!(sc.cache_stats().misses, 1);
    assert_eq!(sc.cache_stats().hits, 1);
    let a = sc.path_runtime("a").unwrap();
    let b = sc.path_runtime("b").unwrap();
    assert!(std::ptr::eq(a.sampled(), b.sampled()));
    assert!(a.revealed_path(0.5, RevealStrategy::PerUnit).is_some());
}

#[test]
fn disabled_follower_reports_raw_pose() {
    let def = scene(vec![path_item(
        "a",
        "M0 0 L100 0",
        Some(SmoothingConfig::disabled()),
    )]);
    let mut sc = Scene::prepare(&def).unwrap();
    for t in [0.1, 0.4, 0.9] {
        let f = sc.eval_frame(t);
        let (_, pose, hand) = path_state(&f, 0);
        assert_eq!(pose, hand);
    }
}

#[test]
fn enabled_follower_trails_the_head() {
    let def = scene(vec![path_item(
        "a",
        "M0 0 L100 0",
        Some(SmoothingConfig::default()),
    )]);
    let mut sc = Scene::prepare(&def).unwrap();
    let f = sc.eval_frame(0.5);
    let (_, pose, hand) = path_state(&f, 0);
    let (pose, hand) = (pose.unwrap(), hand.unwrap());
    assert!(hand.x > 0.0);
    assert!(hand.x < pose.x);

    sc.reset_followers();
    let f = sc.eval_frame(0.0);
    let (_, _, hand) = path_state(&f, 0);
    assert!(hand.unwrap().x.abs() < 1e-9);
}

#[test]
fn malformed_path_is_static() {
    let def = scene(vec![path_item("a", "M0 0 L banana", Some(SmoothingConfig::default()))]);
    let mut sc = Scene::prepare(&def).unwrap();
    let f = sc.eval_frame(0.5);
    let (len, pose, hand) = path_state(&f, 0);
    assert_eq!(len, 0.0);
    assert!(pose.is_none());
    assert!(hand.is_none());
    assert!(!sc.path_runtime("a").unwrap().sampled().is_measured());
}

#[test]
fn text_and_shape_items_report_progress() {
    let mut def = scene(Vec::new());
    def.items.push(ItemDef {
        id: "t".to_string(),
        kind: ItemKindDef::Text(TextItemDef {
            text: "héllo👍🏽".to_string(),
            speed: Speed::Duration(Some(2.0)),
            reveal: RevealStrategy::PerUnit,
            ease: Ease::Linear,
            start: 0.0,
        }),
    });
    def.items.push(ItemDef {
        id: "s".to_string(),
        kind: ItemKindDef::Shape(Timing::new(1.0, 1.0, Ease::Linear)),
    });
    let mut sc = Scene::prepare(&def).unwrap();
    assert_eq!(sc.duration(), 2.0);

    let f = sc.eval_frame(1.0);
    match &f.items[0].state {
        ItemState::Text {
            revealed,
            shown,
            total,
        } => {
            assert_eq!(revealed, "hél");
            assert_eq!(*shown, 3);
            assert_eq!(*total, 6);
        }
        other => panic!("expected text state, got {other:?}"),
    }
    assert_eq!(f.items[1].progress, 0.0);
    assert_eq!(f.items[1].state, ItemState::Shape { complete: false });

    let f = sc.eval_frame(2.0);
    assert_eq!(f.items[1].state, ItemState::Shape { complete: true });
    let ItemState::Text { revealed, .. } = &f.items[0].state else {
        panic!("expected text state");
    };
    assert_eq!(revealed, "héllo👍🏽");
}

#[test]
fn look_ahead_turns_toward_upcoming_corner() {
    let mut item = path_item(
        "a",
        "M0 0 L100 0 L100 100",
        Some(SmoothingConfig {
            look_ahead: 100_000,
            rotation_strength: 0.0,
            ..SmoothingConfig::default()
        }),
    );
    if let ItemKindDef::Path(p) = &mut item.kind {
        p.speed = Speed::Duration(Some(2.0));
    }
    let mut sc = Scene::prepare(&scene(vec![item])).unwrap();
    let f = sc.eval_frame(0.5);
    let (_, pose, hand) = path_state(&f, 0);
    assert!(pose.unwrap().angle.abs() < 1e-9);
    // Looking to the end of the path points at (100, 100) from (50, 0).
    let expected = (100.0f64).atan2(50.0);
    assert!((hand.unwrap().angle - expected).abs() < 1e-2);
}

#[test]
fn frame_state_serializes_with_item_type_tags() {
    let def = scene(vec![path_item("a", "M0 0 L100 0", None)]);
    let mut sc = Scene::prepare(&def).unwrap();
    let v = serde_json::to_value(sc.eval_frame(0.25)).unwrap();
    assert_eq!(v["items"][0]["type"], "path");
    assert_eq!(v["items"][0]["id"], "a");
    assert_eq!(v["items"][0]["revealed_length"], 25.0);
}
