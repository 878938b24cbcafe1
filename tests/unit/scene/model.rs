use super::*;

fn scene_json() -> &'static str {
    r#"{
        "canvas": { "width": 200.0, "height": 100.0 },
        "items": [
            { "id": "line", "type": "path", "d": "M0 0 L100 0",
              "speed": { "duration": 2.0 }, "ease": "easeInOut",
              "follower": { "strength": 0.5 } },
            { "id": "title", "type": "text", "text": "hi", "reveal": { "kind": "atEnd" } },
            { "id": "box", "type": "shape", "start": 1.0 }
        ]
    }"#
}

#[test]
fn parses_items_with_defaults() {
    let def: SceneDef = serde_json::from_str(scene_json()).unwrap();
    assert_eq!(def.device_pixel_ratio, 1.0);
    assert_eq!(def.sampling, SampleOptions::default());
    assert_eq!(def.items.len(), 3);

    let ItemKindDef::Path(p) = &def.items[0].kind else {
        panic!("expected path item");
    };
    assert_eq!(p.speed, Speed::Duration(Some(2.0)));
    assert_eq!(p.ease, Ease::EaseInOut);
    assert_eq!(p.reveal, RevealStrategy::PerUnit);
    let follower = p.follower.unwrap();
    assert_eq!(follower.strength, 0.5);
    assert_eq!(follower.rotation_strength, SmoothingConfig::default().rotation_strength);

    let ItemKindDef::Text(t) = &def.items[1].kind else {
        panic!("expected text item");
    };
    assert_eq!(t.reveal, RevealStrategy::AtEnd);

    let ItemKindDef::Shape(timing) = &def.items[2].kind else {
        panic!("expected shape item");
    };
    assert_eq!(timing.start, 1.0);
    assert_eq!(timing.duration, 1.0);

    def.validate().unwrap();
}

#[test]
fn validate_rejects_duplicate_ids() {
    let mut def: SceneDef = serde_json::from_str(scene_json()).unwrap();
    def.items[1].id = "line".to_string();
    let err = def.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate item id 'line'"));
}

#[test]
fn validate_rejects_zero_canvas() {
    let mut def: SceneDef = serde_json::from_str(scene_json()).unwrap();
    def.canvas.width = 0.0;
    assert!(matches!(def.validate(), Err(SketchError::Validation(_))));
}

#[test]
fn validate_rejects_non_finite_numbers() {
    let mut def: SceneDef = serde_json::from_str(scene_json()).unwrap();
    if let ItemKindDef::Path(p) = &mut def.items[0].kind {
        p.pose.rotation_deg = f64::NAN;
    }
    let err = def.validate().unwrap_err();
    assert!(matches!(err, SketchError::Validation(_)));
    assert!(err.to_string().contains("item 'line': pose.rotation_deg must be finite"));

    let mut def: SceneDef = serde_json::from_str(scene_json()).unwrap();
    def.device_pixel_ratio = f64::INFINITY;
    assert!(def.validate().is_err());
}

#[test]
fn unknown_item_type_fails_to_parse() {
    let s = r#"{ "canvas": { "width": 10.0, "height": 10.0 },
                 "items": [ { "id": "x", "type": "video" } ] }"#;
    assert!(serde_json::from_str::<SceneDef>(s).is_err());
}

#[test]
fn validate_rejects_unusable_sampling_interval() {
    for interval in [0.0, -1.0, 1e-13, f64::NAN] {
        let mut def: SceneDef = serde_json::from_str(scene_json()).unwrap();
        def.sampling.interval = interval;
        assert!(
            matches!(def.validate(), Err(SketchError::Validation(_))),
            "interval {interval}"
        );
    }
    let mut def: SceneDef = serde_json::from_str(scene_json()).unwrap();
    def.sampling.interval = MIN_SAMPLE_INTERVAL;
    def.validate().unwrap();
}
