use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SketchError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SketchError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        SketchError::sampling("x")
            .to_string()
            .contains("sampling error:")
    );
    assert!(
        SketchError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SketchError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SketchError = e.into();
    assert!(matches!(err, SketchError::Serde(_)));
}
