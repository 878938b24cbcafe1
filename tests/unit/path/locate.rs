use super::*;
use crate::path::sample::{SampleOptions, sample_path};
use std::f64::consts::FRAC_PI_2;

fn line_samples() -> Vec<Sample> {
    sample_path("M0 0 L100 0", SampleOptions::default())
        .samples()
        .to_vec()
}

#[test]
fn midpoint_of_straight_line() {
    let p = point_at_s(&line_samples(), 50.0).unwrap();
    assert!((p.x - 50.0).abs() < 1e-9);
    assert!(p.y.abs() < 1e-9);
}

#[test]
fn queries_clamp_to_endpoints() {
    let samples = line_samples();
    assert_eq!(point_at_s(&samples, -10.0).unwrap(), samples[0].point());
    assert_eq!(point_at_s(&samples, 0.0).unwrap(), samples[0].point());
    assert_eq!(
        point_at_s(&samples, 1e9).unwrap(),
        samples.last().unwrap().point()
    );
    assert_eq!(point_at_s(&samples, f64::NAN).unwrap(), samples[0].point());
}

#[test]
fn interpolates_between_sparse_samples() {
    let samples = [
        Sample::new(Point::new(0.0, 0.0), 0.0),
        Sample::new(Point::new(10.0, 0.0), 10.0),
        Sample::new(Point::new(10.0, 10.0), 20.0),
    ];
    assert_eq!(point_at_s(&samples, 15.0).unwrap(), Point::new(10.0, 5.0));
    assert_eq!(point_at_s(&samples, 10.0).unwrap(), Point::new(10.0, 0.0));
}

#[test]
fn continuity_as_epsilon_shrinks() {
    let samples = sample_path("M0 0 C0 80 120 80 120 0", SampleOptions::default())
        .samples()
        .to_vec();
    let a = point_at_s(&samples, 42.0).unwrap();
    let mut prev = f64::INFINITY;
    for eps in [1.0, 0.1, 0.01, 0.001] {
        let d = a.distance(point_at_s(&samples, 42.0 + eps).unwrap());
        assert!(d <= prev + 1e-12);
        prev = d;
    }
    assert!(prev < 0.01);
}

#[test]
fn single_and_empty_sequences() {
    let one = [Sample::new(Point::new(3.0, 4.0), 0.0)];
    assert_eq!(point_at_s(&one, 12.0).unwrap(), Point::new(3.0, 4.0));
    assert!(point_at_s(&[], 1.0).is_none());
    assert!(world_pose_at_s(&[], Affine::IDENTITY, 1.0, 0.75).is_none());
}

#[test]
fn pose_follows_world_transform() {
    let samples = line_samples();
    let world = Affine::rotate(FRAC_PI_2) * Affine::scale(2.0);
    let pose = world_pose_at_s(&samples, world, 50.0, DEFAULT_POSE_EPSILON).unwrap();
    assert!(pose.x.abs() < 1e-9);
    assert!((pose.y - 100.0).abs() < 1e-9);
    assert!((pose.angle - FRAC_PI_2).abs() < 1e-9);
}

#[test]
fn pose_at_endpoints_uses_one_sided_window() {
    let samples = line_samples();
    let start = world_pose_at_s(&samples, Affine::IDENTITY, 0.0, 0.75).unwrap();
    let end = world_pose_at_s(&samples, Affine::IDENTITY, 100.0, 0.75).unwrap();
    assert_eq!(start.angle, 0.0);
    assert_eq!(end.angle, 0.0);
    assert!((end.x - 100.0).abs() < 1e-9);
}

#[test]
fn coincident_window_has_zero_heading() {
    let samples = [
        Sample::new(Point::new(1.0, 1.0), 0.0),
        Sample::new(Point::new(1.0, 1.0), 0.0),
    ];
    let pose = world_pose_at_s(&samples, Affine::IDENTITY, 0.0, 0.75).unwrap();
    assert_eq!(pose.angle, 0.0);
    assert_eq!(pose.point(), Point::new(1.0, 1.0));
}
