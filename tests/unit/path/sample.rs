use super::*;
use crate::path::measure::PathMeasure;

#[test]
fn straight_line_ends_exactly_at_total() {
    let sp = sample_path("M0 0 L100 0", SampleOptions { interval: 1.0 });
    let samples = sp.samples();
    assert!(sp.is_measured());
    assert!(samples.len() > MIN_SAMPLE_STEPS);
    assert_eq!(samples[0].s, 0.0);
    assert_eq!(samples.last().unwrap().s, 100.0);
    assert!((samples.last().unwrap().x - 100.0).abs() < 1e-9);
    assert!(samples.windows(2).all(|w| w[0].s <= w[1].s));
}

#[test]
fn long_path_uses_requested_interval() {
    let sp = sample_path("M0 0 L2000 0", SampleOptions { interval: 1.0 });
    // 2000 / 1.0 steps plus the closing sample.
    assert_eq!(sp.samples().len(), 2001);
    assert_eq!(sp.total(), 2000.0);
}

#[test]
fn short_path_still_gets_the_sample_floor() {
    let sp = sample_path("M0 0 L1 0", SampleOptions { interval: 1.0 });
    assert!(sp.samples().len() >= MIN_SAMPLE_STEPS);
}

#[test]
fn non_positive_interval_uses_default() {
    let a = sample_path("M0 0 L1000 0", SampleOptions { interval: -4.0 });
    let b = sample_path("M0 0 L1000 0", SampleOptions::default());
    assert_eq!(a, b);
}

#[test]
fn single_point_yields_two_collapsed_samples() {
    let sp = sample_path("M5 6", SampleOptions::default());
    assert_eq!(sp.samples().len(), 2);
    assert!(sp.is_zero_length());
    assert!(sp.is_measured());
    for s in sp.samples() {
        assert_eq!(s.point(), Point::new(5.0, 6.0));
        assert_eq!(s.s, 0.0);
    }
}

#[test]
fn unparseable_data_degrades_instead_of_failing() {
    let sp = sample_path("M0 0 L banana", SampleOptions::default());
    assert!(!sp.is_measured());
    assert_eq!(sp.total(), 0.0);
    assert_eq!(sp.samples().len(), 2);
}

struct BrokenMeasure;

impl PathMeasure for BrokenMeasure {
    fn total_length(&self) -> f64 {
        f64::NAN
    }

    fn point_at_length(&self, _s: f64) -> Point {
        Point::ZERO
    }

    fn start_point(&self) -> Point {
        Point::new(1.0, 1.0)
    }
}

#[test]
fn non_finite_length_degrades_to_start_point() {
    let sp = sample_measure(&BrokenMeasure, SampleOptions::default());
    assert!(!sp.is_measured());
    assert_eq!(sp.samples()[0].point(), Point::new(1.0, 1.0));
}

#[test]
fn tiny_interval_is_capped() {
    let sp = sample_path("M0 0 L100 0", SampleOptions { interval: 1e-13 });
    let samples = sp.samples();
    assert!(samples.len() <= MAX_SAMPLE_STEPS + 1);
    assert!(samples.len() > MIN_SAMPLE_STEPS);
    assert_eq!(samples.last().unwrap().s, 100.0);
    assert!(samples.windows(2).all(|w| w[0].s <= w[1].s));
}

#[test]
fn huge_path_stays_within_the_cap() {
    let sp = sample_path("M0 0 L1000000000 0", SampleOptions::default());
    assert!(sp.samples().len() <= MAX_SAMPLE_STEPS + 1);
    assert_eq!(sp.total(), 1e9);
}
