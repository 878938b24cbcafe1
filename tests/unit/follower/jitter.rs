use super::*;

#[test]
fn zero_intensity_is_a_no_op() {
    let p = Point::new(12.0, 7.0);
    for t in [0.0, 16.0, 1234.5] {
        assert_eq!(add_human_jitter(p, 0.0, 1.0, t), p);
    }
}

#[test]
fn offset_is_bounded_by_intensity() {
    let p = Point::new(0.0, 0.0);
    for i in 0..500 {
        let q = add_human_jitter(p, 2.0, 1.0, f64::from(i) * 16.7);
        assert!(q.x.abs() <= 2.0 + 1e-12);
        assert!(q.y.abs() <= 2.0 + 1e-12);
    }
}

#[test]
fn deterministic_but_time_varying() {
    let p = Point::new(5.0, 5.0);
    let a = add_human_jitter(p, 1.5, 1.0, 900.0);
    let b = add_human_jitter(p, 1.5, 1.0, 900.0);
    let c = add_human_jitter(p, 1.5, 1.0, 1900.0);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
