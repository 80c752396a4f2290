use super::*;
use nalgebra::vector;
use std::cmp::Ordering;

#[test]
fn distance_pythagorean_and_symmetric() {
    let a = vector![0.0, 0.0];
    let b = vector![3.0, 4.0];
    assert!((distance(a, b) - 5.0).abs() < 1e-12);
    assert_eq!(distance(a, b), distance(b, a));
    assert_eq!(distance(b, b), 0.0);
}

#[test]
fn orders_treat_equal_keys_as_equal() {
    let a = vector![1.0, 7.0];
    let b = vector![1.0, -2.0];
    assert_eq!(cmp_x(&a, &b), Ordering::Equal);
    assert_eq!(cmp_y(&b, &a), Ordering::Less);
    // -0.0 and 0.0 are distinct under total_cmp; both are finite and ordered.
    assert_eq!(cmp_x(&vector![-0.0, 0.0], &vector![0.0, 0.0]), Ordering::Less);
}

#[test]
fn pair_result_sentinel_and_unordered_match() {
    let none = PairResult::none();
    assert!(none.is_none());
    assert!(none.distance.is_infinite());

    let r = PairResult::of(vector![1.0, 5.0], vector![0.0, 1.0]);
    assert!(!r.is_none());
    assert!(r.same_points(vector![0.0, 1.0], vector![1.0, 5.0]));
    assert!(!r.same_points(vector![0.0, 1.0], vector![1.0, 4.0]));
}

#[test]
fn check_finite_reports_first_bad_index() {
    let pts = vec![vector![0.0, 0.0], vector![f64::NAN, 1.0], vector![f64::INFINITY, 0.0]];
    match check_finite(&pts) {
        Err(crate::SolveError::NonFinite { index }) => assert_eq!(index, 1),
        other => panic!("expected NonFinite, got {other:?}"),
    }
    assert!(check_finite(&pts[..1]).is_ok());
}
