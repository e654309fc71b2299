use numchop::boundary::{nan_boundary, BoundaryError, DEFAULT_MAX_ITERATIONS};
use numchop::chop::{chop_in_place, chop_into, DEFAULT_THRESHOLD};

#[test]
fn test_end_to_end() {
    // acos is NaN outside [-1, 1]
    let f = |x: f64| x.acos();

    // locate both edges of the domain
    let tolerance = 1e-9;
    let upper = nan_boundary(&f, 0.0, None, 3.0, tolerance, DEFAULT_MAX_ITERATIONS)
        .expect("upper edge");
    let lower = nan_boundary(&f, 0.0, Some(f(0.0)), -3.0, tolerance, DEFAULT_MAX_ITERATIONS)
        .expect("lower edge");

    assert!((upper.x_valid - 1.0).abs() <= tolerance);
    assert!((lower.x_valid + 1.0).abs() <= tolerance);

    // values at the edges: acos(1) is ~0 and gets chopped, acos(-1) is ~pi
    let mut edges = vec![upper.f_valid, lower.f_valid];
    chop_in_place(&mut edges, 1e-4);
    assert_eq!(edges[0], 0.0);
    assert!((edges[1] - std::f64::consts::PI).abs() < 1e-4);

    // reuse a scratch buffer for the bracket endpoints
    let scratch = vec![0.0; 1];
    let xs = [upper.x_valid - 1.0, upper.x_nan - 1.0, lower.x_valid + 1.0];
    let out = chop_into(&xs, DEFAULT_THRESHOLD, Some(scratch));
    assert_eq!(out.len(), 3);
    for &x in &out {
        assert!(x.abs() <= tolerance);
    }
}

#[test]
fn test_end_to_end_iteration_limit() {
    let f = |x: f64| (x - 1.0).sqrt();
    let err = nan_boundary(&f, 1e6, None, -1e6, 1e-12, DEFAULT_MAX_ITERATIONS)
        .expect_err("bracket too wide for the iteration budget");

    match err {
        BoundaryError::IterationLimit { x_valid, x_nan } => {
            assert!(x_valid >= 1.0);
            assert!(x_nan < 1.0);
        }
    }
}
