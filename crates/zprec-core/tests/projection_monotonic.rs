// crates/zprec-core/tests/projection_monotonic.rs

use zprec_core::projection::{linear_eye_depth, normalize_eye_depth, ProjectionParams};
use zprec_core::sampling::linspace;

#[test]
fn planes_map_exactly() {
    assert_eq!(linear_eye_depth(1.0, 0.1, 100.0), 0.1);
    assert_eq!(linear_eye_depth(0.0, 0.1, 100.0), 100.0);

    for (near, far) in [(0.1, 50.0), (0.1, 1000.0), (0.5, 2.0), (1.0, 1e6)] {
        let e_near = linear_eye_depth(1.0, near, far);
        let e_far = linear_eye_depth(0.0, near, far);
        assert!((e_near - near).abs() <= near * 1e-12, "near={near} far={far} got {e_near}");
        assert!((e_far - far).abs() <= far * 1e-12, "near={near} far={far} got {e_far}");
    }
}

#[test]
fn strictly_decreasing_in_ndc() {
    for far in [50.0, 100.0, 200.0, 1000.0] {
        let p = ProjectionParams::new(0.1, far).unwrap();
        let ndc = linspace(0.0, 1.0, 1000);
        for w in ndc.windows(2) {
            let a = p.eye_depth(w[0]);
            let b = p.eye_depth(w[1]);
            assert!(b < a, "far={far}: eye({}) = {b} not < eye({}) = {a}", w[1], w[0]);
        }
    }
}

#[test]
fn normalize_divides_by_far() {
    let p = ProjectionParams::new(0.1, 200.0).unwrap();
    assert_eq!(p.normalize(200.0), 1.0);
    assert_eq!(normalize_eye_depth(6.25, 200.0), 0.03125);
    // Only a rescale: the near plane does not normalize to 1 - ndc.
    assert_eq!(p.normalize(p.eye_depth(1.0)), 0.1 / 200.0);
}

#[test]
fn rejects_invalid_planes() {
    assert!(ProjectionParams::new(0.0, 10.0).is_err());
    assert!(ProjectionParams::new(-1.0, 10.0).is_err());
    assert!(ProjectionParams::new(10.0, 10.0).is_err());
    assert!(ProjectionParams::new(10.0, 1.0).is_err());
    assert!(ProjectionParams::new(0.1, f64::INFINITY).is_err());
    assert!(ProjectionParams::try_from((0.1, 100.0)).is_ok());
}
