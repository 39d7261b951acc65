/// Euclidean distance between two points given in polar form, via the law of cosines.
///
/// The radicand can dip just below zero from cancellation when both points sit on the
/// same ray, so it is clamped before the square root.
pub fn polar_distance(r_a: f64, theta_a: f64, r_b: f64, theta_b: f64) -> f64 {
    let squared = r_a * r_a + r_b * r_b - 2.0 * r_a * r_b * (theta_a - theta_b).cos();
    squared.max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn points_on_the_same_ray() {
        assert_eq!(polar_distance(1000.0, 0.0, 2000.0, 0.0), 1000.0);
        assert_eq!(polar_distance(100_000.0, 1.2, 100_000.0, 1.2), 0.0);
    }

    #[test]
    fn opposite_points_through_origin() {
        let d = polar_distance(3.0, PI / 2.0, 4.0, -PI / 2.0);
        assert!((d - 7.0).abs() < 1e-9);
    }

    #[test]
    fn right_angle_triangle() {
        let d = polar_distance(3.0, 0.0, 4.0, PI / 2.0);
        assert!((d - 5.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            r_a in 0.0f64..1e6, t_a in -PI..PI,
            r_b in 0.0f64..1e6, t_b in -PI..PI,
        ) {
            let ab = polar_distance(r_a, t_a, r_b, t_b);
            let ba = polar_distance(r_b, t_b, r_a, t_a);
            prop_assert_eq!(ab, ba);
            prop_assert!(ab >= 0.0);
        }

        #[test]
        fn distance_to_self_is_zero(r in 0.0f64..1e6, t in -PI..PI) {
            prop_assert_eq!(polar_distance(r, t, r, t), 0.0);
        }
    }
}
