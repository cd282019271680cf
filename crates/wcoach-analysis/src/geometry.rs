//! Angle helpers shared by the metrics extractor.

/// Angle at joint `b` formed by points `a`-`b`-`c`, in degrees `[0, 180]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so floating noise on
/// collinear bones cannot produce a domain error. Symmetric in `a` and `c`.
pub fn joint_angle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    let ba = (a.0 - b.0, a.1 - b.1);
    let bc = (c.0 - b.0, c.1 - b.1);

    let norm_ba = (ba.0 * ba.0 + ba.1 * ba.1).sqrt();
    let norm_bc = (bc.0 * bc.0 + bc.1 * bc.1).sqrt();

    let cosine = (ba.0 * bc.0 + ba.1 * bc.1) / (norm_ba * norm_bc + 1e-6);
    cosine.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Angle of the vector `from -> to` measured from the downward vertical
/// reference `(0, 1)`, in degrees.
///
/// With y growing downward, the shoulder-center to hip-center vector points
/// straight down for an upright torso, so 0 degrees means standing tall.
pub fn angle_from_vertical(from: (f64, f64), to: (f64, f64)) -> f64 {
    let v = (to.0 - from.0, to.1 - from.1);
    let norm = (v.0 * v.0 + v.1 * v.1).sqrt();

    // Reference is straight down (0, 1): shoulders sit above hips, so an
    // upright torso yields 0 degrees.
    let cosine = v.1 / (norm + 1e-6);
    cosine.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_angle() {
        let angle = joint_angle((1.0, 0.0), (0.0, 0.0), (0.0, 1.0));
        assert!((angle - 90.0).abs() < 0.1);
    }

    #[test]
    fn test_straight_leg_is_180() {
        let angle = joint_angle((0.0, 0.0), (0.0, 0.5), (0.0, 1.0));
        assert!((angle - 180.0).abs() < 0.1);
    }

    #[test]
    fn test_symmetric_in_outer_points() {
        let a = (0.12, 0.80);
        let b = (0.35, 0.44);
        let c = (0.71, 0.63);
        assert!((joint_angle(a, b, c) - joint_angle(c, b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_angle_always_in_range() {
        let points = [
            ((0.0, 0.0), (0.0, 0.0), (0.0, 0.0)),
            ((1.0, 1.0), (1.0, 1.0), (2.0, 2.0)),
            ((0.3, 0.9), (0.3, 0.1), (0.3, 0.9)),
        ];
        for (a, b, c) in points {
            let angle = joint_angle(a, b, c);
            assert!((0.0..=180.0).contains(&angle), "angle {angle} out of range");
        }
    }

    #[test]
    fn test_upright_torso_is_zero() {
        // Shoulders directly above hips
        let angle = angle_from_vertical((0.5, 0.3), (0.5, 0.6));
        assert!(angle.abs() < 0.1);
    }

    #[test]
    fn test_horizontal_torso_is_ninety() {
        let angle = angle_from_vertical((0.2, 0.5), (0.8, 0.5));
        assert!((angle - 90.0).abs() < 0.1);
    }
}
