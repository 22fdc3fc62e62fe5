use crate::mat3::Mat3;
use crate::vec::V3;

/// The 26 unit directions toward the non-origin points of `{-1, 0, 1}^3`, ordered by x, then y,
/// then z.
pub fn patch_directions() -> Vec<V3> {
    let mut dirs = Vec::with_capacity(26);
    for i in -1..=1 {
        for j in -1..=1 {
            for k in -1..=1 {
                let v = V3::new(i as f64, j as f64, k as f64);
                if let Some(n) = v.normalized() {
                    dirs.push(n);
                }
            }
        }
    }
    dirs
}

/// Rotates `dirs` by `theta` about the vertical axis, scales by `radius`, then translates by
/// `offset` into camera space.
pub fn frame_points(dirs: &[V3], theta: f64, radius: f64, offset: V3) -> Vec<V3> {
    let rot = Mat3::rotation_y(theta);
    dirs.iter()
        .map(|&d| rot.transform(d) * radius + offset)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use crate::ring::Ring;
    use crate::surface::Color;
    use crate::test_helpers::{assert_near, assert_v3_near};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn twenty_six_unit_directions() {
        let dirs = patch_directions();
        assert_eq!(dirs.len(), 26);
        for d in &dirs {
            assert_near(d.norm(), 1.0);
        }
        assert_v3_near(dirs[4], V3::new(-1.0, 0.0, 0.0));
        assert!(!dirs.iter().any(|d| *d == V3::default()));
    }

    #[test]
    fn frame_points_rotate_then_scale_then_translate() {
        let dirs = [V3::new(1.0, 0.0, 0.0)];
        let pts = frame_points(&dirs, FRAC_PI_2, 3.0, V3::new(0.0, 0.0, -10.0));
        assert_v3_near(pts[0], V3::new(0.0, 0.0, -13.0));
    }

    #[test]
    fn unrotated_sphere_sorts_back_pole_first_and_front_pole_last() {
        let dirs = patch_directions();
        let pts = frame_points(&dirs, 0.0, 3.0, V3::new(0.0, 0.0, -10.0));
        assert_eq!(pts.len(), 26);

        let r = Renderer::new(FRAC_PI_4, Ring::default(), Color::BLACK, Color::WHITE).unwrap();
        let (sorted, skipped) = r.visible(&pts);
        assert_eq!(skipped, 0);
        assert_eq!(sorted.len(), 26);

        let back = r.projector.project_point(0, V3::new(0.0, 0.0, -13.0)).unwrap();
        let front = r.projector.project_point(0, V3::new(0.0, 0.0, -7.0)).unwrap();
        let first = sorted[0];
        let last = sorted[25];
        assert_near(first.x, back.x);
        assert_near(first.y, back.y);
        assert_near(first.z, back.z);
        assert_near(last.x, front.x);
        assert_near(last.y, front.y);
        assert_near(last.z, front.z);
        assert!(sorted.windows(2).all(|w| w[0].z >= w[1].z));
    }
}
