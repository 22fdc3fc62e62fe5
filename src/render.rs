use crate::error::Result;
use crate::project::{ProjectedPoint, Projector, sort_by_depth};
use crate::ring::{Ring, draw_ring};
use crate::surface::{Color, Surface};
use crate::vec::V3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub skipped: usize,
}

impl std::ops::AddAssign for RenderStats {
    fn add_assign(&mut self, rhs: Self) {
        self.drawn += rhs.drawn;
        self.skipped += rhs.skipped;
    }
}

/// Projects camera-space points and paints them as rings, farthest first.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub projector: Projector,
    pub ring: Ring,
    pub fg: Color,
    pub bg: Color,
}

impl Renderer {
    pub fn new(fov: f64, ring: Ring, fg: Color, bg: Color) -> Result<Self> {
        Ok(Self {
            projector: Projector::new(fov)?,
            ring,
            fg,
            bg,
        })
    }

    /// Projected points in drawing order (farthest first), with unprojectable points removed.
    ///
    /// A point is dropped when it is non-finite, when its clip-space `w <= 0` (at or behind the
    /// camera), or when the perspective divide is non-finite. The second value is the drop count.
    pub fn visible(&self, points: &[V3]) -> (Vec<ProjectedPoint>, usize) {
        let mut out = Vec::with_capacity(points.len());
        let mut skipped = 0;
        for (i, &p) in points.iter().enumerate() {
            if !p.is_finite() {
                tracing::debug!(index = i, "skipping non-finite point");
                skipped += 1;
                continue;
            }
            let clip = self.projector.to_clip(p);
            if clip.w <= 0.0 {
                tracing::debug!(index = i, z = p.z, "skipping point at or behind the camera");
                skipped += 1;
                continue;
            }
            match self.projector.project_point(i, p) {
                Ok(pp) => out.push(pp),
                Err(e) => {
                    tracing::debug!(index = i, "skipping point: {e}");
                    skipped += 1;
                }
            }
        }
        sort_by_depth(&mut out);
        (out, skipped)
    }

    /// Draws every visible point onto `surface`. Points in front of the near plane (depth <= 0)
    /// have no drawable radius and are skipped.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, points: &[V3]) -> RenderStats {
        let (sorted, mut skipped) = self.visible(points);
        let mut drawn = 0;
        for p in &sorted {
            if draw_ring(surface, p, &self.ring, self.fg, self.bg) {
                tracing::trace!(x = p.x, y = p.y, depth = p.z, "ring");
                drawn += 1;
            } else {
                tracing::debug!(depth = p.z, "skipping point inside the near plane");
                skipped += 1;
            }
        }
        RenderStats { drawn, skipped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{DrawCall, RecordingSurface};
    use std::f64::consts::FRAC_PI_4;

    fn renderer() -> Renderer {
        Renderer::new(FRAC_PI_4, Ring::default(), Color::BLACK, Color::WHITE).unwrap()
    }

    fn outer_radii(s: &RecordingSurface) -> Vec<f64> {
        s.calls
            .iter()
            .step_by(2)
            .map(|c| match c {
                DrawCall::Disk { r, .. } => *r,
                DrawCall::Paint(_) => panic!("unexpected paint"),
            })
            .collect()
    }

    #[test]
    fn draws_farthest_first() {
        let pts = [
            V3::new(0.0, 0.0, -5.0),
            V3::new(1.0, 0.0, -20.0),
            V3::new(-1.0, 0.0, -10.0),
        ];
        let mut s = RecordingSurface::default();
        let stats = renderer().render(&mut s, &pts);
        assert_eq!(stats, RenderStats { drawn: 3, skipped: 0 });
        assert_eq!(s.calls.len(), 6);
        let radii = outer_radii(&s);
        assert!(radii.windows(2).all(|w| w[0] < w[1]), "{radii:?}");
    }

    #[test]
    fn culls_points_behind_or_too_near_the_camera() {
        let pts = [
            V3::new(0.0, 0.0, 0.0),       // w == 0
            V3::new(0.0, 0.0, 4.0),       // behind
            V3::new(0.0, 0.0, -0.5),      // inside the near plane
            V3::new(f64::NAN, 0.0, -3.0), // garbage
            V3::new(1e308, 0.0, -1e-300), // x / w overflows
            V3::new(0.0, 0.0, -3.0),
        ];
        let mut s = RecordingSurface::default();
        let stats = renderer().render(&mut s, &pts);
        assert_eq!(stats, RenderStats { drawn: 1, skipped: 5 });
        assert_eq!(s.calls.len(), 2);
    }

    #[test]
    fn scaled_scene_keeps_centers_but_not_radii() {
        let pts = [V3::new(1.0, 0.5, -6.0), V3::new(-2.0, 1.0, -9.0)];
        let scaled: Vec<V3> = pts.iter().map(|&p| p * 2.0).collect();
        let mut a = RecordingSurface::default();
        let mut b = RecordingSurface::default();
        renderer().render(&mut a, &pts);
        renderer().render(&mut b, &scaled);
        assert_eq!(a.calls.len(), b.calls.len());
        for (ca, cb) in a.calls.iter().zip(b.calls.iter()) {
            let (DrawCall::Disk { cx: ax, cy: ay, r: ar, .. }, DrawCall::Disk { cx: bx, cy: by, r: br, .. }) =
                (*ca, *cb)
            else {
                panic!("expected disks");
            };
            assert!((ax - bx).abs() < 1e-12 && (ay - by).abs() < 1e-12);
            assert!(br < ar, "farther copy should draw smaller rings");
        }
    }
}
