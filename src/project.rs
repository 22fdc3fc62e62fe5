use crate::error::{Error, Result};
use crate::mat4::Mat4;
use crate::vec::{V3, V4};

/// A point after the perspective divide.
///
/// `x` and `y` are nominally in `[-1, 1]`; `z` is the depth used both for sorting and for
/// scaling ring radii. `w` is always 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl ProjectedPoint {
    fn from_v4(v: V4) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: v.w,
        }
    }

    /// Remaps `x, y` from `[-1, 1]` to normalized surface coordinates `[0, 1]`.
    #[inline]
    pub fn surface_xy(&self) -> (f64, f64) {
        ((self.x + 1.0) / 2.0, (self.y + 1.0) / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    mat: Mat4,
}

impl Projector {
    /// Fails with [`Error::InvalidConfig`] unless `0 < fov < pi`.
    pub fn new(fov: f64) -> Result<Self> {
        if !fov.is_finite() || fov <= 0.0 || fov >= std::f64::consts::PI {
            return Err(Error::InvalidConfig(format!(
                "field_of_view must lie in (0, pi), got {fov}"
            )));
        }
        Ok(Self {
            mat: Mat4::perspective(fov),
        })
    }

    /// Homogeneous clip-space coordinates, before the perspective divide.
    #[inline]
    pub fn to_clip(&self, p: V3) -> V4 {
        self.mat.mul_v4(p.to_homogeneous())
    }

    /// Projects one point. `index` is only used to label errors.
    pub fn project_point(&self, index: usize, p: V3) -> Result<ProjectedPoint> {
        let clip = self.to_clip(p);
        if clip.w == 0.0 {
            return Err(Error::Singular { index });
        }
        let ndc = clip.div_by_w();
        if !ndc.is_finite() {
            return Err(Error::NonFinite { index });
        }
        Ok(ProjectedPoint::from_v4(ndc))
    }

    /// Projects every point, preserving input order. Fails on the first point that hits the
    /// `w = 0` singularity or produces a non-finite coordinate.
    pub fn project(&self, points: &[V3]) -> Result<Vec<ProjectedPoint>> {
        points
            .iter()
            .enumerate()
            .map(|(i, &p)| self.project_point(i, p))
            .collect()
    }
}

/// Orders points farthest first (descending `z`) for painter's-algorithm drawing.
///
/// The sort is stable so equal depths keep their input order.
pub fn sort_by_depth(points: &mut [ProjectedPoint]) {
    points.sort_by(|a, b| b.z.total_cmp(&a.z));
}
