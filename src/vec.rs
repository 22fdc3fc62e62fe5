use std::ops::{Add, Mul};

/// A point (or direction) in camera space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct V3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl V3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns `None` for the zero vector.
    pub fn normalized(self) -> Option<Self> {
        let len = self.norm();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        Some(self * (1.0 / len))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Appends the homogeneous coordinate `w = 1`.
    #[inline]
    pub fn to_homogeneous(self) -> V4 {
        V4::new(self.x, self.y, self.z, 1.0)
    }
}

impl Add for V3 {
    type Output = V3;

    fn add(self, rhs: V3) -> V3 {
        V3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for V3 {
    type Output = V3;

    fn mul(self, k: f64) -> V3 {
        V3::new(self.x * k, self.y * k, self.z * k)
    }
}

/// Homogeneous 4-vector, only used as an intermediate around matrix products.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct V4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl V4 {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Divides every component (including `w` itself) by `w`.
    ///
    /// No check is made for `w == 0`; callers guard the singularity.
    #[inline]
    pub fn div_by_w(self) -> V4 {
        let w = self.w;
        V4::new(self.x / w, self.y / w, self.z / w, self.w / w)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}
