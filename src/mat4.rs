use crate::vec::V4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    // Row-major 4x4 matrix; vectors are columns, multiplied on the right.
    m: [[f64; 4]; 4],
}

impl Mat4 {
    pub const fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub const fn from_rows(m: [[f64; 4]; 4]) -> Self {
        Self { m }
    }

    /// Perspective projection with near plane at 1 and the far plane at infinity.
    ///
    /// ```text
    /// [ S 0  0  0 ]
    /// [ 0 S  0  0 ]
    /// [ 0 0 -1 -1 ]
    /// [ 0 0 -1  0 ]
    /// ```
    ///
    /// where `S = 1 / tan(fov / 2)`. The caller is responsible for keeping `fov` in `(0, pi)`.
    pub fn perspective(fov: f64) -> Self {
        let s = 1.0 / (0.5 * fov).tan();
        Self {
            m: [
                [s, 0.0, 0.0, 0.0],
                [0.0, s, 0.0, 0.0],
                [0.0, 0.0, -1.0, -1.0],
                [0.0, 0.0, -1.0, 0.0],
            ],
        }
    }

    /// Standard 4x4 · 4x1 product.
    #[inline]
    pub fn mul_v4(&self, v: V4) -> V4 {
        let v = v.to_array();
        let mut out = [0.0; 4];
        for (o, row) in out.iter_mut().zip(self.m.iter()) {
            *o = row.iter().zip(v.iter()).map(|(a, b)| a * b).sum();
        }
        V4::from_array(out)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn perspective_rows_at_ninety_degrees() {
        let m = Mat4::perspective(FRAC_PI_2);
        let x = m.mul_v4(V4::new(1.0, 0.0, 0.0, 0.0));
        let y = m.mul_v4(V4::new(0.0, 1.0, 0.0, 0.0));
        assert!((x.x - 1.0).abs() < 1e-12 && x.y == 0.0 && x.z == 0.0 && x.w == 0.0);
        assert!((y.y - 1.0).abs() < 1e-12 && y.x == 0.0);
        assert_eq!(m.mul_v4(V4::new(0.0, 0.0, 1.0, 0.0)), V4::new(0.0, 0.0, -1.0, -1.0));
        assert_eq!(m.mul_v4(V4::new(0.0, 0.0, 0.0, 1.0)), V4::new(0.0, 0.0, -1.0, 0.0));
    }

    #[test]
    fn mul_v4_is_row_times_column() {
        let m = Mat4::from_rows([
            [1.0, 2.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 3.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let out = m.mul_v4(V4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(out, V4::new(3.0, 4.0, 2.0, 1.0));
        assert_eq!(Mat4::identity().mul_v4(out), out);
    }
}
