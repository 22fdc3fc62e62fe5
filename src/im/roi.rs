#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ROI {
    pub l: usize,
    pub t: usize,
    /// Exclusive right bound.
    pub r: usize,
    /// Exclusive bottom bound.
    pub b: usize,
}

impl ROI {
    /// Width of the ROI.
    pub fn w(&self) -> usize {
        self.r.saturating_sub(self.l)
    }

    /// Height of the ROI.
    pub fn h(&self) -> usize {
        self.b.saturating_sub(self.t)
    }

    pub fn is_empty(&self) -> bool {
        self.w() == 0 || self.h() == 0
    }

    /// The pixel-aligned box covering the real-valued span `[x0, x1] x [y0, y1]`,
    /// clamped to an image of `max_w` by `max_h`.
    pub fn covering(x0: f64, y0: f64, x1: f64, y1: f64, max_w: usize, max_h: usize) -> ROI {
        let clamp = |v: f64, max: usize| -> usize {
            if v.is_nan() || v <= 0.0 {
                0
            } else {
                (v as usize).min(max)
            }
        };
        ROI {
            l: clamp(x0.floor(), max_w),
            t: clamp(y0.floor(), max_h),
            r: clamp(x1.ceil(), max_w),
            b: clamp(y1.ceil(), max_h),
        }
    }
}
