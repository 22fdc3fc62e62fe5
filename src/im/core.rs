#[derive(Debug, Clone)]
pub struct Im<T, const N_CH: usize> {
    pub w: usize,
    pub h: usize,
    pub s: usize, // stride in elements (w * N_CH)
    pub arr: Vec<T>,
}

// Constructor
// -----------------------------------------------------------------------------
impl<T: Copy + Default, const N_CH: usize> Im<T, N_CH> {
    pub fn new(w: usize, h: usize) -> Self {
        let s = w * N_CH;
        let arr = vec![T::default(); s * h];
        Self { w, h, s, arr }
    }
}

impl<T: Copy, const N_CH: usize> Im<T, N_CH> {
    /// Sets every pixel to `px`.
    pub fn fill(&mut self, px: [T; N_CH]) {
        for dst in self.arr.chunks_exact_mut(N_CH) {
            dst.copy_from_slice(&px);
        }
    }

    /// Bounds-checked pixel read.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[T; N_CH]> {
        if x >= self.w || y >= self.h {
            return None;
        }
        let i = y * self.s + x * N_CH;
        let mut out = [self.arr[i]; N_CH];
        out.copy_from_slice(&self.arr[i..i + N_CH]);
        Some(out)
    }
}

pub type RGBAIm = Im<u8, 4>;

impl Im<u8, 4> {
    /// Composites an opaque `rgb` over the pixel at `(x, y)` with the given coverage in `[0, 1]`.
    /// Alpha is left at full opacity.
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn blend_rgb(&mut self, x: usize, y: usize, rgb: [u8; 3], coverage: f64) {
        assert!(x < self.w && y < self.h, "pixel ({x}, {y}) out of bounds");
        let i = y * self.s + x * 4;
        let px = &mut self.arr[i..i + 4];
        if coverage >= 1.0 {
            px[..3].copy_from_slice(&rgb);
        } else {
            let c = coverage.max(0.0);
            for ch in 0..3 {
                let old = px[ch] as f64;
                let new = rgb[ch] as f64;
                px[ch] = (old + (new - old) * c).round().clamp(0.0, 255.0) as u8;
            }
        }
        px[3] = 255;
    }
}
