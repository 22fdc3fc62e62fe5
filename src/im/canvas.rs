use super::core::RGBAIm;
use super::disk::fill_ellipse;
use crate::surface::{Color, Surface};

/// Pixel-backed [`Surface`]. Normalized x is scaled by width and y by height, so on a
/// non-square canvas a disk becomes an axis-aligned ellipse.
#[derive(Debug, Clone)]
pub struct Canvas {
    im: RGBAIm,
    aa_samples: usize,
}

impl Canvas {
    pub fn new(w: usize, h: usize, aa_samples: usize) -> Self {
        Self {
            im: RGBAIm::new(w, h),
            aa_samples: aa_samples.max(1),
        }
    }

    pub fn im(&self) -> &RGBAIm {
        &self.im
    }

    pub fn into_im(self) -> RGBAIm {
        self.im
    }
}

impl Surface for Canvas {
    fn paint(&mut self, color: Color) {
        self.im.fill([color.r, color.g, color.b, 255]);
    }

    fn fill_disk(&mut self, cx: f64, cy: f64, r: f64, color: Color) {
        let w = self.im.w as f64;
        let h = self.im.h as f64;
        fill_ellipse(
            &mut self.im,
            cx * w,
            cy * h,
            r * w,
            r * h,
            [color.r, color.g, color.b],
            self.aa_samples,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::im_to_ascii;

    #[test]
    fn paint_clears_to_opaque_color() {
        let mut canvas = Canvas::new(2, 2, 1);
        canvas.paint(Color::rgb(1, 2, 3));
        assert!(canvas.im().arr.chunks_exact(4).all(|px| px == [1, 2, 3, 255]));
    }

    #[test]
    fn disk_scales_with_surface_dimensions() {
        let mut canvas = Canvas::new(10, 10, 1);
        canvas.paint(Color::WHITE);
        canvas.fill_disk(0.5, 0.5, 0.3, Color::BLACK);
        let expected = "\
..........
..........
...####...
..######..
..######..
..######..
..######..
...####...
..........
..........
";
        assert_eq!(im_to_ascii(canvas.im()), expected);
    }

    #[test]
    fn wide_canvas_stretches_disk_horizontally() {
        let mut canvas = Canvas::new(20, 10, 1);
        canvas.paint(Color::WHITE);
        canvas.fill_disk(0.5, 0.5, 0.3, Color::BLACK);
        let im = canvas.into_im();
        let dark = |x: usize, y: usize| im.pixel(x, y).unwrap()[0] == 0;
        // Semi-axes are 6 px across and 3 px down.
        assert!(dark(4, 5) && dark(15, 5));
        assert!(!dark(3, 5) && !dark(16, 5));
        assert!(!dark(10, 1) && !dark(10, 8));
    }
}
