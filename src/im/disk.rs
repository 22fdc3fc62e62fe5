use super::core::RGBAIm;
use super::roi::ROI;

/// Fills an axis-aligned ellipse (pixel units, centered at `(cx, cy)`) with `rgb`.
///
/// Coverage is estimated with `samples x samples` sub-pixel samples and blended over the
/// existing pixel. `samples == 1` tests the pixel center only, giving hard edges.
/// Degenerate radii (non-positive or non-finite) draw nothing.
pub fn fill_ellipse(
    im: &mut RGBAIm,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    rgb: [u8; 3],
    samples: usize,
) {
    if !(rx > 0.0 && ry > 0.0 && rx.is_finite() && ry.is_finite()) {
        return;
    }
    if !(cx.is_finite() && cy.is_finite()) {
        return;
    }
    let samples = samples.max(1);

    let roi = ROI::covering(cx - rx, cy - ry, cx + rx, cy + ry, im.w, im.h);
    if roi.is_empty() {
        return;
    }

    let inv_rx2 = 1.0 / (rx * rx);
    let inv_ry2 = 1.0 / (ry * ry);
    let inside = |sx: f64, sy: f64| -> bool {
        let dx = sx - cx;
        let dy = sy - cy;
        dx * dx * inv_rx2 + dy * dy * inv_ry2 <= 1.0
    };

    let step = 1.0 / samples as f64;
    let n_samples = (samples * samples) as f64;

    for y in roi.t..roi.b {
        for x in roi.l..roi.r {
            let mut hits = 0_usize;
            for j in 0..samples {
                let sy = y as f64 + (j as f64 + 0.5) * step;
                for i in 0..samples {
                    let sx = x as f64 + (i as f64 + 0.5) * step;
                    if inside(sx, sy) {
                        hits += 1;
                    }
                }
            }
            if hits > 0 {
                im.blend_rgb(x, y, rgb, hits as f64 / n_samples);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::im_to_ascii;

    fn white_im(w: usize, h: usize) -> RGBAIm {
        let mut im = RGBAIm::new(w, h);
        im.fill([255, 255, 255, 255]);
        im
    }

    #[test]
    fn hard_edged_disk_covers_pixel_centers() {
        let mut im = white_im(10, 10);
        fill_ellipse(&mut im, 5.0, 5.0, 3.0, 3.0, [0, 0, 0], 1);
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
        assert_eq!(im_to_ascii(&im), expected);
    }

    #[test]
    fn supersampled_edges_are_partial() {
        let mut im = white_im(16, 16);
        fill_ellipse(&mut im, 8.0, 8.0, 5.0, 5.0, [0, 0, 0], 4);
        assert_eq!(im.pixel(8, 8), Some([0, 0, 0, 255]));
        assert_eq!(im.pixel(0, 0), Some([255, 255, 255, 255]));
        // Pixel straddling the rim on the diagonal.
        let [r, _, _, a] = im.pixel(11, 11).unwrap();
        assert_eq!(a, 255);
        assert!(r > 0 && r < 255, "expected partial coverage, got {r}");
    }

    #[test]
    fn degenerate_radius_draws_nothing() {
        let mut im = white_im(4, 4);
        let before = im.arr.clone();
        fill_ellipse(&mut im, 2.0, 2.0, 0.0, 1.0, [0, 0, 0], 1);
        fill_ellipse(&mut im, 2.0, 2.0, -1.0, -1.0, [0, 0, 0], 1);
        fill_ellipse(&mut im, 2.0, 2.0, f64::NAN, 1.0, [0, 0, 0], 1);
        fill_ellipse(&mut im, 2.0, 2.0, f64::INFINITY, 1.0, [0, 0, 0], 1);
        assert_eq!(im.arr, before);
    }

    #[test]
    fn offscreen_disk_is_clipped() {
        let mut im = white_im(8, 8);
        fill_ellipse(&mut im, -1.0, 4.0, 2.0, 2.0, [0, 0, 0], 1);
        assert_eq!(im.pixel(0, 4), Some([0, 0, 0, 255]));
        assert_eq!(im.pixel(2, 4), Some([255, 255, 255, 255]));
    }
}
