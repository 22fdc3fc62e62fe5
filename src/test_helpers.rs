use crate::im::RGBAIm;
use crate::surface::{Color, Surface};
use crate::vec::V3;

pub const EPS: f64 = 1e-9;

#[track_caller]
pub fn assert_near(a: f64, b: f64) {
    assert!((a - b).abs() <= EPS, "{a} != {b}");
}

#[track_caller]
pub fn assert_v3_near(a: V3, b: V3) {
    assert!(
        (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS && (a.z - b.z).abs() <= EPS,
        "{a:?} != {b:?}"
    );
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Paint(Color),
    Disk { cx: f64, cy: f64, r: f64, color: Color },
}

/// Surface that records calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl Surface for RecordingSurface {
    fn paint(&mut self, color: Color) {
        self.calls.push(DrawCall::Paint(color));
    }

    fn fill_disk(&mut self, cx: f64, cy: f64, r: f64, color: Color) {
        self.calls.push(DrawCall::Disk { cx, cy, r, color });
    }
}

/// `#` for dark pixels (red channel below 128), `.` otherwise.
pub fn im_to_ascii(im: &RGBAIm) -> String {
    let mut out = String::new();
    for y in 0..im.h {
        for x in 0..im.w {
            let v = im.arr[y * im.s + x * 4];
            out.push(if v < 128 { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
