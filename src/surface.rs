use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Color::rgb(c[0], c[1], c[2])
    }
}

/// A 2D drawing target addressed in normalized `[0, 1] x [0, 1]` coordinates.
///
/// Implementations map normalized coordinates to their own pixel grid; callers never scale by
/// width or height themselves.
pub trait Surface {
    /// Fills the whole surface with `color`.
    fn paint(&mut self, color: Color);

    /// Fills a disk of normalized radius `r` centered at `(cx, cy)`.
    fn fill_disk(&mut self, cx: f64, cy: f64, r: f64, color: Color);
}
