use crate::project::ProjectedPoint;
use crate::surface::{Color, Surface};

/// Ring size parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Outer radius of a ring at depth 1, in normalized surface units.
    pub near_radius: f64,
    /// Fraction of the outer radius taken up by the ring band, in `[0, 1]`.
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingRadii {
    pub outer: f64,
    pub inner: f64,
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            near_radius: 0.03,
            thickness: 0.3,
        }
    }
}

impl Ring {
    /// Outer radius `near_radius / depth` and inner radius `outer * (1 - thickness)`.
    ///
    /// Returns `None` when the outer radius is not a finite positive number, which happens for
    /// `depth <= 0` (points closer than the near plane).
    pub fn radii(&self, depth: f64) -> Option<RingRadii> {
        let outer = self.near_radius / depth;
        if !outer.is_finite() || outer <= 0.0 {
            return None;
        }
        Some(RingRadii {
            outer,
            inner: outer * (1.0 - self.thickness),
        })
    }
}

/// Draws a ring as two overlapping fills: a `fg` disk of radius `outer`, then a `bg` disk of
/// radius `inner` on top. Anything previously drawn inside the inner disk is covered by `bg`.
pub fn draw_annulus<S: Surface + ?Sized>(
    surface: &mut S,
    cx: f64,
    cy: f64,
    radii: RingRadii,
    fg: Color,
    bg: Color,
) {
    surface.fill_disk(cx, cy, radii.outer, fg);
    surface.fill_disk(cx, cy, radii.inner, bg);
}

/// Draws one projected point as a ring. Returns `false` (drawing nothing) when the point's depth
/// does not give a drawable radius.
pub fn draw_ring<S: Surface + ?Sized>(
    surface: &mut S,
    p: &ProjectedPoint,
    ring: &Ring,
    fg: Color,
    bg: Color,
) -> bool {
    let Some(radii) = ring.radii(p.z) else {
        return false;
    };
    let (cx, cy) = p.surface_xy();
    draw_annulus(surface, cx, cy, radii, fg, bg);
    true
}
