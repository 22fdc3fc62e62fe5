use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::surface::{Color, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linecap {
    Butt,
    Square,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linejoin {
    Miter,
    Round,
    Bevel,
}

impl Linecap {
    pub fn as_str(self) -> &'static str {
        match self {
            Linecap::Butt => "butt",
            Linecap::Square => "square",
            Linecap::Round => "round",
        }
    }
}

impl Linejoin {
    pub fn as_str(self) -> &'static str {
        match self {
            Linejoin::Miter => "miter",
            Linejoin::Round => "round",
            Linejoin::Bevel => "bevel",
        }
    }
}

impl FromStr for Linecap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "butt" => Ok(Linecap::Butt),
            "square" => Ok(Linecap::Square),
            "round" => Ok(Linecap::Round),
            _ => Err(Error::Svg(format!("unknown linecap {s:?}"))),
        }
    }
}

impl FromStr for Linejoin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "miter" => Ok(Linejoin::Miter),
            "round" => Ok(Linejoin::Round),
            "bevel" => Ok(Linejoin::Bevel),
            _ => Err(Error::Svg(format!("unknown linejoin {s:?}"))),
        }
    }
}

fn rgb_attr(c: Color) -> String {
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

fn check_opacity(name: &str, v: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&v) {
        return Err(Error::Svg(format!("{name} must lie in [0, 1], got {v}")));
    }
    Ok(v)
}

fn check_measure(name: &str, v: f64) -> Result<f64> {
    if !(v.is_finite() && v >= 0.0) {
        return Err(Error::Svg(format!("{name} must be a non-negative number, got {v}")));
    }
    Ok(v)
}

/// Presentation attributes of one shape. Attributes are written in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    attrs: BTreeMap<&'static str, String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, name: &'static str, value: String) -> Self {
        self.attrs.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn fill(self, c: Color) -> Self {
        self.set("fill", rgb_attr(c))
    }

    /// Fill color plus `fill-opacity = alpha / 255`.
    pub fn fill_rgba(self, c: Color, alpha: u8) -> Self {
        self.fill(c).set("fill-opacity", (alpha as f64 / 255.0).to_string())
    }

    pub fn fill_opacity(self, opacity: f64) -> Result<Self> {
        let opacity = check_opacity("fill-opacity", opacity)?;
        Ok(self.set("fill-opacity", opacity.to_string()))
    }

    pub fn stroke(self, c: Color) -> Self {
        self.set("stroke", rgb_attr(c))
    }

    pub fn stroke_rgba(self, c: Color, alpha: u8) -> Self {
        self.stroke(c).set("stroke-opacity", (alpha as f64 / 255.0).to_string())
    }

    pub fn stroke_opacity(self, opacity: f64) -> Result<Self> {
        let opacity = check_opacity("stroke-opacity", opacity)?;
        Ok(self.set("stroke-opacity", opacity.to_string()))
    }

    pub fn stroke_width(self, width: f64) -> Result<Self> {
        let width = check_measure("stroke-width", width)?;
        Ok(self.set("stroke-width", width.to_string()))
    }

    pub fn stroke_linecap(self, cap: Linecap) -> Self {
        self.set("stroke-linecap", cap.as_str().to_string())
    }

    pub fn stroke_linejoin(self, join: Linejoin) -> Self {
        self.set("stroke-linejoin", join.as_str().to_string())
    }

    pub fn stroke_dasharray(self, dashes: &[f64]) -> Result<Self> {
        let mut value = String::new();
        for (i, &d) in dashes.iter().enumerate() {
            check_measure("stroke-dasharray", d)?;
            if i > 0 {
                value.push(',');
            }
            let _ = write!(value, "{d}");
        }
        Ok(self.set("stroke-dasharray", value))
    }

    fn write_attrs(&self, out: &mut String) {
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{value}\"");
        }
    }
}

/// Path data (`d` attribute) built from absolute commands.
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    d: String,
}

impl PathData {
    pub fn move_to(x: f64, y: f64) -> Self {
        Self { d: format!("M{x} {y}") }
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.d, " L{x} {y}");
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.d, " H{x}");
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.d, " V{y}");
        self
    }

    pub fn cubic_to(mut self, c0: (f64, f64), c1: (f64, f64), to: (f64, f64)) -> Self {
        let _ = write!(
            self.d,
            " C{} {} {} {} {} {}",
            c0.0, c0.1, c1.0, c1.1, to.0, to.1
        );
        self
    }

    pub fn quad_to(mut self, c: (f64, f64), to: (f64, f64)) -> Self {
        let _ = write!(self.d, " Q{} {} {} {}", c.0, c.1, to.0, to.1);
        self
    }

    pub fn close(mut self) -> Self {
        self.d.push_str(" Z");
        self
    }

    pub fn as_str(&self) -> &str {
        &self.d
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    Path(PathData),
}

impl Shape {
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Ok(Shape::Rect {
            x,
            y,
            width: check_measure("width", width)?,
            height: check_measure("height", height)?,
        })
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Result<Self> {
        Ok(Shape::Circle {
            cx,
            cy,
            r: check_measure("r", r)?,
        })
    }

    fn write(&self, style: &Style, out: &mut String) {
        let _ = match self {
            Shape::Rect { x, y, width, height } => {
                write!(out, "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\"")
            }
            Shape::Circle { cx, cy, r } => write!(out, "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\""),
            Shape::Ellipse { cx, cy, rx, ry } => {
                write!(out, "<ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{rx}\" ry=\"{ry}\"")
            }
            Shape::Path(p) => write!(out, "<path d=\"{}\"", p.as_str()),
        };
        style.write_attrs(out);
        out.push_str("/>");
    }
}

/// Retained-mode vector surface. Shapes are kept in draw order and serialized on
/// [`SvgSurface::write`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    view_box: Option<[f64; 4]>,
    stretch: bool,
    elements: Vec<(Shape, Style)>,
}

impl SvgSurface {
    /// A surface in pixel user units: the view box, if any, is set separately.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            view_box: None,
            stretch: false,
            elements: Vec::new(),
        }
    }

    /// A surface whose user space is the unit square stretched over `width x height`, matching
    /// the normalized coordinates of [`Surface`].
    pub fn normalized(width: u32, height: u32) -> Self {
        Self {
            view_box: Some([0.0, 0.0, 1.0, 1.0]),
            stretch: true,
            ..Self::new(width, height)
        }
    }

    pub fn set_view_box(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        check_measure("view box width", w)?;
        check_measure("view box height", h)?;
        self.view_box = Some([x, y, w, h]);
        Ok(())
    }

    pub fn view_box(&self) -> [f64; 4] {
        self.view_box
            .unwrap_or([0.0, 0.0, self.width as f64, self.height as f64])
    }

    pub fn push(&mut self, shape: Shape, style: Style) -> &mut Self {
        self.elements.push((shape, style));
        self
    }

    pub fn elements(&self) -> &[(Shape, Style)] {
        &self.elements
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::from("<svg version=\"1.1\"\n");
        if let Some([x, y, w, h]) = self.view_box {
            let _ = writeln!(out, "     viewBox=\"{x} {y} {w} {h}\"");
        }
        if self.stretch {
            out.push_str("     preserveAspectRatio=\"none\"\n");
        }
        let _ = write!(
            out,
            "     baseProfile=\"full\"\n     width=\"{}\" height=\"{}\"\n     xmlns=\"http://www.w3.org/2000/svg\">\n\n",
            self.width, self.height
        );
        for (shape, style) in &self.elements {
            out.push_str("  ");
            shape.write(style, &mut out);
            out.push_str("\n\n");
        }
        out.push_str("</svg>\n");
        out
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_svg_string())?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    /// Drops every shape drawn so far and covers the view box with `color`.
    fn paint(&mut self, color: Color) {
        let [x, y, width, height] = self.view_box();
        self.elements.clear();
        self.push(Shape::Rect { x, y, width, height }, Style::new().fill(color));
    }

    fn fill_disk(&mut self, cx: f64, cy: f64, r: f64, color: Color) {
        if !(r > 0.0 && r.is_finite() && cx.is_finite() && cy.is_finite()) {
            return;
        }
        let [vx, vy, vw, vh] = self.view_box();
        let (cx, cy) = (vx + cx * vw, vy + cy * vh);
        let shape = if vw == vh {
            Shape::Circle { cx, cy, r: r * vw }
        } else {
            Shape::Ellipse {
                cx,
                cy,
                rx: r * vw,
                ry: r * vh,
            }
        };
        self.push(shape, Style::new().fill(color));
    }
}
