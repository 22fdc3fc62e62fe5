use std::path::{Path, PathBuf};

use crate::desc::{OutputFormat, SceneDesc};
use crate::error::{Error, Result};
use crate::im::Canvas;
use crate::render::{RenderStats, Renderer};
use crate::sphere::{frame_points, patch_directions};
use crate::surface::Surface;
use crate::svg::SvgSurface;
use crate::vec::V3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimSummary {
    pub frames: usize,
    pub points_drawn: usize,
    pub points_skipped: usize,
}

/// `out_dir/NNN.<ext>`, zero-padded to three digits.
pub fn frame_path(out_dir: &Path, i: usize, format: OutputFormat) -> PathBuf {
    out_dir.join(format!("{i:03}.{}", format.extension()))
}

/// Per-run state shared by every frame. Nothing in here is mutated between frames.
pub struct Animation {
    desc: SceneDesc,
    renderer: Renderer,
    dirs: Vec<V3>,
}

impl Animation {
    /// Validates `desc`; fails before any frame is rendered if it cannot be drawn.
    pub fn new(desc: SceneDesc) -> Result<Self> {
        desc.validate()?;
        let renderer = Renderer::new(desc.field_of_view, desc.ring(), desc.foreground, desc.background)?;
        Ok(Self {
            desc,
            renderer,
            dirs: patch_directions(),
        })
    }

    /// Camera-space points for frame `i`.
    pub fn points(&self, i: usize) -> Vec<V3> {
        frame_points(
            &self.dirs,
            self.desc.frame_angle(i),
            self.desc.sphere_radius,
            self.desc.camera_offset(),
        )
    }

    /// Clears `surface` to the background and draws frame `i` into it.
    pub fn draw_frame<S: Surface + ?Sized>(&self, surface: &mut S, i: usize) -> RenderStats {
        surface.paint(self.desc.background);
        self.renderer.render(surface, &self.points(i))
    }

    /// Renders frame `i` onto a freshly allocated canvas.
    pub fn render_frame(&self, i: usize) -> (Canvas, RenderStats) {
        let mut canvas = Canvas::new(self.desc.width, self.desc.height, self.desc.aa_samples);
        let stats = self.draw_frame(&mut canvas, i);
        (canvas, stats)
    }

    /// Renders frame `i` as vector shapes in the unit view box.
    pub fn render_svg_frame(&self, i: usize) -> (SvgSurface, RenderStats) {
        let mut svg = SvgSurface::normalized(self.desc.width as u32, self.desc.height as u32);
        let stats = self.draw_frame(&mut svg, i);
        (svg, stats)
    }

    fn write_frame(&self, i: usize, path: &Path) -> Result<RenderStats> {
        match self.desc.format {
            OutputFormat::Svg => {
                let (svg, stats) = self.render_svg_frame(i);
                svg.write(path)?;
                Ok(stats)
            }
            #[cfg(feature = "im-io")]
            OutputFormat::Png => {
                let (canvas, stats) = self.render_frame(i);
                canvas.im().save_png(path)?;
                Ok(stats)
            }
            #[cfg(not(feature = "im-io"))]
            OutputFormat::Png => Err(Error::InvalidConfig(
                "png output requires the im-io feature".to_string(),
            )),
        }
    }

    /// Renders and writes every frame in order. The first write failure aborts the run.
    pub fn run(&self) -> Result<AnimSummary> {
        let out_dir = &self.desc.out_dir;
        std::fs::create_dir_all(out_dir)?;

        tracing::info!(
            frames = self.desc.n_frames,
            width = self.desc.width,
            height = self.desc.height,
            format = self.desc.format.extension(),
            out_dir = %out_dir.display(),
            "rendering"
        );

        let mut totals = RenderStats::default();
        for i in 0..self.desc.n_frames {
            let path = frame_path(out_dir, i, self.desc.format);
            let stats = self.write_frame(i, &path).map_err(|e| Error::WriteFrame {
                path: path.clone(),
                source: Box::new(e),
            })?;
            tracing::debug!(frame = i, drawn = stats.drawn, skipped = stats.skipped, path = %path.display(), "wrote frame");
            totals += stats;
        }

        let summary = AnimSummary {
            frames: self.desc.n_frames,
            points_drawn: totals.drawn,
            points_skipped: totals.skipped,
        };
        tracing::debug!(?summary, "all frames written");
        Ok(summary)
    }
}
