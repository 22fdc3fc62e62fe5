use serde::Deserialize;
use std::f64::consts::{FRAC_PI_4, PI};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ring::Ring;
use crate::surface::Color;
use crate::vec::V3;

/// File format of the written frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

/// Everything needed to render an animation. Every field has a default, so `{}` parses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneDesc {
    pub width: usize,
    pub height: usize,
    pub n_frames: usize,
    /// Radians.
    pub field_of_view: f64,
    pub near_radius: f64,
    pub thickness: f64,
    pub sphere_radius: f64,
    pub camera_offset: [f64; 3],
    pub foreground: Color,
    pub background: Color,
    /// Per-axis sub-pixel samples used for disk coverage.
    pub aa_samples: usize,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
}

impl Default for SceneDesc {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            n_frames: 400,
            field_of_view: FRAC_PI_4,
            near_radius: 0.03,
            thickness: 0.3,
            sphere_radius: 3.0,
            camera_offset: [0.0, 0.0, -10.0],
            foreground: Color::BLACK,
            background: Color::WHITE,
            aa_samples: 4,
            out_dir: PathBuf::from("."),
            format: OutputFormat::Png,
        }
    }
}

pub fn parse_scene_json(json_text: &str) -> Result<SceneDesc> {
    Ok(serde_json::from_str(json_text)?)
}

pub fn load_scene_json<P: AsRef<Path>>(path: P) -> Result<SceneDesc> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::ReadDesc {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scene_json(&text)
}

impl SceneDesc {
    /// Rejects descriptions that cannot render; collects every problem into one error.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if !(self.field_of_view.is_finite() && self.field_of_view > 0.0 && self.field_of_view < PI) {
            errors.push(format!("field_of_view must lie in (0, pi), got {}", self.field_of_view));
        }
        if self.width == 0 || self.height == 0 {
            errors.push(format!("surface must be non-empty, got {}x{}", self.width, self.height));
        }
        if self.width > u32::MAX as usize || self.height > u32::MAX as usize {
            errors.push(format!("surface too large: {}x{}", self.width, self.height));
        } else if self.raster_bytes().is_none() {
            errors.push(format!(
                "surface {}x{} does not fit in an RGBA buffer",
                self.width, self.height
            ));
        }
        if self.n_frames == 0 {
            errors.push("n_frames must be at least 1".to_string());
        }
        if !(self.near_radius.is_finite() && self.near_radius > 0.0) {
            errors.push(format!("near_radius must be positive, got {}", self.near_radius));
        }
        if !(0.0..=1.0).contains(&self.thickness) {
            errors.push(format!("thickness must lie in [0, 1], got {}", self.thickness));
        }
        if !self.sphere_radius.is_finite() {
            errors.push(format!("sphere_radius must be finite, got {}", self.sphere_radius));
        }
        if !self.camera_offset().is_finite() {
            errors.push(format!("camera_offset must be finite, got {:?}", self.camera_offset));
        }
        if self.aa_samples == 0 {
            errors.push("aa_samples must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidConfig(errors.join("; ")))
        }
    }

    /// Size of one RGBA8 frame buffer, or `None` if it cannot be allocated.
    pub fn raster_bytes(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(4)
            .filter(|&n| n <= isize::MAX as usize)
    }

    pub fn ring(&self) -> Ring {
        Ring {
            near_radius: self.near_radius,
            thickness: self.thickness,
        }
    }

    pub fn camera_offset(&self) -> V3 {
        V3::from_array(self.camera_offset)
    }

    /// Rotation angle of frame `i`: `n_frames` evenly spaced angles from 0 to 2*pi inclusive.
    pub fn frame_angle(&self, i: usize) -> f64 {
        if self.n_frames < 2 {
            return 0.0;
        }
        2.0 * PI * (i as f64) / ((self.n_frames - 1) as f64)
    }
}
