use super::core::Im;
use image::ImageResult;
use std::path::Path;

fn dim_mismatch_err() -> image::ImageError {
    image::ImageError::Parameter(image::error::ParameterError::from_kind(
        image::error::ParameterErrorKind::DimensionMismatch,
    ))
}

// PNG I/O
// -----------------------------------------------------------------------------
impl Im<u8, 4> {
    /// Writes the image as an 8-bit straight-alpha RGBA PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        if self.s != self.w * 4 {
            return Err(dim_mismatch_err());
        }
        let img = image::RgbaImage::from_raw(self.w as u32, self.h as u32, self.arr.clone())
            .ok_or_else(dim_mismatch_err)?;

        img.save_with_format(path, image::ImageFormat::Png)
    }

    pub fn load_png<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        let img = image::open(path)?.into_rgba8();
        let w = img.width() as usize;
        let h = img.height() as usize;
        let arr = img.into_raw();
        if arr.len() != w * h * 4 {
            return Err(dim_mismatch_err());
        }
        Ok(Self { w, h, s: w * 4, arr })
    }
}

// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::im::RGBAIm;

    #[test]
    fn rgba_png_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");

        let mut im = RGBAIm::new(3, 2);
        im.fill([255, 255, 255, 255]);
        im.blend_rgb(1, 1, [10, 20, 30], 1.0);
        im.save_png(&path).unwrap();

        let back = RGBAIm::load_png(&path).unwrap();
        assert_eq!((back.w, back.h), (3, 2));
        assert_eq!(back.arr, im.arr);
    }

    #[test]
    fn save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let im = RGBAIm::new(1, 1);
        assert!(im.save_png(dir.path().join("nope").join("x.png")).is_err());
    }
}
