pub mod core;
pub use self::core::{Im, RGBAIm};

pub mod roi;
pub use roi::ROI;

pub mod disk;
pub use disk::fill_ellipse;

pub mod canvas;
pub use canvas::Canvas;

// Optional extras
// -----------------------------------------------------------------------------

#[cfg(feature = "im-io")]
pub mod io;
