use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("point {index} projects onto the w = 0 singularity")]
    Singular { index: usize },

    #[error("point {index} projects to a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("invalid svg attribute: {0}")]
    Svg(String),

    #[error("failed to read scene description {}: {source}", path.display())]
    ReadDesc {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scene description parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write frame {}: {source}", path.display())]
    WriteFrame {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[cfg(feature = "im-io")]
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
