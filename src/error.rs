use std::path::PathBuf;

/// Errors produced by the detection library.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A parameter was outside its accepted range.
    #[error("{name} must be in {min}..={max}, got {value}")]
    ParameterOutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Image decoding or encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The debug output directory already has files in it.
    #[error("Debug directory is not empty: {}", .0.display())]
    DebugDirNotEmpty(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
