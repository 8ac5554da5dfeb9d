use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostmockError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to process image: {0}")]
    ImageProcessing(String),

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Transform failed: {0}")]
    RemoteTransform(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, PostmockError>;
