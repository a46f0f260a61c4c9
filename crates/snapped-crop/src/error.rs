use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CropError {
    #[error("Viewport has not been measured yet")]
    NotReady,
    #[error("Source image has no pixels")]
    EmptySource,
    #[error("Selection is empty ({width}x{height})")]
    DegenerateSelection { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, CropError>;
