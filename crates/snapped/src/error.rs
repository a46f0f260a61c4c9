use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] snapped_config::ConfigError),

    #[error(transparent)]
    Api(#[from] snapped_api::ApiError),

    #[error("Crop failed: {0}")]
    Crop(#[from] snapped_crop::CropError),

    #[error("Failed to read image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
