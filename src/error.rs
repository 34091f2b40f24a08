use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShotMapError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image Error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Font Error: {0}")]
    Font(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

impl ShotMapError {
    pub fn is_config(&self) -> bool {
        matches!(self, ShotMapError::Config(_))
    }
}

pub type SmResult<T> = Result<T, ShotMapError>;
