use thiserror::Error;

pub type CanvasResult<T> = Result<T, CanvasError>;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid level: {level}")]
    InvalidLevel { level: u8 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("canvas service call failed: {0}")]
    Service(String),
}
