use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unknown axis '{0}': expected temperature, luminosity or radius")]
    UnknownAxis(String),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
