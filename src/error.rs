use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropfitError {
    #[error("forecast file not found: {0}")]
    ForecastNotFound(String),

    #[error("forecast parse error: {0}")]
    ForecastParse(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("unknown crop: {0}")]
    UnknownCrop(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CropfitError>;
