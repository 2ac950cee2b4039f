use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown dimension '{0}'")]
    UnknownDimension(String),
    #[error("unknown plant status '{0}'")]
    UnknownStatus(String),
    #[error("invalid filter '{0}': expected dimension=value[,value...]")]
    InvalidFilter(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid options file: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
