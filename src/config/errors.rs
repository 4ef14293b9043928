use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Invalid config '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Region size {size} is too small; at least {minimum} bytes are needed for the footer.")]
    RegionTooSmall { size: usize, minimum: usize },

    #[error("At least one iteration is required.")]
    NoIterations,
}
