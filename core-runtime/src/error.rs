use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Logging or runtime setup failed.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
