use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum BeeperError {
    #[error("invalid frequency: {0} Hz")]
    InvalidFrequency(u32),
    #[error("invalid duration: {0} ms")]
    InvalidDuration(u32),
    #[error("not an unsigned integer: {0:?}")]
    Parse(String),
    #[error("beeper service stopped")]
    ServiceStopped,
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("missing bus transport")]
    MissingTransport,
    #[error("missing bus address")]
    MissingAddress,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
