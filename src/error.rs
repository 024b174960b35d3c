use thiserror::Error;

/// Errors reported by the generator constructors and the benchmark harness.
///
/// The selection algorithms themselves never produce an `Error`: a predicate
/// that matches nothing is reported as `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// A xorshift generator seeded with zero only ever yields zero.
    #[error("xorshift seed must be non-zero")]
    ZeroSeed,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfig(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
