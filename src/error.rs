use thiserror::Error;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("scale must contain at least one degree")]
    EmptyScale,

    #[error("invalid cents value: {token:?}")]
    InvalidCents { token: String },

    #[error("invalid ratio (expected n/d with integer n and d): {token:?}")]
    InvalidRatio { token: String },

    #[error("ratio has a zero denominator: {token:?}")]
    ZeroDenominator { token: String },

    #[error("invalid decimal ratio: {token:?}")]
    InvalidDecimal { token: String },

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse RON config: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("failed to serialize RON config: {0}")]
    RonSer(#[from] ron::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, TuningError>;
