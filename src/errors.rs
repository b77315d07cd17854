use thiserror::Error;

/// Error type that captures common banking failures.
///
/// Business-rule violations (`Validation`, `InsufficientFunds`,
/// `LimitExceeded`, `Frozen`, `NotFound`) are ordinary result values that the
/// calling layer translates into user-facing messages; only the storage
/// variants indicate something outside the caller's control.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("{0}")]
    Validation(String),
    #[error("insufficient funds: requested ${requested:.2}, available ${available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("withdrawal of ${requested:.2} exceeds the per-transaction limit of ${limit:.2}")]
    LimitExceeded { requested: f64, limit: f64 },
    #[error("account `{0}` is frozen")]
    Frozen(String),
    #[error("account `{0}` not found")]
    NotFound(String),
    #[error("storage error: {0}")]
    Persistence(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("record error: {0}")]
    Csv(#[from] csv::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BankError>;
