use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Failed to read config file '{0}': {1}")]
    ConfigIo(String, String),

    #[error("Malformed config file '{0}': {1}")]
    ConfigMalformed(String, String),

    #[error("Failed to write config file '{0}': {1}")]
    ConfigWrite(String, String),

    #[error("Ledger error: {0}")]
    Ledger(String),

    #[error("Lock error: {0}")]
    Lock(String),
}

pub type Result<T> = std::result::Result<T, ShopError>;

impl<T> From<std::sync::PoisonError<T>> for ShopError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::Lock(err.to_string())
    }
}
