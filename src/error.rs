use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Invalid wallet name: {0}")]
    Validation(String),

    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Failed to save wallet: {0}")]
    StoreWrite(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl WalletError {
    /// Map a failed load into the not-found category, keeping the cause in the message
    pub fn not_found(name: &str, source: StorageError) -> Self {
        Self::WalletNotFound(format!("could not open {}.json ({})", name, source))
    }

    /// Map a failed save into the store-write category
    pub fn store_write(name: &str, source: StorageError) -> Self {
        Self::StoreWrite(format!("{}.json: {}", name, source))
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
