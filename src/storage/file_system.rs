use std::fs;
use std::path::PathBuf;

use super::models::WalletRecord;
use crate::error::StorageError;

#[derive(Clone, Debug)]
pub struct Storage {
    base_path: PathBuf,
}

impl Storage {
    /// Create a new storage instance with the default base directory ("./wallets")
    pub fn new() -> Self {
        Self {
            base_path: PathBuf::from("./wallets"),
        }
    }

    /// Create storage with custom base directory (for testing)
    pub fn new_with_base_dir(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the base directory path for wallet storage
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_path
    }

    /// Path of the JSON file for a specific wallet
    pub fn wallet_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", name))
    }

    fn temp_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!(".{}.json.tmp", name))
    }

    /// Check if a wallet with the given name exists
    pub fn wallet_exists(&self, name: &str) -> bool {
        self.wallet_path(name).is_file()
    }

    /// Load a wallet record from disk
    pub fn load_wallet(&self, name: &str) -> Result<WalletRecord, StorageError> {
        let path = self.wallet_path(name);
        if !self.wallet_exists(name) {
            return Err(StorageError::FileNotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let mut record: WalletRecord = serde_json::from_str(&contents)?;
        record.name = name.to_string();
        Ok(record)
    }

    /// Overwrite a wallet record on disk
    ///
    /// The record is written to a hidden temp file in the same directory and
    /// renamed over the target, so readers see either the old or the new file.
    pub fn save_wallet(&self, name: &str, record: &WalletRecord) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)?;

        let json = serde_json::to_string_pretty(record)?;
        let temp = self.temp_path(name);

        if let Err(e) = fs::write(&temp, json).and_then(|_| fs::rename(&temp, self.wallet_path(name))) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        log::debug!("Saved wallet '{}' to {}", name, self.wallet_path(name).display());
        Ok(())
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
