pub mod fs_backend;

use crate::domain::Account;
use crate::errors::Result;

/// Abstraction over persistence backends for account rosters and ledgers.
///
/// A `profile` is an opaque `/`-separated key (`username` or
/// `username/account name`); backends slug each component, so lookups are
/// case-insensitive like account names themselves.
pub trait StorageBackend: Send + Sync {
    /// Appends `description, <timestamp>` to the profile's history, creating
    /// the profile's directory lazily when absent.
    fn record_transaction(&self, profile: &str, description: &str) -> Result<()>;

    /// Overwrites the profile's single-scalar balance snapshot.
    fn update_balance(&self, profile: &str, amount: f64) -> Result<()>;

    /// Stored balance, or `0.0` when nothing has been written yet.
    fn balance(&self, profile: &str) -> Result<f64>;

    /// All recorded lines in write order, empty when no history exists.
    fn transaction_history(&self, profile: &str) -> Result<Vec<String>>;

    /// The final five (or fewer) entries, in original chronological order.
    fn last_five_transactions(&self, profile: &str) -> Result<Vec<String>> {
        let mut history = self.transaction_history(profile)?;
        let skip = history.len().saturating_sub(5);
        Ok(history.split_off(skip))
    }

    /// Writes the per-kind roster files for one user.
    fn save_accounts(&self, username: &str, accounts: &[Account]) -> Result<()>;

    /// Reads the per-kind roster files back, empty when none exist.
    fn load_accounts(&self, username: &str) -> Result<Vec<Account>>;

    /// Deletes a closed account's ledger directory and everything in it.
    fn remove_ledger(&self, profile: &str) -> Result<()>;
}

/// Normalizes one profile-key component to the directory name backends use:
/// lowercased, with every non-alphanumeric mapped to `_`.
///
/// Two account names that normalize identically would share a ledger
/// directory, so the manager refuses to create the second one.
pub fn profile_slug(component: &str) -> String {
    let sanitized: String = component
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "account".into()
    } else {
        sanitized
    }
}

pub use fs_backend::{FsStorage, ROSTER_SCHEMA_VERSION};
