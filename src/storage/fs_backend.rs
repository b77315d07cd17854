use chrono::Local;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::paths::{accounts_dir, ensure_dir};
use crate::domain::Account;
use crate::errors::{BankError, Result};

use super::{profile_slug, StorageBackend};

const HISTORY_FILE: &str = "history.txt";
const BALANCE_FILE: &str = "balance.txt";
const CHECKING_FILE: &str = "checking.csv";
const SAVINGS_FILE: &str = "savings.csv";
const META_FILE: &str = "meta.json";
const TIMESTAMP_FORMAT: &str = "%m-%d-%Y %H:%M:%S";
const TMP_SUFFIX: &str = "tmp";

/// Version written to each user's `meta.json`; rosters written by a newer
/// schema are refused on load.
pub const ROSTER_SCHEMA_VERSION: u32 = 1;

/// Filesystem persistence rooted at one accounts directory.
///
/// Layout per user: `<root>/<user>/checking.csv`, `savings.csv` and
/// `meta.json`, plus one subdirectory per account holding `balance.txt`
/// (overwritten snapshot) and `history.txt` (append-only ledger).
#[derive(Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(accounts_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn profile_dir(&self, profile: &str) -> PathBuf {
        let mut dir = self.root.clone();
        for component in profile.split('/').filter(|c| !c.trim().is_empty()) {
            dir.push(profile_slug(component));
        }
        dir
    }

    fn ensure_profile_dir(&self, profile: &str) -> Result<PathBuf> {
        let dir = self.profile_dir(profile);
        ensure_dir(&dir)?;
        Ok(dir)
    }

    fn check_schema(&self, user_dir: &Path) -> Result<()> {
        let meta_path = user_dir.join(META_FILE);
        if !meta_path.exists() {
            return Ok(());
        }
        let data = fs::read_to_string(&meta_path)?;
        let meta: RosterMeta = serde_json::from_str(&data)?;
        if meta.schema_version > ROSTER_SCHEMA_VERSION {
            return Err(BankError::Persistence(format!(
                "roster schema v{} is newer than supported v{}",
                meta.schema_version, ROSTER_SCHEMA_VERSION
            )));
        }
        Ok(())
    }

    fn write_roster<T: Serialize>(&self, path: &Path, records: &[T]) -> Result<()> {
        let tmp = tmp_path(path);
        {
            let mut writer = csv::Writer::from_path(&tmp)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn read_roster<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }
}

impl StorageBackend for FsStorage {
    fn record_transaction(&self, profile: &str, description: &str) -> Result<()> {
        let dir = self.ensure_profile_dir(profile)?;
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(HISTORY_FILE))?;
        writeln!(file, "{}, {}", description, timestamp)?;
        Ok(())
    }

    fn update_balance(&self, profile: &str, amount: f64) -> Result<()> {
        let dir = self.ensure_profile_dir(profile)?;
        write_atomic(&dir.join(BALANCE_FILE), &amount.to_string())
    }

    fn balance(&self, profile: &str) -> Result<f64> {
        let path = self.profile_dir(profile).join(BALANCE_FILE);
        if !path.exists() {
            return Ok(0.0);
        }
        let data = fs::read_to_string(&path)?;
        data.trim().parse::<f64>().map_err(|err| {
            BankError::Persistence(format!(
                "balance file `{}` is not a number: {}",
                path.display(),
                err
            ))
        })
    }

    fn transaction_history(&self, profile: &str) -> Result<Vec<String>> {
        let path = self.profile_dir(profile).join(HISTORY_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(data.lines().map(str::to_string).collect())
    }

    fn save_accounts(&self, username: &str, accounts: &[Account]) -> Result<()> {
        let dir = self.ensure_profile_dir(username)?;

        let checking: Vec<CheckingRecord> = accounts
            .iter()
            .filter(|account| !account.is_savings())
            .map(|account| CheckingRecord {
                name: account.name().to_string(),
                balance: account.balance(),
            })
            .collect();
        let savings: Vec<SavingsRecord> = accounts
            .iter()
            .filter_map(|account| {
                account.interest_rate().map(|interest_rate| SavingsRecord {
                    name: account.name().to_string(),
                    balance: account.balance(),
                    interest_rate,
                })
            })
            .collect();

        self.write_roster(&dir.join(CHECKING_FILE), &checking)?;
        self.write_roster(&dir.join(SAVINGS_FILE), &savings)?;

        let meta = RosterMeta {
            schema_version: ROSTER_SCHEMA_VERSION,
        };
        write_atomic(&dir.join(META_FILE), &serde_json::to_string_pretty(&meta)?)?;
        Ok(())
    }

    fn load_accounts(&self, username: &str) -> Result<Vec<Account>> {
        let dir = self.profile_dir(username);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        self.check_schema(&dir)?;

        let mut accounts = Vec::new();
        for record in self.read_roster::<CheckingRecord>(&dir.join(CHECKING_FILE))? {
            let mut account = Account::checking(record.name);
            account.restore_balance(record.balance);
            accounts.push(account);
        }
        for record in self.read_roster::<SavingsRecord>(&dir.join(SAVINGS_FILE))? {
            let mut account = Account::savings(record.name, record.interest_rate);
            account.restore_balance(record.balance);
            accounts.push(account);
        }
        Ok(accounts)
    }

    fn remove_ledger(&self, profile: &str) -> Result<()> {
        let dir = self.profile_dir(profile);
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CheckingRecord {
    name: String,
    balance: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct SavingsRecord {
    name: String,
    balance: f64,
    interest_rate: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RosterMeta {
    schema_version: u32,
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
