use std::collections::hash_map::DefaultHasher;
use std::fmt::Write as _;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::domain::{Account, AccountKind};
use crate::errors::{BankError, Result};
use crate::storage::{profile_slug, StorageBackend};

pub const MAX_CHECKING_ACCOUNTS: usize = 2;
pub const MAX_SAVINGS_ACCOUNTS: usize = 3;

/// Facade that owns the full account set for one user and coordinates
/// persistence.
///
/// Caps and name uniqueness live here, not on [`Account`]. Every mutating
/// operation persists the roster after applying; a persistence failure is
/// surfaced to the caller but never rolls back the in-memory change.
pub struct AccountManager {
    username: String,
    accounts: Vec<Account>,
    storage: Box<dyn StorageBackend>,
    cards_ordered: u32,
}

impl AccountManager {
    pub fn new(username: impl Into<String>, storage: Box<dyn StorageBackend>) -> Self {
        Self {
            username: username.into(),
            accounts: Vec::new(),
            storage,
            cards_ordered: 0,
        }
    }

    /// Replaces the in-memory set with the roster stored for this user.
    pub fn load(&mut self) -> Result<()> {
        self.accounts = self.storage.load_accounts(&self.username)?;
        debug!(
            user = %self.username,
            accounts = self.accounts.len(),
            "loaded account roster"
        );
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Case-insensitive lookup across both account kinds.
    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.position(name).map(|idx| &self.accounts[idx])
    }

    pub fn add_checking_account(&mut self, name: &str, overdraft_limit: Option<f64>) -> Result<()> {
        self.validate_new_name(name)?;
        if self.checking_count() >= MAX_CHECKING_ACCOUNTS {
            return Err(BankError::Validation(format!(
                "maximum number of checking accounts ({}) reached",
                MAX_CHECKING_ACCOUNTS
            )));
        }
        let mut account = Account::checking(name);
        if let Some(limit) = overdraft_limit {
            account.set_overdraft_limit(limit)?;
        }
        self.accounts.push(account);
        self.persist()
    }

    pub fn add_savings_account(
        &mut self,
        name: &str,
        interest_rate: f64,
        overdraft_limit: Option<f64>,
    ) -> Result<()> {
        self.validate_new_name(name)?;
        if self.savings_count() >= MAX_SAVINGS_ACCOUNTS {
            return Err(BankError::Validation(format!(
                "maximum number of savings accounts ({}) reached",
                MAX_SAVINGS_ACCOUNTS
            )));
        }
        if interest_rate < 0.0 {
            return Err(BankError::Validation(
                "interest rate cannot be negative".into(),
            ));
        }
        let mut account = Account::savings(name, interest_rate);
        if let Some(limit) = overdraft_limit {
            account.set_overdraft_limit(limit)?;
        }
        self.accounts.push(account);
        self.persist()
    }

    /// Display summary of every account; presentation only.
    pub fn list_all_accounts(&self) -> String {
        if self.accounts.is_empty() {
            return "You don't have any accounts yet.".into();
        }
        let mut out = String::new();
        let checking: Vec<&Account> = self
            .accounts
            .iter()
            .filter(|account| !account.is_savings())
            .collect();
        if !checking.is_empty() {
            out.push_str("Checking Accounts:\n");
            for account in checking {
                let _ = writeln!(out, "- {}: ${:.2}", account.name(), account.balance());
            }
        }
        let savings: Vec<&Account> = self
            .accounts
            .iter()
            .filter(|account| account.is_savings())
            .collect();
        if !savings.is_empty() {
            out.push_str("Savings Accounts:\n");
            for account in savings {
                let _ = writeln!(
                    out,
                    "- {}: ${:.2} (Interest Rate: {:.2}%)",
                    account.name(),
                    account.balance(),
                    account.interest_rate().unwrap_or(0.0)
                );
            }
        }
        out
    }

    /// Deposits into the named account, records the ledger line, and
    /// persists. Returns the new balance.
    pub fn deposit(&mut self, name: &str, amount: f64) -> Result<f64> {
        let idx = self.require(name)?;
        self.accounts[idx].deposit(amount)?;
        let balance = self.accounts[idx].balance();
        let profile = self.profile_of(idx);
        self.storage
            .record_transaction(&profile, &format!("Deposit: ${}", amount))?;
        self.storage.update_balance(&profile, balance)?;
        self.persist()?;
        Ok(balance)
    }

    /// Withdraws from the named account, records the ledger line, and
    /// persists. Returns the new balance.
    pub fn withdraw(&mut self, name: &str, amount: f64) -> Result<f64> {
        let idx = self.require(name)?;
        self.accounts[idx].withdraw(amount)?;
        let balance = self.accounts[idx].balance();
        let profile = self.profile_of(idx);
        self.storage
            .record_transaction(&profile, &format!("Withdraw: ${}", amount))?;
        self.storage.update_balance(&profile, balance)?;
        self.persist()?;
        Ok(balance)
    }

    /// Moves `amount` between two of this user's accounts.
    ///
    /// Every precondition is checked before any mutation, and the source
    /// withdrawal is the only remaining failure point before the destination
    /// deposit, so a partial transfer cannot occur.
    pub fn transfer(&mut self, from: &str, to: &str, amount: f64) -> Result<()> {
        if amount <= 0.0 {
            return Err(BankError::Validation(
                "transfer amount must be greater than zero".into(),
            ));
        }
        if self.accounts.len() < 2 {
            return Err(BankError::Validation(
                "at least two accounts are required to transfer".into(),
            ));
        }
        let from_idx = self.require(from)?;
        let to_idx = self.require(to)?;
        if from_idx == to_idx {
            return Err(BankError::Validation(
                "cannot transfer to the same account".into(),
            ));
        }
        if self.accounts[from_idx].is_frozen() {
            return Err(BankError::Frozen(self.accounts[from_idx].name().into()));
        }
        if self.accounts[to_idx].is_frozen() {
            return Err(BankError::Frozen(self.accounts[to_idx].name().into()));
        }

        self.accounts[from_idx].withdraw(amount)?;
        self.accounts[to_idx].deposit(amount)?;

        let from_name = self.accounts[from_idx].name().to_string();
        let to_name = self.accounts[to_idx].name().to_string();
        let from_profile = self.profile_of(from_idx);
        let to_profile = self.profile_of(to_idx);
        self.storage.record_transaction(
            &from_profile,
            &format!("Transfer Out: ${} to {}", amount, to_name),
        )?;
        self.storage.record_transaction(
            &to_profile,
            &format!("Transfer In: ${} from {}", amount, from_name),
        )?;
        self.storage
            .update_balance(&from_profile, self.accounts[from_idx].balance())?;
        self.storage
            .update_balance(&to_profile, self.accounts[to_idx].balance())?;
        self.persist()
    }

    /// Credits interest on every unfrozen savings account, then persists.
    pub fn apply_interest_to_all_savings_accounts(&mut self) -> Result<()> {
        for idx in 0..self.accounts.len() {
            if !self.accounts[idx].is_savings() || self.accounts[idx].is_frozen() {
                continue;
            }
            let interest = self.accounts[idx].apply_interest()?;
            let profile = self.profile_of(idx);
            self.storage
                .record_transaction(&profile, &format!("Interest Applied: ${:.2}", interest))?;
            self.storage
                .update_balance(&profile, self.accounts[idx].balance())?;
        }
        self.persist()
    }

    /// Charges overdraft interest on every unfrozen account of either kind
    /// and returns the summed total charged.
    pub fn apply_overdraft_interest_to_all_accounts(&mut self) -> Result<f64> {
        let mut total = 0.0;
        for idx in 0..self.accounts.len() {
            if self.accounts[idx].is_frozen() {
                continue;
            }
            let charge = self.accounts[idx].apply_overdraft_interest()?;
            if charge > 0.0 {
                let profile = self.profile_of(idx);
                self.storage.record_transaction(
                    &profile,
                    &format!("Overdraft Interest Charged: ${:.2}", charge),
                )?;
                self.storage
                    .update_balance(&profile, self.accounts[idx].balance())?;
                total += charge;
            }
        }
        self.persist()?;
        Ok(total)
    }

    pub fn freeze_account(&mut self, name: &str) -> Result<()> {
        let idx = self.require(name)?;
        self.accounts[idx].freeze();
        let profile = self.profile_of(idx);
        self.storage.record_transaction(&profile, "Account Frozen")?;
        self.persist()
    }

    pub fn unfreeze_account(&mut self, name: &str) -> Result<()> {
        let idx = self.require(name)?;
        self.accounts[idx].unfreeze();
        let profile = self.profile_of(idx);
        self.storage
            .record_transaction(&profile, "Account Unfrozen")?;
        self.persist()
    }

    /// Removes the named account iff its balance is non-negative; callers
    /// confirm with the user before invoking this. The account's ledger
    /// directory is deleted with it. Returns whether removal occurred.
    pub fn close_account(&mut self, name: &str) -> Result<bool> {
        let idx = self.require(name)?;
        if !self.accounts[idx].can_close() {
            return Ok(false);
        }
        let profile = self.profile_of(idx);
        let removed = self.accounts.remove(idx);
        debug!(user = %self.username, account = removed.name(), "closing account");
        self.storage.remove_ledger(&profile)?;
        self.persist()?;
        Ok(true)
    }

    /// Imports a legacy single account into the multi-account model under a
    /// generated `Primary <Kind>` name, preserving its balance (and interest
    /// rate for savings). Returns the assigned name.
    pub fn migrate_existing_account(&mut self, existing: Account) -> Result<String> {
        let at_cap = match existing.kind() {
            AccountKind::Checking => self.checking_count() >= MAX_CHECKING_ACCOUNTS,
            AccountKind::Savings { .. } => self.savings_count() >= MAX_SAVINGS_ACCOUNTS,
        };
        if at_cap {
            return Err(BankError::Validation(format!(
                "cannot migrate existing {} account: maximum number reached",
                existing.kind().label()
            )));
        }

        let base = format!("Primary {}", capitalize(existing.kind().label()));
        let mut name = base.clone();
        let mut suffix = 1;
        while self.name_taken(&name) {
            name = format!("{} {}", base, suffix);
            suffix += 1;
        }

        let mut migrated = match existing.kind() {
            AccountKind::Checking => Account::checking(name.clone()),
            AccountKind::Savings { interest_rate } => {
                Account::savings(name.clone(), *interest_rate)
            }
        };
        migrated.restore_balance(existing.balance());
        let balance = migrated.balance();
        self.accounts.push(migrated);

        let profile = format!("{}/{}", self.username, name);
        self.storage.update_balance(&profile, balance)?;
        self.persist()?;
        Ok(name)
    }

    /// Orders checks for a checking account and records the event.
    pub fn order_checks(&mut self, name: &str) -> Result<()> {
        let idx = self.require_orderable(name)?;
        let profile = self.profile_of(idx);
        self.storage.record_transaction(&profile, "Ordered checks")
    }

    /// Orders a debit card for a checking account; returns the card's last
    /// four digits for the caller to display.
    pub fn order_debit_card(&mut self, name: &str) -> Result<String> {
        let idx = self.require_orderable(name)?;
        self.cards_ordered += 1;
        let last_four = self.card_last_four(idx);
        let profile = self.profile_of(idx);
        self.storage.record_transaction(
            &profile,
            &format!("Ordered debit card ending in {}", last_four),
        )?;
        Ok(last_four)
    }

    pub fn set_overdraft_limit(&mut self, name: &str, limit: f64) -> Result<()> {
        let idx = self.require(name)?;
        self.accounts[idx].set_overdraft_limit(limit)?;
        self.persist()
    }

    pub fn set_overdraft_interest_rate(&mut self, name: &str, rate: f64) -> Result<()> {
        let idx = self.require(name)?;
        self.accounts[idx].set_overdraft_interest_rate(rate)?;
        self.persist()
    }

    pub fn set_withdrawal_limit(&mut self, name: &str, limit: f64) -> Result<()> {
        let idx = self.require(name)?;
        self.accounts[idx].set_withdrawal_limit(limit)?;
        self.persist()
    }

    /// Full ledger for the named account, in write order.
    pub fn transaction_history(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.require(name)?;
        self.storage.transaction_history(&self.profile_of(idx))
    }

    /// The named account's five most recent ledger lines, oldest first.
    pub fn last_five_transactions(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.require(name)?;
        self.storage.last_five_transactions(&self.profile_of(idx))
    }

    fn persist(&self) -> Result<()> {
        self.storage.save_accounts(&self.username, &self.accounts)
    }

    fn profile_of(&self, idx: usize) -> String {
        format!("{}/{}", self.username, self.accounts[idx].name())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.name().eq_ignore_ascii_case(name))
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| BankError::NotFound(name.to_string()))
    }

    fn require_orderable(&self, name: &str) -> Result<usize> {
        let idx = self.require(name)?;
        let account = &self.accounts[idx];
        if account.is_frozen() {
            return Err(BankError::Frozen(account.name().into()));
        }
        if account.is_savings() {
            return Err(BankError::Validation(
                "checks and cards can only be ordered for checking accounts".into(),
            ));
        }
        Ok(idx)
    }

    fn validate_new_name(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(BankError::Validation("account name cannot be empty".into()));
        }
        if self.name_taken(name) {
            return Err(BankError::Validation(format!(
                "account name `{}` is already in use",
                name
            )));
        }
        Ok(())
    }

    /// A name is taken when any existing account's ledger slug matches it.
    /// Comparing slugs rather than raw names keeps every account on its own
    /// ledger directory ("Nest Egg" and "Nest-Egg" store identically).
    fn name_taken(&self, name: &str) -> bool {
        let slug = profile_slug(name);
        self.accounts
            .iter()
            .any(|account| profile_slug(account.name()) == slug)
    }

    fn checking_count(&self) -> usize {
        self.accounts
            .iter()
            .filter(|account| !account.is_savings())
            .count()
    }

    fn savings_count(&self) -> usize {
        self.accounts
            .iter()
            .filter(|account| account.is_savings())
            .count()
    }

    fn card_last_four(&self, idx: usize) -> String {
        let mut hasher = DefaultHasher::new();
        self.username.hash(&mut hasher);
        self.accounts[idx].name().hash(&mut hasher);
        self.cards_ordered.hash(&mut hasher);
        format!("{:04}", hasher.finish() % 10_000)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FsStorage;
    use tempfile::{tempdir, TempDir};

    fn manager_with_temp_dir() -> (AccountManager, TempDir) {
        let temp = tempdir().unwrap();
        let storage = FsStorage::new(Some(temp.path().to_path_buf())).unwrap();
        (AccountManager::new("alice", Box::new(storage)), temp)
    }

    #[test]
    fn checking_cap_is_two() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_checking_account("Everyday", None).unwrap();
        manager.add_checking_account("Bills", None).unwrap();
        manager.deposit("Everyday", 10.0).unwrap();

        let err = manager.add_checking_account("Extra", None).unwrap_err();
        assert!(matches!(err, BankError::Validation(_)));
        assert_eq!(manager.accounts().len(), 2);
        assert_eq!(manager.account_by_name("Everyday").unwrap().balance(), 10.0);
    }

    #[test]
    fn savings_cap_is_three() {
        let (mut manager, _guard) = manager_with_temp_dir();
        for name in ["A", "B", "C"] {
            manager.add_savings_account(name, 2.0, None).unwrap();
        }
        assert!(manager.add_savings_account("D", 2.0, None).is_err());
    }

    #[test]
    fn names_are_unique_across_kinds_case_insensitively() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_checking_account("Shared", None).unwrap();
        let err = manager
            .add_savings_account("SHARED", 2.0, None)
            .unwrap_err();
        assert!(matches!(err, BankError::Validation(_)));
        assert!(manager.account_by_name("shared").is_some());
    }

    #[test]
    fn names_with_identical_ledger_slugs_are_rejected() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_savings_account("Nest Egg", 2.0, None).unwrap();

        // "Nest-Egg" and "nest.egg" would store under the same directory as
        // "Nest Egg"; accepting them would merge the ledgers.
        let err = manager.add_checking_account("Nest-Egg", None).unwrap_err();
        assert!(matches!(err, BankError::Validation(_)));
        assert!(manager
            .add_savings_account("nest.egg", 2.0, None)
            .is_err());
        assert_eq!(manager.accounts().len(), 1);

        manager.deposit("Nest Egg", 10.0).unwrap();
        let history = manager.transaction_history("Nest Egg").unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].starts_with("Deposit: $10, "));
    }

    #[test]
    fn transfer_moves_funds_and_records_both_legs() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_checking_account("X", None).unwrap();
        manager.add_savings_account("Y", 2.0, None).unwrap();
        manager.deposit("X", 100.0).unwrap();

        manager.transfer("X", "Y", 50.0).unwrap();

        assert_eq!(manager.account_by_name("X").unwrap().balance(), 50.0);
        assert_eq!(manager.account_by_name("Y").unwrap().balance(), 50.0);

        let out: Vec<String> = manager
            .transaction_history("X")
            .unwrap()
            .into_iter()
            .filter(|line| line.starts_with("Transfer Out"))
            .collect();
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("Transfer Out: $50 to Y, "));

        let inbound: Vec<String> = manager
            .transaction_history("Y")
            .unwrap()
            .into_iter()
            .filter(|line| line.starts_with("Transfer In"))
            .collect();
        assert_eq!(inbound.len(), 1);
        assert!(inbound[0].starts_with("Transfer In: $50 from X, "));
    }

    #[test]
    fn transfer_needs_two_accounts() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_checking_account("Only", None).unwrap();
        manager.deposit("Only", 100.0).unwrap();

        let err = manager.transfer("Only", "Other", 10.0).unwrap_err();
        assert!(matches!(err, BankError::Validation(_)));
        assert_eq!(manager.account_by_name("Only").unwrap().balance(), 100.0);
    }

    #[test]
    fn failed_transfer_leaves_both_sides_untouched() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_checking_account("X", None).unwrap();
        manager.add_checking_account("Y", None).unwrap();
        manager.deposit("X", 20.0).unwrap();

        let err = manager.transfer("X", "Y", 50.0).unwrap_err();
        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert_eq!(manager.account_by_name("X").unwrap().balance(), 20.0);
        assert_eq!(manager.account_by_name("Y").unwrap().balance(), 0.0);
        assert!(manager.transaction_history("Y").unwrap().is_empty());
    }

    #[test]
    fn transfer_to_frozen_destination_is_rejected() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_checking_account("X", None).unwrap();
        manager.add_checking_account("Y", None).unwrap();
        manager.deposit("X", 100.0).unwrap();
        manager.freeze_account("Y").unwrap();

        let err = manager.transfer("X", "Y", 10.0).unwrap_err();
        assert!(matches!(err, BankError::Frozen(_)));
        assert_eq!(manager.account_by_name("X").unwrap().balance(), 100.0);
    }

    #[test]
    fn close_account_requires_non_negative_balance() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_checking_account("Doomed", Some(100.0)).unwrap();
        manager.deposit("Doomed", 50.0).unwrap();
        manager.withdraw("Doomed", 150.0).unwrap();

        assert!(!manager.close_account("Doomed").unwrap());
        assert!(manager.account_by_name("Doomed").is_some());

        manager.deposit("Doomed", 100.0).unwrap();
        assert!(manager.close_account("Doomed").unwrap());
        assert!(manager.account_by_name("Doomed").is_none());
    }

    #[test]
    fn migration_generates_primary_names() {
        let (mut manager, _guard) = manager_with_temp_dir();

        let mut legacy = Account::checking("");
        legacy.restore_balance(75.0);
        let name = manager.migrate_existing_account(legacy).unwrap();
        assert_eq!(name, "Primary Checking");
        assert_eq!(manager.account_by_name(&name).unwrap().balance(), 75.0);

        let second = manager
            .migrate_existing_account(Account::checking(""))
            .unwrap();
        assert_eq!(second, "Primary Checking 1");

        let err = manager
            .migrate_existing_account(Account::checking(""))
            .unwrap_err();
        assert!(matches!(err, BankError::Validation(_)));
    }

    #[test]
    fn migration_preserves_savings_rate() {
        let (mut manager, _guard) = manager_with_temp_dir();
        let mut legacy = Account::savings("", 4.5);
        legacy.restore_balance(300.0);
        let name = manager.migrate_existing_account(legacy).unwrap();
        assert_eq!(name, "Primary Savings");
        let migrated = manager.account_by_name(&name).unwrap();
        assert_eq!(migrated.interest_rate(), Some(4.5));
        assert_eq!(migrated.balance(), 300.0);
    }

    #[test]
    fn interest_sweep_skips_frozen_savings() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_savings_account("Active", 10.0, None).unwrap();
        manager.add_savings_account("Iced", 10.0, None).unwrap();
        manager.deposit("Active", 100.0).unwrap();
        manager.deposit("Iced", 100.0).unwrap();
        manager.freeze_account("Iced").unwrap();

        manager.apply_interest_to_all_savings_accounts().unwrap();

        assert!((manager.account_by_name("Active").unwrap().balance() - 110.0).abs() < 0.001);
        assert_eq!(manager.account_by_name("Iced").unwrap().balance(), 100.0);
    }

    #[test]
    fn overdraft_sweep_totals_charges() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_checking_account("A", Some(200.0)).unwrap();
        manager.add_checking_account("B", Some(200.0)).unwrap();
        manager.set_overdraft_interest_rate("A", 10.0).unwrap();
        manager.set_overdraft_interest_rate("B", 10.0).unwrap();
        manager.deposit("A", 50.0).unwrap();
        manager.withdraw("A", 150.0).unwrap(); // -100
        manager.deposit("B", 500.0).unwrap(); // stays in credit

        let total = manager.apply_overdraft_interest_to_all_accounts().unwrap();
        assert!((total - 10.0).abs() < 0.001);
        assert!((manager.account_by_name("A").unwrap().balance() + 110.0).abs() < 0.001);
        assert_eq!(manager.account_by_name("B").unwrap().balance(), 500.0);
    }

    #[test]
    fn card_and_check_orders_are_checking_only() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.add_checking_account("Everyday", None).unwrap();
        manager.add_savings_account("Nest Egg", 2.0, None).unwrap();

        manager.order_checks("Everyday").unwrap();
        let last_four = manager.order_debit_card("Everyday").unwrap();
        assert_eq!(last_four.len(), 4);
        let history = manager.transaction_history("Everyday").unwrap();
        assert!(history
            .iter()
            .any(|line| line.contains(&format!("debit card ending in {}", last_four))));

        assert!(manager.order_checks("Nest Egg").is_err());
        assert!(manager.order_debit_card("Nest Egg").is_err());
    }

    #[test]
    fn roster_survives_a_restart() {
        let temp = tempdir().unwrap();
        let storage = FsStorage::new(Some(temp.path().to_path_buf())).unwrap();
        let mut manager = AccountManager::new("alice", Box::new(storage));
        manager.add_checking_account("Everyday", None).unwrap();
        manager.add_savings_account("Nest Egg", 3.0, None).unwrap();
        manager.deposit("Everyday", 120.0).unwrap();

        let storage = FsStorage::new(Some(temp.path().to_path_buf())).unwrap();
        let mut reloaded = AccountManager::new("alice", Box::new(storage));
        reloaded.load().unwrap();
        assert_eq!(reloaded.accounts().len(), 2);
        assert_eq!(
            reloaded.account_by_name("Everyday").unwrap().balance(),
            120.0
        );
        assert_eq!(
            reloaded.account_by_name("Nest Egg").unwrap().interest_rate(),
            Some(3.0)
        );
    }
}
