use crate::errors::{BankError, Result};

/// Default cap on a single withdrawal, independent of available funds.
pub const DEFAULT_WITHDRAWAL_LIMIT: f64 = 10_000.0;

/// Enumerates the supported account classifications. The savings payload
/// carries the interest rate (% per application); checking accounts have none.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    Checking,
    Savings { interest_rate: f64 },
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings { .. } => "savings",
        }
    }
}

/// A single named account tracked for one user.
///
/// Invariants held by every operation: `balance >= -overdraft_limit`, and no
/// single withdrawal may exceed `withdrawal_limit` regardless of funds. Name
/// uniqueness and per-kind caps are enforced by the owning
/// [`AccountManager`](crate::core::account_manager::AccountManager).
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    name: String,
    kind: AccountKind,
    balance: f64,
    withdrawal_limit: f64,
    overdraft_limit: f64,
    overdraft_interest_rate: f64,
    frozen: bool,
}

impl Account {
    /// Creates a checking account with a zero balance.
    pub fn checking(name: impl Into<String>) -> Self {
        Self::new(name, AccountKind::Checking)
    }

    /// Creates a savings account with a zero balance and the given
    /// interest rate (% per application).
    pub fn savings(name: impl Into<String>, interest_rate: f64) -> Self {
        Self::new(name, AccountKind::Savings { interest_rate })
    }

    fn new(name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            name: name.into(),
            kind,
            balance: 0.0,
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
            overdraft_limit: 0.0,
            overdraft_interest_rate: 0.0,
            frozen: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn withdrawal_limit(&self) -> f64 {
        self.withdrawal_limit
    }

    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }

    pub fn overdraft_interest_rate(&self) -> f64 {
        self.overdraft_interest_rate
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn is_savings(&self) -> bool {
        matches!(self.kind, AccountKind::Savings { .. })
    }

    /// Interest rate for savings accounts, `None` for checking.
    pub fn interest_rate(&self) -> Option<f64> {
        match self.kind {
            AccountKind::Savings { interest_rate } => Some(interest_rate),
            AccountKind::Checking => None,
        }
    }

    /// Funds the holder may still draw on, counting the overdraft allowance.
    pub fn available_funds(&self) -> f64 {
        self.balance + self.overdraft_limit
    }

    pub fn deposit(&mut self, amount: f64) -> Result<()> {
        self.ensure_not_frozen()?;
        if amount <= 0.0 {
            return Err(BankError::Validation(
                "deposit amount must be positive".into(),
            ));
        }
        self.balance += amount;
        Ok(())
    }

    /// Withdraws `amount`, allowing the balance to go negative down to the
    /// overdraft floor. No mutation happens on any failure path.
    pub fn withdraw(&mut self, amount: f64) -> Result<()> {
        self.ensure_not_frozen()?;
        if amount <= 0.0 {
            return Err(BankError::Validation(
                "withdrawal amount must be positive".into(),
            ));
        }
        if amount > self.withdrawal_limit {
            return Err(BankError::LimitExceeded {
                requested: amount,
                limit: self.withdrawal_limit,
            });
        }
        if self.balance - amount < -self.overdraft_limit {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.available_funds(),
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Credits interest on a savings account and returns the credited amount.
    pub fn apply_interest(&mut self) -> Result<f64> {
        self.ensure_not_frozen()?;
        let rate = self.interest_rate().ok_or_else(|| {
            BankError::Validation(format!("account `{}` is not a savings account", self.name))
        })?;
        let interest = self.balance * rate / 100.0;
        self.balance += interest;
        Ok(interest)
    }

    /// Charges overdraft interest when the balance is negative (the debt
    /// grows) and returns the charged amount, `0.0` otherwise.
    pub fn apply_overdraft_interest(&mut self) -> Result<f64> {
        self.ensure_not_frozen()?;
        if self.balance >= 0.0 {
            return Ok(0.0);
        }
        let charge = self.balance.abs() * self.overdraft_interest_rate / 100.0;
        self.balance -= charge;
        Ok(charge)
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// An account may be closed only while it is not in overdraft.
    pub fn can_close(&self) -> bool {
        self.balance >= 0.0
    }

    pub fn set_withdrawal_limit(&mut self, limit: f64) -> Result<()> {
        Self::ensure_non_negative(limit, "withdrawal limit")?;
        self.withdrawal_limit = limit;
        Ok(())
    }

    pub fn set_overdraft_limit(&mut self, limit: f64) -> Result<()> {
        Self::ensure_non_negative(limit, "overdraft limit")?;
        self.overdraft_limit = limit;
        Ok(())
    }

    pub fn set_overdraft_interest_rate(&mut self, rate: f64) -> Result<()> {
        Self::ensure_non_negative(rate, "overdraft interest rate")?;
        self.overdraft_interest_rate = rate;
        Ok(())
    }

    /// Restores a balance read back from storage, bypassing deposit
    /// validation. Only the storage layer has a reason to call this.
    pub(crate) fn restore_balance(&mut self, balance: f64) {
        self.balance = balance;
    }

    fn ensure_not_frozen(&self) -> Result<()> {
        if self.frozen {
            Err(BankError::Frozen(self.name.clone()))
        } else {
            Ok(())
        }
    }

    fn ensure_non_negative(value: f64, what: &str) -> Result<()> {
        if value < 0.0 {
            Err(BankError::Validation(format!(
                "{} cannot be negative",
                what
            )))
        } else {
            Ok(())
        }
    }
}
