use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::containers::domain::Guarded;
use crate::core::error::{LabError, LabResult};
use crate::utils::validate::{ensure_finite, ensure_non_negative, ensure_positive, parse_validated};

/// BankAccount tracks the balance of a single owner. The balance never drops below zero and
/// has no upper cap.
///
/// ```
/// use oop_labs::containers::domain::bank_account::BankAccount;
///
/// let mut account = BankAccount::new("John Doe", 1000.0).unwrap();
/// account.withdraw(100.0).unwrap();
/// assert_eq!(900.0, account.get_balance());
/// assert!(account.withdraw(5000.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BankAccountRecord")]
pub struct BankAccount {
    owner: String,
    balance: f64,
}

// BankAccountRecord is the unchecked wire shape of an account
#[derive(Debug, Deserialize)]
struct BankAccountRecord {
    owner: String,
    balance: f64,
}

impl BankAccount {
    pub fn new(owner: &str, balance: f64) -> LabResult<Self> {
        let balance = ensure_non_negative(balance, "balance")?;
        Ok(Self {
            owner: owner.to_string(),
            balance,
        })
    }

    pub fn from_json(json: &str) -> LabResult<Self> {
        parse_validated::<BankAccountRecord, Self>(json)
    }

    pub fn owner(&self) -> &str {
        self.owner.as_str()
    }

    pub fn deposit(&mut self, amount: f64) -> LabResult<()> {
        let amount = ensure_positive(amount, "deposit amount")?;
        let balance = ensure_finite(self.balance + amount, "balance")?;
        self.balance = balance;
        debug!(owner = self.owner.as_str(), amount, balance, "deposited");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: f64) -> LabResult<()> {
        let amount = ensure_positive(amount, "withdrawal amount")?;
        if amount > self.balance {
            return Err(LabError::validation(
                format!("insufficient funds: balance {} is less than {}", self.balance, amount).as_str(),
                Some("insufficient_funds".to_string())));
        }
        self.balance -= amount;
        debug!(owner = self.owner.as_str(), amount, balance = self.balance, "withdrew");
        Ok(())
    }

    pub fn get_balance(&self) -> f64 {
        self.balance
    }
}

impl Guarded for BankAccount {
    type Amount = f64;

    fn usage(&self) -> f64 {
        self.balance
    }

    fn bound(&self) -> Option<f64> {
        None
    }

    fn increase(&mut self, amount: f64) -> LabResult<()> {
        self.deposit(amount)
    }

    fn decrease(&mut self, amount: f64) -> LabResult<()> {
        self.withdraw(amount)
    }
}

impl TryFrom<BankAccountRecord> for BankAccount {
    type Error = LabError;

    fn try_from(other: BankAccountRecord) -> Result<Self, Self::Error> {
        BankAccount::new(other.owner.as_str(), other.balance)
    }
}
