use crate::{Money, Result};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("{0} amount must be positive")]
    InvalidAmount(Operation),

    #[error("Insufficient funds: withdrawal would take the balance below the overdraft limit of {0}")]
    OverdraftExceeded(Money),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdrawal,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        return match self {
            Operation::Deposit => write!(f, "Deposit"),
            Operation::Withdrawal => write!(f, "Withdrawal"),
        };
    }
}

/// Outcome of a successful deposit or withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub amount: Money,
    pub balance: Money,
}

/// Capabilities every kind of account offers to a session
pub trait BankAccount {
    fn holder(&self) -> &str;

    fn overdraft_limit(&self) -> Money;

    fn deposit(&mut self, amount: Money) -> Result<Receipt>;

    fn withdraw(&mut self, amount: Money) -> Result<Receipt>;

    fn check_balance(&self) -> Money;
}

/// A checking account that may go overdrawn down to a fixed floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentAccount {
    holder: String,
    balance: Money,
    overdraft_limit: Money,
}

impl CurrentAccount {
    pub const OVERDRAFT_LIMIT: Money = Money::units(-1000);

    pub fn new(holder: impl Into<String>, opening_balance: Money) -> Self {
        return Self {
            holder: holder.into(),
            balance: opening_balance,
            overdraft_limit: Self::OVERDRAFT_LIMIT,
        };
    }
}

impl BankAccount for CurrentAccount {
    fn holder(&self) -> &str {
        return &self.holder;
    }

    fn overdraft_limit(&self) -> Money {
        return self.overdraft_limit;
    }

    fn deposit(&mut self, amount: Money) -> Result<Receipt> {
        if !amount.is_positive() {
            Err(AccountError::InvalidAmount(Operation::Deposit))?
        }

        let balance = self.balance.checked_add(&amount)?;

        log::debug!("Deposit of {amount} moves balance from {} to {balance}", self.balance);
        self.balance = balance;

        return Ok(Receipt { amount, balance });
    }

    /// The floor is checked before the sign of `amount`. A non-positive amount can never take
    /// the balance below the floor, so it always reaches the second check and is rejected there.
    fn withdraw(&mut self, amount: Money) -> Result<Receipt> {
        let remaining = self.balance.checked_sub(&amount);

        let breaches_floor = match &remaining {
            Ok(remaining) => *remaining < self.overdraft_limit,
            // unrepresentable: far below the floor if amount is positive, far above otherwise
            Err(_) => amount.is_positive(),
        };

        if breaches_floor {
            Err(AccountError::OverdraftExceeded(self.overdraft_limit))?
        }

        if !amount.is_positive() {
            Err(AccountError::InvalidAmount(Operation::Withdrawal))?
        }

        let balance = remaining?;

        log::debug!("Withdrawal of {amount} moves balance from {} to {balance}", self.balance);
        self.balance = balance;

        return Ok(Receipt { amount, balance });
    }

    fn check_balance(&self) -> Money {
        return self.balance;
    }
}
