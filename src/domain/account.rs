use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use std::fmt;

/// A non-negative monetary value held by an account.
///
/// Wraps `rust_decimal::Decimal` so fractional currency units are exact and the
/// non-negative rule is checked once, at construction. Arithmetic is checked:
/// a result outside the `Decimal` range is reported instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Balance(Decimal);

/// A strictly positive amount moved by a deposit or a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::InvalidAmount {
                amount: value,
                reason: "amount must be positive",
            })
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            Err(LedgerError::InvalidAmount {
                amount: value,
                reason: "balance cannot be negative",
            })
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Adds `amount`, or returns `None` when the result exceeds `Decimal::MAX`.
    pub fn checked_add(self, amount: Amount) -> Option<Self> {
        self.0.checked_add(amount.0).map(Self)
    }

    /// Subtracts `amount`, or returns `None` when the result would go negative.
    pub fn checked_sub(self, amount: Amount) -> Option<Self> {
        if amount.0 > self.0 {
            None
        } else {
            Some(Self(self.0 - amount.0))
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// One ledger entry, identified by its owner and nickname.
#[derive(Debug, PartialEq, Clone)]
pub struct Account {
    owner: String,
    nickname: String,
    balance: Balance,
}

impl Account {
    pub fn new(owner: impl Into<String>, nickname: impl Into<String>, balance: Balance) -> Self {
        Self {
            owner: owner.into(),
            nickname: nickname.into(),
            balance,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Exact, case-sensitive match on both owner and nickname.
    pub fn is_match(&self, owner: &str, nickname: &str) -> bool {
        self.owner == owner && self.nickname == nickname
    }

    /// Deposits funds, leaving the balance untouched when it would overflow.
    pub fn deposit(&mut self, amount: Amount) -> Result<Balance> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::InvalidAmount {
                amount: amount.value(),
                reason: "balance would overflow",
            })?;
        self.balance = balance;
        Ok(balance)
    }

    /// Withdraws funds, leaving the balance untouched when they are insufficient.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Balance> {
        match self.balance.checked_sub(amount) {
            Some(remaining) => {
                self.balance = remaining;
                Ok(remaining)
            }
            None => Err(LedgerError::InsufficientFunds {
                requested: amount.value(),
                available: self.balance.value(),
            }),
        }
    }
}
