use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// What an account does when a transaction would overdraw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverdraftPolicy {
    /// Apply every transaction; the balance may go negative.
    AllowNegative,
    /// Refuse any transaction larger than the current balance.
    Reject,
}

/// Result of applying a transaction to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The transaction was applied; carries the balance after the draw.
    Applied { new_balance: i64 },
    /// The transaction was refused; the balance is unchanged.
    InsufficientFunds { balance: i64, requested: i64 },
}

/// A spending account with a configurable overdraft policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: String, // e.g. "ACC246"
    /// Balance in smallest unit (e.g., cents).
    balance: i64,
    policy: OverdraftPolicy,
}

impl Account {
    pub fn new(number: impl Into<String>, balance: i64, policy: OverdraftPolicy) -> Self {
        Self {
            number: number.into(),
            balance,
            policy,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn policy(&self) -> OverdraftPolicy {
        self.policy
    }

    /// Draw a transaction's amount from the account, honoring the policy.
    pub fn apply(&mut self, transaction: &Transaction) -> ApplyOutcome {
        if self.policy == OverdraftPolicy::Reject && transaction.amount > self.balance {
            return ApplyOutcome::InsufficientFunds {
                balance: self.balance,
                requested: transaction.amount,
            };
        }

        self.balance -= transaction.amount;
        ApplyOutcome::Applied {
            new_balance: self.balance,
        }
    }
}
