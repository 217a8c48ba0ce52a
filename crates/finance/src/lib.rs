//! Personal finance module (transactions, accounts, payment channels).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod account;
pub mod transaction;

pub use account::{Account, ApplyOutcome, OverdraftPolicy};
pub use transaction::{
    BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor, Transaction,
    TransactionId, TransactionProcessor, format_amount,
};
