use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use recordkit_core::{Entity, RecordId};

/// Transaction identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub RecordId);

impl TransactionId {
    pub const fn new(raw: u32) -> Self {
        Self(RecordId::new(raw))
    }
}

impl core::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A single spending transaction (immutable once recorded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub occurred_at: DateTime<Utc>,
    /// Amount in smallest unit (e.g., cents). Positive draws the account down.
    pub amount: i64,
    pub category: String, // e.g. "Groceries"
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Format an amount in smallest units as a dollar string, e.g. `-$1,234.56`.
pub fn format_amount(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let cents = amount.unsigned_abs();
    let dollars = (cents / 100).to_string();
    let rem = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{rem:02}")
}

/// A payment channel capable of processing transactions.
///
/// Channels differ only in their display name; the confirmation line is
/// shared by every channel.
pub trait TransactionProcessor {
    /// Human-readable channel name, e.g. "Bank Transfer".
    fn channel(&self) -> &'static str;

    /// Process a transaction, returning the confirmation line.
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[{}] Processed {} for {}",
            self.channel(),
            format_amount(transaction.amount),
            transaction.category
        )
    }
}

/// Processes transactions over bank transfer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn channel(&self) -> &'static str {
        "Bank Transfer"
    }
}

/// Processes transactions over a mobile money wallet.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn channel(&self) -> &'static str {
        "Mobile Money"
    }
}

/// Processes transactions over a crypto wallet.
#[derive(Debug, Clone, Copy, Default)]
pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn channel(&self) -> &'static str {
        "Crypto Wallet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn test_transaction(amount: i64, category: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(1),
            occurred_at: Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap(),
            amount,
            category: category.to_string(),
        }
    }

    #[test]
    fn amounts_format_with_cents_and_thousands_separators() {
        assert_eq!(format_amount(0), "$0.00");
        assert_eq!(format_amount(5), "$0.05");
        assert_eq!(format_amount(180_00), "$180.00");
        assert_eq!(format_amount(1_234_56), "$1,234.56");
        assert_eq!(format_amount(-300_00), "-$300.00");
        assert_eq!(format_amount(1_000_000_00), "$1,000,000.00");
    }

    #[test]
    fn processing_reports_channel_amount_and_category() {
        let transaction = test_transaction(180_00, "Groceries");
        assert_eq!(
            BankTransferProcessor.process(&transaction),
            "[Bank Transfer] Processed $180.00 for Groceries"
        );
    }

    #[test]
    fn each_channel_announces_its_own_name() {
        let transaction = test_transaction(900_00, "Entertainment");
        let processors: [&dyn TransactionProcessor; 3] = [
            &BankTransferProcessor,
            &MobileMoneyProcessor,
            &CryptoWalletProcessor,
        ];

        let lines: Vec<String> = processors
            .iter()
            .map(|processor| processor.process(&transaction))
            .collect();

        assert!(lines[0].starts_with("[Bank Transfer]"));
        assert!(lines[1].starts_with("[Mobile Money]"));
        assert!(lines[2].starts_with("[Crypto Wallet]"));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: formatting never loses digits; stripping the decoration
        /// recovers the absolute amount, and the sign prefix appears exactly
        /// for negatives.
        #[test]
        fn formatted_amount_preserves_digits_and_sign(amount in i64::MIN..i64::MAX) {
            let formatted = format_amount(amount);

            let digits: String = formatted.chars().filter(char::is_ascii_digit).collect();
            prop_assert_eq!(digits.parse::<u128>().unwrap(), u128::from(amount.unsigned_abs()));

            prop_assert_eq!(formatted.starts_with('-'), amount < 0);
        }
    }
}
