use anyhow::Result;
use chrono::Utc;

use recordkit_core::Repository;
use recordkit_finance::{
    Account, ApplyOutcome, BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor,
    OverdraftPolicy, Transaction, TransactionId, TransactionProcessor, format_amount,
};

fn main() -> Result<()> {
    recordkit_observability::init();

    let mut account = Account::new("ACC246", 1_500_00, OverdraftPolicy::Reject);
    let mut ledger: Repository<Transaction> = Repository::new();

    println!(
        "Account {} opening balance: {}",
        account.number(),
        format_amount(account.balance())
    );

    let now = Utc::now();
    let transactions = [
        Transaction {
            id: TransactionId::new(1),
            occurred_at: now,
            amount: 180_00,
            category: "Groceries".to_string(),
        },
        Transaction {
            id: TransactionId::new(2),
            occurred_at: now,
            amount: 520_00,
            category: "Utilities".to_string(),
        },
        Transaction {
            id: TransactionId::new(3),
            occurred_at: now,
            amount: 900_00,
            category: "Entertainment".to_string(),
        },
    ];
    let processors: [&dyn TransactionProcessor; 3] = [
        &MobileMoneyProcessor,
        &BankTransferProcessor,
        &CryptoWalletProcessor,
    ];

    for (transaction, processor) in transactions.into_iter().zip(processors) {
        println!("{}", processor.process(&transaction));

        match account.apply(&transaction) {
            ApplyOutcome::Applied { new_balance } => {
                println!(
                    "Transaction of {} for {} applied. New Balance: {}",
                    format_amount(transaction.amount),
                    transaction.category,
                    format_amount(new_balance)
                );
            }
            ApplyOutcome::InsufficientFunds { balance, requested } => {
                tracing::warn!(
                    account = account.number(),
                    "transaction refused: insufficient funds"
                );
                println!(
                    "Insufficient funds: balance {} cannot cover {}",
                    format_amount(balance),
                    format_amount(requested)
                );
            }
        }

        // Refused transactions are still recorded; only the balance is spared.
        ledger.add(transaction)?;
    }

    println!("\nRecorded transactions:");
    for transaction in ledger.iter() {
        println!(
            "  #{} {} {} ({})",
            transaction.id,
            format_amount(transaction.amount),
            transaction.category,
            transaction.occurred_at.format("%Y-%m-%d %H:%M")
        );
    }
    println!(
        "Closing balance for {}: {}",
        account.number(),
        format_amount(account.balance())
    );

    Ok(())
}
