use crate::profile::Classification;
use crate::tax::ng;
use crate::transaction::{Transaction, TransactionType};
use rust_decimal::Decimal;

/// Totals derived from a transaction list. Ephemeral: recomputed on every
/// call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateResult {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`; may be negative
    pub net_income: Decimal,
}

/// Reduce a transaction list to income/expense totals and net income.
///
/// Order-independent and total: an empty list yields all zeros. A record's
/// contribution is signed by its type alone, never by the sign of `amount`.
pub fn aggregate(transactions: &[Transaction]) -> AggregateResult {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => total_income += transaction.amount,
            TransactionType::Expense => total_expenses += transaction.amount,
        }
    }

    AggregateResult {
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
    }
}

/// Estimated annual tax liability for a net income under the given
/// classification. Negative business net income yields a negative figure;
/// callers display it signed rather than clamping.
pub fn estimate(net_income: Decimal, classification: Classification) -> Decimal {
    net_income * ng::rate_for(net_income, classification)
}
