//! Debt ledger domain models and the generators that create debts.

pub mod budget;
pub mod cadence;
pub mod debt;
pub mod logs;
pub mod recurring;

pub use budget::BudgetSettings;
pub use cadence::Cadence;
pub use debt::{
    partition, BudgetBucket, Debt, DebtPatch, DebtStatus, DebtTransaction, Partition, StatusBand,
    TransactionKind,
};
pub use logs::{expense_total, filter_logs, Dated, ExpenseLog, GasLog};
pub use recurring::{expand, templated_due_debt, DebtTemplate, RecurringPlan};
