use thiserror::Error;
use uuid::Uuid;

/// Error type that captures ledger precondition failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (amounts must be greater than zero)")]
    InvalidAmount(i64),
    #[error("Insufficient paid balance: requested {requested}, available {available}")]
    InsufficientPaidBalance { requested: i64, available: i64 },
    #[error("Debt not found: {0}")]
    DebtNotFound(Uuid),
    #[error("Log entry not found: {0}")]
    LogNotFound(Uuid),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
