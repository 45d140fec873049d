pub mod debt_service;
pub mod log_service;
pub mod summary_service;
pub mod sync_service;

pub use debt_service::DebtService;
pub use log_service::LogService;
pub use summary_service::{Affordability, SummaryService, WeeklySummary};
pub use sync_service::SyncService;

use crate::errors::LedgerError;
use crate::sync::SyncError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error("{0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests;
