//! Fuel and miscellaneous-spending logs.

use chrono::NaiveDateTime;
use tracing::info;
use uuid::Uuid;

use crate::calendar::FilterState;
use crate::core::services::{ServiceError, ServiceResult};
use crate::core::session::Session;
use crate::errors::LedgerError;
use crate::ledger::{self, ExpenseLog, GasLog};

pub struct LogService;

impl LogService {
    pub fn log_gas(session: &mut Session, at: NaiveDateTime) -> Uuid {
        let entry = GasLog::new(at);
        let id = entry.id;
        session.gas_logs.push(entry);
        info!(log = %id, at = %at, "gas fill-up logged");
        id
    }

    pub fn remove_gas(session: &mut Session, id: Uuid) -> ServiceResult<GasLog> {
        let index = session
            .gas_logs
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(LedgerError::LogNotFound(id))?;
        Ok(session.gas_logs.remove(index))
    }

    pub fn add_expense(
        session: &mut Session,
        name: &str,
        amount: i64,
        at: NaiveDateTime,
    ) -> ServiceResult<Uuid> {
        if name.trim().is_empty() {
            return Err(ServiceError::Invalid("expense name must not be empty".into()));
        }
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount).into());
        }
        let entry = ExpenseLog::new(name.trim(), amount, at);
        let id = entry.id;
        session.expense_logs.push(entry);
        info!(log = %id, name, amount, "expense logged");
        Ok(id)
    }

    pub fn remove_expense(session: &mut Session, id: Uuid) -> ServiceResult<ExpenseLog> {
        let index = session
            .expense_logs
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(LedgerError::LogNotFound(id))?;
        let removed = session.expense_logs.remove(index);
        info!(log = %id, name = %removed.name, "expense removed");
        Ok(removed)
    }

    pub fn gas_in_filter<'a>(session: &'a Session, filter: &FilterState) -> Vec<&'a GasLog> {
        ledger::filter_logs(&session.gas_logs, filter)
    }

    pub fn expenses_in_filter<'a>(
        session: &'a Session,
        filter: &FilterState,
    ) -> Vec<&'a ExpenseLog> {
        ledger::filter_logs(&session.expense_logs, filter)
    }

    pub fn expense_total(session: &Session, filter: &FilterState) -> i64 {
        ledger::expense_total(Self::expenses_in_filter(session, filter))
    }
}
