//! Business logic helpers for creating, editing and settling debts.

use chrono::NaiveDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::core::session::Session;
use crate::errors::LedgerError;
use crate::ledger::{
    self, BudgetBucket, Debt, DebtPatch, DebtStatus, DebtTemplate, Partition, RecurringPlan,
};

/// Validated mutations over the session's debt collection.
pub struct DebtService;

impl DebtService {
    /// Adds a single debt and returns its identifier.
    pub fn add(session: &mut Session, debt: Debt) -> ServiceResult<Uuid> {
        if debt.total_amount < 0 {
            return Err(LedgerError::InvalidAmount(debt.total_amount).into());
        }
        if debt.name.trim().is_empty() {
            return Err(ServiceError::Invalid("debt name must not be empty".into()));
        }
        let id = debt.id;
        info!(debt = %id, name = %debt.name, total = debt.total_amount, "debt added");
        session.debts.push(debt);
        Ok(id)
    }

    /// Expands a recurring plan and adds every installment. Returns the new ids in due order.
    pub fn add_recurring(
        session: &mut Session,
        plan: &RecurringPlan,
        now: NaiveDateTime,
    ) -> ServiceResult<Vec<Uuid>> {
        if plan.template.name.trim().is_empty() {
            return Err(ServiceError::Invalid("debt name must not be empty".into()));
        }
        let installments = ledger::expand(plan, now)?;
        if installments.is_empty() {
            warn!(start = %plan.start, end = %plan.end, "recurring plan produced no installments");
        }
        let ids: Vec<Uuid> = installments.iter().map(|debt| debt.id).collect();
        info!(
            cadence = %plan.cadence,
            count = ids.len(),
            name = %plan.template.name,
            "recurring debts generated"
        );
        session.debts.extend(installments);
        Ok(ids)
    }

    /// Adds the debt for a bill issued in `bill`'s month, due on the 10th of the next month.
    pub fn add_templated(
        session: &mut Session,
        template: &DebtTemplate,
        bill: BudgetBucket,
        now: NaiveDateTime,
    ) -> ServiceResult<Uuid> {
        let debt = ledger::templated_due_debt(template, bill, now)?;
        Self::add(session, debt)
    }

    pub fn edit(session: &mut Session, id: Uuid, patch: DebtPatch) -> ServiceResult<()> {
        if patch.is_empty() {
            return Err(ServiceError::Invalid("nothing to update".into()));
        }
        if matches!(&patch.name, Some(name) if name.trim().is_empty()) {
            return Err(ServiceError::Invalid("debt name must not be empty".into()));
        }
        let debt = session.debt_mut(id).ok_or(LedgerError::DebtNotFound(id))?;
        debt.apply_patch(patch)?;
        info!(debt = %id, "debt updated");
        Ok(())
    }

    pub fn remove(session: &mut Session, id: Uuid) -> ServiceResult<Debt> {
        let index = session
            .debts
            .iter()
            .position(|debt| debt.id == id)
            .ok_or(LedgerError::DebtNotFound(id))?;
        let removed = session.debts.remove(index);
        info!(debt = %id, name = %removed.name, "debt removed");
        Ok(removed)
    }

    pub fn pay(
        session: &mut Session,
        id: Uuid,
        amount: i64,
        now: NaiveDateTime,
    ) -> ServiceResult<DebtStatus> {
        let debt = session.debt_mut(id).ok_or(LedgerError::DebtNotFound(id))?;
        if let Err(err) = debt.apply_payment(amount, now) {
            warn!(debt = %id, amount, error = %err, "payment rejected");
            return Err(err.into());
        }
        let status = debt.status(now);
        info!(
            debt = %id,
            amount,
            remaining = status.remaining,
            completed = debt.is_completed(),
            "payment recorded"
        );
        Ok(status)
    }

    /// Withdraws part of what was paid. A non-empty reason is required.
    pub fn withdraw(
        session: &mut Session,
        id: Uuid,
        amount: i64,
        reason: &str,
        now: NaiveDateTime,
    ) -> ServiceResult<DebtStatus> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ServiceError::Invalid(
                "a reason is required for withdrawals".into(),
            ));
        }
        let debt = session.debt_mut(id).ok_or(LedgerError::DebtNotFound(id))?;
        if let Err(err) = debt.apply_withdrawal(amount, reason, now) {
            warn!(debt = %id, amount, error = %err, "withdrawal rejected");
            return Err(err.into());
        }
        let status = debt.status(now);
        info!(debt = %id, amount, reason, remaining = status.remaining, "withdrawal recorded");
        Ok(status)
    }

    pub fn status(session: &Session, id: Uuid, now: NaiveDateTime) -> ServiceResult<DebtStatus> {
        session
            .debt(id)
            .map(|debt| debt.status(now))
            .ok_or_else(|| LedgerError::DebtNotFound(id).into())
    }

    /// Status of every debt, in collection order.
    pub fn statuses(session: &Session, now: NaiveDateTime) -> Vec<(&Debt, DebtStatus)> {
        session
            .debts
            .iter()
            .map(|debt| (debt, debt.status(now)))
            .collect()
    }

    pub fn partition(session: &Session) -> Partition<'_> {
        ledger::partition(&session.debts)
    }

    /// Debts whose resolved bucket (or due date, for week filters) matches the session filter.
    pub fn in_filter(session: &Session) -> Vec<&Debt> {
        session
            .debts
            .iter()
            .filter(|debt| debt.matches_filter(&session.filter))
            .collect()
    }
}
