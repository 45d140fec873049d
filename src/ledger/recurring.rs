//! Expansion of recurring debt plans into independent installment debts.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::cadence::{next_month, Cadence};
use super::debt::{BudgetBucket, Debt};
use crate::errors::LedgerError;

/// Day of month on which templated bills fall due.
pub const TEMPLATED_DUE_DAY: u32 = 10;

/// Name, source and per-installment amount shared by generated debts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebtTemplate {
    pub name: String,
    pub source: String,
    pub amount: i64,
}

impl DebtTemplate {
    pub fn new(name: impl Into<String>, source: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            amount,
        }
    }

    fn validate(&self) -> Result<(), LedgerError> {
        if self.amount < 0 {
            return Err(LedgerError::InvalidAmount(self.amount));
        }
        Ok(())
    }
}

/// A template repeated on `cadence` from `start` through `end` inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurringPlan {
    pub template: DebtTemplate,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub cadence: Cadence,
}

impl RecurringPlan {
    pub fn new(template: DebtTemplate, start: NaiveDate, end: NaiveDate, cadence: Cadence) -> Self {
        Self {
            template,
            start,
            end,
            cadence,
        }
    }

    /// Due dates of every installment, in order.
    pub fn schedule(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut index = 0u32;
        while let Some(current) = self.cadence.nth_date(self.start, index) {
            if current > self.end {
                break;
            }
            dates.push(current);
            index += 1;
        }
        dates
    }

    fn installment_name(&self, index: usize, due: NaiveDate) -> String {
        match self.cadence {
            Cadence::Monthly => format!(
                "{} (Tháng {}/{})",
                self.template.name,
                due.month(),
                due.year()
            ),
            Cadence::Weekly => format!("{} (Kỳ {})", self.template.name, index + 1),
        }
    }
}

/// Produces one debt per scheduled installment.
///
/// Each debt gets a fresh id, an empty ledger and its own due month as target
/// bucket; nothing links installments together afterwards. A plan whose
/// `start` is after `end` yields an empty list.
pub fn expand(plan: &RecurringPlan, created_at: NaiveDateTime) -> Result<Vec<Debt>, LedgerError> {
    plan.template.validate()?;
    let debts = plan
        .schedule()
        .into_iter()
        .enumerate()
        .map(|(index, due)| {
            Debt::new(
                plan.installment_name(index, due),
                plan.template.source.clone(),
                plan.template.amount,
                due,
                created_at,
            )
            .with_target(BudgetBucket::of(due))
        })
        .collect();
    Ok(debts)
}

/// Builds the single debt for a bill issued in `bill`'s month.
///
/// The bill is due on the 10th of the following month (December bills roll
/// into January of the next year), and that month is also its budget bucket.
pub fn templated_due_debt(
    template: &DebtTemplate,
    bill: BudgetBucket,
    created_at: NaiveDateTime,
) -> Result<Debt, LedgerError> {
    template.validate()?;
    let bill = BudgetBucket::new(bill.year, bill.month0)?;
    let (year, month0) = next_month(bill.year, bill.month0);
    let due = NaiveDate::from_ymd_opt(year, month0 + 1, TEMPLATED_DUE_DAY).ok_or_else(|| {
        LedgerError::InvalidDate(format!("no due date after bill month {}", bill))
    })?;
    let name = format!("{} ({})", template.name, bill.label());
    Ok(
        Debt::new(name, template.source.clone(), template.amount, due, created_at)
            .with_target(BudgetBucket { year, month0 }),
    )
}
