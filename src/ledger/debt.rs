use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{
    self, format_month_label, start_of_day, FilterKind, FilterState, DAY_MILLIS,
};
use crate::errors::LedgerError;

/// Debts due within this many days are flagged as urgent.
pub const URGENT_WINDOW_DAYS: i64 = 3;

/// The (month, year) a debt's balance is attributed to for budget filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BudgetBucket {
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month0: u32,
}

impl BudgetBucket {
    pub fn new(year: i32, month0: u32) -> Result<Self, LedgerError> {
        if month0 > 11 {
            return Err(LedgerError::InvalidDate(format!(
                "month index {} is outside 0..=11",
                month0
            )));
        }
        Ok(Self { year, month0 })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn label(&self) -> String {
        format_month_label(self.year, self.month0)
    }
}

impl fmt::Display for BudgetBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month0 + 1)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Payment,
    Withdrawal,
}

/// One entry of a debt's append-only ledger. `amount` is always positive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebtTransaction {
    pub id: Uuid,
    pub date: NaiveDateTime,
    pub amount: i64,
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DebtTransaction {
    fn new(kind: TransactionKind, amount: i64, date: NaiveDateTime, reason: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            kind,
            reason,
        }
    }

    /// Contribution of this entry to `amount_paid`.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            TransactionKind::Payment => self.amount,
            TransactionKind::Withdrawal => -self.amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    pub source: String,
    pub total_amount: i64,
    pub amount_paid: i64,
    pub due_date: NaiveDate,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<BudgetBucket>,
    #[serde(default)]
    pub transactions: Vec<DebtTransaction>,
}

impl Debt {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        total_amount: i64,
        due_date: NaiveDate,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            source: source.into(),
            total_amount,
            amount_paid: 0,
            due_date,
            created_at,
            target: None,
            transactions: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: BudgetBucket) -> Self {
        self.target = Some(target);
        self
    }

    /// Local midnight of the due date.
    pub fn due_instant(&self) -> NaiveDateTime {
        start_of_day(self.due_date)
    }

    pub fn remaining(&self) -> i64 {
        self.total_amount.saturating_sub(self.amount_paid)
    }

    pub fn is_completed(&self) -> bool {
        self.amount_paid >= self.total_amount
    }

    /// Paid share of the total in `0.0..=1.0`.
    pub fn progress_ratio(&self) -> f64 {
        if self.total_amount <= 0 {
            return 1.0;
        }
        (self.amount_paid as f64 / self.total_amount as f64).clamp(0.0, 1.0)
    }

    /// Resolves the budget bucket: the explicit target, else the due date's month.
    pub fn bucket(&self) -> BudgetBucket {
        self.target.unwrap_or_else(|| BudgetBucket::of(self.due_date))
    }

    /// Year and month filters match on the resolved bucket; week filters on the due date.
    pub fn matches_filter(&self, filter: &FilterState) -> bool {
        let bucket = self.bucket();
        match filter.kind {
            FilterKind::All => true,
            FilterKind::Year => bucket.year == filter.year,
            FilterKind::Month => filter
                .month0
                .map(|month0| bucket.year == filter.year && bucket.month0 == month0)
                .unwrap_or(false),
            FilterKind::Week => calendar::is_in_filter_range(self.due_instant(), filter),
        }
    }

    /// Records a payment. Amounts that would overflow the paid total are
    /// rejected and the debt is left untouched.
    pub fn apply_payment(
        &mut self,
        amount: i64,
        now: NaiveDateTime,
    ) -> Result<&DebtTransaction, LedgerError> {
        ensure_positive(amount)?;
        self.amount_paid = self
            .amount_paid
            .checked_add(amount)
            .ok_or(LedgerError::InvalidAmount(amount))?;
        Ok(self.append(DebtTransaction::new(
            TransactionKind::Payment,
            amount,
            now,
            None,
        )))
    }

    /// Takes back part of what was paid. The debt is left untouched on error.
    pub fn apply_withdrawal(
        &mut self,
        amount: i64,
        reason: impl Into<String>,
        now: NaiveDateTime,
    ) -> Result<&DebtTransaction, LedgerError> {
        ensure_positive(amount)?;
        if amount > self.amount_paid {
            return Err(LedgerError::InsufficientPaidBalance {
                requested: amount,
                available: self.amount_paid,
            });
        }
        self.amount_paid = (self.amount_paid - amount).max(0);
        Ok(self.append(DebtTransaction::new(
            TransactionKind::Withdrawal,
            amount,
            now,
            Some(reason.into()),
        )))
    }

    fn append(&mut self, transaction: DebtTransaction) -> &DebtTransaction {
        self.transactions.push(transaction);
        &self.transactions[self.transactions.len() - 1]
    }

    pub fn status(&self, now: NaiveDateTime) -> DebtStatus {
        let remaining = self.remaining();
        let due = self.due_instant();
        let millis_left = (due - now).num_milliseconds();
        let days_left = (millis_left as f64 / DAY_MILLIS as f64).ceil() as i64;
        DebtStatus {
            remaining,
            is_overdue: now > due && remaining > 0,
            days_left,
            band: StatusBand::from_days_left(days_left),
        }
    }

    /// Replays the transaction log; equals `amount_paid` for debts mutated only
    /// through the ledger operations.
    pub fn replayed_paid(&self) -> i64 {
        self.transactions
            .iter()
            .fold(0i64, |paid, txn| paid.saturating_add(txn.signed_amount()).max(0))
    }

    pub fn apply_patch(&mut self, patch: DebtPatch) -> Result<(), LedgerError> {
        if let Some(total) = patch.total_amount {
            if total < 0 {
                return Err(LedgerError::InvalidAmount(total));
            }
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(total) = patch.total_amount {
            self.total_amount = total;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(target) = patch.target {
            self.target = target;
        }
        Ok(())
    }
}

fn ensure_positive(amount: i64) -> Result<(), LedgerError> {
    if amount <= 0 {
        Err(LedgerError::InvalidAmount(amount))
    } else {
        Ok(())
    }
}

/// Direct edits to a debt. `target: Some(None)` clears the explicit bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebtPatch {
    pub name: Option<String>,
    pub source: Option<String>,
    pub total_amount: Option<i64>,
    pub due_date: Option<NaiveDate>,
    pub target: Option<Option<BudgetBucket>>,
}

impl DebtPatch {
    pub fn is_empty(&self) -> bool {
        self == &DebtPatch::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusBand {
    Overdue,
    Urgent,
    Normal,
}

impl StatusBand {
    pub fn from_days_left(days_left: i64) -> Self {
        if days_left < 0 {
            StatusBand::Overdue
        } else if days_left <= URGENT_WINDOW_DAYS {
            StatusBand::Urgent
        } else {
            StatusBand::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBand::Overdue => "overdue",
            StatusBand::Urgent => "urgent",
            StatusBand::Normal => "normal",
        }
    }
}

/// Derived view of a debt at a given instant. `days_left` is negative once overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebtStatus {
    pub remaining: i64,
    pub is_overdue: bool,
    pub days_left: i64,
    pub band: StatusBand,
}

#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub active: Vec<&'a Debt>,
    pub completed: Vec<&'a Debt>,
}

/// Splits debts by completion, preserving relative order on each side.
pub fn partition(debts: &[Debt]) -> Partition<'_> {
    let (completed, active): (Vec<&Debt>, Vec<&Debt>) =
        debts.iter().partition(|debt| debt.is_completed());
    Partition { active, completed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn sample() -> Debt {
        Debt::new(
            "Laptop",
            "Bank",
            1_000,
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            at(2024, 5, 1, 8),
        )
    }

    #[test]
    fn bucket_falls_back_to_due_date() {
        let debt = sample();
        assert_eq!(debt.bucket(), BudgetBucket { year: 2024, month0: 5 });
        let retargeted = debt.with_target(BudgetBucket::new(2024, 6).unwrap());
        assert_eq!(retargeted.bucket().month0, 6);
    }

    #[test]
    fn bucket_rejects_month_out_of_range() {
        assert!(matches!(
            BudgetBucket::new(2024, 12),
            Err(LedgerError::InvalidDate(_))
        ));
    }

    #[test]
    fn status_bands_follow_days_left() {
        let debt = sample();
        assert_eq!(debt.status(at(2024, 6, 1, 0)).band, StatusBand::Normal);
        assert_eq!(debt.status(at(2024, 6, 8, 12)).band, StatusBand::Urgent);
        let late = debt.status(at(2024, 6, 12, 0));
        assert_eq!(late.band, StatusBand::Overdue);
        assert_eq!(late.days_left, -2);
        assert!(late.is_overdue);
    }

    #[test]
    fn partial_day_rounds_days_left_up() {
        let debt = sample();
        let status = debt.status(at(2024, 6, 8, 12));
        assert_eq!(status.days_left, 2);
        assert!(!status.is_overdue);
    }

    #[test]
    fn completed_debt_is_never_overdue() {
        let mut debt = sample();
        debt.apply_payment(1_000, at(2024, 6, 1, 9)).unwrap();
        let status = debt.status(at(2024, 7, 1, 0));
        assert!(!status.is_overdue);
        assert_eq!(status.remaining, 0);
    }

    #[test]
    fn progress_ratio_is_clamped() {
        let mut debt = sample();
        debt.apply_payment(1_500, at(2024, 5, 2, 9)).unwrap();
        assert_eq!(debt.progress_ratio(), 1.0);
    }

    #[test]
    fn overflowing_payment_is_rejected_without_changes() {
        let mut debt = sample();
        debt.apply_payment(i64::MAX, at(2024, 5, 2, 9)).unwrap();
        assert!(matches!(
            debt.apply_payment(i64::MAX, at(2024, 5, 3, 9)),
            Err(LedgerError::InvalidAmount(i64::MAX))
        ));
        assert_eq!(debt.amount_paid, i64::MAX);
        assert_eq!(debt.transactions.len(), 1);
        assert_eq!(debt.remaining(), 1_000 - i64::MAX);
    }

    #[test]
    fn patch_rejects_negative_total_without_applying_other_fields() {
        let mut debt = sample();
        let patch = DebtPatch {
            name: Some("Phone".into()),
            total_amount: Some(-5),
            ..DebtPatch::default()
        };
        assert_eq!(debt.apply_patch(patch), Err(LedgerError::InvalidAmount(-5)));
        assert_eq!(debt.name, "Laptop");
    }

    #[test]
    fn patch_can_clear_target() {
        let mut debt = sample().with_target(BudgetBucket::new(2024, 8).unwrap());
        debt.apply_patch(DebtPatch {
            target: Some(None),
            ..DebtPatch::default()
        })
        .unwrap();
        assert!(debt.target.is_none());
    }
}
