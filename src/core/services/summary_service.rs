//! Weekly aggregates derived from the session: debt contribution, planned
//! versus actual spending, surplus and days off.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::calendar::{signed_days_between, FilterState};
use crate::core::services::LogService;
use crate::core::session::Session;
use crate::ledger::{self, BudgetSettings, Debt};

/// How many days off the current surplus covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Affordability {
    Unbounded,
    Days(u64),
}

impl fmt::Display for Affordability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affordability::Unbounded => f.write_str("unlimited"),
            Affordability::Days(days) => write!(f, "{} day(s)", days),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklySummary {
    pub filter: FilterState,
    pub weekly_income: i64,
    pub fixed_expenses: i64,
    pub food_budget: i64,
    pub misc_budget: i64,
    pub actual_food: i64,
    pub actual_misc: i64,
    pub gas_fills: usize,
    pub debt_contribution: f64,
    pub total_planned: f64,
    pub total_actual: f64,
    pub financial_status: f64,
    pub total_remaining_debt: i64,
    pub days_off: Affordability,
    pub active_debts: usize,
    pub completed_debts: usize,
    pub overdue_debts: usize,
}

impl WeeklySummary {
    pub fn is_surplus(&self) -> bool {
        self.financial_status >= 0.0
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Builds the dashboard figures for the ISO week containing `now`.
    pub fn weekly_summary(session: &Session, now: NaiveDateTime) -> WeeklySummary {
        let week = FilterState::current_week(now);
        let partition = ledger::partition(&session.debts);
        let settings = &session.settings;

        let actual_misc = LogService::expense_total(session, &week);
        let gas_fills = LogService::gas_in_filter(session, &week).len();
        let debt_contribution = weekly_debt_contribution(partition.active.iter().copied(), now);
        let total_planned = total_planned(settings, debt_contribution);
        let total_actual = total_actual(settings, actual_misc, debt_contribution);
        let financial_status = financial_status(settings.weekly_income, total_actual);
        let total_remaining_debt = total_remaining(partition.active.iter().copied());
        let overdue_debts = partition
            .active
            .iter()
            .filter(|debt| debt.status(now).is_overdue)
            .count();

        debug!(
            week = %week.label(),
            contribution = debt_contribution,
            planned = total_planned,
            actual = total_actual,
            "weekly summary recomputed"
        );

        WeeklySummary {
            filter: week,
            weekly_income: settings.weekly_income,
            fixed_expenses: settings.fixed_expenses(),
            food_budget: settings.food_budget,
            misc_budget: settings.misc_budget,
            actual_food: settings.actual_food,
            actual_misc,
            gas_fills,
            debt_contribution,
            total_planned,
            total_actual,
            financial_status,
            total_remaining_debt,
            days_off: days_off_affordable(total_remaining_debt, total_actual, financial_status),
            active_debts: partition.active.len(),
            completed_debts: partition.completed.len(),
            overdue_debts,
        }
    }
}

/// Amortizes each active debt's remaining balance over the weeks left until
/// it is due. Debts due now or overdue contribute their full remaining balance.
pub fn weekly_debt_contribution<'a>(
    active: impl IntoIterator<Item = &'a Debt>,
    now: NaiveDateTime,
) -> f64 {
    active
        .into_iter()
        .filter(|debt| debt.remaining() > 0)
        .map(|debt| {
            let remaining = debt.remaining() as f64;
            let days = signed_days_between(now, debt.due_instant());
            let weeks_left = (days as f64 / 7.0).ceil() as i64;
            if weeks_left <= 0 {
                remaining
            } else {
                remaining / weeks_left as f64
            }
        })
        .sum()
}

/// Debt contribution is counted in both planned and actual totals.
pub fn total_planned(settings: &BudgetSettings, debt_contribution: f64) -> f64 {
    settings.fixed_expenses() as f64
        + settings.food_budget as f64
        + settings.misc_budget as f64
        + debt_contribution
}

pub fn total_actual(settings: &BudgetSettings, actual_misc: i64, debt_contribution: f64) -> f64 {
    settings.fixed_expenses() as f64
        + settings.actual_food as f64
        + actual_misc as f64
        + debt_contribution
}

/// Surplus when non-negative, deficit otherwise.
pub fn financial_status(weekly_income: i64, total_actual: f64) -> f64 {
    weekly_income as f64 - total_actual
}

pub fn total_remaining<'a>(active: impl IntoIterator<Item = &'a Debt>) -> i64 {
    active
        .into_iter()
        .fold(0i64, |total, debt| total.saturating_add(debt.remaining().max(0)))
}

pub fn days_off_affordable(
    total_remaining_debt: i64,
    total_actual: f64,
    financial_status: f64,
) -> Affordability {
    if total_remaining_debt <= 0 {
        return Affordability::Unbounded;
    }
    let daily_spend = total_actual / 7.0;
    if daily_spend <= 0.0 {
        return Affordability::Unbounded;
    }
    if financial_status <= 0.0 {
        return Affordability::Days(0);
    }
    Affordability::Days((financial_status / daily_spend).floor() as u64)
}
