use super::{at, date, empty_session};
use crate::core::services::summary_service::{
    days_off_affordable, weekly_debt_contribution, Affordability,
};
use crate::core::services::{DebtService, LogService, SummaryService};
use crate::ledger::{BudgetSettings, Debt};

fn settings() -> BudgetSettings {
    BudgetSettings {
        weekly_income: 3_500_000,
        fuel_cost: 200_000,
        internet_cost: 50_000,
        food_budget: 700_000,
        misc_budget: 300_000,
        actual_food: 650_000,
    }
}

#[test]
fn contribution_is_divided_over_remaining_weeks() {
    let now = at(2024, 3, 4, 0);
    let debt = Debt::new("Loan", "Friend", 700, date(2024, 4, 22), now);
    assert_eq!(weekly_debt_contribution([&debt], now), 100.0);
}

#[test]
fn contribution_is_full_when_due_now_or_overdue() {
    let now = at(2024, 3, 4, 0);
    let due_today = Debt::new("Loan", "Friend", 700, date(2024, 3, 4), now);
    assert_eq!(weekly_debt_contribution([&due_today], now), 700.0);

    let overdue = Debt::new("Loan", "Friend", 700, date(2024, 2, 1), now);
    assert_eq!(weekly_debt_contribution([&overdue], now), 700.0);
}

#[test]
fn contribution_ignores_settled_balances() {
    let now = at(2024, 3, 4, 0);
    let mut paid = Debt::new("Card", "Bank", 300, date(2024, 4, 1), now);
    paid.apply_payment(300, now).unwrap();
    let partial = Debt::new("Card", "Bank", 140, date(2024, 3, 18), now);
    assert_eq!(weekly_debt_contribution([&paid, &partial], now), 70.0);
}

#[test]
fn days_off_is_unbounded_without_debt() {
    assert_eq!(days_off_affordable(0, 1_000.0, -500.0), Affordability::Unbounded);
    assert_eq!(days_off_affordable(-20, 0.0, 0.0), Affordability::Unbounded);
}

#[test]
fn days_off_floors_surplus_over_daily_spend() {
    assert_eq!(days_off_affordable(100, 700.0, 250.0), Affordability::Days(2));
    assert_eq!(days_off_affordable(100, 700.0, -1.0), Affordability::Days(0));
    assert_eq!(days_off_affordable(100, 0.0, 50.0), Affordability::Unbounded);
}

#[test]
fn weekly_summary_combines_budgets_logs_and_debts() {
    let now = at(2024, 3, 6, 12);
    let mut session = empty_session(now);
    session.settings = settings();

    LogService::add_expense(&mut session, "Movie", 120_000, at(2024, 3, 5, 20)).unwrap();
    LogService::add_expense(&mut session, "Old", 999_000, at(2024, 2, 20, 20)).unwrap();
    LogService::log_gas(&mut session, at(2024, 3, 4, 8));

    let debt = Debt::new("Loan", "Friend", 700_000, date(2024, 3, 27), now);
    DebtService::add(&mut session, debt).unwrap();

    let summary = SummaryService::weekly_summary(&session, now);
    assert_eq!(summary.actual_misc, 120_000);
    assert_eq!(summary.gas_fills, 1);
    assert_eq!(summary.fixed_expenses, 250_000);
    // 20.5 days -> 21 days -> 3 weeks left.
    let contribution = 700_000.0 / 3.0;
    assert!((summary.debt_contribution - contribution).abs() < 1e-6);
    assert!((summary.total_planned - (1_250_000.0 + contribution)).abs() < 1e-6);
    assert!((summary.total_actual - (1_020_000.0 + contribution)).abs() < 1e-6);
    assert!(summary.is_surplus());
    assert_eq!(summary.active_debts, 1);
    assert_eq!(summary.overdue_debts, 0);
    assert!(matches!(summary.days_off, Affordability::Days(_)));
}

#[test]
fn weekly_summary_reports_unbounded_days_off_when_debts_are_paid() {
    let now = at(2024, 3, 6, 12);
    let mut session = empty_session(now);
    session.settings = BudgetSettings {
        weekly_income: 0,
        ..settings()
    };
    let id = DebtService::add(
        &mut session,
        Debt::new("Loan", "Friend", 100, date(2024, 3, 27), now),
    )
    .unwrap();
    DebtService::pay(&mut session, id, 100, now).unwrap();

    let summary = SummaryService::weekly_summary(&session, now);
    assert_eq!(summary.days_off, Affordability::Unbounded);
    assert!(!summary.is_surplus());
    assert_eq!(summary.completed_debts, 1);
}

#[test]
fn extreme_settings_and_expenses_do_not_overflow() {
    let now = at(2024, 3, 6, 12);
    let mut session = empty_session(now);
    session.settings = BudgetSettings {
        weekly_income: i64::MAX,
        fuel_cost: i64::MAX,
        internet_cost: i64::MAX,
        food_budget: i64::MAX,
        misc_budget: i64::MAX,
        actual_food: i64::MAX,
    };
    LogService::add_expense(&mut session, "Rent", i64::MAX, now).unwrap();
    LogService::add_expense(&mut session, "Deposit", i64::MAX, now).unwrap();

    let summary = SummaryService::weekly_summary(&session, now);
    assert_eq!(summary.fixed_expenses, i64::MAX);
    assert_eq!(summary.actual_misc, i64::MAX);
    assert!(summary.total_planned.is_finite());
    assert!(summary.total_actual > summary.weekly_income as f64);
    assert!(!summary.is_surplus());
}
