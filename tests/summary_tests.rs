mod common;

use budget_dashboard::core::services::summary_service::{
    days_off_affordable, weekly_debt_contribution,
};
use budget_dashboard::core::services::{Affordability, DebtService, SummaryService};
use budget_dashboard::ledger::{BudgetSettings, Debt};
use common::{at, date, session_at};

#[test]
fn contribution_spreads_remaining_over_weeks_left() {
    let now = at(2024, 3, 4, 0);
    let seven_weeks = Debt::new("Loan", "Friend", 700, date(2024, 4, 22), now);
    assert_eq!(weekly_debt_contribution([&seven_weeks], now), 100.0);

    let due_now = Debt::new("Loan", "Friend", 700, date(2024, 3, 4), now);
    assert_eq!(weekly_debt_contribution([&due_now], now), 700.0);
}

#[test]
fn days_off_is_unbounded_once_debts_are_paid() {
    let now = at(2024, 3, 6, 12);
    let mut session = session_at(now);
    let id = DebtService::add(
        &mut session,
        Debt::new("Card", "Bank", 500, date(2024, 3, 20), now),
    )
    .unwrap();
    DebtService::pay(&mut session, id, 500, now).unwrap();

    for income in [0, 1_000, 10_000_000] {
        session.settings = BudgetSettings {
            weekly_income: income,
            food_budget: 700_000,
            actual_food: 900_000,
            ..BudgetSettings::default()
        };
        let summary = SummaryService::weekly_summary(&session, now);
        assert_eq!(summary.days_off, Affordability::Unbounded);
    }
    assert_eq!(days_off_affordable(0, 7_000.0, -1.0), Affordability::Unbounded);
}

#[test]
fn planned_and_actual_share_debt_contribution() {
    let now = at(2024, 3, 4, 0);
    let mut session = session_at(now);
    session.settings = BudgetSettings {
        weekly_income: 2_000_000,
        fuel_cost: 100_000,
        internet_cost: 50_000,
        food_budget: 500_000,
        misc_budget: 200_000,
        actual_food: 450_000,
    };
    DebtService::add(
        &mut session,
        Debt::new("Loan", "Friend", 700_000, date(2024, 4, 22), now),
    )
    .unwrap();

    let summary = SummaryService::weekly_summary(&session, now);
    assert_eq!(summary.debt_contribution, 100_000.0);
    assert_eq!(summary.total_planned, 950_000.0);
    assert_eq!(summary.total_actual, 700_000.0);
    assert_eq!(summary.financial_status, 1_300_000.0);
    // 1.3M surplus over 100k daily spend.
    assert_eq!(summary.days_off, Affordability::Days(13));
}
