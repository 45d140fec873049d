use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{FilterKind, FilterState};
use crate::ledger::{BudgetSettings, Debt, ExpenseLog, GasLog};
use crate::sync::WalletTransaction;

/// All dashboard state for one session. Lives in memory only; every derived
/// figure is recomputed from it on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub settings: BudgetSettings,
    pub filter: FilterState,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub gas_logs: Vec<GasLog>,
    #[serde(default)]
    pub expense_logs: Vec<ExpenseLog>,
    #[serde(default)]
    pub wallet_transactions: Vec<WalletTransaction>,
}

impl Session {
    pub fn new(settings: BudgetSettings, filter: FilterState) -> Self {
        Self {
            settings,
            filter,
            debts: Vec::new(),
            gas_logs: Vec::new(),
            expense_logs: Vec::new(),
            wallet_transactions: Vec::new(),
        }
    }

    /// Session whose filter covers `now` with the given kind.
    pub fn starting_at(settings: BudgetSettings, kind: FilterKind, now: NaiveDateTime) -> Self {
        Self::new(settings, FilterState::for_kind(kind, now))
    }

    pub fn debt(&self, id: Uuid) -> Option<&Debt> {
        self.debts.iter().find(|debt| debt.id == id)
    }

    pub fn debt_mut(&mut self, id: Uuid) -> Option<&mut Debt> {
        self.debts.iter_mut().find(|debt| debt.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn starting_at_covers_now_and_lookups_find_debts() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut session = Session::starting_at(BudgetSettings::default(), FilterKind::Week, now);
        assert_eq!(session.filter, FilterState::current_week(now));

        let debt = Debt::new("Card", "Bank", 100, now.date(), now);
        let id = debt.id;
        session.debts.push(debt);

        session.debt_mut(id).unwrap().name = "Visa".into();
        assert_eq!(session.debt(id).map(|debt| debt.name.as_str()), Some("Visa"));
        assert!(session.debt(Uuid::new_v4()).is_none());
    }
}
