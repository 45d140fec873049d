use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{is_in_filter_range, FilterState};

/// A fuel fill-up. Only the moment is recorded; cost comes from the budget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GasLog {
    pub id: Uuid,
    pub date: NaiveDateTime,
}

impl GasLog {
    pub fn new(date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
        }
    }
}

/// A miscellaneous spending line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseLog {
    pub id: Uuid,
    pub name: String,
    pub amount: i64,
    pub date: NaiveDateTime,
}

impl ExpenseLog {
    pub fn new(name: impl Into<String>, amount: i64, date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            date,
        }
    }
}

/// Anything stamped with a single instant.
pub trait Dated {
    fn date(&self) -> NaiveDateTime;
}

impl Dated for GasLog {
    fn date(&self) -> NaiveDateTime {
        self.date
    }
}

impl Dated for ExpenseLog {
    fn date(&self) -> NaiveDateTime {
        self.date
    }
}

/// Entries whose date falls inside `filter`, in their original order.
pub fn filter_logs<'a, T: Dated>(logs: &'a [T], filter: &FilterState) -> Vec<&'a T> {
    logs.iter()
        .filter(|entry| is_in_filter_range(entry.date(), filter))
        .collect()
}

pub fn expense_total<'a>(expenses: impl IntoIterator<Item = &'a ExpenseLog>) -> i64 {
    expenses
        .into_iter()
        .fold(0i64, |total, expense| total.saturating_add(expense.amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    #[test]
    fn filter_logs_keeps_order_and_bucket() {
        let logs = vec![
            GasLog::new(at(2024, 2, 28)),
            GasLog::new(at(2024, 3, 1)),
            GasLog::new(at(2024, 3, 20)),
        ];
        let march = filter_logs(&logs, &FilterState::month(2024, 2));
        assert_eq!(march.len(), 2);
        assert_eq!(march[0].id, logs[1].id);
        assert_eq!(march[1].id, logs[2].id);
    }

    #[test]
    fn expense_total_sums_filtered_entries() {
        let expenses = vec![
            ExpenseLog::new("Coffee", 35_000, at(2024, 3, 4)),
            ExpenseLog::new("Parking", 10_000, at(2024, 3, 5)),
            ExpenseLog::new("Gift", 200_000, at(2024, 4, 1)),
        ];
        let filtered = filter_logs(&expenses, &FilterState::month(2024, 2));
        assert_eq!(expense_total(filtered), 45_000);
    }
}
