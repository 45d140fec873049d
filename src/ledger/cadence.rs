use std::fmt;

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Spacing between generated installments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Weekly,
    Monthly,
}

impl Cadence {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" | "week" => Some(Cadence::Weekly),
            "monthly" | "month" => Some(Cadence::Monthly),
            _ => None,
        }
    }

    /// Date of installment `steps` counted from `start`.
    ///
    /// Monthly steps use calendar-month arithmetic and clamp to the last day
    /// of shorter months: 31 Jan plus one month is 29 Feb (or 28 Feb), not
    /// the 2 or 3 March that overflow-style day rollover would give. Counting
    /// from `start` keeps a 31st-of-month plan on the 31st whenever the month
    /// allows it. Returns `None` past the calendar range.
    pub fn nth_date(&self, start: NaiveDate, steps: u32) -> Option<NaiveDate> {
        match self {
            Cadence::Weekly => start.checked_add_signed(Duration::weeks(steps as i64)),
            Cadence::Monthly => start.checked_add_months(Months::new(steps)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Cadence::Weekly => "Weekly",
            Cadence::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Month following `(year, month0)`, rolling December into January of the next year.
pub(crate) fn next_month(year: i32, month0: u32) -> (i32, u32) {
    if month0 >= 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    }
}
