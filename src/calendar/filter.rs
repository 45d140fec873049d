use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{format_month_label, format_week_label, week_number};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    All,
    Year,
    Month,
    Week,
}

impl FilterKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(FilterKind::All),
            "year" => Some(FilterKind::Year),
            "month" => Some(FilterKind::Month),
            "week" => Some(FilterKind::Week),
            _ => None,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FilterKind::All => "all",
            FilterKind::Year => "year",
            FilterKind::Month => "month",
            FilterKind::Week => "week",
        };
        f.write_str(label)
    }
}

/// Date bucket selected for log and debt views.
///
/// `month0` is zero-based (0 = January); `week` is a 1-based ISO week number.
/// Fields irrelevant to `kind` are ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    pub kind: FilterKind,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month0: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
}

impl FilterState {
    pub fn all(year: i32) -> Self {
        Self {
            kind: FilterKind::All,
            year,
            month0: None,
            week: None,
        }
    }

    pub fn year(year: i32) -> Self {
        Self {
            kind: FilterKind::Year,
            ..Self::all(year)
        }
    }

    pub fn month(year: i32, month0: u32) -> Self {
        Self {
            kind: FilterKind::Month,
            month0: Some(month0),
            ..Self::all(year)
        }
    }

    pub fn week(year: i32, week: u32) -> Self {
        Self {
            kind: FilterKind::Week,
            week: Some(week),
            ..Self::all(year)
        }
    }

    /// ISO week containing `now`, keyed by the ISO year.
    pub fn current_week(now: NaiveDateTime) -> Self {
        let (year, week) = week_number(now.date());
        Self::week(year, week)
    }

    /// Builds a filter of `kind` that covers `now`.
    pub fn for_kind(kind: FilterKind, now: NaiveDateTime) -> Self {
        match kind {
            FilterKind::All => Self::all(now.year()),
            FilterKind::Year => Self::year(now.year()),
            FilterKind::Month => Self::month(now.year(), now.month0()),
            FilterKind::Week => Self::current_week(now),
        }
    }

    pub fn label(&self) -> String {
        match self.kind {
            FilterKind::All => "all".into(),
            FilterKind::Year => self.year.to_string(),
            FilterKind::Month => match self.month0 {
                Some(month0) => format_month_label(self.year, month0),
                None => format!("{} (no month)", self.year),
            },
            FilterKind::Week => match self.week {
                Some(week) => format_week_label(self.year, week),
                None => format!("{} (no week)", self.year),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn current_week_uses_iso_year() {
        let now = NaiveDate::from_ymd_opt(2021, 1, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let filter = FilterState::current_week(now);
        assert_eq!(filter.year, 2020);
        assert_eq!(filter.week, Some(53));
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(FilterKind::parse(" Month "), Some(FilterKind::Month));
        assert_eq!(FilterKind::parse("fortnight"), None);
    }

    #[test]
    fn labels_describe_bucket() {
        assert_eq!(FilterState::month(2024, 2).label(), "Tháng 3/2024");
        assert_eq!(FilterState::week(2024, 10).label(), "Tuần 10/2024");
        assert_eq!(FilterState::all(2024).label(), "all");
    }
}
