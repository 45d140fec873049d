//! Calendar arithmetic used for bucketing debts and activity logs.
//!
//! Instants are local wall-clock [`NaiveDateTime`] values. Day differences
//! use a fixed 86 400 000 ms day and ignore daylight-saving shifts. Week
//! numbering follows ISO-8601: weeks start on Monday and week 1 is the week
//! containing the year's first Thursday.

pub mod filter;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub use filter::{FilterKind, FilterState};

/// Length of a day in milliseconds.
pub const DAY_MILLIS: i64 = 86_400_000;

/// Highest week index probed when enumerating a year.
const MAX_WEEKS_PER_YEAR: u32 = 53;

/// Inclusive span of one ISO week: Monday 00:00 through Sunday 23:59:59.999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WeekRange {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }
}

/// One row of [`weeks_in_year`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekEntry {
    pub week: u32,
    pub range: WeekRange,
}

impl WeekEntry {
    pub fn label(&self) -> String {
        format!(
            "Tuần {} ({} - {})",
            self.week,
            format_date(self.range.start_date()),
            format_date(self.range.end_date())
        )
    }
}

/// Renders a date as `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_week_label(year: i32, week: u32) -> String {
    format!("Tuần {}/{}", week, year)
}

/// `month0` is zero-based (0 = January).
pub fn format_month_label(year: i32, month0: u32) -> String {
    format!("Tháng {}/{}", month0 + 1, year)
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable millisecond of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::milliseconds(DAY_MILLIS - 1)
}

/// Absolute number of whole days between two instants, rounded to the nearest day.
pub fn days_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    let millis = (b - a).num_milliseconds().abs();
    round_half_up(millis as f64 / DAY_MILLIS as f64)
}

/// Days from `from` to `to`, negative when `to` is earlier.
pub fn signed_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let millis = (to - from).num_milliseconds();
    round_half_up(millis as f64 / DAY_MILLIS as f64)
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Returns `(iso_year, iso_week)` for the given date.
///
/// The date is moved to the Thursday of its Monday-based week; the week index
/// is then counted from January 1 of that Thursday's year, which may differ
/// from `date.year()` around New Year.
pub fn week_number(date: NaiveDate) -> (i32, u32) {
    let iso_weekday = date.weekday().number_from_monday() as i64;
    let Some(thursday) = date.checked_add_signed(Duration::days(4 - iso_weekday)) else {
        let iso = date.iso_week();
        return (iso.year(), iso.week());
    };
    let days_since_jan1 = thursday.ordinal0();
    (thursday.year(), (days_since_jan1 + 7) / 7)
}

/// Reconstructs the Monday-to-Sunday span for an ISO `(year, week)` pair.
///
/// The anchor is January 1 plus `week - 1` weeks; the result is the Monday of
/// the ISO week holding that anchor's Thursday (Mon-Thu anchors move back,
/// Fri-Sun anchors move forward). Returns `None` for week 0, or when the year
/// or the resulting week falls outside the calendar range. `week_number(range.start)` is not guaranteed to give
/// back `(year, week)` for the trailing week of a 52-week year.
pub fn week_range(year: i32, week: u32) -> Option<WeekRange> {
    if week == 0 {
        return None;
    }
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let anchor = jan1.checked_add_signed(Duration::weeks(week as i64 - 1))?;
    let offset = anchor.weekday().num_days_from_monday() as i64;
    let monday = if offset <= 3 {
        anchor.checked_sub_signed(Duration::days(offset))?
    } else {
        anchor.checked_add_signed(Duration::days(7 - offset))?
    };
    let sunday = monday.checked_add_signed(Duration::days(6))?;
    Some(WeekRange {
        start: start_of_day(monday),
        end: end_of_day(sunday),
    })
}

/// Lists every week of `year`, stopping at the first week whose start falls in
/// the following calendar year.
pub fn weeks_in_year(year: i32) -> Vec<WeekEntry> {
    let mut weeks = Vec::new();
    for week in 1..=MAX_WEEKS_PER_YEAR {
        let Some(range) = week_range(year, week) else {
            break;
        };
        if range.start.year() > year {
            break;
        }
        weeks.push(WeekEntry { week, range });
    }
    weeks
}

/// Membership predicate behind every filtered log and debt view.
pub fn is_in_filter_range(instant: NaiveDateTime, filter: &FilterState) -> bool {
    match filter.kind {
        FilterKind::All => true,
        FilterKind::Year => instant.year() == filter.year,
        FilterKind::Month => match filter.month0 {
            Some(month0) => instant.year() == filter.year && instant.month0() == month0,
            None => false,
        },
        FilterKind::Week => filter
            .week
            .and_then(|week| week_range(filter.year, week))
            .map(|range| range.contains(instant))
            .unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn days_between_is_symmetric_and_rounded() {
        let a = at(2024, 3, 1, 0, 0);
        let b = at(2024, 3, 4, 13, 0);
        assert_eq!(days_between(a, b), 4);
        assert_eq!(days_between(b, a), 4);
        assert_eq!(days_between(a, at(2024, 3, 4, 11, 0)), 3);
    }

    #[test]
    fn signed_days_between_keeps_direction() {
        let a = at(2024, 3, 10, 0, 0);
        let b = at(2024, 3, 3, 0, 0);
        assert_eq!(signed_days_between(a, b), -7);
        assert_eq!(signed_days_between(b, a), 7);
    }

    #[test]
    fn week_number_crosses_year_boundaries() {
        assert_eq!(week_number(date(2021, 1, 1)), (2020, 53));
        assert_eq!(week_number(date(2024, 12, 30)), (2025, 1));
        assert_eq!(week_number(date(2024, 1, 1)), (2024, 1));
        assert_eq!(week_number(date(2023, 1, 1)), (2022, 52));
    }

    #[test]
    fn week_number_agrees_with_chrono_iso_week() {
        let mut day = date(2019, 12, 1);
        let stop = date(2027, 1, 31);
        while day <= stop {
            let iso = day.iso_week();
            assert_eq!(week_number(day), (iso.year(), iso.week()), "{day}");
            day += Duration::days(1);
        }
    }

    #[test]
    fn week_range_rejects_week_zero() {
        assert!(week_range(2024, 0).is_none());
    }

    #[test]
    fn week_range_is_none_past_calendar_range() {
        assert!(week_range(2024, 20_000_000).is_none());
    }

    #[test]
    fn oversized_week_filter_matches_nothing() {
        let filter = FilterState::week(2024, 20_000_000);
        assert!(!is_in_filter_range(at(2024, 3, 6, 12, 0), &filter));
    }

    #[test]
    fn weeks_in_last_calendar_year_stop_cleanly() {
        let weeks = weeks_in_year(NaiveDate::MAX.year());
        assert!(!weeks.is_empty());
        assert!(weeks.len() <= 53);
    }

    #[test]
    fn week_number_handles_calendar_edges() {
        let (year, week) = week_number(NaiveDate::MAX);
        assert!(week >= 1 && year >= NaiveDate::MAX.year());
        let (_, week) = week_number(NaiveDate::MIN);
        assert!(week >= 1);
    }

    #[test]
    fn end_of_day_is_last_millisecond() {
        let end = end_of_day(date(2024, 5, 5));
        assert_eq!(end.format("%H:%M:%S%.3f").to_string(), "23:59:59.999");
    }

    #[test]
    fn format_helpers_render_expected_labels() {
        assert_eq!(format_date(date(2024, 1, 5)), "05/01/2024");
        assert_eq!(format_month_label(2024, 0), "Tháng 1/2024");
        assert_eq!(format_week_label(2024, 9), "Tuần 9/2024");
    }
}
