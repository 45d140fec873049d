mod summary_service_tests;

use chrono::{NaiveDate, NaiveDateTime};

use crate::calendar::FilterKind;
use crate::core::session::Session;
use crate::ledger::BudgetSettings;

pub(super) fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(super) fn empty_session(now: NaiveDateTime) -> Session {
    Session::starting_at(BudgetSettings::default(), FilterKind::Week, now)
}
