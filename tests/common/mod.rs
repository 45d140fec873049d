#![allow(dead_code)]

use budget_dashboard::{
    calendar::FilterKind,
    core::Session,
    ledger::BudgetSettings,
};
use chrono::{NaiveDate, NaiveDateTime};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

pub fn session_at(now: NaiveDateTime) -> Session {
    Session::starting_at(BudgetSettings::default(), FilterKind::Week, now)
}
