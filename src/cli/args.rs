//! Argument parsing shared by the command handlers.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::cli::core::CommandError;
use crate::ledger::BudgetBucket;

pub(crate) fn amount(raw: &str) -> Result<i64, CommandError> {
    let cleaned: String = raw.chars().filter(|ch| !matches!(ch, '.' | '_')).collect();
    cleaned
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a whole amount", raw)))
}

/// `YYYY-MM-DD`
pub(crate) fn date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a YYYY-MM-DD date", raw)))
}

/// A date argument becomes that day at the current time of day.
pub(crate) fn instant(raw: Option<&str>, now: NaiveDateTime) -> Result<NaiveDateTime, CommandError> {
    match raw {
        Some(raw) => Ok(date(raw)?.and_time(now.time())),
        None => Ok(now),
    }
}

/// `YYYY-MM` with a 1-based month.
pub(crate) fn bucket(raw: &str) -> Result<BudgetBucket, CommandError> {
    let invalid = || CommandError::InvalidArguments(format!("`{}` is not a YYYY-MM month", raw));
    let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    BudgetBucket::new(year, month - 1).map_err(|_| invalid())
}

pub(crate) fn number<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, CommandError> {
    raw.parse::<T>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a valid {}", raw, what)))
}

/// Resolves a full id or a unique prefix against `ids`. `what` names the
/// kind of entry in error messages.
pub(crate) fn resolve_id(
    needle: &str,
    ids: impl IntoIterator<Item = Uuid>,
    what: &str,
) -> Result<Uuid, CommandError> {
    let lowered = needle.trim().to_ascii_lowercase();
    if lowered.is_empty() {
        return Err(CommandError::InvalidArguments(format!("a {} id is required", what)));
    }
    let mut matches = ids
        .into_iter()
        .filter(|id| id.to_string().starts_with(&lowered));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id),
        (Some(_), Some(_)) => Err(CommandError::InvalidArguments(format!(
            "{} id prefix `{}` is ambiguous",
            what, needle
        ))),
        _ => Err(CommandError::InvalidArguments(format!(
            "no {} matches `{}`",
            what, needle
        ))),
    }
}

pub(crate) fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}
