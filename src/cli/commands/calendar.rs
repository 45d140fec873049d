use chrono::Datelike;

use crate::calendar::{weeks_in_year, FilterKind, FilterState};
use crate::cli::args;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;

const FILTER_USAGE: &str = "filter [all | year [YYYY] | month [YYYY MM] | week [YYYY WW]]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "filter",
            "Show or change the date filter for logs and debts",
            FILTER_USAGE,
            cmd_filter,
        ),
        CommandEntry::new(
            "weeks",
            "List the ISO weeks of a year",
            "weeks [YYYY]",
            cmd_weeks,
        ),
    ]
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((raw_kind, rest)) = args.split_first() else {
        io::print_info(format!("Filter: {}", context.session.filter.label()));
        return Ok(());
    };
    let kind = FilterKind::parse(raw_kind).ok_or_else(|| CommandError::usage(FILTER_USAGE))?;
    let now = context.now();
    let filter = match (kind, rest) {
        (kind, []) => FilterState::for_kind(kind, now),
        (FilterKind::Year, [year]) => FilterState::year(args::number(year, "year")?),
        (FilterKind::Month, [year, month]) => {
            let month: u32 = args::number(month, "month")?;
            if !(1..=12).contains(&month) {
                return Err(CommandError::InvalidArguments(format!(
                    "month {} is outside 1..=12",
                    month
                )));
            }
            FilterState::month(args::number(year, "year")?, month - 1)
        }
        (FilterKind::Week, [year, week]) => {
            let year: i32 = args::number(year, "year")?;
            let week: u32 = args::number(week, "week")?;
            let available = weeks_in_year(year).len() as u32;
            if week == 0 || week > available {
                return Err(CommandError::InvalidArguments(format!(
                    "{} has weeks 1..={}",
                    year, available
                )));
            }
            FilterState::week(year, week)
        }
        _ => return Err(CommandError::usage(FILTER_USAGE)),
    };
    context.session.filter = filter;
    io::print_success(format!("Filter set to {}.", filter.label()));
    Ok(())
}

fn cmd_weeks(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let now = context.now();
    let year = match args {
        [] => now.year(),
        [year] => args::number(year, "year")?,
        _ => return Err(CommandError::usage("weeks [YYYY]")),
    };
    output_section(format!("Weeks of {}", year));
    for entry in weeks_in_year(year) {
        let marker = if entry.range.contains(now) { "*" } else { " " };
        io::print_info(format!("{} {}", marker, entry.label()));
    }
    Ok(())
}
