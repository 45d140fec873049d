use crate::cli::args;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::core::services::SummaryService;

const SET_USAGE: &str = "set <income|fuel|internet|food|misc|actual_food> <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "settings",
            "Show weekly income and budget settings",
            "settings",
            cmd_settings,
        ),
        CommandEntry::new("set", "Update one budget setting", SET_USAGE, cmd_set),
        CommandEntry::new(
            "summary",
            "Show the current week's budget summary",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "config-save",
            "Persist budget settings and filter kind as defaults",
            "config-save",
            cmd_config_save,
        ),
    ]
}

fn cmd_settings(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let settings = &context.session.settings;
    let money = &context.money;
    output_section("Budget settings");
    io::print_info(format!("  Weekly income : {}", money.amount(settings.weekly_income)));
    io::print_info(format!("  Fuel          : {}", money.amount(settings.fuel_cost)));
    io::print_info(format!("  Internet      : {}", money.amount(settings.internet_cost)));
    io::print_info(format!("  Food budget   : {}", money.amount(settings.food_budget)));
    io::print_info(format!("  Misc budget   : {}", money.amount(settings.misc_budget)));
    io::print_info(format!("  Food spent    : {}", money.amount(settings.actual_food)));
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [field, raw] = args else {
        return Err(CommandError::usage(SET_USAGE));
    };
    let value = args::amount(raw)?;
    if value < 0 {
        return Err(CommandError::InvalidArguments(
            "settings must not be negative".into(),
        ));
    }
    if !context.session.settings.set_field(field, value) {
        return Err(CommandError::InvalidArguments(format!(
            "unknown setting `{}`",
            field
        )));
    }
    io::print_success(format!("{} set to {}.", field, context.money.amount(value)));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = SummaryService::weekly_summary(&context.session, context.now());
    let money = &context.money;
    output_section(format!("Weekly summary ({})", summary.filter.label()));
    io::print_info(format!("  Income            : {}", money.amount(summary.weekly_income)));
    io::print_info(format!("  Fixed expenses    : {}", money.amount(summary.fixed_expenses)));
    io::print_info(format!(
        "  Food plan/actual  : {} / {}",
        money.amount(summary.food_budget),
        money.amount(summary.actual_food)
    ));
    io::print_info(format!(
        "  Misc plan/actual  : {} / {}",
        money.amount(summary.misc_budget),
        money.amount(summary.actual_misc)
    ));
    io::print_info(format!("  Gas fills         : {}", summary.gas_fills));
    io::print_info(format!(
        "  Debt contribution : {}",
        money.aggregate(summary.debt_contribution)
    ));
    io::print_info(format!(
        "  Planned total     : {}",
        money.aggregate(summary.total_planned)
    ));
    io::print_info(format!(
        "  Actual total      : {}",
        money.aggregate(summary.total_actual)
    ));
    let verdict = if summary.is_surplus() { "surplus" } else { "deficit" };
    io::print_info(format!(
        "  Status            : {} {}",
        verdict,
        money.aggregate(summary.financial_status.abs())
    ));
    io::print_info(format!(
        "  Remaining debt    : {}",
        money.amount(summary.total_remaining_debt)
    ));
    io::print_info(format!("  Days off          : {}", summary.days_off));
    io::print_info(format!(
        "  Debts             : {} active, {} completed, {} overdue",
        summary.active_debts, summary.completed_debts, summary.overdue_debts
    ));
    Ok(())
}

fn cmd_config_save(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.config.budget = context.session.settings;
    context.config.default_filter = context.session.filter.kind;
    context.config_manager.save(&context.config)?;
    io::print_success(format!(
        "Configuration saved to {}.",
        context.config_manager.path().display()
    ));
    Ok(())
}
