use crate::calendar::format_date;
use crate::cli::args;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::core::services::LogService;

const EXPENSE_USAGE: &str = "expense-add <name> <amount> [YYYY-MM-DD]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "gas",
            "Log a fuel fill-up, today or on a given date",
            "gas [YYYY-MM-DD]",
            cmd_gas,
        ),
        CommandEntry::new(
            "gas-remove",
            "Remove a fuel fill-up",
            "gas-remove <id>",
            cmd_gas_remove,
        ),
        CommandEntry::new(
            "expense-add",
            "Log a miscellaneous expense",
            EXPENSE_USAGE,
            cmd_expense_add,
        ),
        CommandEntry::new(
            "expense-remove",
            "Remove a miscellaneous expense",
            "expense-remove <id>",
            cmd_expense_remove,
        ),
        CommandEntry::new(
            "logs",
            "List fuel and expense logs in the current filter",
            "logs",
            cmd_logs,
        ),
    ]
}

fn cmd_gas(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() > 1 {
        return Err(CommandError::usage("gas [YYYY-MM-DD]"));
    }
    let at = args::instant(args.first().copied(), context.now())?;
    let id = LogService::log_gas(&mut context.session, at);
    io::print_success(format!(
        "Fill-up logged [{}] on {}.",
        args::short_id(&id),
        format_date(at.date())
    ));
    Ok(())
}

fn cmd_gas_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id] = args else {
        return Err(CommandError::usage("gas-remove <id>"));
    };
    let id = args::resolve_id(
        raw_id,
        context.session.gas_logs.iter().map(|log| log.id),
        "fill-up",
    )?;
    let removed = LogService::remove_gas(&mut context.session, id)?;
    io::print_success(format!(
        "Fill-up on {} removed.",
        format_date(removed.date.date())
    ));
    Ok(())
}

fn cmd_expense_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, amount, day) = match args {
        [name, amount] => (name, amount, None),
        [name, amount, day] => (name, amount, Some(*day)),
        _ => return Err(CommandError::usage(EXPENSE_USAGE)),
    };
    let at = args::instant(day, context.now())?;
    let id = LogService::add_expense(&mut context.session, name, args::amount(amount)?, at)?;
    io::print_success(format!(
        "Expense `{}` logged [{}].",
        name,
        args::short_id(&id)
    ));
    Ok(())
}

fn cmd_expense_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id] = args else {
        return Err(CommandError::usage("expense-remove <id>"));
    };
    let id = args::resolve_id(
        raw_id,
        context.session.expense_logs.iter().map(|log| log.id),
        "expense",
    )?;
    let removed = LogService::remove_expense(&mut context.session, id)?;
    io::print_success(format!("Expense `{}` removed.", removed.name));
    Ok(())
}

fn cmd_logs(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let session = &context.session;
    let money = &context.money;
    let filter = session.filter;
    output_section(format!("Logs ({})", filter.label()));

    let gas = LogService::gas_in_filter(session, &filter);
    io::print_info(format!(
        "Fuel fill-ups: {} (x {} = {})",
        gas.len(),
        money.amount(session.settings.fuel_cost),
        money.amount(
            session
                .settings
                .fuel_cost
                .saturating_mul(i64::try_from(gas.len()).unwrap_or(i64::MAX))
        )
    ));
    for log in gas {
        io::print_info(format!(
            "  [{}] {}",
            args::short_id(&log.id),
            log.date.format("%d/%m/%Y %H:%M")
        ));
    }

    let expenses = LogService::expenses_in_filter(session, &filter);
    io::print_info(format!(
        "Expenses: {} totalling {}",
        expenses.len(),
        money.amount(LogService::expense_total(session, &filter))
    ));
    for log in expenses {
        io::print_info(format!(
            "  [{}] {} {} on {}",
            args::short_id(&log.id),
            log.name,
            money.amount(log.amount),
            format_date(log.date.date())
        ));
    }
    Ok(())
}
