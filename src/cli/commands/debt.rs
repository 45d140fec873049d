use uuid::Uuid;

use crate::calendar::format_date;
use crate::cli::args;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::core::services::DebtService;
use crate::currency::MoneyFormat;
use crate::ledger::{Cadence, Debt, DebtPatch, DebtStatus, DebtTemplate, RecurringPlan};

const ADD_USAGE: &str = "debt-add <name> <source> <amount> <due YYYY-MM-DD> [target YYYY-MM]";
const RECURRING_USAGE: &str =
    "debt-recurring <name> <source> <amount> <start YYYY-MM-DD> <end YYYY-MM-DD> <weekly|monthly>";
const TEMPLATED_USAGE: &str = "debt-templated <name> <source> <amount> <bill month YYYY-MM>";
const EDIT_USAGE: &str =
    "debt-edit <id> [name=..] [source=..] [total=..] [due=YYYY-MM-DD] [target=YYYY-MM|none]";
const PAY_USAGE: &str = "pay <id> <amount>";
const WITHDRAW_USAGE: &str = "withdraw <id> <amount> <reason...>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("debt-add", "Add a debt", ADD_USAGE, cmd_add),
        CommandEntry::new(
            "debt-recurring",
            "Add one debt per weekly or monthly installment",
            RECURRING_USAGE,
            cmd_recurring,
        ),
        CommandEntry::new(
            "debt-templated",
            "Add a bill due on the 10th of the following month",
            TEMPLATED_USAGE,
            cmd_templated,
        ),
        CommandEntry::new("debt-edit", "Edit a debt", EDIT_USAGE, cmd_edit),
        CommandEntry::new("debt-remove", "Remove a debt", "debt-remove <id>", cmd_remove),
        CommandEntry::new(
            "debt-list",
            "List debts in the current filter, or every debt with `all`",
            "debt-list [all]",
            cmd_list,
        ),
        CommandEntry::new("pay", "Record a payment toward a debt", PAY_USAGE, cmd_pay),
        CommandEntry::new(
            "withdraw",
            "Take back part of what was paid on a debt",
            WITHDRAW_USAGE,
            cmd_withdraw,
        ),
    ]
}

fn debt_id(context: &ShellContext, raw: &str) -> Result<Uuid, CommandError> {
    args::resolve_id(raw, context.session.debts.iter().map(|debt| debt.id), "debt")
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, source, amount, due, target) = match args {
        [name, source, amount, due] => (name, source, amount, due, None),
        [name, source, amount, due, target] => (name, source, amount, due, Some(target)),
        _ => return Err(CommandError::usage(ADD_USAGE)),
    };
    let mut debt = Debt::new(
        *name,
        *source,
        args::amount(amount)?,
        args::date(due)?,
        context.now(),
    );
    if let Some(target) = target {
        debt = debt.with_target(args::bucket(target)?);
    }
    let bucket = debt.bucket();
    let id = DebtService::add(&mut context.session, debt)?;
    io::print_success(format!(
        "Debt `{}` added [{}], counted in {}.",
        name,
        args::short_id(&id),
        bucket.label()
    ));
    Ok(())
}

fn cmd_recurring(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name, source, amount, start, end, cadence] = args else {
        return Err(CommandError::usage(RECURRING_USAGE));
    };
    let cadence = Cadence::parse(cadence).ok_or_else(|| {
        CommandError::InvalidArguments(format!("`{}` is not weekly or monthly", cadence))
    })?;
    let plan = RecurringPlan::new(
        DebtTemplate::new(*name, *source, args::amount(amount)?),
        args::date(start)?,
        args::date(end)?,
        cadence,
    );
    let now = context.now();
    let ids = DebtService::add_recurring(&mut context.session, &plan, now)?;
    if ids.is_empty() {
        io::print_warning("No installments fall between start and end.");
    } else {
        io::print_success(format!("{} {} installment(s) added.", ids.len(), cadence));
    }
    Ok(())
}

fn cmd_templated(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name, source, amount, bill] = args else {
        return Err(CommandError::usage(TEMPLATED_USAGE));
    };
    let template = DebtTemplate::new(*name, *source, args::amount(amount)?);
    let now = context.now();
    let id = DebtService::add_templated(&mut context.session, &template, args::bucket(bill)?, now)?;
    if let Some(debt) = context.session.debt(id) {
        io::print_success(format!(
            "Debt `{}` added [{}], due {}.",
            debt.name,
            args::short_id(&id),
            format_date(debt.due_date)
        ));
    }
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((raw_id, fields)) = args.split_first() else {
        return Err(CommandError::usage(EDIT_USAGE));
    };
    let id = debt_id(context, raw_id)?;
    let patch = parse_patch(fields)?;
    DebtService::edit(&mut context.session, id, patch)?;
    io::print_success(format!("Debt [{}] updated.", args::short_id(&id)));
    Ok(())
}

fn parse_patch(fields: &[&str]) -> Result<DebtPatch, CommandError> {
    let mut patch = DebtPatch::default();
    for field in fields {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| CommandError::usage(EDIT_USAGE))?;
        match key.trim().to_ascii_lowercase().as_str() {
            "name" => patch.name = Some(value.to_string()),
            "source" => patch.source = Some(value.to_string()),
            "total" | "amount" => patch.total_amount = Some(args::amount(value)?),
            "due" => patch.due_date = Some(args::date(value)?),
            "target" if value.eq_ignore_ascii_case("none") => patch.target = Some(None),
            "target" => patch.target = Some(Some(args::bucket(value)?)),
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown debt field `{}`",
                    other
                )))
            }
        }
    }
    Ok(patch)
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id] = args else {
        return Err(CommandError::usage("debt-remove <id>"));
    };
    let id = debt_id(context, raw_id)?;
    let removed = DebtService::remove(&mut context.session, id)?;
    io::print_success(format!("Debt `{}` removed.", removed.name));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let now = context.now();
    let money = &context.money;
    let show_all = matches!(args.first(), Some(flag) if flag.eq_ignore_ascii_case("all"));
    let visible: Vec<&Debt> = if show_all {
        context.session.debts.iter().collect()
    } else {
        DebtService::in_filter(&context.session)
    };
    let (completed, active): (Vec<&Debt>, Vec<&Debt>) =
        visible.into_iter().partition(|debt| debt.is_completed());

    let scope = if show_all {
        "all".to_string()
    } else {
        context.session.filter.label()
    };
    output_section(format!("Debts ({})", scope));
    if active.is_empty() && completed.is_empty() {
        io::print_info("  No debts.");
        return Ok(());
    }
    io::print_info(format!("Active: {}", active.len()));
    for debt in &active {
        io::print_info(describe(debt, &debt.status(now), money));
    }
    io::print_info(format!("Completed: {}", completed.len()));
    for debt in &completed {
        io::print_info(format!(
            "  [{}] {} ({}) {} paid",
            args::short_id(&debt.id),
            debt.name,
            debt.source,
            money.amount(debt.total_amount)
        ));
    }
    Ok(())
}

fn describe(debt: &Debt, status: &DebtStatus, money: &MoneyFormat) -> String {
    let timing = if status.is_overdue {
        format!("{} day(s) overdue", -status.days_left)
    } else {
        format!("{} day(s) left", status.days_left)
    };
    format!(
        "  [{}] {} ({}) {} / {} paid, due {} in {}, {} [{}]",
        args::short_id(&debt.id),
        debt.name,
        debt.source,
        money.amount(debt.amount_paid),
        money.amount(debt.total_amount),
        format_date(debt.due_date),
        debt.bucket().label(),
        timing,
        status.band.label()
    )
}

fn cmd_pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id, amount] = args else {
        return Err(CommandError::usage(PAY_USAGE));
    };
    let id = debt_id(context, raw_id)?;
    let now = context.now();
    let status = DebtService::pay(&mut context.session, id, args::amount(amount)?, now)?;
    if status.remaining <= 0 {
        io::print_success("Payment recorded. Debt fully paid.");
    } else {
        io::print_success(format!(
            "Payment recorded. Remaining {}.",
            context.money.amount(status.remaining)
        ));
    }
    Ok(())
}

fn cmd_withdraw(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id, amount, reason @ ..] = args else {
        return Err(CommandError::usage(WITHDRAW_USAGE));
    };
    let id = debt_id(context, raw_id)?;
    let now = context.now();
    let status = DebtService::withdraw(
        &mut context.session,
        id,
        args::amount(amount)?,
        &reason.join(" "),
        now,
    )?;
    io::print_success(format!(
        "Withdrawal recorded. Remaining {}.",
        context.money.amount(status.remaining)
    ));
    Ok(())
}
