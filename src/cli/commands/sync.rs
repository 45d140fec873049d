use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::core::services::SyncService;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "sync",
        "Fetch spending candidates from the wallet",
        "sync",
        cmd_sync,
    )]
}

fn cmd_sync(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let now = context.now();
    let count = SyncService::sync(&mut context.session, context.wallet.as_ref(), now)?;
    let money = &context.money;
    output_section(format!("Wallet ({} candidate(s))", count));
    for entry in &context.session.wallet_transactions {
        io::print_info(format!(
            "  {} {} {}",
            entry.date.format("%d/%m %H:%M"),
            entry.description,
            money.amount(entry.amount)
        ));
    }
    io::print_info(format!(
        "Total: {}",
        money.amount(SyncService::wallet_total(&context.session))
    ));
    io::print_hint("Candidates are not counted until logged with `expense-add`.");
    Ok(())
}
