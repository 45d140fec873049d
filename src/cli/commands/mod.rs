pub mod budget;
pub mod calendar;
pub mod debt;
pub mod logs;
pub mod sync;
pub mod system;

use crate::cli::registry::{CommandGroup, CommandRegistry};

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register_group(CommandGroup::Budget, budget::definitions());
    registry.register_group(CommandGroup::Debts, debt::definitions());
    registry.register_group(CommandGroup::Logs, logs::definitions());
    registry.register_group(CommandGroup::Calendar, calendar::definitions());
    registry.register_group(CommandGroup::Wallet, sync::definitions());
    registry.register_group(CommandGroup::System, system::definitions());
}
