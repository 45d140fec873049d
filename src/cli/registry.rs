use std::collections::HashMap;
use std::fmt;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Topic a command is listed under in `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandGroup {
    Budget,
    Debts,
    Logs,
    Calendar,
    Wallet,
    System,
}

impl CommandGroup {
    pub fn label(&self) -> &'static str {
        match self {
            CommandGroup::Budget => "Budget",
            CommandGroup::Debts => "Debts",
            CommandGroup::Logs => "Fuel & expenses",
            CommandGroup::Calendar => "Calendar",
            CommandGroup::Wallet => "Wallet",
            CommandGroup::System => "System",
        }
    }
}

impl fmt::Display for CommandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Shell commands in registration order, each filed under one group.
/// Lookups ignore case.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<(CommandGroup, CommandEntry)>,
    by_name: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entries` under `group`. A name registered twice keeps its first entry.
    pub fn register_group(
        &mut self,
        group: CommandGroup,
        entries: impl IntoIterator<Item = CommandEntry>,
    ) {
        for entry in entries {
            if self.by_name.contains_key(entry.name) {
                continue;
            }
            self.by_name.insert(entry.name, self.entries.len());
            self.entries.push((group, entry));
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        let name = name.trim().to_ascii_lowercase();
        self.by_name
            .get(name.as_str())
            .map(|&idx| &self.entries[idx].1)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, entry)| entry.name)
    }

    /// Groups in first-registered order, each with its commands.
    pub fn grouped(&self) -> Vec<(CommandGroup, Vec<&CommandEntry>)> {
        let mut groups: Vec<(CommandGroup, Vec<&CommandEntry>)> = Vec::new();
        for (group, entry) in &self.entries {
            match groups.iter_mut().find(|(existing, _)| *existing == *group) {
                Some((_, members)) => members.push(entry),
                None => groups.push((*group, vec![entry])),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register_group(
            CommandGroup::Debts,
            [
                CommandEntry::new("pay", "Pay", "pay", noop),
                CommandEntry::new("withdraw", "Withdraw", "withdraw", noop),
            ],
        );
        registry.register_group(
            CommandGroup::System,
            [
                CommandEntry::new("exit", "Exit", "exit", noop),
                CommandEntry::new("pay", "Shadowed", "pay", noop),
            ],
        );
        registry
    }

    #[test]
    fn first_registration_of_a_name_wins() {
        let registry = registry();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["pay", "withdraw", "exit"]);
        assert_eq!(registry.get("pay").map(|entry| entry.description), Some("Pay"));
    }

    #[test]
    fn lookups_ignore_case() {
        let registry = registry();
        assert!(registry.get(" EXIT ").is_some());
        assert!(registry.handler("Withdraw").is_some());
        assert!(registry.get("summary").is_none());
    }

    #[test]
    fn grouped_keeps_registration_order() {
        let registry = registry();
        let grouped = registry.grouped();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, CommandGroup::Debts);
        assert_eq!(grouped[0].1.len(), 2);
        assert_eq!(grouped[1].1[0].name, "exit");
    }
}
