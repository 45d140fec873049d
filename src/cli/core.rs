//! Core CLI dispatch, errors, and shell context construction.

use std::{env, io};

use chrono::NaiveDateTime;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{ConfigError, ConfigManager},
    core::{services::ServiceError, Clock, FixedClock, Session, SystemClock},
    sync::MockWallet,
};

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

/// Pins the shell clock, formatted `YYYY-MM-DDTHH:MM:SS`.
pub const NOW_ENV: &str = "BUDGET_DASHBOARD_NOW";
pub const SCRIPT_ENV: &str = "BUDGET_DASHBOARD_CLI_SCRIPT";

const NOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("usage: {}", usage))
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Invalid input: {0}")]
    Input(String),
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let clock = clock_from_env()?;
        let config_manager = ConfigManager::new()?;
        Self::with_parts(mode, clock, config_manager)
    }

    pub fn with_parts(
        mode: CliMode,
        clock: Box<dyn Clock>,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        let session = Session::starting_at(config.budget, config.default_filter, clock.now());
        let money = config.money_format();

        Ok(ShellContext {
            mode,
            registry,
            session,
            clock,
            wallet: Box::new(MockWallet::new()),
            config_manager,
            config,
            money,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn prompt(&self) -> String {
        format!("budget [{}]> ", self.session.filter.label())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(best) = closest_command(self.registry.names(), input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            other => cli_io::print_error(other),
        }
    }
}

fn closest_command<'a>(names: impl Iterator<Item = &'a str>, input: &str) -> Option<&'a str> {
    let needle = input.to_lowercase();
    names
        .map(|name| (levenshtein(name, &needle), name))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

fn clock_from_env() -> Result<Box<dyn Clock>, CliError> {
    match env::var(NOW_ENV) {
        Ok(raw) => {
            let now = NaiveDateTime::parse_from_str(raw.trim(), NOW_FORMAT).map_err(|err| {
                CliError::Input(format!("{} must look like 2024-03-04T09:00:00: {}", NOW_ENV, err))
            })?;
            Ok(Box::new(FixedClock(now)))
        }
        Err(_) => Ok(Box::new(SystemClock)),
    }
}
