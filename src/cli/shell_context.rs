use chrono::NaiveDateTime;

use crate::{
    config::{Config, ConfigManager},
    core::{Clock, Session},
    currency::MoneyFormat,
    sync::WalletSource,
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: Session,
    pub clock: Box<dyn Clock>,
    pub wallet: Box<dyn WalletSource>,
    pub config_manager: ConfigManager,
    pub config: Config,
    /// Built from `config.locale` and `config.currency` at startup.
    pub money: MoneyFormat,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}
