use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Identifiers of every command the binary knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandName {
    Calculator,
    Menu,
}

impl CommandName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Calculator => "calculator",
            CommandName::Menu => "menu",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calculator" => Ok(CommandName::Calculator),
            "menu" => Ok(CommandName::Menu),
            _ => Err(AppError::UnknownCommand(s.to_string())),
        }
    }
}
