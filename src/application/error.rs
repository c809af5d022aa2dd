use thiserror::Error;

use super::CommandName;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No such command: {0}")]
    UnknownCommand(String),

    #[error("Command is not registered: {0}")]
    CommandNotRegistered(CommandName),

    #[error("Command failed: {0}")]
    Command(#[from] anyhow::Error),
}
