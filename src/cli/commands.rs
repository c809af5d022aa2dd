use std::collections::HashMap;
use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use super::CalculatorCommand;
use crate::application::{AppError, CommandName};
use crate::config::Config;

/// A runnable command. Input and output are injected so sessions can be
/// scripted in tests.
pub trait Command {
    fn name(&self) -> CommandName;

    fn describe(&self) -> &'static str;

    fn execute(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()>;
}

/// Maps command identifiers to their handlers.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<CommandName, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in command wired to `config`.
    pub fn with_defaults(config: &Config) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CalculatorCommand::new(config.clone())));

        let mut entries = registry.describe_all();
        entries.push((CommandName::Menu, MenuCommand::DESCRIPTION));
        entries.sort();
        registry.register(Box::new(MenuCommand::new(entries)));

        registry
    }

    /// Register a handler, replacing any previous one with the same name.
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.name(), command);
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<CommandName> {
        let mut names: Vec<CommandName> = self.commands.keys().copied().collect();
        names.sort();
        names
    }

    pub fn describe_all(&self) -> Vec<(CommandName, &'static str)> {
        self.names()
            .into_iter()
            .filter_map(|name| self.commands.get(&name).map(|c| (name, c.describe())))
            .collect()
    }

    /// Resolve `name` and run the matching handler.
    pub fn execute(
        &mut self,
        name: &str,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), AppError> {
        let name: CommandName = name.parse()?;
        let command = self
            .commands
            .get_mut(&name)
            .ok_or(AppError::CommandNotRegistered(name))?;

        info!(command = %name, "Executing command");
        command.execute(input, output)?;
        Ok(())
    }
}

/// Prints the available commands.
pub struct MenuCommand {
    entries: Vec<(CommandName, &'static str)>,
}

impl MenuCommand {
    pub const DESCRIPTION: &'static str = "List available commands";

    pub fn new(entries: Vec<(CommandName, &'static str)>) -> Self {
        Self { entries }
    }
}

impl Command for MenuCommand {
    fn name(&self) -> CommandName {
        CommandName::Menu
    }

    fn describe(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn execute(&mut self, _input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        writeln!(output, "Available commands:")?;
        for (name, description) in &self.entries {
            writeln!(output, "  {:<12} {}", name.as_str(), description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    struct Echo;

    impl Command for Echo {
        fn name(&self) -> CommandName {
            CommandName::Calculator
        }

        fn describe(&self) -> &'static str {
            "Echo input"
        }

        fn execute(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
            let mut line = String::new();
            input.read_line(&mut line)?;
            write!(output, "{}", line)?;
            Ok(())
        }
    }

    #[test]
    fn test_execute_registered_command() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(Echo));

        let mut input = Cursor::new("hello\n");
        let mut output = Vec::new();
        registry
            .execute("calculator", &mut input, &mut output)
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "hello\n");
    }

    #[test]
    fn test_execute_unregistered_command() {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(Echo));

        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = registry
            .execute("menu", &mut input, &mut output)
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::CommandNotRegistered(CommandName::Menu)
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_defaults_and_menu() {
        let mut registry = CommandRegistry::with_defaults(&Config::default());
        assert_eq!(
            registry.names(),
            vec![CommandName::Calculator, CommandName::Menu]
        );

        let mut input = Cursor::new("");
        let mut output = Vec::new();
        registry.execute("menu", &mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Available commands:"));
        assert!(text.contains("calculator"));
        assert!(text.contains(MenuCommand::DESCRIPTION));
    }
}
