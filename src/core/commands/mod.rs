use std::collections::BTreeMap;

mod cd;
mod help;
mod listnewnames;
mod newname;
mod readnewnames;
mod savenewnames;
mod shellname;
mod stop;
mod terminator;

pub use cd::CdCommand;
pub use help::HelpCommand;
pub use listnewnames::ListNewNamesCommand;
pub use newname::NewNameCommand;
pub use readnewnames::ReadNewNamesCommand;
pub use savenewnames::SaveNewNamesCommand;
pub use shellname::SetShellNameCommand;
pub use stop::StopCommand;
pub use terminator::SetTerminatorCommand;

use crate::core::state::ShellState;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    /// A builtin was invoked without a required argument. Carries the
    /// command name for the message.
    Usage(String),
    FileNotFound(String),
    Io(std::io::Error),
    Process(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(cmd) => write!(f, "expected argument to \"{}\"", cmd),
            CommandError::FileNotFound(path) => write!(f, "the file does not exist: {}", path),
            CommandError::Io(err) => write!(f, "{}", err),
            CommandError::Process(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

/// Whether the loop keeps reading after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Stop,
}

pub trait Command {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> Result<Signal, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Help(HelpCommand),
    ListNewNames(ListNewNamesCommand),
    NewName(NewNameCommand),
    ReadNewNames(ReadNewNamesCommand),
    SaveNewNames(SaveNewNamesCommand),
    SetShellName(SetShellNameCommand),
    SetTerminator(SetTerminatorCommand),
    Stop(StopCommand),
}

impl Command for CommandType {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> Result<Signal, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(state, args),
            CommandType::Help(cmd) => cmd.execute(state, args),
            CommandType::ListNewNames(cmd) => cmd.execute(state, args),
            CommandType::NewName(cmd) => cmd.execute(state, args),
            CommandType::ReadNewNames(cmd) => cmd.execute(state, args),
            CommandType::SaveNewNames(cmd) => cmd.execute(state, args),
            CommandType::SetShellName(cmd) => cmd.execute(state, args),
            CommandType::SetTerminator(cmd) => cmd.execute(state, args),
            CommandType::Stop(cmd) => cmd.execute(state, args),
        }
    }
}

#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("help".to_string(), CommandType::Help(HelpCommand::new()));
        commands.insert(
            "listnewnames".to_string(),
            CommandType::ListNewNames(ListNewNamesCommand::new()),
        );
        commands.insert(
            "newname".to_string(),
            CommandType::NewName(NewNameCommand::new()),
        );
        commands.insert(
            "readnewnames".to_string(),
            CommandType::ReadNewNames(ReadNewNamesCommand::new()),
        );
        commands.insert(
            "savenewnames".to_string(),
            CommandType::SaveNewNames(SaveNewNamesCommand::new()),
        );
        commands.insert(
            "setshellname".to_string(),
            CommandType::SetShellName(SetShellNameCommand::new()),
        );
        commands.insert(
            "setterminator".to_string(),
            CommandType::SetTerminator(SetTerminatorCommand::new()),
        );
        commands.insert("stop".to_string(), CommandType::Stop(StopCommand::new()));

        // The help listing comes from the registry itself, so it is filled
        // in once everything is registered.
        let names: Vec<String> = commands.keys().cloned().collect();
        if let Some(CommandType::Help(help)) = commands.get_mut("help") {
            help.set_builtins(names);
        }

        CommandExecutor {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    /// Dispatches one token sequence: alias rewrite first, then builtin
    /// lookup on the rewritten name, then the external launcher.
    pub fn execute(
        &self,
        state: &mut ShellState,
        tokens: &[String],
    ) -> Result<Signal, CommandError> {
        let first = match tokens.first() {
            Some(first) => first,
            None => return Ok(Signal::Continue),
        };

        // The alias table rewrites the command word before the builtin
        // check, so an alias sharing a builtin's name shadows that builtin.
        let command = match state.aliases.resolve(first) {
            Some(target) => target.to_owned(),
            None => first.clone(),
        };

        if let Some(builtin) = self.commands.get(command.as_str()) {
            return builtin.execute(state, &tokens[1..]);
        }

        let mut argv = Vec::with_capacity(tokens.len());
        argv.push(command);
        argv.extend_from_slice(&tokens[1..]);
        self.process_executor.spawn_wait(&argv)?;
        Ok(Signal::Continue)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Registered builtin names in registry order. The completer and the
    /// help listing both derive from this.
    pub fn builtin_names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}
