use super::{Command, CommandError, Signal};
use crate::core::state::{ShellState, DEFAULT_NAME};

/// Sets the prompt's display name, or resets it to the default when called
/// with no argument.
#[derive(Clone)]
pub struct SetShellNameCommand;

impl Default for SetShellNameCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SetShellNameCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetShellNameCommand {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> Result<Signal, CommandError> {
        state.display_name = match args.first() {
            Some(name) => name.clone(),
            None => DEFAULT_NAME.to_string(),
        };
        Ok(Signal::Continue)
    }
}
