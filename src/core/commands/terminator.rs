use super::{Command, CommandError, Signal};
use crate::core::state::{ShellState, DEFAULT_TERMINATOR};

/// Sets the symbol printed after the shell name in the prompt, or resets it
/// to `>` when called with no argument.
#[derive(Clone)]
pub struct SetTerminatorCommand;

impl Default for SetTerminatorCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SetTerminatorCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetTerminatorCommand {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> Result<Signal, CommandError> {
        state.terminator = match args.first() {
            Some(symbol) => symbol.clone(),
            None => DEFAULT_TERMINATOR.to_string(),
        };
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        let cmd = SetTerminatorCommand::new();
        let mut state = ShellState::new();

        cmd.execute(&mut state, &["$$".to_string()]).unwrap();
        assert_eq!(state.terminator, "$$");
        assert_eq!(state.prompt(), "myshell $$ ");

        cmd.execute(&mut state, &[]).unwrap();
        assert_eq!(state.terminator, ">");
    }
}
