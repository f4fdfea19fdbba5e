use super::{Command, CommandError, Signal};
use crate::core::state::ShellState;

/// Requests loop termination. The process itself exits through the loop's
/// normal shutdown path, not from here.
#[derive(Clone)]
pub struct StopCommand;

impl Default for StopCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl StopCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for StopCommand {
    fn execute(&self, _state: &mut ShellState, _args: &[String]) -> Result<Signal, CommandError> {
        Ok(Signal::Stop)
    }
}
