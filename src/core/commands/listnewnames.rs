use super::{Command, CommandError, Signal};
use crate::core::state::ShellState;

/// Prints every alias pair, one `alias target` line per entry, in the order
/// they were added.
#[derive(Clone)]
pub struct ListNewNamesCommand;

impl Default for ListNewNamesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ListNewNamesCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ListNewNamesCommand {
    fn execute(&self, state: &mut ShellState, _args: &[String]) -> Result<Signal, CommandError> {
        for entry in state.aliases.entries() {
            println!("{} {}", entry.alias, entry.target);
        }
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_continues_even_when_empty() {
        let cmd = ListNewNamesCommand::new();
        let mut state = ShellState::new();

        assert!(matches!(cmd.execute(&mut state, &[]), Ok(Signal::Continue)));

        state.aliases.add("ll", "ls");
        assert!(matches!(cmd.execute(&mut state, &[]), Ok(Signal::Continue)));
    }
}
