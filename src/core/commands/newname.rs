use super::{Command, CommandError, Signal};
use crate::core::state::ShellState;

/// `newname <alias> [target]`: with a target, appends an alias for it; with
/// only the alias, removes the first matching table entry.
#[derive(Clone)]
pub struct NewNameCommand;

impl Default for NewNameCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl NewNameCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for NewNameCommand {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> Result<Signal, CommandError> {
        let alias = match args.first() {
            Some(alias) => alias,
            None => return Err(CommandError::Usage("newname".to_string())),
        };

        match args.get(1) {
            Some(target) => state.aliases.add(alias, target),
            None => state.aliases.remove(alias),
        }
        Ok(Signal::Continue)
    }
}
