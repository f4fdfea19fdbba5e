use super::{Command, CommandError, Signal};
use crate::core::state::ShellState;

/// Prints the banner and every registered builtin. The name list is handed
/// over by the registry at construction time, so the listing can never
/// drift from what is actually dispatchable.
#[derive(Clone, Default)]
pub struct HelpCommand {
    builtins: Vec<String>,
}

impl HelpCommand {
    pub fn new() -> Self {
        HelpCommand {
            builtins: Vec::new(),
        }
    }

    pub fn set_builtins(&mut self, names: Vec<String>) {
        self.builtins = names;
    }
}

impl Command for HelpCommand {
    fn execute(&self, _state: &mut ShellState, _args: &[String]) -> Result<Signal, CommandError> {
        println!("myshell");
        println!("Type program names and arguments, and hit enter.");
        println!("The following are built in:");
        for name in &self.builtins {
            println!("  {}", name);
        }
        println!("Use the man command for information on other programs.");
        Ok(Signal::Continue)
    }
}
