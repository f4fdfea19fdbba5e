use std::fs::File;

use super::{Command, CommandError, Signal};
use crate::core::state::ShellState;

/// Writes the alias table to a file, one `alias target` line per entry,
/// replacing whatever the file held before.
#[derive(Clone)]
pub struct SaveNewNamesCommand;

impl Default for SaveNewNamesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveNewNamesCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SaveNewNamesCommand {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> Result<Signal, CommandError> {
        let path = match args.first() {
            Some(path) => path,
            None => return Err(CommandError::Usage("savenewnames".to_string())),
        };

        let mut file = File::create(path)?;
        state.aliases.save_to(&mut file)?;
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    #[test]
    fn test_requires_a_filename() {
        let cmd = SaveNewNamesCommand::new();
        let mut state = ShellState::new();

        let result = cmd.execute(&mut state, &[]);
        assert!(matches!(result, Err(CommandError::Usage(_))));
    }

    #[test]
    fn test_save_overwrites_file() {
        let cmd = SaveNewNamesCommand::new();
        let mut state = ShellState::new();
        state.aliases.add("ll", "ls");
        state.aliases.add("greet", "echo");

        let path = env::temp_dir().join(format!("myshell_save_{}", std::process::id()));
        fs::write(&path, "stale contents\n").unwrap();

        cmd.execute(&mut state, &[path.to_string_lossy().to_string()])
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "ll ls\ngreet echo\n");

        fs::remove_file(path).unwrap();
    }
}
