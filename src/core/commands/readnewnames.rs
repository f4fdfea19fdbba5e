use std::fs::File;
use std::io;

use super::{Command, CommandError, Signal};
use crate::core::state::ShellState;

/// Appends alias pairs from a file previously written by `savenewnames`,
/// echoing each pair as it is read. A missing file is reported but never
/// fatal.
#[derive(Clone)]
pub struct ReadNewNamesCommand;

impl Default for ReadNewNamesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadNewNamesCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ReadNewNamesCommand {
    fn execute(&self, state: &mut ShellState, args: &[String]) -> Result<Signal, CommandError> {
        let path = match args.first() {
            Some(path) => path,
            None => return Err(CommandError::Usage("readnewnames".to_string())),
        };

        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(CommandError::FileNotFound(path.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        for entry in state.aliases.load_from(&mut file)? {
            println!("{} {}", entry.alias, entry.target);
        }
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::SaveNewNamesCommand;
    use std::{env, fs};

    #[test]
    fn test_requires_a_filename() {
        let cmd = ReadNewNamesCommand::new();
        let mut state = ShellState::new();

        let result = cmd.execute(&mut state, &[]);
        assert!(matches!(result, Err(CommandError::Usage(_))));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let cmd = ReadNewNamesCommand::new();
        let mut state = ShellState::new();

        let result = cmd.execute(&mut state, &["/no/such/aliases.txt".to_string()]);
        assert!(matches!(result, Err(CommandError::FileNotFound(_))));
        assert!(state.aliases.is_empty());
    }

    #[test]
    fn test_save_then_read_round_trip() {
        let save = SaveNewNamesCommand::new();
        let read = ReadNewNamesCommand::new();
        let path = env::temp_dir().join(format!("myshell_roundtrip_{}", std::process::id()));
        let path_arg = vec![path.to_string_lossy().to_string()];

        let mut original = ShellState::new();
        original.aliases.add("ll", "ls");
        original.aliases.add("greet", "echo");
        save.execute(&mut original, &path_arg).unwrap();

        // A fresh shell run loads the same pairs in the same order.
        let mut restored = ShellState::new();
        read.execute(&mut restored, &path_arg).unwrap();
        assert_eq!(restored.aliases.entries(), original.aliases.entries());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_appends_to_existing_entries() {
        let save = SaveNewNamesCommand::new();
        let read = ReadNewNamesCommand::new();
        let path = env::temp_dir().join(format!("myshell_append_{}", std::process::id()));
        let path_arg = vec![path.to_string_lossy().to_string()];

        let mut state = ShellState::new();
        state.aliases.add("ll", "ls");
        save.execute(&mut state, &path_arg).unwrap();

        read.execute(&mut state, &path_arg).unwrap();
        assert_eq!(state.aliases.len(), 2);
        // The preexisting entry still wins lookup.
        assert_eq!(state.aliases.resolve("ll"), Some("ls"));

        fs::remove_file(path).unwrap();
    }
}
