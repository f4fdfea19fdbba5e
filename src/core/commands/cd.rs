use std::env;

use super::{Command, CommandError, Signal};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, _state: &mut ShellState, args: &[String]) -> Result<Signal, CommandError> {
        let path = match args.first() {
            Some(path) => path,
            None => return Err(CommandError::Usage("cd".to_string())),
        };

        env::set_current_dir(path)?;
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_requires_a_path() {
        let cmd = CdCommand::new();
        let mut state = ShellState::new();

        let result = cmd.execute(&mut state, &[]);
        assert!(matches!(result, Err(CommandError::Usage(_))));
    }

    #[test]
    fn test_cd_changes_directory() {
        let cmd = CdCommand::new();
        let mut state = ShellState::new();
        let original = env::current_dir().unwrap();
        let temp_dir = env::temp_dir();

        let result = cmd.execute(&mut state, &[temp_dir.to_string_lossy().to_string()]);
        assert!(matches!(result, Ok(Signal::Continue)));
        assert_eq!(
            env::current_dir().unwrap().canonicalize().unwrap(),
            temp_dir.canonicalize().unwrap()
        );

        env::set_current_dir(original).unwrap();
    }

    #[test]
    fn test_cd_invalid_path() {
        let cmd = CdCommand::new();
        let mut state = ShellState::new();

        let result = cmd.execute(&mut state, &["/path/that/does/not/exist".to_string()]);
        assert!(matches!(result, Err(CommandError::Io(_))));
    }
}
