use crate::core::aliases::AliasTable;

pub const DEFAULT_NAME: &str = "myshell";
pub const DEFAULT_TERMINATOR: &str = ">";

/// Everything a builtin may mutate: the prompt's display name, the prompt
/// terminator, and the alias table. Owned by the shell loop for the life of
/// the process; none of it is persisted implicitly.
#[derive(Debug)]
pub struct ShellState {
    pub display_name: String,
    pub terminator: String,
    pub aliases: AliasTable,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        ShellState {
            display_name: DEFAULT_NAME.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
            aliases: AliasTable::new(),
        }
    }

    /// The prompt printed before each read: name, terminator, trailing space.
    pub fn prompt(&self) -> String {
        format!("{} {} ", self.display_name, self.terminator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ShellState::new();

        assert_eq!(state.display_name, "myshell");
        assert_eq!(state.terminator, ">");
        assert!(state.aliases.is_empty());
    }

    #[test]
    fn test_prompt_format() {
        let mut state = ShellState::new();
        assert_eq!(state.prompt(), "myshell > ");

        state.terminator = "$$".to_string();
        assert_eq!(state.prompt(), "myshell $$ ");

        state.display_name = "work".to_string();
        assert_eq!(state.prompt(), "work $$ ");
    }
}
