use crate::core::commands::{CommandError, Signal};
use crate::tokenizer;

pub(crate) trait CommandHandler {
    fn dispatch_line(&mut self, line: &str) -> Result<Signal, CommandError>;
}

impl CommandHandler for super::Shell {
    fn dispatch_line(&mut self, line: &str) -> Result<Signal, CommandError> {
        let tokens = tokenizer::tokenize(line);
        if tokens.is_empty() {
            return Ok(Signal::Continue);
        }

        self.executor.execute(&mut self.state, &tokens)
    }
}
