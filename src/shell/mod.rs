use std::path::PathBuf;

use rustyline::{history::FileHistory, Editor};

mod executor;

use crate::{
    core::{
        commands::{CommandExecutor, Signal},
        state::ShellState,
    },
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) state: ShellState,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) history_path: PathBuf,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let executor = CommandExecutor::new();
        let completer = ShellCompleter::new(executor.builtin_names());

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));

        let history_path = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(".myshell_history");
        if history_path.exists() {
            if let Err(e) = editor.load_history(&history_path) {
                if !flags.is_set("quiet") {
                    eprintln!("Warning: Couldn't load history: {}", e);
                }
            }
        }

        ctrlc::set_handler(move || {
            println!("\nUse 'stop' to exit the shell");
        })?;

        Ok(Shell {
            editor,
            state: ShellState::new(),
            executor,
            highlighter: SyntaxHighlighter::new(),
            history_path,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            // The completer sees whatever aliases exist right now.
            if let Some(completer) = self.editor.helper_mut() {
                completer.update_aliases(self.state.aliases.entries());
            }

            let prompt = self.state.prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("Warning: Couldn't add to history: {}", e);
                        }
                    }

                    match self.dispatch_line(&line) {
                        Ok(Signal::Continue) => {}
                        Ok(Signal::Stop) => break,
                        Err(e) => {
                            if !self.flags.is_set("quiet") {
                                eprintln!("{}", self.highlighter.highlight_error(&e.to_string()));
                            }
                        }
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("CTRL-C");
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    // End of input is a hard stop; it never reaches dispatch.
                    if !self.flags.is_set("quiet") {
                        println!("CTRL-D");
                    }
                    break;
                }
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            if !self.flags.is_set("quiet") {
                eprintln!("Warning: Couldn't save history: {}", e);
            }
        }
        Ok(())
    }
}
