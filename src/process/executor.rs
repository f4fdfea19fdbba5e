use std::process::{Command, ExitStatus, Stdio};

use super::{signal, ProcessError};

#[derive(Clone)]
pub struct ProcessExecutor;

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `argv[0]` (resolved through the standard PATH search) with
    /// the remaining words as arguments and blocks until it terminates.
    /// The child inherits the shell's stdio. The exit status is returned
    /// for callers that care; the shell loop itself does not.
    pub fn spawn_wait(&self, argv: &[String]) -> Result<ExitStatus, ProcessError> {
        let mut command = Command::new(&argv[0]);
        command
            .args(&argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    return Err(ProcessError::CommandNotFound(argv[0].clone()));
                }
                return Err(e.into());
            }
        };

        // An interrupt while waiting belongs to the foreground child; the
        // shell itself must survive it.
        signal::setup_signal_handlers()?;

        child.wait().map_err(Into::into)
    }
}
