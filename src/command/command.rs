use snafu::prelude::*;

use crate::filesystem::{FilesystemError, Session};

/// A parsed input line: one verb plus its single trailing argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Mkdir { path: String },
    Cd { path: String },
    Ls { path: Option<String> },
    Touch { name: String },
}

impl Command {
    /// Parses a raw line. A blank line parses to `None`, a no-op rather than
    /// an error.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let (verb, arg) = match trimmed.find(char::is_whitespace) {
            Some(index) => {
                let (verb, rest) = trimmed.split_at(index);
                (verb, rest.trim())
            }
            None => (trimmed, ""),
        };

        let command = match verb {
            "mkdir" => Command::Mkdir {
                path: require_arg(verb, arg)?,
            },
            "cd" => Command::Cd {
                path: require_arg(verb, arg)?,
            },
            "touch" => Command::Touch {
                name: require_arg(verb, arg)?,
            },
            "ls" => Command::Ls {
                path: (!arg.is_empty()).then(|| arg.to_string()),
            },
            _ => {
                return InvalidCommandSnafu {
                    reason: format!("unknown command: {verb}"),
                }
                .fail();
            }
        };

        Ok(Some(command))
    }

    /// Runs the command against a session, yielding the lines to print.
    ///
    /// Only `ls` produces output; the mutating verbs succeed silently.
    pub fn execute(&self, session: &mut Session) -> Result<Vec<String>, CommandError> {
        match self {
            Command::Mkdir { path } => {
                session.mkdir(path).context(FilesystemSnafu)?;
                Ok(Vec::new())
            }
            Command::Cd { path } => {
                session.cd(path).context(FilesystemSnafu)?;
                Ok(Vec::new())
            }
            Command::Ls { path } => session.ls(path.as_deref()).context(FilesystemSnafu),
            Command::Touch { name } => {
                session.touch(name).context(FilesystemSnafu)?;
                Ok(Vec::new())
            }
        }
    }
}

/// Parses and runs one raw line against a session.
pub fn dispatch(line: &str, session: &mut Session) -> Result<Vec<String>, CommandError> {
    match Command::parse(line)? {
        Some(command) => command.execute(session),
        None => Ok(Vec::new()),
    }
}

fn require_arg(verb: &str, arg: &str) -> Result<String, CommandError> {
    ensure!(
        !arg.is_empty(),
        InvalidCommandSnafu {
            reason: format!("{verb} requires an argument"),
        }
    );
    Ok(arg.to_string())
}

#[derive(Debug, Snafu)]
pub enum CommandError {
    #[snafu(display("{reason}"))]
    InvalidCommand { reason: String },
    // Core failures pass through with their own message.
    #[snafu(display("{source}"))]
    Filesystem { source: FilesystemError },
}
