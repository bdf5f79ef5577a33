use std::io;
use std::io::{BufRead, Write};

use colored::Colorize;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::command;
use crate::filesystem::Session;

pub struct Application;

impl Application {
    /// Wires the real stdin/stdout/stderr into the read loop.
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        Self::repl(&app_config, stdin.lock(), stdout.lock(), stderr.lock())
    }

    /// Prompts and dispatches lines against a fresh session until `exit`,
    /// `quit` or end of input.
    ///
    /// Command and filesystem failures are reported on the error stream and
    /// the loop keeps going; only an I/O failure on the handles themselves is
    /// fatal.
    fn repl(
        config: &RuntimeConfig,
        mut input: impl BufRead,
        mut output: impl Write,
        mut errors: impl Write,
    ) -> Result<(), ApplicationError> {
        let mut session = Session::new();

        writeln!(output, "Welcome to the in-memory file system.").context(OutputSnafu)?;
        writeln!(output, "Type 'quit' or 'exit' to leave.").context(OutputSnafu)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", config.prompt).context(OutputSnafu)?;
            output.flush().context(OutputSnafu)?;

            line.clear();
            let bytes_read = input.read_line(&mut line).context(InputSnafu)?;
            if bytes_read == 0 {
                return Ok(());
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == "exit" || trimmed == "quit" {
                return Ok(());
            }

            debug!("Dispatching line: {trimmed:?}");
            match command::dispatch(trimmed, &mut session) {
                Ok(output_lines) => {
                    for output_line in output_lines {
                        writeln!(output, "{output_line}").context(OutputSnafu)?;
                    }
                }
                Err(error) => {
                    writeln!(errors, "{}", paint_error(&error.to_string())).context(OutputSnafu)?;
                }
            }
        }
    }
}

/// Reddens the message when stderr supports color.
fn paint_error(message: &str) -> String {
    if supports_color::on(supports_color::Stream::Stderr).is_some() {
        message.red().to_string()
    } else {
        message.to_string()
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to read from input"))]
    InputError { source: std::io::Error },
    #[snafu(display("Failed to write to output"))]
    OutputError { source: std::io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_repl(input: &str) -> (String, String) {
        let config = RuntimeConfig {
            prompt: "€ ".to_string(),
        };
        let mut output = Vec::new();
        let mut errors = Vec::new();
        Application::repl(&config, Cursor::new(input), &mut output, &mut errors).unwrap();
        (
            String::from_utf8(output).unwrap(),
            String::from_utf8(errors).unwrap(),
        )
    }

    #[test]
    fn repl_prints_listing_one_entry_per_line() {
        let input = "mkdir /a\ncd /a\ntouch x\nls\nquit\n";
        let (output, errors) = run_repl(input);

        assert!(output.contains("Welcome to the in-memory file system."));
        assert!(output.contains("€ "));
        assert!(output.contains("x\n"));
        assert_eq!(errors, "");
    }

    #[test]
    fn repl_reports_errors_and_keeps_going() {
        let input = "nope\nmkdir /a\nls\nquit\n";
        let (output, errors) = run_repl(input);

        assert!(errors.contains("unknown command: nope"));
        assert!(output.contains("a/\n"));
    }

    #[test]
    fn repl_reports_filesystem_errors_on_the_error_stream() {
        let input = "cd /missing\nquit\n";
        let (output, errors) = run_repl(input);

        assert!(errors.contains("not found: missing"));
        assert!(!output.contains("not found"));
    }

    #[test]
    fn repl_skips_blank_lines() {
        let input = "\n   \nls\nquit\n";
        let (_, errors) = run_repl(input);
        assert_eq!(errors, "");
    }

    #[test]
    fn repl_stops_on_exit_quit_or_end_of_input() {
        for input in ["exit\n", "quit\n", ""] {
            let (output, _) = run_repl(input);
            assert!(output.contains("Type 'quit' or 'exit' to leave."));
        }
    }

    #[test]
    fn repl_session_state_spans_the_whole_run() {
        let input = "mkdir /a\ncd /a\nmkdir b\ncd b\ncd ..\nls\nquit\n";
        let (output, errors) = run_repl(input);

        assert!(output.contains("b/\n"));
        assert_eq!(errors, "");
    }
}
