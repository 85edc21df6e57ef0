//! Line-oriented interactive session over stdin.

use std::io::{BufRead, Write};

use backend::provider_utils::openfda_utils::EventSource;
use clap::{Parser, error::ErrorKind};

use crate::{
    commands::{ShellCommand, ShellLine},
    session::Session,
};

const PROMPT: &str = "maude> ";
const BANNER: &str = "MAUDE device event search. Type `help` for commands, `exit` to leave.";

enum LineOutcome {
    Print(String),
    Exit,
}

/// Reads commands until `exit` or end of input. Errors are printed and the loop continues.
pub fn run_shell<S: EventSource, R: BufRead, W: Write>(
    session: &mut Session<S>,
    input: R,
    mut output: W,
    interactive: bool,
) -> anyhow::Result<()> {
    if interactive {
        writeln!(output, "{BANNER}")?;
    }
    let mut lines = input.lines();
    loop {
        if interactive {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        match execute_line(session, &line?) {
            Ok(LineOutcome::Print(text)) => output.write_all(text.as_bytes())?,
            Ok(LineOutcome::Exit) => break,
            Err(message) => {
                tracing::debug!("shell command failed: {}", message);
                writeln!(output, "error: {}", message.trim_end())?;
            }
        }
    }
    output.flush()?;
    Ok(())
}

fn execute_line<S: EventSource>(session: &mut Session<S>, line: &str) -> Result<LineOutcome, String> {
    let words = shell_words::split(line).map_err(|e| e.to_string())?;
    if words.is_empty() {
        return Ok(LineOutcome::Print(String::new()));
    }
    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand) => {
            return Ok(LineOutcome::Print(e.render().to_string()));
        }
        Err(e) => {
            let rendered = e.render().to_string();
            return Err(rendered.trim_start_matches("error: ").to_string());
        }
    };

    let text = match parsed.command {
        ShellCommand::Search(args) => {
            let request = args.to_request().map_err(|e| e.to_string())?;
            session.search(request).map_err(|e| e.to_string())?
        }
        ShellCommand::Top { kind } => session.search(kind.into()).map_err(|e| e.to_string())?,
        ShellCommand::Load { path } => session.load(&path).map_err(|e| e.to_string())?,
        ShellCommand::Table { filters, rows } => session.table(&filters, rows),
        ShellCommand::Links => session.links(),
        ShellCommand::Chart { by, event_type, filters } => session.chart(by, event_type.as_deref(), &filters),
        ShellCommand::Export { format, output } => {
            session.export(format, output.as_deref()).map_err(|e| format!("{e:#}"))?
        }
        ShellCommand::Status => session.status(),
        ShellCommand::Exit => return Ok(LineOutcome::Exit),
    };
    Ok(LineOutcome::Print(text))
}
