//! # Shell Commands
//!
//! Parses one line of user input into a [`Command`].
//!
//! ```text
//! set cost 50        cost=50        calc        check
//! upload runs.csv    reset stability            show   help   quit
//! ```

use std::path::PathBuf;
use std::str::FromStr;

/// Panel targeted by `reset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetTarget {
    Efficiency,
    Stability,
    Batch,
    All,
}

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change a field; an empty value clears it
    Set { field: String, value: String },
    /// Submit the efficiency panel
    Calculate,
    /// Submit the stability panel
    Check,
    /// Select a CSV file and submit the batch panel
    Upload(PathBuf),
    Reset(ResetTarget),
    Show,
    Help,
    Quit,
    /// Blank line
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandParseError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub const HELP_TEXT: &str = "\
Commands:
  set <field> <value>   change a field (substrate, cost, temperature, ph)
  <field>=<value>       same as set
  calc                  run the efficiency calculation
  check                 run the stability check
  upload <file.csv>     upload a CSV batch file
  reset [panel]         reset efficiency, stability, batch or all (default)
  show                  show every panel
  help                  show this help
  quit                  exit";

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        if let Some((field, value)) = verb.split_once('=') {
            // `cost=50` and `cost= 50` both assign
            let value = if value.is_empty() { rest } else { value };
            return Ok(Command::Set {
                field: field.to_string(),
                value: value.to_string(),
            });
        }

        match verb.to_lowercase().as_str() {
            "set" => {
                if rest.is_empty() {
                    return Err(CommandParseError::Usage("set <field> <value>"));
                }
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                Ok(Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "calc" | "calculate" | "analyze" => Ok(Command::Calculate),
            "check" | "stability" => Ok(Command::Check),
            "upload" => {
                if rest.is_empty() {
                    Err(CommandParseError::Usage("upload <file.csv>"))
                } else {
                    Ok(Command::Upload(PathBuf::from(rest)))
                }
            }
            "reset" => {
                let target = match rest.to_lowercase().as_str() {
                    "" | "all" => ResetTarget::All,
                    "efficiency" => ResetTarget::Efficiency,
                    "stability" => ResetTarget::Stability,
                    "batch" => ResetTarget::Batch,
                    _ => {
                        return Err(CommandParseError::Usage(
                            "reset [efficiency|stability|batch|all]",
                        ))
                    }
                };
                Ok(Command::Reset(target))
            }
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandParseError::Unknown(verb.to_string())),
        }
    }
}
