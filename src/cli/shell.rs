//! Interactive session
//!
//! A line-oriented session that keeps one ledger in memory. Entries are only
//! written to disk on `save`, and `load` replaces the in-memory ledger, so the
//! workflow matches a window with Add / Save / Load buttons.

use std::io::{BufRead, Write};

use crate::display::{format_balance, format_entry_table};
use crate::error::TrackerResult;
use crate::models::EntryKind;
use crate::services::{LoadStatus, Tracker};

/// A command available in the interactive session
#[derive(Debug, Clone)]
pub struct ShellCommand {
    /// Command name (what user types)
    pub name: &'static str,
    /// Argument synopsis
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    /// Single-letter shortcut
    pub shortcut: Option<&'static str>,
    pub action: ShellAction,
}

/// Actions that session commands perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Add,
    List,
    Balance,
    Save,
    Load,
    Help,
    Quit,
}

/// All session commands
pub static SHELL_COMMANDS: &[ShellCommand] = &[
    ShellCommand {
        name: "add",
        usage: "add <income|expense> <amount> <description>",
        description: "Record an entry",
        shortcut: Some("a"),
        action: ShellAction::Add,
    },
    ShellCommand {
        name: "list",
        usage: "list",
        description: "Show entries in this session",
        shortcut: Some("l"),
        action: ShellAction::List,
    },
    ShellCommand {
        name: "balance",
        usage: "balance",
        description: "Show the current balance",
        shortcut: Some("b"),
        action: ShellAction::Balance,
    },
    ShellCommand {
        name: "save",
        usage: "save",
        description: "Write all entries to the data file",
        shortcut: Some("s"),
        action: ShellAction::Save,
    },
    ShellCommand {
        name: "load",
        usage: "load",
        description: "Replace entries with the saved data",
        shortcut: None,
        action: ShellAction::Load,
    },
    ShellCommand {
        name: "help",
        usage: "help",
        description: "Show this help",
        shortcut: Some("?"),
        action: ShellAction::Help,
    },
    ShellCommand {
        name: "quit",
        usage: "quit",
        description: "Leave the session (unsaved entries are lost)",
        shortcut: Some("q"),
        action: ShellAction::Quit,
    },
];

/// Find a command by name or shortcut
pub fn find_command(name: &str) -> Option<&'static ShellCommand> {
    let name = name.to_lowercase();
    let name = if name == "exit" { "quit" } else { name.as_str() };

    SHELL_COMMANDS
        .iter()
        .find(|cmd| cmd.name == name || cmd.shortcut == Some(name))
}

/// Run the session until `quit` or end of input
///
/// Command failures are reported on `output` and the session continues; only
/// failing to write to `output` or read from `input` ends it with an error.
pub fn run_shell<R, W>(
    tracker: &mut Tracker,
    input: R,
    mut output: W,
    load_first: bool,
) -> TrackerResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Finance tracker. Type 'help' for commands.")?;
    writeln!(output, "Data file: {}", tracker.store_path().display())?;

    if load_first {
        load(tracker, &mut output)?;
    }

    writeln!(output, "{}", format_balance(tracker.balance()))?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        let (name, args) = split_word(&line);

        if !name.is_empty() {
            let Some(command) = find_command(name) else {
                writeln!(output, "Unknown command '{}'. Type 'help' for commands.", name)?;
                prompt(&mut output)?;
                continue;
            };

            tracing::debug!(command = command.name, "shell command");

            match command.action {
                ShellAction::Add => add(tracker, args, &mut output)?,
                ShellAction::List => {
                    write!(output, "{}", format_entry_table(tracker.entries()))?;
                    writeln!(output, "{}", format_balance(tracker.balance()))?;
                }
                ShellAction::Balance => {
                    writeln!(output, "{}", format_balance(tracker.balance()))?;
                }
                ShellAction::Save => match tracker.save() {
                    Ok(()) => writeln!(output, "Data saved successfully.")?,
                    Err(e) => writeln!(output, "Error: {}", e)?,
                },
                ShellAction::Load => load(tracker, &mut output)?,
                ShellAction::Help => print_help(&mut output)?,
                ShellAction::Quit => return Ok(()),
            }
        }

        prompt(&mut output)?;
    }

    writeln!(output)?;
    Ok(())
}

fn add<W: Write>(tracker: &mut Tracker, args: &str, output: &mut W) -> TrackerResult<()> {
    let (kind, rest) = split_word(args);
    let (amount, description) = split_word(rest);

    if kind.is_empty() {
        writeln!(output, "Usage: {}", SHELL_COMMANDS[0].usage)?;
        return Ok(());
    }

    let kind = match kind.parse::<EntryKind>() {
        Ok(kind) => kind,
        Err(e) => {
            writeln!(output, "Error: {}", e)?;
            return Ok(());
        }
    };

    match tracker.add_entry(kind, description, amount) {
        Ok(entry) => {
            writeln!(output, "Added {}", entry)?;
            writeln!(output, "{}", format_balance(tracker.balance()))?;
        }
        Err(e) => writeln!(output, "Error: {}", e)?,
    }

    Ok(())
}

fn load<W: Write>(tracker: &mut Tracker, output: &mut W) -> TrackerResult<()> {
    match tracker.load() {
        Ok(LoadStatus::Loaded(count)) => {
            writeln!(output, "Data loaded successfully ({} entries).", count)?;
            writeln!(output, "{}", format_balance(tracker.balance()))?;
        }
        Ok(LoadStatus::NoData) => writeln!(output, "No saved data found.")?,
        Err(e) => writeln!(output, "Error: {}", e)?,
    }
    Ok(())
}

fn print_help<W: Write>(output: &mut W) -> TrackerResult<()> {
    writeln!(output, "Commands:")?;
    for cmd in SHELL_COMMANDS {
        let shortcut = cmd.shortcut.map(|s| format!("[{}]", s)).unwrap_or_default();
        writeln!(
            output,
            "  {:46} {:4} {}",
            cmd.usage, shortcut, cmd.description
        )?;
    }
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> TrackerResult<()> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim()),
        None => (s.trim_end(), ""),
    }
}
