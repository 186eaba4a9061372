use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, Result, bail};
use dialoguer::Input;

/// The interactive prompt channel: one answer per question. The loop never
/// touches the terminal directly, so a session can be scripted in tests.
pub trait Prompter {
    /// Ask for the next top-level action token.
    fn action(&mut self) -> Result<String>;

    /// Ask a free-text question. Empty answers are allowed here; rejection
    /// happens at the store boundary.
    fn text(&mut self, label: &str) -> Result<String>;
}

/// Terminal-backed prompter. When stdin is not a terminal (piped input) it
/// falls back to plain line reads so sessions stay scriptable.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn action(&mut self) -> Result<String> {
        self.text("How can I help you?")
    }

    fn text(&mut self, label: &str) -> Result<String> {
        if !io::stdin().is_terminal() {
            return read_piped_line(label);
        }
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("reading answer for '{label}'"))
    }
}

fn read_piped_line(label: &str) -> Result<String> {
    let mut line = String::new();
    let bytes = io::stdin()
        .lock()
        .read_line(&mut line)
        .with_context(|| format!("reading answer for '{label}'"))?;
    if bytes == 0 {
        bail!("input closed while waiting for '{label}'");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
