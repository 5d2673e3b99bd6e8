//! Terminal front-end
//!
//! The prompt is the submission control and stdout is the message list.

mod repl;

use colored::Colorize;

use crate::conversation::{Entry, Speaker};

pub use repl::run;

/// Slash commands understood by the prompt
pub const COMMANDS: &[&str] = &["/reset", "/help", "/quit"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Reset,
    Help,
    Quit,
    Unknown(&'a str),
    Say(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if !trimmed.starts_with('/') {
            return Command::Say(line);
        }
        match trimmed {
            "/reset" => Command::Reset,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            other => Command::Unknown(other),
        }
    }
}

/// Format a transcript entry for the terminal
pub fn render_entry(entry: &Entry) -> String {
    let time = entry.at.with_timezone(&chrono::Local).format("%H:%M");
    let mut out = String::new();

    match entry.speaker {
        Speaker::User => {
            out.push_str(&format!("{} {}", format!("[{}] you", time).bright_black(), entry.text.green()));
        }
        Speaker::Assistant => {
            if let Some(question) = &entry.question {
                out.push_str(&format!("  {}\n", format!("“{}”", question).italic().bright_black()));
            }
            out.push_str(&format!("{}", format!("[{}] advisor", time).bright_black()));
            for line in entry.text.lines() {
                out.push_str(&format!("\n  {}", line.bright_blue()));
            }
        }
    }

    out
}

pub fn help_text() -> String {
    format!(
        "{}\n  {}  start a new conversation\n  {}   show this help\n  {}   leave",
        "Commands:".bright_yellow(),
        "/reset".bright_cyan(),
        "/help".bright_cyan(),
        "/quit".bright_cyan(),
    )
}
