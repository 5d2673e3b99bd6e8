use std::borrow::Cow::{self, Borrowed, Owned};
use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::config::prompts_builtin;
use crate::core::{ChatController, TurnOutcome};
use crate::providers::Exchange;

use super::{help_text, render_entry, Command, COMMANDS};

/// Completion and hints for slash commands
struct ReplHelper;

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ReplHelper {}

/// Run the interactive loop until the user quits.
///
/// The next line is only read once the current turn has resolved, so a
/// controller never has two requests in flight.
pub async fn run<E: Exchange>(mut controller: ChatController<E>) -> Result<()> {
    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper));

    println!("{}", "=== Beauty Advisor ===".bright_magenta().bold());
    println!("{}", "Type a question, or /help for commands.".bright_black());
    if !controller.endpoint().is_configured() {
        println!("{}", prompts_builtin::NOT_CONFIGURED.yellow());
    }
    println!();

    let mut rendered = render_from(&controller, 0);

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{}", help_text()),
            Command::Unknown(cmd) => {
                println!("{}", format!("Unknown command: {}", cmd).bright_black())
            }
            Command::Reset => {
                controller.reset();
                print!("\x1b[2J\x1b[H");
                rendered = render_from(&controller, 0);
            }
            Command::Say(text) => {
                if text.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(text.trim());

                // Redraw the submitted line as a transcript entry
                print!("\x1b[1A\x1b[2K");
                print!("{}", prompts_builtin::THINKING.bright_black());
                std::io::stdout().flush()?;

                let outcome = controller.submit(text).await;

                print!("\r\x1b[2K");
                rendered = render_from(&controller, rendered);

                match outcome {
                    TurnOutcome::Replied(text) => {
                        tracing::debug!(chars = text.len(), "Rendered reply")
                    }
                    TurnOutcome::Failed(e) => tracing::debug!("Turn ended without a reply: {}", e),
                    TurnOutcome::Ignored => {}
                }
            }
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

/// Print transcript entries from `start` onwards and return the new cursor
fn render_from<E: Exchange>(controller: &ChatController<E>, start: usize) -> usize {
    let entries = controller.transcript().entries();
    for entry in entries.iter().skip(start) {
        println!("{}\n", render_entry(entry));
    }
    entries.len()
}
