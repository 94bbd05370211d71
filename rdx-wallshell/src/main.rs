mod session;

use anyhow::Result;
use colored::Colorize;
use rustyline::highlight::Highlighter;
use rustyline::Editor;
use rustyline_derive::{Completer, Helper, Hinter, Validator};
use session::{Outcome, Session};
use std::borrow::Cow;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wallclock::{CLOCK_NAME, VERSION as LIB_VERSION};

const SHELL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A custom helper struct for rustyline that enables syntax highlighting.
#[derive(Completer, Helper, Hinter, Validator)]
struct CommandHighlighter;

impl Highlighter for CommandHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if let Some((command, rest)) = line.split_once(' ') {
            Cow::Owned(format!("{} {}", command.yellow().bold(), rest.yellow()))
        } else {
            Cow::Owned(line.yellow().bold().to_string())
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn print_banner() {
    if env::var("QUIET_MODE").is_ok() {
        return;
    }
    // Embedded at compile time from the crate root.
    const LOGO_TEXT: &str = include_str!("../logo.log");
    println!("{}", LOGO_TEXT.cyan());

    let rule = "-".repeat(72);
    println!("{}", rule.dimmed());
    println!(
        "          Shell   v{:<8} Library   v{:<8}",
        SHELL_VERSION, LIB_VERSION
    );
    println!(
        "{}",
        "\n    This software is provided 'as is', without warranty of any kind.\n    Distributed under the MIT OR Apache-2.0 license. Use at your own risk.\n"
            .dimmed()
    );
    println!("{}", rule.dimmed());
}

fn main() -> Result<()> {
    print_banner();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CommandHighlighter));

    println!(
        "{} shell is ready. Type 'help' for commands or 'exit' to quit.",
        CLOCK_NAME.cyan()
    );

    loop {
        let prompt = format!("{}", ">> ".cyan().bold());
        match rl.readline(&prompt) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                match session.execute(&line) {
                    Outcome::Continue(text) if text.is_empty() => {}
                    Outcome::Continue(text) => println!("{}", text),
                    Outcome::Exit => break,
                }
            }
            Err(_) => break,
        }
    }

    if !session.is_empty() {
        info!("Leaving shell with {} clock(s).", session.len());
    }
    println!("Exiting wallshell...");
    Ok(())
}
