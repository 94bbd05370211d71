//! Command interpreter for the shell.
//!
//! A `Session` owns every clock the user has created. Clocks live in a
//! `SlotMap` and the user refers to them by small numeric handles, which are
//! never reused within a session.

use slotmap::{new_key_type, SlotMap};
use std::collections::BTreeMap;
use tracing::info;
use wallclock::demo;
use wallclock::prelude::*;

new_key_type! {
    /// Identifies a clock owned by the session.
    pub struct ClockId;
}

/// What the shell should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text (if any) and read the next line.
    Continue(String),
    /// Leave the shell.
    Exit,
}

pub const HELP: &str = "\
Available commands:
  new <HH:MM>       - Creates a clock at the given time.
  now               - Creates a clock at the current local time.
  tick <H> [N]      - Advances clock #H by N minutes (default 1).
  show <H>          - Prints clock #H.
  list              - Shows every clock and its handle.
  remove <H>        - Removes clock #H.
  demo              - Runs the three loop-style demonstration.
  help              - Shows this message.
  exit | quit       - Quits the shell.";

#[derive(Default)]
pub struct Session {
    clocks: SlotMap<ClockId, Clock>,
    handles: BTreeMap<usize, ClockId>,
    next_handle: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and executes one line of input.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let args = line.split_whitespace().collect::<Vec<_>>();
        let Some(command) = args.first() else {
            return Outcome::Continue(String::new());
        };

        let text = match *command {
            "new" => match args.get(1) {
                Some(time) => match time.parse::<Clock>() {
                    Ok(clock) => self.insert(clock),
                    Err(e) => format!("Error: {}", e),
                },
                None => "Usage: new <HH:MM>".to_string(),
            },
            "now" => self.insert(Clock::from(chrono::Local::now().time())),
            "tick" => self.tick(&args[1..]),
            "show" => match self.lookup(args.get(1), "show <H>") {
                Ok((handle, id)) => format!("#{}: {}", handle, self.clocks[id]),
                Err(message) => message,
            },
            "list" => self.list(),
            "remove" => match self.lookup(args.get(1), "remove <H>") {
                Ok((handle, id)) => {
                    self.handles.remove(&handle);
                    self.clocks.remove(id);
                    info!("Removed clock #{}.", handle);
                    format!("--> Clock #{} removed.", handle)
                }
                Err(message) => message,
            },
            "demo" => {
                let mut out = Vec::new();
                match demo::run_all(&mut out, &DemoConfig::default()) {
                    Ok(()) => String::from_utf8_lossy(&out).trim_end().to_string(),
                    Err(e) => format!("Error: demo failed: {}", e),
                }
            }
            "help" => HELP.to_string(),
            "exit" | "quit" => return Outcome::Exit,
            _ => format!("Unknown command: '{}'. Type 'help'.", line.trim()),
        };
        Outcome::Continue(text)
    }

    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }

    fn insert(&mut self, clock: Clock) -> String {
        let id = self.clocks.insert(clock);
        let handle = self.next_handle;
        self.handles.insert(handle, id);
        self.next_handle += 1;
        info!("Created clock #{} at {}.", handle, clock);
        format!("--> Added clock at {} with handle: #{}", clock, handle)
    }

    fn tick(&mut self, args: &[&str]) -> String {
        const USAGE: &str = "tick <H> [N]";
        let (handle, id) = match self.lookup(args.first(), USAGE) {
            Ok(found) => found,
            Err(message) => return message,
        };
        let minutes = match args.get(1) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(minutes) => minutes,
                Err(_) => return format!("Error: '{}' is not a valid number of minutes.", raw),
            },
            None => 1,
        };
        let clock = &mut self.clocks[id];
        clock.advance_by(minutes);
        format!("#{}: {}", handle, clock)
    }

    fn list(&self) -> String {
        if self.handles.is_empty() {
            return "No clocks. Try 'new 23:58'.".to_string();
        }
        let mut lines = vec!["Clocks:".to_string()];
        for (handle, id) in &self.handles {
            lines.push(format!("  Handle #{}: {}", handle, self.clocks[*id]));
        }
        lines.join("\n")
    }

    fn lookup(&self, raw: Option<&&str>, usage: &str) -> Result<(usize, ClockId), String> {
        let raw = raw.ok_or_else(|| format!("Usage: {}", usage))?;
        let handle = raw
            .trim_start_matches('#')
            .parse::<usize>()
            .map_err(|_| "Error: Handle must be a number (e.g., '0', '1').".to_string())?;
        self.handles
            .get(&handle)
            .map(|id| (handle, *id))
            .ok_or_else(|| format!("Error: Invalid handle #{}. Use 'list' to see clocks.", handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(outcome: Outcome) -> String {
        match outcome {
            Outcome::Continue(text) => text,
            Outcome::Exit => panic!("unexpected exit"),
        }
    }

    #[test]
    fn new_then_tick_crosses_midnight() {
        let mut session = Session::new();
        assert_eq!(
            text(session.execute("new 23:58")),
            "--> Added clock at 23:58 with handle: #0"
        );
        assert_eq!(text(session.execute("tick 0")), "#0: 23:59");
        assert_eq!(text(session.execute("tick #0 3")), "#0: 00:02");
        assert_eq!(text(session.execute("show 0")), "#0: 00:02");
    }

    #[test]
    fn tick_by_usize_max_returns_promptly() {
        let mut session = Session::new();
        session.execute("new 23:58");
        let max = usize::MAX.to_string();
        assert_eq!(text(session.execute(&format!("tick 0 {max}"))), "#0: 12:13");
    }

    #[test]
    fn help_lists_help_and_quit() {
        let mut session = Session::new();
        let help = text(session.execute("help"));
        assert!(help.contains("help "));
        assert!(help.contains("quit"));
        assert_eq!(session.execute("quit"), Outcome::Exit);
    }

    #[test]
    fn rejects_bad_times_and_arguments() {
        let mut session = Session::new();
        assert_eq!(
            text(session.execute("new 24:00")),
            "Error: hour 24 is out of range (expected 0-23)"
        );
        assert_eq!(text(session.execute("new")), "Usage: new <HH:MM>");
        assert_eq!(text(session.execute("tick")), "Usage: tick <H> [N]");
        assert_eq!(
            text(session.execute("show x")),
            "Error: Handle must be a number (e.g., '0', '1')."
        );
        assert_eq!(
            text(session.execute("show 3")),
            "Error: Invalid handle #3. Use 'list' to see clocks."
        );
        session.execute("new 10:00");
        assert_eq!(
            text(session.execute("tick 0 -1")),
            "Error: '-1' is not a valid number of minutes."
        );
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn handles_are_not_reused_after_remove() {
        let mut session = Session::new();
        session.execute("new 01:00");
        session.execute("new 02:00");
        assert_eq!(text(session.execute("remove 0")), "--> Clock #0 removed.");
        assert_eq!(
            text(session.execute("new 03:00")),
            "--> Added clock at 03:00 with handle: #2"
        );
        assert_eq!(
            text(session.execute("list")),
            "Clocks:\n  Handle #1: 02:00\n  Handle #2: 03:00"
        );
    }

    #[test]
    fn now_creates_an_in_range_clock() {
        let mut session = Session::new();
        session.execute("now");
        assert_eq!(session.len(), 1);
        let shown = text(session.execute("show 0"));
        let time = shown.trim_start_matches("#0: ");
        assert!(time.parse::<Clock>().is_ok(), "{shown}");
    }

    #[test]
    fn demo_prints_all_three_runs() {
        let mut session = Session::new();
        let output = text(session.execute("demo"));
        assert_eq!(output.matches("23:58\n23:59\n00:00\n00:01\n00:02").count(), 3);
        assert!(output.starts_with("Simulation with FOR loop:"));
        assert!(session.is_empty());
    }

    #[test]
    fn blank_unknown_and_exit() {
        let mut session = Session::new();
        assert_eq!(text(session.execute("   ")), "");
        assert_eq!(
            text(session.execute("fly away")),
            "Unknown command: 'fly away'. Type 'help'."
        );
        assert_eq!(text(session.execute("list")), "No clocks. Try 'new 23:58'.");
        assert_eq!(session.execute("exit"), Outcome::Exit);
    }
}
