//! The demonstration driver: runs a clock through a fixed number of advances,
//! printing its state before each one, using a chosen loop construct.
//!
//! All three loop styles print byte-identical output for the same seed and
//! advance count. The advance count is non-zero because a body-first loop
//! always runs at least once.

use crate::clock::Clock;
use crate::config::{DemoConfig, LoopStyle};
use std::io::{self, Write};
use std::num::NonZeroUsize;
use tracing::debug;

/// Runs a single demo: prints `seed` and advances it, `advances` times.
///
/// The seed is copied, so every run starts fresh. Returns the final state.
pub fn run<W: Write>(
    out: &mut W,
    style: LoopStyle,
    seed: Clock,
    advances: NonZeroUsize,
) -> io::Result<Clock> {
    let mut clock = seed;
    let advances = advances.get();

    match style {
        LoopStyle::For => {
            for _ in 0..advances {
                writeln!(out, "{}", clock)?;
                clock.advance();
            }
        }
        LoopStyle::While => {
            let mut counter = 0;
            while counter < advances {
                writeln!(out, "{}", clock)?;
                clock.advance();
                counter += 1;
            }
        }
        LoopStyle::DoWhile => {
            let mut counter = 0;
            loop {
                writeln!(out, "{}", clock)?;
                clock.advance();
                counter += 1;
                if counter >= advances {
                    break;
                }
            }
        }
    }

    debug!(style = %style, seed = %seed, last = %clock, "Demo run finished.");
    Ok(clock)
}

/// Runs every configured loop style, each under its own header, with a
/// blank line between runs.
pub fn run_all<W: Write>(out: &mut W, config: &DemoConfig) -> io::Result<()> {
    for (index, style) in config.styles.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Simulation with {} loop:", style)?;
        run(out, *style, config.seed, config.advances)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> NonZeroUsize {
        NonZeroUsize::new(5).unwrap()
    }

    fn capture(style: LoopStyle, seed: Clock, advances: NonZeroUsize) -> (String, Clock) {
        let mut out = Vec::new();
        let last = run(&mut out, style, seed, advances).unwrap();
        (String::from_utf8(out).unwrap(), last)
    }

    #[test]
    fn classic_scenario_crosses_midnight() {
        let (output, last) = capture(LoopStyle::For, Clock::new(23, 58), five());
        assert_eq!(output, "23:58\n23:59\n00:00\n00:01\n00:02\n");
        assert_eq!(last, Clock::new(0, 3));
    }

    #[test]
    fn every_style_prints_the_same_bytes() {
        for (seed, count) in [(Clock::new(23, 58), 5), (Clock::new(10, 59), 1), (Clock::new(0, 0), 1441)] {
            let count = NonZeroUsize::new(count).unwrap();
            let outputs: Vec<_> = LoopStyle::ALL
                .iter()
                .map(|style| capture(*style, seed, count))
                .collect();
            assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]), "seed {seed}");
        }
    }

    #[test]
    fn single_iteration_prints_seed_only() {
        let (output, last) = capture(LoopStyle::DoWhile, Clock::new(10, 59), NonZeroUsize::MIN);
        assert_eq!(output, "10:59\n");
        assert_eq!(last, Clock::new(11, 0));
    }

    #[test]
    fn run_all_separates_runs_with_headers() {
        let config = DemoConfig {
            seed: Clock::new(12, 0),
            advances: NonZeroUsize::new(2).unwrap(),
            styles: vec![LoopStyle::While, LoopStyle::DoWhile],
        };
        let mut out = Vec::new();
        run_all(&mut out, &config).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Simulation with WHILE loop:\n12:00\n12:01\n\
             \nSimulation with DO-WHILE loop:\n12:00\n12:01\n"
        );
    }

    #[test]
    fn run_all_with_no_styles_prints_nothing() {
        let config = DemoConfig {
            styles: Vec::new(),
            ..DemoConfig::default()
        };
        let mut out = Vec::new();
        run_all(&mut out, &config).unwrap();
        assert!(out.is_empty());
    }
}
