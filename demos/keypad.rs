//! Keypad Demo
//!
//! Drives a calculator engine from key names typed on stdin, one or more
//! per line separated by whitespace. Key names follow the keyboard
//! mapping (`0`-`9`, `.`, `+ - * /`, `=`, `Enter`, `Escape`, `c`,
//! `Backspace`), plus `neg` for the sign toggle and `%` for percentage.
//!
//! Run with: cargo run --example keypad
//! Set RUST_LOG=tally=debug to see every applied action.

use std::error::Error;
use std::io::{self, BufRead};
use tally::core::Action;
use tally::{CalculatorEngine, DisplaySnapshot};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn parse_key(key: &str) -> Option<Action> {
    match key {
        "neg" | "±" => Some(Action::ToggleSign),
        "%" => Some(Action::Percentage),
        _ => Action::from_key(key),
    }
}

/// `RUST_LOG` when set, otherwise info-level events from the engine.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tally=info"))
}

fn render(snapshot: &DisplaySnapshot) {
    println!("{:>24}", snapshot.expression);
    println!("{:>24}", snapshot.display);
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();

    let mut engine = CalculatorEngine::new();
    info!(config = ?engine.config(), "Keypad ready");
    render(&engine.snapshot());

    for line in io::stdin().lock().lines() {
        let line = line?;
        for key in line.split_whitespace() {
            match parse_key(key) {
                Some(action) => engine.dispatch(action),
                None => warn!(key, "Unmapped key"),
            }
        }
        render(&engine.snapshot());
    }

    info!(
        transitions = engine.history().transitions().len(),
        errors = engine.history().error_count(),
        "Session finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_default_filter() {
        std::env::set_var("RUST_LOG", "tally=debug");
        assert_eq!(log_filter().to_string(), "tally=debug");

        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter().to_string(), "tally=info");
    }

    #[test]
    fn demo_keys_extend_keyboard_mapping() {
        assert_eq!(parse_key("neg"), Some(Action::ToggleSign));
        assert_eq!(parse_key("%"), Some(Action::Percentage));
        assert_eq!(parse_key("Enter"), Some(Action::Equals));
        assert_eq!(parse_key("x"), None);
    }
}
