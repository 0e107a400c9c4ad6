//! Deal command handler: one layout, printed and thrown away.
//!
//! Deals a single opening layout and prints it, with optional seeding for
//! deterministic output. Handy for eyeballing a layout before playing it
//! or for sharing a seed.

use crate::error::CliError;
use crate::formatters::render_state;
use klondike_engine::engine::Engine;
use klondike_engine::rules::Rules;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for a reproducible layout
/// * `out` - Output stream for the rendered table
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let engine =
        Engine::new(Some(seed), Rules::default()).map_err(|e| CliError::Engine(e.to_string()))?;
    writeln!(out, "Seed: {}", seed)?;
    render_state(out, engine.state())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(42), &mut out);
        assert!(result.is_ok(), "Deal command should succeed");

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Tableau:"));
        assert!(output.contains("Stock: 24"));
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(12345), &mut out1).unwrap();
        handle_deal_command(Some(12345), &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_without_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(None, &mut out);
        assert!(result.is_ok(), "Deal command should succeed without seed");

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed:"));
    }
}
