//! Input parsing for the interactive play command.
//!
//! Translates typed lines into engine move commands. Errors come back as
//! messages to show the player, never as engine calls.

use klondike_engine::moves::{Move, MoveSource};

/// Result of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A move to hand to the engine
    Command(Move),
    /// Start the next game
    Redeal,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse an input line into a move command.
///
/// Accepted forms (case-insensitive; piles are numbered 1-7 at the prompt):
/// - `d` / `draw` draws from the stock (recycles when the stock is out)
/// - `f w` moves the waste top to its foundation
/// - `f N` moves the top of tableau pile N to its foundation
/// - `m A B` moves the top card of pile A onto pile B
/// - `n` / `new` abandons the game and redeals
/// - `q` / `quit` leaves the session
pub fn parse_move_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "n" | "new" => ParseResult::Redeal,
        "d" | "draw" => ParseResult::Command(Move::Draw),
        "f" => parse_foundation(&parts),
        "m" | "move" => parse_tableau_move(&parts),
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Try d, f, m, n or q.",
            other
        )),
    }
}

fn parse_foundation(parts: &[&str]) -> ParseResult {
    let Some(&target) = parts.get(1) else {
        return ParseResult::Invalid("Usage: f w  |  f <pile 1-7>".to_string());
    };
    if target == "w" {
        return ParseResult::Command(Move::ToFoundation {
            source: MoveSource::Waste,
        });
    }
    match parse_pile(target) {
        Some(pile) => ParseResult::Command(Move::ToFoundation {
            source: MoveSource::Tableau(pile),
        }),
        None => ParseResult::Invalid(format!("'{}' is not a pile (expected w or 1-7)", target)),
    }
}

fn parse_tableau_move(parts: &[&str]) -> ParseResult {
    let from = parts.get(1).and_then(|s| parse_pile(s));
    let to = parts.get(2).and_then(|s| parse_pile(s));
    match (from, to) {
        (Some(from), Some(to)) => ParseResult::Command(Move::TableauToTableau { from, to }),
        _ => ParseResult::Invalid("Usage: m <from 1-7> <to 1-7>".to_string()),
    }
}

/// 1-based pile number at the prompt, 0-based index inside the engine.
fn parse_pile(s: &str) -> Option<usize> {
    s.parse::<usize>()
        .ok()
        .filter(|n| (1..=7).contains(n))
        .map(|n| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_and_quit_forms() {
        assert_eq!(parse_move_command("d"), ParseResult::Command(Move::Draw));
        assert_eq!(parse_move_command("DRAW"), ParseResult::Command(Move::Draw));
        assert_eq!(parse_move_command("q"), ParseResult::Quit);
        assert_eq!(parse_move_command("quit"), ParseResult::Quit);
        assert_eq!(parse_move_command("n"), ParseResult::Redeal);
    }

    #[test]
    fn foundation_forms() {
        assert_eq!(
            parse_move_command("f w"),
            ParseResult::Command(Move::ToFoundation {
                source: MoveSource::Waste
            })
        );
        assert_eq!(
            parse_move_command("f 3"),
            ParseResult::Command(Move::ToFoundation {
                source: MoveSource::Tableau(2)
            })
        );
        assert!(matches!(
            parse_move_command("f 8"),
            ParseResult::Invalid(_)
        ));
        assert!(matches!(parse_move_command("f"), ParseResult::Invalid(_)));
    }

    #[test]
    fn tableau_move_forms() {
        assert_eq!(
            parse_move_command("m 1 7"),
            ParseResult::Command(Move::TableauToTableau { from: 0, to: 6 })
        );
        assert!(matches!(
            parse_move_command("m 0 3"),
            ParseResult::Invalid(_)
        ));
        assert!(matches!(parse_move_command("m 2"), ParseResult::Invalid(_)));
    }

    #[test]
    fn junk_is_invalid_with_a_message() {
        match parse_move_command("dance") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert!(matches!(parse_move_command("   "), ParseResult::Invalid(_)));
    }
}
