//! # Play Command
//!
//! Interactive Klondike gameplay in the terminal.
//!
//! The loop renders the table, reads one command per line, hands the
//! resulting typed move to the engine, and re-renders from the new
//! snapshot after every accepted move. Rejected moves print a short
//! notice and change nothing; the engine treats them as ordinary
//! outcomes, not errors.
//!
//! Session commands: `d` draw, `f w`/`f N` to foundation, `m A B` between
//! tableau piles, `n` redeal, `q` quit (EOF also quits).

use std::io::{BufRead, Write};

use klondike_engine::engine::Engine;
use klondike_engine::logger::{GameLogger, GameRecord, MoveEntry};

use crate::cli::{EmptyPileOpt, RecycleOpt};
use crate::config;
use crate::error::CliError;
use crate::formatters::render_state;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_move_command, ParseResult};

/// Handle the play command: interactive Klondike gameplay.
///
/// # Arguments
///
/// * `seed` - RNG seed for a reproducible layout (default: config, then random)
/// * `log` - Optional path for a JSONL game record
/// * `recycle` - Recycle-order override for this session
/// * `empty_pile` - Empty-pile-rule override for this session
/// * `out` - Output stream for the table and prompts
/// * `err` - Error stream for warnings and input errors
/// * `stdin` - Input stream for player commands
pub fn handle_play_command(
    seed: Option<u64>,
    log: Option<String>,
    recycle: Option<RecycleOpt>,
    empty_pile: Option<EmptyPileOpt>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = config::resolve().map_err(|e| CliError::Config(e.to_string()))?;

    let mut rules = resolved.config.rules();
    if let Some(r) = recycle {
        rules.recycle = r.to_rule();
    }
    if let Some(e) = empty_pile {
        rules.empty_pile = e.to_rule();
    }
    let seed = seed.or(resolved.config.seed).unwrap_or_else(rand::random);

    writeln!(
        out,
        "play: seed={} recycle={:?} empty-pile={:?}",
        seed, rules.recycle, rules.empty_pile
    )?;

    let mut engine =
        Engine::new(Some(seed), rules).map_err(|e| CliError::Engine(e.to_string()))?;

    let mut logger = match &log {
        Some(path) => match GameLogger::create(path) {
            Ok(l) => Some(l),
            Err(e) => {
                ui::display_warning(err, &format!("could not open log file: {}", e))?;
                None
            }
        },
        None => None,
    };
    let mut entries: Vec<MoveEntry> = Vec::new();

    render_state(out, engine.state())?;
    loop {
        write!(out, "move (d/f/m/n/q)> ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        match parse_move_command(&line) {
            ParseResult::Quit => break,
            ParseResult::Redeal => {
                entries.clear();
                engine
                    .redeal()
                    .map_err(|e| CliError::Engine(e.to_string()))?;
                writeln!(out, "New deal.")?;
                render_state(out, engine.state())?;
            }
            ParseResult::Command(mv) => {
                let applied = engine.apply(mv);
                entries.push(MoveEntry { mv, applied });
                if applied {
                    render_state(out, engine.state())?;
                } else {
                    writeln!(out, "Move not allowed.")?;
                }
            }
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    let attempted = entries.len();
    if let Some(logger) = logger.as_mut() {
        let record = GameRecord {
            game_id: logger.next_id(),
            seed: Some(seed),
            rules,
            moves: entries,
            ts: None,
        };
        logger.write(&record)?;
        writeln!(out, "Game record written.")?;
    }
    writeln!(out, "Session over after {} attempted move(s).", attempted)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_play(seed: u64, input: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        handle_play_command(
            Some(seed),
            None,
            None,
            None,
            &mut out,
            &mut err,
            &mut stdin,
        )
        .expect("play session");
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn quit_immediately() {
        let (out, _err) = run_play(42, "q\n");
        assert!(out.contains("play: seed=42"));
        assert!(out.contains("Session over after 0 attempted move(s)."));
    }

    #[test]
    fn eof_ends_the_session() {
        let (out, _err) = run_play(42, "");
        assert!(out.contains("Session over"));
    }

    #[test]
    fn draw_advances_the_waste() {
        let (out, _err) = run_play(42, "d\nq\n");
        assert!(out.contains("Waste:"));
        assert!(out.contains("Stock: 23"));
        assert!(out.contains("Session over after 1 attempted move(s)."));
    }

    #[test]
    fn invalid_input_goes_to_stderr() {
        let (_out, err) = run_play(42, "dance\nq\n");
        assert!(err.contains("Unrecognized"));
    }

    #[test]
    fn rejected_moves_are_reported_and_counted() {
        // Pile 1 onto itself is never legal.
        let (out, _err) = run_play(42, "m 1 1\nq\n");
        assert!(out.contains("Move not allowed."));
        assert!(out.contains("Session over after 1 attempted move(s)."));
    }

    #[test]
    fn redeal_prints_a_fresh_table() {
        let (out, _err) = run_play(42, "n\nq\n");
        assert!(out.contains("New deal."));
    }
}
