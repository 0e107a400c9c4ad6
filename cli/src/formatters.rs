//! Card, pile, and table formatters for terminal display.
//!
//! Pure functions that turn engine read-surface values into text. Suits use
//! Unicode symbols (♠ ♥ ♦ ♣) with a single-letter ASCII fallback for
//! terminals that cannot render them. Face-down cards always print as `XX`:
//! the engine never reveals their identity and neither does the renderer.

use std::io::Write;

use klondike_engine::cards::{all_suits, Card, Rank, Suit};
use klondike_engine::state::{CardView, GameState, TABLEAU_PILES};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a suit as a symbol, or a lowercase letter in ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    let s = if supports_unicode() {
        match suit {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    } else {
        match suit {
            Suit::Spades => "s",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
        }
    };
    s.to_string()
}

pub fn format_rank(rank: &Rank) -> String {
    let r = match rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    };
    r.to_string()
}

/// "A♠", "10♥", or "As", "10h" in ASCII fallback.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// One tableau position: `XX` for a face-down card.
pub fn format_card_view(view: &CardView) -> String {
    match view {
        CardView::FaceDown => "XX".to_string(),
        CardView::FaceUp(card) => format_card(card),
    }
}

/// Render the whole table: foundations row, stock/waste row, tableau grid.
///
/// Tableau columns are top-justified and read bottom-to-top downward, the
/// way the piles fan out on a physical table.
pub fn render_state(out: &mut dyn Write, state: &GameState) -> std::io::Result<()> {
    write!(out, "Foundations:")?;
    for suit in all_suits() {
        match state.foundation_top(suit) {
            Some(card) => write!(out, " [{:>3}]", format_card(card))?,
            None => write!(out, " [ {} ]", format_suit(&suit))?,
        }
    }
    writeln!(out)?;

    let waste = state
        .waste_top()
        .map(format_card)
        .unwrap_or_else(|| "--".to_string());
    writeln!(
        out,
        "Stock: {:2} card(s)   Waste: {} ({} card(s))",
        state.stock_len(),
        waste,
        state.waste_len()
    )?;

    writeln!(out, "Tableau:")?;
    let views: Vec<Vec<CardView>> = (0..TABLEAU_PILES)
        .map(|i| state.tableau_view(i).unwrap_or_default())
        .collect();
    write!(out, "   ")?;
    for i in 0..TABLEAU_PILES {
        write!(out, " P{}  ", i + 1)?;
    }
    writeln!(out)?;

    let max_height = views.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..max_height {
        write!(out, "   ")?;
        for pile in &views {
            match pile.get(row) {
                Some(v) => write!(out, " {:<4}", format_card_view(v))?,
                None => write!(out, "     ")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use klondike_engine::deck::Deck;
    use klondike_engine::state::GameState;

    #[test]
    fn format_card_includes_rank_and_suit() {
        let ace_spades = Card::new(Suit::Spades, Rank::Ace);
        let formatted = format_card(&ace_spades);
        assert!(formatted == "A♠" || formatted == "As");

        let ten_hearts = Card::new(Suit::Hearts, Rank::Ten);
        let formatted = format_card(&ten_hearts);
        assert!(formatted.starts_with("10"));
    }

    #[test]
    fn face_down_views_render_as_xx() {
        assert_eq!(format_card_view(&CardView::FaceDown), "XX");
        let up = CardView::FaceUp(Card::new(Suit::Clubs, Rank::King).faced_up());
        assert!(format_card_view(&up).starts_with('K'));
    }

    #[test]
    fn render_state_shows_all_pile_groups() {
        let mut deck = Deck::new_with_seed(5);
        deck.shuffle();
        let state = GameState::deal(deck.cards().to_vec()).expect("valid deck");

        let mut buf = Vec::new();
        render_state(&mut buf, &state).expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("Foundations:"));
        assert!(text.contains("Stock: 24"));
        assert!(text.contains("Tableau:"));
        assert!(text.contains("XX"), "hidden cards must render as XX");
    }
}
