use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::errors::GameError;

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;
/// Number of foundation piles, one per suit.
pub const FOUNDATION_PILES: usize = 4;
/// Cards in a complete deck.
pub const DECK_SIZE: usize = 52;
/// Cards left over for the stock after the opening deal.
pub const STOCK_SIZE: usize = 24;

/// What a renderer may see of one tableau position.
///
/// Face-down cards expose their existence but never their identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum CardView {
    FaceDown,
    FaceUp(Card),
}

/// The four pile groups of one Klondike game.
///
/// This is a value type: move operations never mutate a `GameState` in
/// place, they build the successor value and the container swaps it in
/// wholesale. Pile contents stay private so that face-down cards cannot
/// leak through the read surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// All face-down; index 0 is the next card drawn.
    pub(crate) stock: Vec<Card>,
    /// All face-up; the last element is the top.
    pub(crate) waste: Vec<Card>,
    /// Only the last card of a pile may start face-up.
    pub(crate) tableau: [Vec<Card>; TABLEAU_PILES],
    /// Indexed by `Suit::foundation_index`, each built Ace upward.
    pub(crate) foundations: [Vec<Card>; FOUNDATION_PILES],
}

impl GameState {
    /// Deal the opening layout from a complete shuffled deck.
    ///
    /// Tableau pile k (0-indexed) receives k+1 cards in deck order with only
    /// the last one face-up; the 24 leftover cards become the stock,
    /// face-down, in leftover order. Waste and foundations start empty.
    ///
    /// A deck that is not exactly the 52 distinct cards is a caller bug and
    /// is refused with [`GameError`].
    pub fn deal(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.len() != DECK_SIZE {
            return Err(GameError::InvalidDeckSize {
                found: cards.len(),
            });
        }
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert((card.suit, card.rank)) {
                return Err(GameError::DuplicateCard { card: *card });
            }
        }

        let mut tableau: [Vec<Card>; TABLEAU_PILES] = Default::default();
        let mut next = 0usize;
        for (k, pile) in tableau.iter_mut().enumerate() {
            for position in 0..=k {
                let card = cards[next];
                next += 1;
                pile.push(if position == k {
                    card.faced_up()
                } else {
                    card.faced_down()
                });
            }
        }
        let stock: Vec<Card> = cards[next..].iter().map(|c| c.faced_down()).collect();

        Ok(Self {
            stock,
            waste: Vec::new(),
            tableau,
            foundations: Default::default(),
        })
    }

    /// Assemble an arbitrary position from explicit piles.
    ///
    /// Used to set up puzzles and test positions. The caller is responsible
    /// for supplying a consistent position; no invariant is checked here.
    pub fn from_piles(
        stock: Vec<Card>,
        waste: Vec<Card>,
        tableau: [Vec<Card>; TABLEAU_PILES],
        foundations: [Vec<Card>; FOUNDATION_PILES],
    ) -> Self {
        Self {
            stock,
            waste,
            tableau,
            foundations,
        }
    }

    /// Number of cards left in the stock. Their identities are not exposed.
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    /// Top of the waste, the card a player could move next.
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    /// Number of cards in tableau pile `pile`, or `None` out of range.
    pub fn tableau_len(&self, pile: usize) -> Option<usize> {
        self.tableau.get(pile).map(Vec::len)
    }

    /// Top card of a tableau pile. Face-up whenever the pile is non-empty.
    pub fn tableau_top(&self, pile: usize) -> Option<&Card> {
        self.tableau.get(pile).and_then(|p| p.last())
    }

    /// A renderer's view of a tableau pile, bottom to top: orientation for
    /// every position, identity only for face-up cards.
    pub fn tableau_view(&self, pile: usize) -> Option<Vec<CardView>> {
        self.tableau.get(pile).map(|cards| {
            cards
                .iter()
                .map(|c| {
                    if c.face_up {
                        CardView::FaceUp(*c)
                    } else {
                        CardView::FaceDown
                    }
                })
                .collect()
        })
    }

    pub fn foundation_len(&self, suit: Suit) -> usize {
        self.foundations[suit.foundation_index()].len()
    }

    pub fn foundation_top(&self, suit: Suit) -> Option<&Card> {
        self.foundations[suit.foundation_index()].last()
    }
}
