use crate::deck::Deck;
use crate::errors::GameError;
use crate::moves::{apply_move, Move, MoveOutcome};
use crate::rules::Rules;
use crate::state::GameState;

/// Owns one game: the seeded deck, the table rules, and the current state.
///
/// Every mutator replaces the state wholesale: a move either produces a
/// complete new snapshot or leaves the previous one untouched. Callers
/// re-render from [`Engine::state`] after each call.
///
/// # Examples
///
/// ```
/// use klondike_engine::engine::Engine;
/// use klondike_engine::moves::Move;
/// use klondike_engine::rules::Rules;
///
/// let mut engine = Engine::new(Some(12345), Rules::default()).expect("fresh deck");
/// assert_eq!(engine.state().stock_len(), 24);
///
/// // The first draw always succeeds and lands on the waste.
/// assert!(engine.apply(Move::Draw));
/// assert_eq!(engine.state().waste_len(), 1);
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    rules: Rules,
    state: GameState,
}

impl Engine {
    /// Shuffle a fresh deck and deal the opening layout.
    pub fn new(seed: Option<u64>, rules: Rules) -> Result<Self, GameError> {
        let seed = seed.unwrap_or(0x5011_7A1E);
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let state = GameState::deal(deck.cards().to_vec())?;
        Ok(Self { deck, rules, state })
    }

    /// Abandon the current game and deal the next layout from the same
    /// RNG stream.
    pub fn redeal(&mut self) -> Result<&GameState, GameError> {
        self.deck.shuffle();
        self.state = GameState::deal(self.deck.cards().to_vec())?;
        Ok(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Apply a move. The state advances only when this reports `true`;
    /// a rejected move leaves it exactly as it was.
    pub fn apply(&mut self, mv: Move) -> bool {
        match apply_move(&self.state, &self.rules, mv) {
            MoveOutcome::Applied(next) => {
                self.state = next;
                true
            }
            MoveOutcome::Rejected => false,
        }
    }
}
