use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::{can_place_on_foundation, can_stack_on_tableau, RecycleOrder, Rules};
use crate::state::{GameState, TABLEAU_PILES};

/// Where the card for a foundation move is taken from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum MoveSource {
    Waste,
    Tableau(usize),
}

/// A typed move command, the only message the UI layer sends the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Move {
    /// Draw the next stock card (or recycle the waste).
    Draw,
    /// Move the top of the source pile onto its foundation.
    ToFoundation { source: MoveSource },
    /// Move the top card of one tableau pile onto another.
    TableauToTableau { from: usize, to: usize },
}

/// Result of asking the engine to perform a move.
///
/// Rejection is a normal outcome, not an error: the caller keeps its
/// current state and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(GameState),
    Rejected,
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    /// The state to continue with: the new one if applied, `current`
    /// otherwise.
    pub fn state_or(self, current: GameState) -> GameState {
        match self {
            MoveOutcome::Applied(next) => next,
            MoveOutcome::Rejected => current,
        }
    }
}

/// Draw the next stock card onto the waste, face-up.
///
/// When the stock is out, the whole waste is recycled back into the stock
/// in the configured order and turned face-down. Both branches are always
/// legal, so this returns the new state directly rather than an outcome.
pub fn draw_from_stock(state: &GameState, rules: &Rules) -> GameState {
    let mut next = state.clone();
    if next.stock.is_empty() {
        let mut recycled = std::mem::take(&mut next.waste);
        if rules.recycle == RecycleOrder::Reverse {
            recycled.reverse();
        }
        next.stock = recycled.into_iter().map(Card::faced_down).collect();
        return next;
    }
    let card = next.stock.remove(0).faced_up();
    next.waste.push(card);
    next
}

/// Move the top card of `source` onto the foundation of its suit.
pub fn move_to_foundation(state: &GameState, source: MoveSource) -> MoveOutcome {
    let candidate = match source {
        MoveSource::Waste => state.waste.last(),
        MoveSource::Tableau(pile) => state.tableau.get(pile).and_then(|p| p.last()),
    };
    let Some(&card) = candidate else {
        return MoveOutcome::Rejected;
    };
    let target = card.suit.foundation_index();
    if !can_place_on_foundation(card, state.foundations[target].last()) {
        return MoveOutcome::Rejected;
    }

    let mut next = state.clone();
    match source {
        MoveSource::Waste => {
            next.waste.pop();
        }
        MoveSource::Tableau(pile) => {
            next.tableau[pile].pop();
            flip_new_top(&mut next.tableau[pile]);
        }
    }
    next.foundations[target].push(card);
    MoveOutcome::Applied(next)
}

/// Move the top card of tableau pile `from` onto tableau pile `to`.
pub fn move_tableau_to_tableau(
    state: &GameState,
    rules: &Rules,
    from: usize,
    to: usize,
) -> MoveOutcome {
    if from == to || from >= TABLEAU_PILES || to >= TABLEAU_PILES {
        return MoveOutcome::Rejected;
    }
    let Some(&card) = state.tableau[from].last() else {
        return MoveOutcome::Rejected;
    };
    if !can_stack_on_tableau(rules, card, state.tableau[to].last()) {
        return MoveOutcome::Rejected;
    }

    let mut next = state.clone();
    next.tableau[from].pop();
    flip_new_top(&mut next.tableau[from]);
    next.tableau[to].push(card);
    MoveOutcome::Applied(next)
}

/// Apply a typed move to a state, yielding the outcome.
pub fn apply_move(state: &GameState, rules: &Rules, mv: Move) -> MoveOutcome {
    match mv {
        Move::Draw => MoveOutcome::Applied(draw_from_stock(state, rules)),
        Move::ToFoundation { source } => move_to_foundation(state, source),
        Move::TableauToTableau { from, to } => move_tableau_to_tableau(state, rules, from, to),
    }
}

/// A card uncovered by a removal becomes the playable top.
fn flip_new_top(pile: &mut [Card]) {
    if let Some(top) = pile.last_mut() {
        top.face_up = true;
    }
}
