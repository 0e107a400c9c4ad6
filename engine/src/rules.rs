use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// How the waste pile returns to the stock once the stock runs out.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecycleOrder {
    /// The stock receives the waste as-is, so the next pass repeats the
    /// same draw sequence.
    KeepOrder,
    /// The waste is reversed on its way back, so the next pass draws in
    /// the opposite order.
    Reverse,
}

/// Which cards may start an empty tableau pile.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPileRule {
    /// Any rank may be placed on an empty pile.
    AnyCard,
    /// Standard Klondike: Kings only.
    KingOnly,
}

/// The two table rules that vary between Klondike variants.
///
/// Defaults match the permissive table: recycling keeps the draw order and
/// an empty pile takes any card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub recycle: RecycleOrder,
    pub empty_pile: EmptyPileRule,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            recycle: RecycleOrder::KeepOrder,
            empty_pile: EmptyPileRule::AnyCard,
        }
    }
}

/// Whether `card` may be placed on a tableau pile whose top is `onto`.
///
/// An occupied pile accepts exactly one rank down in the opposite color;
/// an empty pile defers to the configured rule.
///
/// # Examples
///
/// ```
/// use klondike_engine::cards::{Card, Rank, Suit};
/// use klondike_engine::rules::{can_stack_on_tableau, Rules};
///
/// let rules = Rules::default();
/// let two_clubs = Card::new(Suit::Clubs, Rank::Two).faced_up();
/// let three_hearts = Card::new(Suit::Hearts, Rank::Three).faced_up();
///
/// assert!(can_stack_on_tableau(&rules, two_clubs, Some(&three_hearts)));
/// assert!(!can_stack_on_tableau(&rules, three_hearts, Some(&two_clubs)));
/// ```
pub fn can_stack_on_tableau(rules: &Rules, card: Card, onto: Option<&Card>) -> bool {
    match onto {
        None => match rules.empty_pile {
            EmptyPileRule::AnyCard => true,
            EmptyPileRule::KingOnly => card.rank == Rank::King,
        },
        Some(top) => card.rank.successor() == Some(top.rank) && card.color() != top.color(),
    }
}

/// Whether `card` may be placed on the foundation whose top is `top`.
///
/// An empty foundation takes only an Ace; otherwise the card must match the
/// pile's suit and sit exactly one rank above its current top.
pub fn can_place_on_foundation(card: Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank == Rank::Ace,
        Some(t) => card.suit == t.suit && t.rank.successor() == Some(card.rank),
    }
}
