use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid deck: expected 52 cards, found {found}")]
    InvalidDeckSize { found: usize },
    #[error("Invalid deck: duplicate card {card:?}")]
    DuplicateCard { card: Card },
}
