use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// The declaration order is also the fixed foundation order: the foundation
/// pile at index `suit.foundation_index()` belongs to that suit for the
/// whole game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

/// Red or black, the property the tableau stacking rule compares.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Index of the foundation pile reserved for this suit.
    pub fn foundation_index(self) -> usize {
        self as usize
    }
}

/// Represents the rank (face value) of a playing card from Ace through King.
/// Klondike orders ranks with the Ace low: foundations build upward from the
/// Ace and tableau piles build downward toward it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1, low)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// Numeric value in 1..=13.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The rank one above this one, or `None` past the King.
    pub fn successor(self) -> Option<Rank> {
        if self == Rank::King {
            None
        } else {
            Some(Rank::from_u8(self as u8 + 1))
        }
    }
}

/// Represents a single playing card with a suit, a rank, and a face
/// orientation. A card's identity is its (suit, rank) pair; `face_up` is
/// pile state that changes as the game progresses.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Spades, Hearts, Diamonds, or Clubs)
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
    /// Whether the card currently shows its face
    pub face_up: bool,
}

impl Card {
    /// A fresh card starts face-down.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// The same card, face showing.
    pub fn faced_up(self) -> Card {
        Card {
            face_up: true,
            ..self
        }
    }

    /// The same card, face hidden.
    pub fn faced_down(self) -> Card {
        Card {
            face_up: false,
            ..self
        }
    }

    /// Identity comparison, ignoring orientation.
    pub fn same_identity(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// The canonical deck: suit-major, rank-minor, every card face-down.
/// No randomness here; shuffling is the deck module's job.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(s, r));
        }
    }
    v
}
