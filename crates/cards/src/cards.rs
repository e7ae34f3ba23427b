// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors for card parsing and deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card token rank or suit is not recognized.
    #[error("invalid card token '{0}'")]
    InvalidToken(String),
    /// A pocket must be empty or hold exactly two cards.
    #[error("invalid pocket '{0}', expected empty or two cards")]
    InvalidPocket(String),
    /// The card has already been removed from the deck.
    #[error("card {0} is not in the deck")]
    NotInDeck(Card),
}

/// A Poker card.
///
/// A card is an immutable `(rank, suit)` value, cards compare by rank
/// first then by suit. The suit never contributes to hand strength, it
/// only matters for flush detection.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a hand history card token.
    ///
    /// Rank tokens are `2`-`10` (or `t`), `j`, `q`, `k`, `a`, suit tokens
    /// are `h`, `d`, `c`, `s`, both case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.len() < 2 || !token.is_ascii() {
            return Err(CardError::InvalidToken(s.to_string()));
        }

        let token = token.to_ascii_lowercase();
        let (rank, suit) = token.split_at(token.len() - 1);

        let rank = match rank {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "t" => Rank::Ten,
            "j" => Rank::Jack,
            "q" => Rank::Queen,
            "k" => Rank::King,
            "a" => Rank::Ace,
            _ => return Err(CardError::InvalidToken(s.to_string())),
        };

        let suit = match suit {
            "h" => Suit::Hearts,
            "d" => Suit::Diamonds,
            "c" => Suit::Clubs,
            "s" => Suit::Spades,
            _ => return Err(CardError::InvalidToken(s.to_string())),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank, the ace ranks high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A player's concealed cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pocket {
    /// The cards were never shown, such a player loses every showdown
    /// comparison and can only win when all other players fold.
    #[default]
    Hidden,
    /// The two revealed cards.
    Cards(Card, Card),
}

impl Pocket {
    /// Returns the revealed cards, or None for a hidden pocket.
    pub fn cards(&self) -> Option<[Card; 2]> {
        match self {
            Pocket::Hidden => None,
            Pocket::Cards(c1, c2) => Some([*c1, *c2]),
        }
    }

    /// Checks if the pocket was never shown.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Pocket::Hidden)
    }
}

impl FromStr for Pocket {
    type Err = CardError;

    /// Parses a space separated pocket, an empty string is a hidden pocket.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (None, ..) => Ok(Pocket::Hidden),
            (Some(c1), Some(c2), None) => Ok(Pocket::Cards(c1.parse()?, c2.parse()?)),
            _ => Err(CardError::InvalidPocket(s.to_string())),
        }
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pocket::Hidden => Ok(()),
            Pocket::Cards(c1, c2) => write!(f, "{c1} {c2}"),
        }
    }
}
