// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use std::fmt;

use riverlog_cards::{Card, Rank};

/// The hand category, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandClass {
    /// The pocket was never revealed, ranks below every real hand so a
    /// hidden pocket can never win a showdown comparison.
    NotShown,
    /// High card.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HandClass::NotShown => "Not Shown",
            HandClass::HighCard => "High Card",
            HandClass::OnePair => "One Pair",
            HandClass::TwoPair => "Two Pairs",
            HandClass::ThreeOfAKind => "Three of a Kind",
            HandClass::Straight => "Straight",
            HandClass::Flush => "Flush",
            HandClass::FullHouse => "Full House",
            HandClass::FourOfAKind => "Four of a Kind",
            HandClass::StraightFlush => "Straight Flush",
        };

        write!(f, "{label}")
    }
}

/// Number of slots in a tiebreaks key, a 5 cards hand groups into at
/// most 5 distinct ranks.
const KEY_SLOTS: usize = 5;

/// A fully evaluated hand strength.
///
/// Combines the [HandClass] with a tiebreaks key built from the multiset
/// of the hand ranks: one `(count, rank)` entry per distinct rank, sorted
/// descending by count first then by rank. Sorting by count first is the
/// load bearing invariant, a full house of sixes over deuces keys as
/// `[(3, Six), (2, Deuce)]` and beats threes over tens `[(3, Trey),
/// (2, Ten)]`, while two pairs compare by their higher pair first.
///
/// The derived ordering compares the class first then the key
/// lexicographically, which makes the strength a total order over all
/// hands. Unused key slots stay at `(0, Deuce)` so hands of the same
/// class always compare entry by entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandStrength {
    class: HandClass,
    key: [(u8, Rank); KEY_SLOTS],
}

impl HandStrength {
    /// The strength of a pocket that was never revealed.
    pub const NOT_SHOWN: HandStrength = HandStrength {
        class: HandClass::NotShown,
        key: [(0, Rank::Deuce); KEY_SLOTS],
    };

    /// Returns the hand category.
    pub fn class(&self) -> HandClass {
        self.class
    }

    /// Returns the `(count, rank)` tiebreaks entries, strongest first.
    pub fn tiebreaks(&self) -> impl Iterator<Item = (u8, Rank)> + '_ {
        self.key.iter().copied().take_while(|(count, _)| *count > 0)
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class)?;
        if let Some((_, rank)) = self.key.first().filter(|(count, _)| *count > 0) {
            write!(f, " {rank}")?;
        }
        Ok(())
    }
}

/// Classifies a 5 cards hand into its strength.
///
/// Panics if the hand does not hold exactly 5 cards, passing duplicate
/// cards is a caller invariant violation and is not detected here.
pub fn classify(cards: &[Card]) -> HandStrength {
    assert_eq!(cards.len(), 5, "classify takes exactly 5 cards");

    let mut counts = [0u8; 13];
    for c in cards {
        counts[c.rank() as usize] += 1;
    }

    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let rank_bits = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .fold(0u16, |bits, (rank, _)| bits | 1 << rank);
    let straight = is_straight(rank_bits);

    // Group the hand into (count, rank) entries, strongest first.
    let mut key = [(0u8, Rank::Deuce); KEY_SLOTS];
    let mut entries = 0;
    for rank in Rank::ranks() {
        let count = counts[rank as usize];
        if count > 0 {
            key[entries] = (count, rank);
            entries += 1;
        }
    }
    key[..entries].sort_unstable_by(|l, r| r.cmp(l));

    let has_count = |n: u8| key[..entries].iter().any(|&(count, _)| count == n);
    let pairs = key[..entries].iter().filter(|&&(count, _)| count == 2).count();

    let class = if flush && straight {
        HandClass::StraightFlush
    } else if has_count(4) {
        HandClass::FourOfAKind
    } else if has_count(3) && has_count(2) {
        HandClass::FullHouse
    } else if flush {
        HandClass::Flush
    } else if straight {
        HandClass::Straight
    } else if has_count(3) {
        HandClass::ThreeOfAKind
    } else if pairs == 2 {
        HandClass::TwoPair
    } else if pairs == 1 {
        HandClass::OnePair
    } else {
        HandClass::HighCard
    };

    HandStrength { class, key }
}

/// Checks if the distinct ranks form a run of 5 consecutive ranks or the
/// wheel, the only hand where the ace plays low.
fn is_straight(rank_bits: u16) -> bool {
    const RUN: u16 = 0b11111;
    const WHEEL: u16 = (1 << Rank::Ace as u16) | 0b1111;

    (0..=8).any(|start| rank_bits & (RUN << start) == (RUN << start)) || rank_bits == WHEEL
}
