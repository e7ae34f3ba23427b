// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck of cards with combinations enumeration.
use rand::prelude::*;

use crate::{Card, CardError, Rank, Suit};

mod parallel;
pub(crate) use parallel::nck;

/// A cards deck.
///
/// A fresh deck holds all 52 distinct cards, the working set shrinks as
/// the caller removes the cards already in play on the board or in the
/// players pockets.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a fresh deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    ///
    /// Fails with [CardError::NotInDeck] if the card has already been
    /// removed, a well formed hand history never removes a card twice so
    /// this error signals an inconsistency in the input data.
    pub fn remove(&mut self, card: Card) -> Result<(), CardError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c == &card)
            .ok_or(CardError::NotInDeck(card))?;
        self.cards.remove(pos);
        Ok(())
    }

    /// The number of k-cards combinations this deck can produce.
    ///
    /// Panics if k > 5.
    pub fn combinations(&self, k: usize) -> usize {
        nck(self.cards.len(), k)
    }

    /// Calls the `f` closure for each k-cards combination.
    ///
    /// Combinations follow the deck order and are produced without any
    /// per combination allocation.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let mut h = [self.cards[0]; 5];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            if k == 1 {
                f(&h[0..k]);
                continue;
            }

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                if k == 2 {
                    f(&h[0..k]);
                    continue;
                }

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    if k == 3 {
                        f(&h[0..k]);
                        continue;
                    }

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        if k == 4 {
                            f(&h[0..k]);
                            continue;
                        }

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&h[0..k]);
                        }
                    }
                }
            }
        }
    }

    /// Calls the `f` closure for `count` random k-cards samples.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn sample<F>(&self, count: usize, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        if k > self.cards.len() {
            return;
        }

        let mut rng = SmallRng::from_os_rng();
        let mut h = [self.cards[0]; 5];

        for _ in 0..count {
            for (pos, c) in self.cards.choose_multiple(&mut rng, k).enumerate() {
                h[pos] = *c;
            }

            f(&h[0..k]);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
