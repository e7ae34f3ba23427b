// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection over a pocket and a complete board.
use riverlog_cards::{Card, Pocket};

use crate::{classify, HandStrength};

/// Returns the strongest 5 cards hand reachable from a pocket and a
/// complete 5 cards board.
///
/// A hold'em hand may use 0, 1, or 2 pocket cards, so the candidates are
/// the board alone, each pocket card with every 4 of the 5 board cards,
/// and both pocket cards with every 3 of the 5 board cards, 21 hands in
/// total. The fixed enumeration spells out which subsets are legal
/// instead of drawing 5 out of the 7 available cards.
///
/// A hidden pocket evaluates to [HandStrength::NOT_SHOWN].
///
/// Panics if the board does not hold exactly 5 cards.
pub fn best_hand(pocket: Pocket, board: &[Card]) -> HandStrength {
    assert_eq!(board.len(), 5, "best_hand takes a complete board");

    let Pocket::Cards(p1, p2) = pocket else {
        return HandStrength::NOT_SHOWN;
    };

    // The board plays unimproved.
    let mut best = classify(board);
    let mut hand = [p1; 5];

    // One pocket card with four board cards.
    for pocket_card in [p1, p2] {
        hand[0] = pocket_card;
        for skip in 0..5 {
            let mut len = 1;
            for (pos, &card) in board.iter().enumerate() {
                if pos != skip {
                    hand[len] = card;
                    len += 1;
                }
            }
            best = best.max(classify(&hand));
        }
    }

    // Both pocket cards with three board cards.
    hand[0] = p1;
    hand[1] = p2;
    for skip1 in 0..5 {
        for skip2 in (skip1 + 1)..5 {
            let mut len = 2;
            for (pos, &card) in board.iter().enumerate() {
                if pos != skip1 && pos != skip2 {
                    hand[len] = card;
                    len += 1;
                }
            }
            best = best.max(classify(&hand));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use riverlog_cards::{Deck, Rank};
    use crate::HandClass;

    fn cards<const N: usize>(tokens: [&str; N]) -> Vec<Card> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn best_hand_uses_both_pocket_cards() {
        let board = cards(["2c", "7d", "9h", "jc", "ks"]);
        let pocket = "kh kc".parse::<Pocket>().unwrap();

        let strength = best_hand(pocket, &board);
        assert_eq!(strength.class(), HandClass::ThreeOfAKind);
        assert_eq!(strength.tiebreaks().next(), Some((3, Rank::King)));
    }

    #[test]
    fn best_hand_uses_one_pocket_card() {
        // Four hearts on the board, one heart in the pocket.
        let board = cards(["2h", "7h", "9h", "jh", "ks"]);
        let pocket = "ah kc".parse::<Pocket>().unwrap();

        let strength = best_hand(pocket, &board);
        assert_eq!(strength.class(), HandClass::Flush);
        assert_eq!(strength.tiebreaks().next(), Some((1, Rank::Ace)));
    }

    #[test]
    fn best_hand_plays_the_board() {
        let board = cards(["10h", "jh", "qh", "kh", "ah"]);
        let pocket = "2c 3d".parse::<Pocket>().unwrap();

        let strength = best_hand(pocket, &board);
        assert_eq!(strength.class(), HandClass::StraightFlush);
    }

    #[test]
    fn best_hand_hidden_pocket() {
        let board = cards(["2c", "7d", "9h", "jc", "ks"]);
        assert_eq!(best_hand(Pocket::Hidden, &board), HandStrength::NOT_SHOWN);
    }

    #[test]
    fn best_hand_matches_brute_force() {
        // The structured 21 hands enumeration must agree with drawing
        // every 5 cards subset out of the 7 available cards.
        Deck::default().sample(200, 5, |board| {
            let mut deck = Deck::default();
            for &c in board {
                deck.remove(c).unwrap();
            }

            deck.sample(5, 2, |pocket| {
                let mut seven = board.to_vec();
                seven.extend_from_slice(pocket);

                let mut expected = HandStrength::NOT_SHOWN;
                let mut hand = [seven[0]; 5];
                for skip1 in 0..7 {
                    for skip2 in (skip1 + 1)..7 {
                        let mut len = 0;
                        for (pos, &card) in seven.iter().enumerate() {
                            if pos != skip1 && pos != skip2 {
                                hand[len] = card;
                                len += 1;
                            }
                        }
                        expected = expected.max(classify(&hand));
                    }
                }

                let pocket = Pocket::Cards(pocket[0], pocket[1]);
                assert_eq!(best_hand(pocket, board), expected);
            });
        });
    }
}
