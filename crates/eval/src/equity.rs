// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exact win probabilities over all board completions.
use ahash::AHashMap;
use parking_lot::Mutex;
use std::thread;

use riverlog_cards::{Card, CardError, Deck, Pocket};

use crate::{best_hand, HandStrength};

/// Completions count above which the enumeration moves to worker tasks.
const PAR_COMPLETIONS: usize = 16_384;

/// Computes each player's exact probability of winning the pot.
///
/// Enumerates every completion of the board drawable from the deck left
/// after removing the board and the revealed pockets, and for each
/// completion credits every player whose best hand reaches the maximum
/// with one full win. A tied completion credits every co-winner, the
/// tally is deliberately not divided so with possible ties the
/// percentages may add up to more than 100.
///
/// The result maps the index of each revealed pocket in `pockets` to a
/// percentage in `[0, 100]`:
///
/// - with fewer than 3 board cards probabilities are undefined and the
///   result is `Ok(None)`;
/// - with no revealed pocket the mapping is empty;
/// - a single revealed pocket maps to 100 without any enumeration.
///
/// Fails with [CardError::NotInDeck] if the board and the pockets hold
/// duplicate cards, which signals corrupted input data.
pub fn equity(
    board: &[Card],
    pockets: &[Pocket],
) -> Result<Option<AHashMap<usize, f64>>, CardError> {
    assert!(board.len() <= 5, "at most 5 board cards");

    // With less than 3 board cards the probabilities are undefined.
    if board.len() < 3 {
        return Ok(None);
    }

    let shown = pockets
        .iter()
        .enumerate()
        .filter_map(|(seat, pocket)| pocket.cards().map(|cards| (seat, cards)))
        .collect::<Vec<_>>();

    if shown.is_empty() {
        return Ok(Some(AHashMap::new()));
    }

    // The last player to show down wins by default.
    if shown.len() == 1 {
        return Ok(Some([(shown[0].0, 100.0)].into_iter().collect()));
    }

    let mut deck = Deck::default();
    for &card in board {
        deck.remove(card)?;
    }
    for (_, cards) in &shown {
        for &card in cards {
            deck.remove(card)?;
        }
    }

    let mut full_board = [board[0]; 5];
    full_board[..board.len()].copy_from_slice(board);

    let draws = 5 - board.len();
    let (wins, completions) = if draws == 0 {
        // The board is complete, score the single showdown.
        let mut tally = Tally::new(full_board, shown.len());
        tally.score(5, &[], &shown);
        (tally.wins, 1)
    } else {
        let completions = deck.combinations(draws);
        let wins = if completions >= PAR_COMPLETIONS {
            tally_parallel(&deck, draws, &full_board, &shown)
        } else {
            tally_serial(&deck, draws, &full_board, &shown)
        };
        (wins, completions)
    };

    Ok(Some(
        shown
            .iter()
            .zip(&wins)
            .map(|(&(seat, _), &wins)| (seat, 100.0 * wins as f64 / completions as f64))
            .collect(),
    ))
}

/// A wins tally with reusable buffers so scoring a completion does not
/// allocate.
struct Tally {
    board: [Card; 5],
    strengths: Vec<HandStrength>,
    wins: Vec<u64>,
}

impl Tally {
    fn new(board: [Card; 5], players: usize) -> Self {
        Self {
            board,
            strengths: vec![HandStrength::NOT_SHOWN; players],
            wins: vec![0; players],
        }
    }

    /// Scores one board completion, every co-winner gets a full win.
    fn score(&mut self, known: usize, completion: &[Card], shown: &[(usize, [Card; 2])]) {
        self.board[known..].copy_from_slice(completion);

        for (&(_, cards), strength) in shown.iter().zip(self.strengths.iter_mut()) {
            *strength = best_hand(Pocket::Cards(cards[0], cards[1]), &self.board);
        }

        let top = self
            .strengths
            .iter()
            .copied()
            .max()
            .unwrap_or(HandStrength::NOT_SHOWN);

        for (strength, wins) in self.strengths.iter().zip(self.wins.iter_mut()) {
            if *strength == top {
                *wins += 1;
            }
        }
    }
}

fn tally_serial(
    deck: &Deck,
    draws: usize,
    board: &[Card; 5],
    shown: &[(usize, [Card; 2])],
) -> Vec<u64> {
    let known = 5 - draws;
    let mut tally = Tally::new(*board, shown.len());
    deck.for_each(draws, |completion| tally.score(known, completion, shown));
    tally.wins
}

fn tally_parallel(
    deck: &Deck,
    draws: usize,
    board: &[Card; 5],
    shown: &[(usize, [Card; 2])],
) -> Vec<u64> {
    let num_tasks = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    let known = 5 - draws;

    // One tally per task, each task locks only its own so the
    // enumeration runs contention free.
    let tallies = (0..num_tasks)
        .map(|_| Mutex::new(Tally::new(*board, shown.len())))
        .collect::<Vec<_>>();

    deck.par_for_each(num_tasks, draws, |task_id, completion| {
        tallies[task_id].lock().score(known, completion, shown);
    });

    let mut wins = vec![0u64; shown.len()];
    for tally in tallies {
        let tally = tally.into_inner();
        for (total, task) in wins.iter_mut().zip(tally.wins) {
            *total += task;
        }
    }

    wins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards<const N: usize>(tokens: [&str; N]) -> Vec<Card> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    fn pockets<const N: usize>(tokens: [&str; N]) -> Vec<Pocket> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn equity_undefined_preflop() {
        let players = pockets(["ah ad", "kh kc"]);
        assert_eq!(equity(&[], &players), Ok(None));

        let board = cards(["10h", "10c"]);
        assert_eq!(equity(&board, &players), Ok(None));
    }

    #[test]
    fn equity_no_revealed_pockets() {
        let board = cards(["10h", "10c", "5d"]);
        let players = pockets(["", ""]);

        let result = equity(&board, &players).unwrap().unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn equity_single_revealed_pocket() {
        let board = cards(["10h", "10c", "5d"]);
        let players = pockets(["", "kh kc", ""]);

        let result = equity(&board, &players).unwrap().unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[&1], 100.0);
    }

    #[test]
    fn equity_complete_board() {
        // Pair of kings with an ace kicker against a pair of jacks.
        let board = cards(["2c", "7d", "9h", "jc", "ks"]);
        let players = pockets(["ac kd", "qs jd"]);

        let result = equity(&board, &players).unwrap().unwrap();
        assert_eq!(result[&0], 100.0);
        assert_eq!(result[&1], 0.0);
    }

    #[test]
    fn equity_complete_board_tie() {
        // Both players play the straight on the board, each co-winner
        // gets full credit so the percentages add up to 200.
        let board = cards(["9h", "8d", "7c", "6s", "5h"]);
        let players = pockets(["2c 2d", "3c 3d"]);

        let result = equity(&board, &players).unwrap().unwrap();
        assert_eq!(result[&0], 100.0);
        assert_eq!(result[&1], 100.0);
    }

    #[test]
    fn equity_flop_aces_against_kings() {
        let board = cards(["10h", "10c", "5d"]);
        let players = pockets(["ah ad", "kh kc"]);

        let result = equity(&board, &players).unwrap().unwrap();
        let (a, b) = (result[&0], result[&1]);

        // The higher pair dominates but both can still win.
        assert!(a > b);
        assert!(0.0 < a && a < 100.0);
        assert!(0.0 < b && b < 100.0);

        // Full credit tie counting never drops below 100 in total.
        assert!(a + b >= 100.0);
    }

    #[test]
    fn equity_turn_draws_one_card() {
        // A flush draw against a made pair on the turn.
        let board = cards(["2h", "7h", "9c", "jh"]);
        let players = pockets(["ah 3h", "jc 10d"]);

        let result = equity(&board, &players).unwrap().unwrap();
        let (a, b) = (result[&0], result[&1]);

        // Of the 44 river cards 8 hearts complete the flush and 3 aces
        // pair the ace, the rest keep the pair of jacks ahead.
        assert!(a > 0.0 && b > 0.0);
        assert!((a - 100.0 * 11.0 / 44.0).abs() < 1e-9);
        assert!((a + b - 100.0).abs() < 1e-9);
    }

    #[test]
    fn equity_skips_hidden_players() {
        let board = cards(["10h", "10c", "5d"]);
        let players = pockets(["ah ad", "", "kh kc"]);

        let result = equity(&board, &players).unwrap().unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.contains_key(&0) && result.contains_key(&2));
    }

    #[test]
    fn equity_duplicate_cards() {
        // A pocket card also on the board signals corrupted data.
        let board = cards(["10h", "10c", "5d"]);
        let players = pockets(["10h ad", "kh kc"]);

        let err = equity(&board, &players).unwrap_err();
        assert!(matches!(err, CardError::NotInDeck(_)));
    }

    #[test]
    fn parallel_tally_matches_serial() {
        let board = cards(["10h", "10c", "5d"]);
        let players = pockets(["ah ad", "kh kc"]);
        let shown = players
            .iter()
            .enumerate()
            .filter_map(|(seat, pocket)| pocket.cards().map(|cards| (seat, cards)))
            .collect::<Vec<_>>();

        let mut deck = Deck::default();
        for &card in &board {
            deck.remove(card).unwrap();
        }
        for pocket in &players {
            for card in pocket.cards().unwrap() {
                deck.remove(card).unwrap();
            }
        }

        let mut full_board = [board[0]; 5];
        full_board[..3].copy_from_slice(&board);

        let serial = tally_serial(&deck, 2, &full_board, &shown);
        let parallel = tally_parallel(&deck, 2, &full_board, &shown);
        assert_eq!(serial, parallel);
    }
}
