// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand replay.
//!
//! Replays the parsed events in record order accumulating the pot,
//! marking folds, stamping per event pot and win probabilities, and
//! settling the pot at the end of the hand.
use ahash::{AHashMap, AHashSet};
use log::warn;

use riverlog_cards::Card;
use riverlog_eval::{best_hand, equity, HandClass};

use crate::{Action, Chips, Hand, ReplayError};

/// Replays a parsed hand.
///
/// Fills in the per event pot, descriptions and display flags, the
/// board, the final pot, the players ending stacks, and the winners
/// with their pot share. With `annotate_equity` set every event from
/// the flop on gets the live players win probabilities by seat.
pub fn replay(hand: &mut Hand, annotate_equity: bool) -> Result<(), ReplayError> {
    let (small_blind, small_blind_seat) = (hand.small_blind, hand.small_blind_seat);
    let (big_blind, big_blind_seat) = (hand.big_blind, hand.big_blind_seat);

    let mut pot = small_blind + big_blind;
    deduct(hand, small_blind_seat, small_blind)?;
    deduct(hand, big_blind_seat, big_blind)?;

    for player in &mut hand.players {
        pot += player.straddle;
        player.ending_stack -= player.straddle;
    }

    let mut board: Vec<Card> = Vec::new();

    for pos in 0..hand.events.len() {
        let event = &hand.events[pos];
        let (action, seat, card, amount) = (event.action, event.seat, event.card, event.amount);

        let mut description = String::new();
        let mut display = true;

        match action {
            Action::Board => {
                board.push(card.ok_or(ReplayError::MissingBoardCard)?);
                match board.len() {
                    1 | 2 => display = false,
                    3 => description.push_str("Flop"),
                    4 => description.push_str("Turn"),
                    5 => description.push_str("River"),
                    _ => return Err(ReplayError::TooManyBoardCards),
                }
            }
            Action::Bet => {
                let seat = seat.ok_or(ReplayError::MissingSeat)?;
                let amount = amount.unwrap_or(Chips::ZERO);
                if amount == Chips::ZERO {
                    description = format!("{} Check", acting(hand, seat)?);
                } else {
                    pot += amount;
                    deduct(hand, seat, amount)?;
                    description = format!("{} Raise {}", acting(hand, seat)?, amount);
                }
            }
            Action::Call => {
                let seat = seat.ok_or(ReplayError::MissingSeat)?;

                // The price to stay in is the highest investment so far.
                let price = hand
                    .players
                    .iter()
                    .map(|p| p.invested())
                    .max()
                    .unwrap_or(Chips::ZERO);

                let player = hand
                    .player(seat)
                    .ok_or(ReplayError::UnknownSeat(seat))?;
                let call = price - player.invested();

                // TODO: a call above the caller's stack puts the caller
                // all in and opens a side pot, settle side pots from the
                // per player investments at the end of the hand.
                if call > player.ending_stack {
                    return Err(ReplayError::UnsupportedSidePot { seat, amount: call });
                }

                pot += call;
                deduct(hand, seat, call)?;
                description = format!("{} Call {}", acting(hand, seat)?, call);
            }
            Action::Fold => {
                let seat = seat.ok_or(ReplayError::MissingSeat)?;
                hand.player_mut(seat)
                    .ok_or(ReplayError::UnknownSeat(seat))?
                    .folded = true;
                description = format!("{} Fold", acting(hand, seat)?);
            }
        }

        let equities = if annotate_equity && board.len() >= 3 {
            live_equities(hand, &board)?
        } else {
            None
        };

        let event = &mut hand.events[pos];
        event.pot = pot;
        event.description = description;
        event.display = display;
        event.equities = equities;
    }

    settle(hand, board, pot)
}

/// Computes the win probabilities by seat for the players still in the
/// hand.
fn live_equities(
    hand: &Hand,
    board: &[Card],
) -> Result<Option<AHashMap<usize, f64>>, ReplayError> {
    let live = hand
        .players
        .iter()
        .filter(|p| !p.folded)
        .collect::<Vec<_>>();
    let pockets = live.iter().map(|p| p.pocket).collect::<Vec<_>>();

    let equities = equity(board, &pockets)?;
    Ok(equities.map(|equities| {
        equities
            .into_iter()
            .map(|(pos, pct)| (live[pos].seat, pct))
            .collect()
    }))
}

/// Determines the winners and splits the pot.
fn settle(hand: &mut Hand, board: Vec<Card>, pot: Chips) -> Result<(), ReplayError> {
    // Seats that made some action in the hand.
    let acted = hand
        .events
        .iter()
        .filter_map(|e| e.seat)
        .collect::<AHashSet<_>>();

    for player in &hand.players {
        if !acted.contains(&player.seat) && !player.pocket.is_hidden() {
            warn!(
                "Player {} at seat {} has cards but took no action",
                player.name, player.seat
            );
        }
    }

    let remaining = hand
        .players
        .iter()
        .filter(|p| acted.contains(&p.seat) && !p.folded)
        .map(|p| p.seat)
        .collect::<Vec<_>>();

    let winners = if remaining.len() < 2 {
        // Everybody else folded, no showdown.
        remaining
    } else {
        if board.len() < 5 {
            return Err(ReplayError::IncompleteBoard);
        }

        for seat in &remaining {
            if let Some(player) = hand.player_mut(*seat) {
                player.strength = Some(best_hand(player.pocket, &board));
            }
        }

        let top = remaining
            .iter()
            .filter_map(|&seat| hand.player(seat).and_then(|p| p.strength))
            .max();

        match top {
            Some(top) if top.class() != HandClass::NotShown => remaining
                .iter()
                .copied()
                .filter(|&seat| {
                    hand.player(seat)
                        .and_then(|p| p.strength)
                        .is_some_and(|s| s == top)
                })
                .collect(),
            _ => {
                // Nobody showed a pocket, nothing to compare.
                warn!("No revealed pocket at showdown, splitting the pot");
                remaining
            }
        }
    };

    if !winners.is_empty() {
        // The split drops any remainder.
        let share = pot / winners.len() as u32;
        for seat in &winners {
            if let Some(player) = hand.player_mut(*seat) {
                player.winner = true;
                player.ending_stack += share;
            }
        }
    }

    hand.board = board;
    hand.pot = pot;
    hand.winners = winners;
    Ok(())
}

/// Deducts an amount from a seat's stack.
fn deduct(hand: &mut Hand, seat: usize, amount: Chips) -> Result<(), ReplayError> {
    let player = hand
        .player_mut(seat)
        .ok_or(ReplayError::UnknownSeat(seat))?;
    player.ending_stack -= amount;
    Ok(())
}

/// Formats the acting player for an event description.
fn acting(hand: &Hand, seat: usize) -> Result<String, ReplayError> {
    let player = hand.player(seat).ok_or(ReplayError::UnknownSeat(seat))?;
    Ok(format!("{} ({})", player.name, player.seat))
}
