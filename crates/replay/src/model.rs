// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand history types.
use ahash::AHashMap;

use riverlog_cards::{Card, Pocket};
use riverlog_eval::HandStrength;

use crate::Chips;

/// A player over one hand.
#[derive(Debug, Clone)]
pub struct Player {
    /// The seat index, seats are numbered from 1.
    pub seat: usize,
    /// The player name.
    pub name: String,
    /// The straddle posted before the deal.
    pub straddle: Chips,
    /// The player pocket, hidden if never shown.
    pub pocket: Pocket,
    /// The stack at the start of the hand.
    pub starting_stack: Chips,
    /// The stack at the end of the hand, updated by the replay.
    pub ending_stack: Chips,
    /// The player folded.
    pub folded: bool,
    /// The player won the hand.
    pub winner: bool,
    /// The best hand at showdown, set by the replay when the hand goes
    /// to a comparison.
    pub strength: Option<HandStrength>,
}

impl Player {
    /// The chips this player has put into the pot so far.
    pub fn invested(&self) -> Chips {
        self.starting_stack - self.ending_stack
    }
}

/// A hand history event action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A board card reveal.
    Board,
    /// A bet, a zero amount is a check.
    Bet,
    /// A call of the current price.
    Call,
    /// A fold.
    Fold,
}

/// One replay step of a hand.
#[derive(Debug, Clone)]
pub struct Event {
    /// The event time.
    pub time: String,
    /// The event action.
    pub action: Action,
    /// The acting seat, empty for board events.
    pub seat: Option<usize>,
    /// The revealed card for board events.
    pub card: Option<Card>,
    /// The bet amount.
    pub amount: Option<Chips>,
    /// The pot after this event, filled by the replay.
    pub pot: Chips,
    /// A display description, filled by the replay.
    pub description: String,
    /// Whether the report shows this event.
    pub display: bool,
    /// Win probabilities by seat at this decision point, filled by the
    /// replay once at least 3 board cards are known.
    pub equities: Option<AHashMap<usize, f64>>,
}

impl Event {
    /// Creates an event as parsed from a record.
    pub fn new(
        time: String,
        action: Action,
        seat: Option<usize>,
        card: Option<Card>,
        amount: Option<Chips>,
    ) -> Self {
        Self {
            time,
            action,
            seat,
            card,
            amount,
            pot: Chips::ZERO,
            description: String::new(),
            display: true,
            equities: None,
        }
    }
}

/// A parsed hand history.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// The hand starting time.
    pub starting_time: String,
    /// The hand title.
    pub title: String,
    /// The hand number from the title.
    pub number: Option<u32>,
    /// The ante as recorded.
    pub ante: String,
    /// The small blind.
    pub small_blind: Chips,
    /// The big blind.
    pub big_blind: Chips,
    /// The dealer name.
    pub dealer: String,
    /// The seat posting the small blind.
    pub small_blind_seat: usize,
    /// The seat posting the big blind.
    pub big_blind_seat: usize,
    /// The players dealt into the hand.
    pub players: Vec<Player>,
    /// The hand events in record order.
    pub events: Vec<Event>,
    /// The community cards, filled by the replay.
    pub board: Vec<Card>,
    /// The final pot, filled by the replay.
    pub pot: Chips,
    /// The winning seats, filled by the replay.
    pub winners: Vec<usize>,
}

impl Hand {
    /// Returns the player at the given seat.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat.wrapping_sub(1)).filter(|p| p.seat == seat)
    }

    /// Returns the player at the given seat.
    pub(crate) fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players
            .get_mut(seat.wrapping_sub(1))
            .filter(|p| p.seat == seat)
    }

    /// The time of the last event in the hand.
    pub fn ending_time(&self) -> &str {
        self.events
            .last()
            .map(|e| e.time.as_str())
            .unwrap_or(&self.starting_time)
    }
}
