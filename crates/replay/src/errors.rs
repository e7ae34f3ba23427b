// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand history errors.
use thiserror::Error;

use riverlog_cards::CardError;

use crate::Chips;

/// Errors raised while parsing or replaying a hand history record.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The record does not hold enough fields for the fixed layout.
    #[error("record has only {0} fields")]
    TruncatedRecord(usize),
    /// A numeric field does not parse.
    #[error("invalid number '{value}' in field {field}")]
    InvalidNumber {
        /// The field position in the record.
        field: usize,
        /// The field raw value.
        value: String,
    },
    /// Occupied seats must be contiguous from seat 1.
    #[error("occupied seats must be contiguous, seat {0} follows an empty seat")]
    SeatOutOfOrder(usize),
    /// The event action token is not recognized.
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    /// A board event carries no card.
    #[error("board event without a card")]
    MissingBoardCard,
    /// The board got more than 5 cards.
    #[error("more than 5 board cards")]
    TooManyBoardCards,
    /// A betting event carries no seat.
    #[error("betting event without a seat")]
    MissingSeat,
    /// An event names a seat with no player.
    #[error("unknown seat {0}")]
    UnknownSeat(usize),
    /// A call the caller cannot cover creates a side pot.
    #[error("seat {seat} cannot cover a call of {amount}, side pots are not supported")]
    UnsupportedSidePot {
        /// The calling seat.
        seat: usize,
        /// The call amount.
        amount: Chips,
    },
    /// A showdown between two or more players needs a complete board.
    #[error("showdown with an incomplete board")]
    IncompleteBoard,
    /// Card parsing or deck removal failed.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The history file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
