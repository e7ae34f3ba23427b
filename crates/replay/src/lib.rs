// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverlog Poker hand history model and replay.
//!
//! This crate parses recorded hand histories, one comma separated record
//! per hand, and replays the betting actions to fill in the running pot,
//! the fold eliminations, the winners with the pot split, and each live
//! player's win probability at every decision point from the flop on.
//!
//! ```no_run
//! # use riverlog_replay::read_hands;
//! let hands = read_hands("hands.csv".as_ref(), true).unwrap();
//! for hand in &hands {
//!     println!("pot {} winners {:?}", hand.pot, hand.winners);
//! }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod chips;
pub use chips::Chips;

mod errors;
pub use errors::ReplayError;

mod model;
pub use model::{Action, Event, Hand, Player};

mod record;
pub use record::{parse_record, split_record};

mod replay;
pub use replay::replay;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Reads and replays all the hands in a history file.
///
/// Each line holds one hand record, empty lines and lines starting with
/// `//` are skipped. With `annotate_equity` set every event from the
/// flop on gets the live players win probabilities.
pub fn read_hands(path: &Path, annotate_equity: bool) -> Result<Vec<Hand>, ReplayError> {
    let file = File::open(path)?;

    let mut hands = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let fields = split_record(&line);
        if let Some(mut hand) = parse_record(&fields)? {
            replay(&mut hand, annotate_equity)?;
            hands.push(hand);
        }
    }

    Ok(hands)
}
