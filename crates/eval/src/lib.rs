// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverlog Poker hand evaluator.
//!
//! Hand evaluation and equity for Texas hold'em hand histories. The
//! [classify] function ranks a 5 cards hand with a total order that
//! encodes every tie break rule, [best_hand] finds the strongest 5 cards
//! hand reachable from a pocket and a complete board, and [equity]
//! computes each player's exact win probability by enumerating all
//! completions of a partial board.
//!
//! ```
//! # use riverlog_cards::{Card, Pocket};
//! # use riverlog_eval::{best_hand, HandClass};
//! let board: Vec<Card> = ["2c", "7d", "9h", "jc", "ks"]
//!     .iter()
//!     .map(|t| t.parse().unwrap())
//!     .collect();
//! let pocket = "ac kd".parse::<Pocket>().unwrap();
//!
//! let strength = best_hand(pocket, &board);
//! assert_eq!(strength.class(), HandClass::OnePair);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod best;
pub use best::best_hand;

mod equity;
pub use equity::equity;

mod strength;
pub use strength::{classify, HandClass, HandStrength};

// Reexport cards types.
pub use riverlog_cards::{Card, CardError, Deck, Pocket, Rank, Suit};
