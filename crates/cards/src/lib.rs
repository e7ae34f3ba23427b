// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverlog Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use riverlog_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! to parse them from hand history tokens:
//!
//! ```
//! # use riverlog_cards::{Card, Rank, Suit};
//! let th = "10h".parse::<Card>().unwrap();
//! assert_eq!(th, Card::new(Rank::Ten, Suit::Hearts));
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and enumerating card
//! combinations. For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use riverlog_cards::{Card, Deck, Rank, Suit};
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The [Deck::par_for_each] method splits the same enumeration across a
//! given number of tasks, the closure `task_id` can be used to store per
//! task data to reduce contention:
//!
//! ```
//! # use std::sync::atomic;
//! # use riverlog_cards::{Card, Deck, Rank, Suit};
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 2, |task_id, hand| {
//!     assert_eq!(hand.len(), 2);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 1_326);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardError, Pocket, Rank, Suit};

mod deck;
pub use deck::Deck;
