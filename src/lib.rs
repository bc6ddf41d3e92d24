//! A 52-card deck with configurable ranking and reproducible shuffling, with
//! optional `no_std` support.
//!
//! The crate provides a [`Card`] value type ranked by a [`RankingPolicy`],
//! and a [`Deck`] that can be shuffled, drawn from either end or at random,
//! and added to at fixed or random positions.
//!
//! # Example
//!
//! ```
//! use cardeck::{Deck, DeckOptions};
//!
//! let mut deck = Deck::with_options(DeckOptions::default().with_shuffle(true).with_seed(42));
//! let hand: Vec<_> = deck.draw(5).collect();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.cards_count(), 47);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod ranking;
pub mod rng;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, Value};
pub use deck::{Deck, Draw, DrawBottom, DrawRandom};
pub use error::{ConfigurationError, DeckError};
pub use options::DeckOptions;
pub use ranking::{RankingPolicy, ranking_policy, reset_ranking_policy, set_ranking_policy};
pub use rng::{MersenneRng, PickIndex, RngIndex, SharedRng, seed_shared_rng};
