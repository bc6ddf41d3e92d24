//! Error types for deck and ranking operations.

use thiserror::Error;

use crate::card::{Suit, Value};

/// Errors that can occur while mutating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Insertion position is past the end of the deck.
    #[error("position {position} is out of range for a deck of {len} cards")]
    InvalidPosition {
        /// Requested position.
        position: usize,
        /// Deck length at the time of the insertion.
        len: usize,
    },
}

/// Errors that can occur while building a ranking policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The suit table has no entry for a suit.
    #[error("suit ranking has no entry for {0:?}")]
    MissingSuit(Suit),
    /// The value table has no entry for a value.
    #[error("value ranking has no entry for {0:?}")]
    MissingValue(Value),
    /// A suit rank is outside `0..=3`.
    #[error("suit rank {rank} for {suit:?} is out of range")]
    SuitRankOutOfRange {
        /// The offending suit.
        suit: Suit,
        /// The configured rank.
        rank: u8,
    },
    /// A value rank is outside `0..=12`.
    #[error("value rank {rank} for {value:?} is out of range")]
    ValueRankOutOfRange {
        /// The offending value.
        value: Value,
        /// The configured rank.
        rank: u8,
    },
}
