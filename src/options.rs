//! Deck construction options.

use alloc::vec::Vec;

use crate::card::Card;

/// Configuration for building a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardeck::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_shuffle(true)
///     .with_n(13)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Whether to fill the deck with all 52 cards.
    pub initialise: bool,
    /// Whether to shuffle right after filling.
    pub shuffle: bool,
    /// Number of cards to keep from the top after filling and shuffling.
    pub n: Option<usize>,
    /// Cards that replace the deck contents after any initialisation.
    pub override_cards: Option<Vec<Card>>,
    /// Seed for the shared generator, applied before shuffling.
    pub seed: Option<u64>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            initialise: true,
            shuffle: false,
            n: None,
            override_cards: None,
            seed: None,
        }
    }
}

impl DeckOptions {
    /// Sets whether the deck is filled with all 52 cards.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_initialise(false);
    /// assert!(!options.initialise);
    /// ```
    #[must_use]
    pub const fn with_initialise(mut self, initialise: bool) -> Self {
        self.initialise = initialise;
        self
    }

    /// Sets whether the filled deck is shuffled.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets how many cards to keep from the top of the filled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_n(13);
    /// assert_eq!(options.n, Some(13));
    /// ```
    #[must_use]
    pub const fn with_n(mut self, n: usize) -> Self {
        self.n = Some(n);
        self
    }

    /// Sets the cards that become the deck contents.
    #[must_use]
    pub fn with_override(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.override_cards = Some(cards.into_iter().collect());
        self
    }

    /// Sets the seed used before shuffling.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
