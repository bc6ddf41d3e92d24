//! The deck collection.

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit, Value};
use crate::options::DeckOptions;
use crate::rng::with_shared_rng;

mod draw;
mod insert;

pub use draw::{Draw, DrawBottom, DrawRandom};

/// An ordered collection of cards.
///
/// Index 0 is the top of the deck. Duplicates are allowed, so a deck is not
/// necessarily a valid 52-card set once cards have been added.
///
/// Methods that take an optional seed reseed the process-wide generator (see
/// [`SharedRng`](crate::SharedRng)); each has a `_with` counterpart that uses
/// a caller supplied generator instead.
///
/// Two decks are equal when their cards are pairwise equal under the
/// process-wide ranking policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.cards_count(), 52);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DeckOptions::default())
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn new_empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck from the given options.
    ///
    /// Initialisation (fill, shuffle, truncate) runs first; override cards,
    /// when given, then replace the contents.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Deck, DeckOptions};
    ///
    /// let options = DeckOptions::default().with_shuffle(true).with_n(16).with_seed(42);
    /// let deck = Deck::with_options(options);
    /// assert_eq!(deck.cards_count(), 16);
    /// ```
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let mut deck = Self::new_empty();

        if options.initialise {
            deck.initialise(options.shuffle, options.n, options.seed);
        }

        if let Some(cards) = options.override_cards {
            deck.cards = cards;
        }

        deck
    }

    /// Refills the deck with all 52 cards.
    ///
    /// Cards are laid out suit by suit, then value by value, in declaration
    /// order. The deck is then shuffled if requested (reseeding the shared
    /// generator when `seed` is set) and cut down to its first `n` cards.
    pub fn initialise(&mut self, shuffle: bool, n: Option<usize>, seed: Option<u64>) {
        self.fill();

        if shuffle {
            self.shuffle(seed);
        }

        self.keep_top(n);
    }

    /// Refills the deck like [`Deck::initialise`], shuffling with `rng`.
    pub fn initialise_with<R: Rng + ?Sized>(
        &mut self,
        shuffle: bool,
        n: Option<usize>,
        rng: &mut R,
    ) {
        self.fill();

        if shuffle {
            self.shuffle_with(rng);
        }

        self.keep_top(n);
    }

    fn fill(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for value in Value::ALL {
                self.cards.push(Card::new(suit, value));
            }
        }
    }

    fn keep_top(&mut self, n: Option<usize>) {
        if let Some(n) = n {
            self.cards.truncate(n);
        }

        debug!("Initialised deck with {} cards", self.cards.len());
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Shuffles the deck with the shared generator.
    ///
    /// When `seed` is set the shared generator is reseeded first, so the
    /// same seed always produces the same order. The order matches CPython's
    /// `random.seed(seed)` followed by `random.shuffle`.
    pub fn shuffle(&mut self, seed: Option<u64>) {
        with_shared_rng(seed, |rng| rng.shuffle(&mut self.cards));
    }

    /// Shuffles the deck with the given generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn cards_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns the cards from top to bottom.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards from top to bottom.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
