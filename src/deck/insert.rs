//! Insertion at fixed or random positions.
//!
//! Random positions are uniform over `0..=len`, so a card can land below the
//! current bottom card.

use log::trace;
use rand::Rng;

use crate::card::Card;
use crate::error::DeckError;
use crate::rng::{PickIndex, RngIndex, with_shared_rng};

use super::Deck;

impl Deck {
    /// Inserts a card into the deck.
    ///
    /// With a `position` the card goes to that index (0 is the top) and the
    /// cards below it shift down. Without one it goes to a uniformly random
    /// index in `0..=len`, chosen with the shared generator. When `seed` is
    /// set the shared generator is reseeded first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidPosition`] if `position` is greater than
    /// the number of cards in the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Card, Deck, Suit, Value};
    ///
    /// let mut deck = Deck::new_empty();
    /// deck.add_card(Card::new(Suit::Spades, Value::Two), Some(0), None)?;
    /// deck.add_card(Card::new(Suit::Spades, Value::King), Some(0), None)?;
    /// assert_eq!(deck.cards()[0].value(), Value::King);
    /// # Ok::<(), cardeck::DeckError>(())
    /// ```
    pub fn add_card(
        &mut self,
        card: Card,
        position: Option<usize>,
        seed: Option<u64>,
    ) -> Result<(), DeckError> {
        with_shared_rng(seed, |rng| self.place(card, position, rng))
    }

    /// Inserts a card like [`Deck::add_card`], picking random positions with
    /// `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidPosition`] if `position` is greater than
    /// the number of cards in the deck.
    pub fn add_card_with<R: Rng + ?Sized>(
        &mut self,
        card: Card,
        position: Option<usize>,
        rng: &mut R,
    ) -> Result<(), DeckError> {
        self.place(card, position, &mut RngIndex(rng))
    }

    fn place<P: PickIndex + ?Sized>(
        &mut self,
        card: Card,
        position: Option<usize>,
        picker: &mut P,
    ) -> Result<(), DeckError> {
        let len = self.cards.len();
        let index = match position {
            Some(position) if position > len => {
                return Err(DeckError::InvalidPosition { position, len });
            }
            Some(position) => position,
            None => picker.pick_index(len + 1),
        };

        self.cards.insert(index, card);
        trace!("Inserted {card:?} at position {index}");
        Ok(())
    }

    /// Inserts each card at a random position, in order.
    ///
    /// When `seed` is set the shared generator is reseeded with it before
    /// every insertion, so each card lands where a freshly seeded generator
    /// puts it for the deck length at that moment.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>, seed: Option<u64>) {
        for card in cards {
            with_shared_rng(seed, |rng| self.insert_random(card, rng));
        }
    }

    /// Inserts each card at a random position chosen with `rng`, in order.
    pub fn add_cards_with<R: Rng + ?Sized>(
        &mut self,
        cards: impl IntoIterator<Item = Card>,
        rng: &mut R,
    ) {
        let mut picker = RngIndex(rng);
        for card in cards {
            self.insert_random(card, &mut picker);
        }
    }

    fn insert_random<P: PickIndex + ?Sized>(&mut self, card: Card, picker: &mut P) {
        let index = picker.pick_index(self.cards.len() + 1);
        self.cards.insert(index, card);
        trace!("Inserted {card:?} at position {index}");
    }
}
